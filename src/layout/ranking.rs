use std::collections::{HashMap, HashSet};

use super::types::LayoutEdge;

pub(super) struct Ranking {
    pub ranks: HashMap<String, usize>,
    /// Input edges oriented so every edge points to a higher rank.
    pub edges: Vec<LayoutEdge>,
    pub reversed: usize,
}

/// Assigns a rank to every node so each edge points strictly forward.
///
/// `edges` must be free of self-loops and duplicates. Only edges inside a
/// cycle can end up reversed.
pub(super) fn rank_nodes(node_ids: &[String], edges: &[LayoutEdge]) -> Ranking {
    let index: HashMap<&str, usize> = node_ids
        .iter()
        .enumerate()
        .map(|(idx, id)| (id.as_str(), idx))
        .collect();
    let mut succ: Vec<Vec<usize>> = vec![Vec::new(); node_ids.len()];
    let mut pred: Vec<Vec<usize>> = vec![Vec::new(); node_ids.len()];
    for edge in edges {
        let (Some(&from), Some(&to)) = (index.get(edge.from.as_str()), index.get(edge.to.as_str()))
        else {
            continue;
        };
        succ[from].push(to);
        pred[to].push(from);
    }

    let mut sequence: Vec<usize> = Vec::with_capacity(node_ids.len());
    for component in strongly_connected(&succ) {
        sequence.extend(greedy_feedback_order(&component, &succ, &pred));
    }
    let mut position = vec![0usize; node_ids.len()];
    for (pos, node) in sequence.iter().enumerate() {
        position[*node] = pos;
    }

    let mut oriented: Vec<LayoutEdge> = Vec::with_capacity(edges.len());
    let mut forward: Vec<Vec<usize>> = vec![Vec::new(); node_ids.len()];
    let mut has_pred = vec![false; node_ids.len()];
    let mut seen: HashSet<(usize, usize)> = HashSet::new();
    let mut reversed = 0usize;
    for edge in edges {
        let (Some(&from), Some(&to)) = (index.get(edge.from.as_str()), index.get(edge.to.as_str()))
        else {
            continue;
        };
        let (from, to) = if position[from] < position[to] {
            (from, to)
        } else {
            reversed += 1;
            (to, from)
        };
        // a reversed back edge may duplicate its forward twin
        if !seen.insert((from, to)) {
            continue;
        }
        forward[from].push(to);
        has_pred[to] = true;
        oriented.push(LayoutEdge {
            from: node_ids[from].clone(),
            to: node_ids[to].clone(),
        });
    }

    // Longest path; `sequence` is a topological order of `forward`.
    let mut rank = vec![0usize; node_ids.len()];
    for &node in &sequence {
        for &next in &forward[node] {
            rank[next] = rank[next].max(rank[node] + 1);
        }
    }

    // Pull pure sources next to their closest successor.
    for node in 0..node_ids.len() {
        if has_pred[node] {
            continue;
        }
        if let Some(closest) = forward[node].iter().map(|&next| rank[next]).min() {
            rank[node] = closest.saturating_sub(1);
        }
    }

    let min_rank = rank.iter().copied().min().unwrap_or(0);
    let ranks = node_ids
        .iter()
        .zip(rank)
        .map(|(id, r)| (id.clone(), r - min_rank))
        .collect();

    Ranking {
        ranks,
        edges: oriented,
        reversed,
    }
}

/// Tarjan's algorithm; components come out in topological order of the
/// condensation, members in declaration order.
fn strongly_connected(succ: &[Vec<usize>]) -> Vec<Vec<usize>> {
    const UNVISITED: usize = usize::MAX;
    let count = succ.len();
    let mut discovered = vec![UNVISITED; count];
    let mut low = vec![0usize; count];
    let mut on_stack = vec![false; count];
    let mut stack: Vec<usize> = Vec::new();
    let mut components: Vec<Vec<usize>> = Vec::new();
    let mut counter = 0usize;

    for root in 0..count {
        if discovered[root] != UNVISITED {
            continue;
        }
        discovered[root] = counter;
        low[root] = counter;
        counter += 1;
        stack.push(root);
        on_stack[root] = true;
        let mut call: Vec<(usize, usize)> = vec![(root, 0)];

        while let Some(frame) = call.last_mut() {
            let node = frame.0;
            if let Some(&child) = succ[node].get(frame.1) {
                frame.1 += 1;
                if discovered[child] == UNVISITED {
                    discovered[child] = counter;
                    low[child] = counter;
                    counter += 1;
                    stack.push(child);
                    on_stack[child] = true;
                    call.push((child, 0));
                } else if on_stack[child] {
                    low[node] = low[node].min(discovered[child]);
                }
                continue;
            }

            call.pop();
            if let Some(&(parent, _)) = call.last() {
                low[parent] = low[parent].min(low[node]);
            }
            if low[node] == discovered[node] {
                let mut component = Vec::new();
                while let Some(member) = stack.pop() {
                    on_stack[member] = false;
                    component.push(member);
                    if member == node {
                        break;
                    }
                }
                component.sort_unstable();
                components.push(component);
            }
        }
    }

    components.reverse();
    components
}

/// Eades–Lin–Smyth ordering of one component: sinks go last, sources first,
/// otherwise the node with the largest out-minus-in degree is taken next.
/// Edges pointing backwards in the result form the feedback arc set.
fn greedy_feedback_order(members: &[usize], succ: &[Vec<usize>], pred: &[Vec<usize>]) -> Vec<usize> {
    if members.len() <= 1 {
        return members.to_vec();
    }
    let mut alive: HashSet<usize> = members.iter().copied().collect();
    let degree = |node: usize, lists: &[Vec<usize>], alive: &HashSet<usize>| {
        lists[node]
            .iter()
            .filter(|other| **other != node && alive.contains(*other))
            .count()
    };

    let mut head: Vec<usize> = Vec::with_capacity(members.len());
    let mut tail: Vec<usize> = Vec::new();
    while !alive.is_empty() {
        loop {
            let sinks: Vec<usize> = members
                .iter()
                .copied()
                .filter(|n| alive.contains(n) && degree(*n, succ, &alive) == 0)
                .collect();
            if sinks.is_empty() {
                break;
            }
            for sink in sinks {
                alive.remove(&sink);
                tail.push(sink);
            }
        }
        loop {
            let sources: Vec<usize> = members
                .iter()
                .copied()
                .filter(|n| alive.contains(n) && degree(*n, pred, &alive) == 0)
                .collect();
            if sources.is_empty() {
                break;
            }
            for source in sources {
                alive.remove(&source);
                head.push(source);
            }
        }

        let mut best: Option<(i64, usize)> = None;
        for &node in members {
            if !alive.contains(&node) {
                continue;
            }
            let delta = degree(node, succ, &alive) as i64 - degree(node, pred, &alive) as i64;
            if best.map_or(true, |(best_delta, _)| delta > best_delta) {
                best = Some((delta, node));
            }
        }
        if let Some((_, node)) = best {
            alive.remove(&node);
            head.push(node);
        }
    }

    tail.reverse();
    head.extend(tail);
    head
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn edges(pairs: &[(&str, &str)]) -> Vec<LayoutEdge> {
        pairs
            .iter()
            .map(|(from, to)| LayoutEdge {
                from: from.to_string(),
                to: to.to_string(),
            })
            .collect()
    }

    #[test]
    fn chain_gets_increasing_ranks() {
        let ranking = rank_nodes(&ids(&["c", "b", "a"]), &edges(&[("a", "b"), ("b", "c")]));
        assert_eq!(ranking.ranks["a"], 0);
        assert_eq!(ranking.ranks["b"], 1);
        assert_eq!(ranking.ranks["c"], 2);
        assert_eq!(ranking.reversed, 0);
    }

    #[test]
    fn two_cycle_reverses_one_edge() {
        let ranking = rank_nodes(&ids(&["a", "b"]), &edges(&[("a", "b"), ("b", "a")]));
        assert_eq!(ranking.reversed, 1);
        assert_ne!(ranking.ranks["a"], ranking.ranks["b"]);
        for edge in &ranking.edges {
            assert!(ranking.ranks[&edge.from] < ranking.ranks[&edge.to]);
        }
    }

    #[test]
    fn edges_leaving_a_cycle_stay_forward() {
        // x <-> y is a cycle; y -> z and w -> x are not part of it.
        let ranking = rank_nodes(
            &ids(&["z", "y", "x", "w"]),
            &edges(&[("x", "y"), ("y", "x"), ("y", "z"), ("w", "x")]),
        );
        assert!(ranking.ranks["y"] < ranking.ranks["z"]);
        assert!(ranking.ranks["w"] < ranking.ranks["x"]);
        assert_eq!(ranking.reversed, 1);
    }

    #[test]
    fn sources_are_pulled_toward_successors() {
        // a -> b -> c -> d, s -> d: s belongs next to d, not in rank 0.
        let ranking = rank_nodes(
            &ids(&["a", "b", "c", "d", "s"]),
            &edges(&[("a", "b"), ("b", "c"), ("c", "d"), ("s", "d")]),
        );
        assert_eq!(ranking.ranks["d"], 3);
        assert_eq!(ranking.ranks["s"], 2);
    }

    #[test]
    fn isolated_nodes_sit_in_first_rank() {
        let ranking = rank_nodes(&ids(&["solo", "a", "b"]), &edges(&[("a", "b")]));
        assert_eq!(ranking.ranks["solo"], 0);
        assert_eq!(ranking.ranks["a"], 0);
    }

    #[test]
    fn components_are_topologically_ordered() {
        let succ = vec![vec![], vec![0], vec![1]];
        let components = strongly_connected(&succ);
        assert_eq!(components, vec![vec![2], vec![1], vec![0]]);
    }
}
