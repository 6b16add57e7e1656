use std::collections::HashMap;

use super::types::LayoutEdge;

/// Reorders each rank with alternating median sweeps and keeps the ordering
/// with the fewest crossings. Every edge must join adjacent ranks.
pub(super) fn order_rank_nodes(
    rank_nodes: &mut [Vec<String>],
    edges: &[LayoutEdge],
    passes: usize,
) -> usize {
    let mut best_crossings = count_crossings(rank_nodes, edges);
    if rank_nodes.len() <= 1 || best_crossings == 0 {
        return best_crossings;
    }

    let mut incoming: HashMap<String, Vec<String>> = HashMap::new();
    let mut outgoing: HashMap<String, Vec<String>> = HashMap::new();
    for edge in edges {
        outgoing
            .entry(edge.from.clone())
            .or_default()
            .push(edge.to.clone());
        incoming
            .entry(edge.to.clone())
            .or_default()
            .push(edge.from.clone());
    }

    let mut positions = slot_positions(rank_nodes);
    let mut best = rank_nodes.to_vec();
    for _ in 0..passes.max(1) {
        for rank in 1..rank_nodes.len() {
            reorder(&mut rank_nodes[rank], &incoming, &positions);
            positions = slot_positions(rank_nodes);
        }
        for rank in (0..rank_nodes.len() - 1).rev() {
            reorder(&mut rank_nodes[rank], &outgoing, &positions);
            positions = slot_positions(rank_nodes);
        }

        let crossings = count_crossings(rank_nodes, edges);
        if crossings < best_crossings {
            best_crossings = crossings;
            best = rank_nodes.to_vec();
        }
        if best_crossings == 0 {
            break;
        }
    }

    rank_nodes.clone_from_slice(&best);
    best_crossings
}

fn slot_positions(rank_nodes: &[Vec<String>]) -> HashMap<String, usize> {
    rank_nodes
        .iter()
        .flat_map(|bucket| bucket.iter().enumerate().map(|(idx, id)| (id.clone(), idx)))
        .collect()
}

/// Sorts `bucket` by the median slot of each node's neighbors in the fixed
/// rank. Nodes without placed neighbors keep their current slot as key, and
/// the stable sort keeps equal keys in their current order.
fn reorder(
    bucket: &mut Vec<String>,
    neighbors: &HashMap<String, Vec<String>>,
    positions: &HashMap<String, usize>,
) {
    if bucket.len() <= 1 {
        return;
    }
    let mut keyed: Vec<(f32, String)> = bucket
        .drain(..)
        .enumerate()
        .map(|(idx, id)| {
            let key = median_position(&id, neighbors, positions).unwrap_or(idx as f32);
            (key, id)
        })
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    bucket.extend(keyed.into_iter().map(|(_, id)| id));
}

/// Median slot of the placed neighbors of `node_id`, or `None` when it has none.
pub(super) fn median_position(
    node_id: &str,
    neighbors: &HashMap<String, Vec<String>>,
    positions: &HashMap<String, usize>,
) -> Option<f32> {
    let mut values: Vec<usize> = neighbors
        .get(node_id)?
        .iter()
        .filter_map(|neighbor| positions.get(neighbor).copied())
        .collect();
    if values.is_empty() {
        return None;
    }
    values.sort_unstable();
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        Some(values[mid] as f32)
    } else {
        Some((values[mid - 1] + values[mid]) as f32 * 0.5)
    }
}

/// Number of pairwise crossings between edges of adjacent ranks.
pub(super) fn count_crossings(rank_nodes: &[Vec<String>], edges: &[LayoutEdge]) -> usize {
    let mut slot: HashMap<&str, (usize, usize)> = HashMap::new();
    for (rank, bucket) in rank_nodes.iter().enumerate() {
        for (idx, id) in bucket.iter().enumerate() {
            slot.insert(id.as_str(), (rank, idx));
        }
    }

    let mut between: HashMap<usize, Vec<(usize, usize)>> = HashMap::new();
    for edge in edges {
        let (Some(&(from_rank, from_idx)), Some(&(to_rank, to_idx))) =
            (slot.get(edge.from.as_str()), slot.get(edge.to.as_str()))
        else {
            continue;
        };
        if to_rank != from_rank + 1 {
            continue;
        }
        between.entry(from_rank).or_default().push((from_idx, to_idx));
    }

    let mut crossings = 0usize;
    for pairs in between.values() {
        for (i, (a_from, a_to)) in pairs.iter().enumerate() {
            for (b_from, b_to) in &pairs[i + 1..] {
                if (a_from < b_from && a_to > b_to) || (a_from > b_from && a_to < b_to) {
                    crossings += 1;
                }
            }
        }
    }
    crossings
}
