use std::collections::HashMap;

use tracing::{debug, trace};

use crate::config::LayoutConfig;

use super::LayoutEngine;
use super::ordering::order_rank_nodes;
use super::ranking::rank_nodes;
use super::types::{LayoutEdge, LayoutError, LayoutGraph, LayoutResult, Point};

/// Layered (Sugiyama) layout: cycle removal, ranking, crossing reduction and
/// coordinate assignment.
#[derive(Debug, Clone)]
pub struct LayeredLayout {
    pub node_spacing: f32,
    pub rank_spacing: f32,
    pub order_passes: usize,
}

impl LayeredLayout {
    pub fn from_config(config: &LayoutConfig) -> Self {
        Self {
            node_spacing: config.node_spacing.max(0.0),
            rank_spacing: config.rank_spacing.max(0.0),
            order_passes: config.order_passes,
        }
    }
}

impl Default for LayeredLayout {
    fn default() -> Self {
        Self::from_config(&LayoutConfig::default())
    }
}

impl LayoutEngine for LayeredLayout {
    fn layout(&self, graph: &LayoutGraph) -> Result<LayoutResult, LayoutError> {
        graph.validate()?;
        let nodes = graph.sized_nodes();
        if nodes.is_empty() {
            return Ok(LayoutResult::default());
        }

        let node_ids: Vec<String> = nodes.iter().map(|node| node.id.clone()).collect();
        let mut sizes: HashMap<String, (f32, f32)> = nodes
            .iter()
            .map(|node| (node.id.clone(), (node.width, node.height)))
            .collect();

        let ranking = rank_nodes(&node_ids, &graph.rank_edges());
        if ranking.reversed > 0 {
            debug!(reversed = ranking.reversed, "broke cycles by reversing edges");
        }
        let max_rank = ranking.ranks.values().copied().max().unwrap_or(0);
        let mut rank_buckets: Vec<Vec<String>> = vec![Vec::new(); max_rank + 1];
        for node_id in &node_ids {
            let rank = ranking.ranks.get(node_id).copied().unwrap_or(0);
            rank_buckets[rank].push(node_id.clone());
        }

        let mut expanded_edges: Vec<LayoutEdge> = Vec::new();
        let mut dummy_counter = 0usize;
        let mut dummies = 0usize;
        for edge in &ranking.edges {
            let (Some(&from_rank), Some(&to_rank)) =
                (ranking.ranks.get(&edge.from), ranking.ranks.get(&edge.to))
            else {
                continue;
            };
            if to_rank <= from_rank {
                continue;
            }
            let span = to_rank - from_rank;
            if span == 1 {
                expanded_edges.push(edge.clone());
                continue;
            }
            let mut prev = edge.from.clone();
            for step in 1..span {
                // skip ids already taken by real nodes
                let dummy_id = loop {
                    let candidate = format!("__dummy_{dummy_counter}__");
                    dummy_counter += 1;
                    if !sizes.contains_key(&candidate) {
                        break candidate;
                    }
                };
                dummies += 1;
                sizes.insert(dummy_id.clone(), (0.0, 0.0));
                rank_buckets[from_rank + step].push(dummy_id.clone());
                expanded_edges.push(LayoutEdge {
                    from: prev,
                    to: dummy_id.clone(),
                });
                prev = dummy_id;
            }
            expanded_edges.push(LayoutEdge {
                from: prev,
                to: edge.to.clone(),
            });
        }

        let crossings = order_rank_nodes(&mut rank_buckets, &expanded_edges, self.order_passes);
        trace!(
            ranks = rank_buckets.len(),
            dummies,
            crossings,
            "ordered ranks"
        );

        let horizontal = graph.direction.is_horizontal();
        let main_extent = |id: &str| {
            let (width, height) = sizes.get(id).copied().unwrap_or((0.0, 0.0));
            if horizontal { width } else { height }
        };
        let cross_half = |id: &str| {
            let (width, height) = sizes.get(id).copied().unwrap_or((0.0, 0.0));
            if horizontal { height / 2.0 } else { width / 2.0 }
        };

        let mut main_pos: HashMap<String, f32> = HashMap::new();
        let mut cursor = 0.0_f32;
        for bucket in &rank_buckets {
            let extent = bucket
                .iter()
                .map(|id| main_extent(id))
                .fold(0.0_f32, f32::max);
            for id in bucket {
                main_pos.insert(id.clone(), cursor + extent / 2.0);
            }
            cursor += extent + self.rank_spacing;
        }

        let mut incoming: HashMap<String, Vec<String>> = HashMap::new();
        let mut outgoing: HashMap<String, Vec<String>> = HashMap::new();
        for edge in &expanded_edges {
            incoming
                .entry(edge.to.clone())
                .or_default()
                .push(edge.from.clone());
            outgoing
                .entry(edge.from.clone())
                .or_default()
                .push(edge.to.clone());
        }

        let mut cross_pos: HashMap<String, f32> = HashMap::new();
        let place_rank = |bucket: &[String],
                          neighbors: &HashMap<String, Vec<String>>,
                          cross_pos: &mut HashMap<String, f32>| {
            if bucket.is_empty() {
                return;
            }
            let mut entries: Vec<(&String, f32, f32)> = Vec::with_capacity(bucket.len());
            for node_id in bucket {
                let mut sum = 0.0;
                let mut count = 0.0;
                if let Some(list) = neighbors.get(node_id) {
                    for neighbor_id in list {
                        if let Some(center) = cross_pos.get(neighbor_id) {
                            sum += *center;
                            count += 1.0;
                        }
                    }
                }
                let desired = if count > 0.0 {
                    sum / count
                } else {
                    cross_pos.get(node_id).copied().unwrap_or(0.0)
                };
                entries.push((node_id, desired, cross_half(node_id)));
            }

            // Keep the crossing-reduced order; only spread the centers.
            let desired_mean =
                entries.iter().map(|(_, d, _)| *d).sum::<f32>() / entries.len() as f32;
            let mut assigned: Vec<(&String, f32)> = Vec::with_capacity(entries.len());
            let mut prev: Option<(f32, f32)> = None;
            for (node_id, desired, half) in entries {
                let center = match prev {
                    Some((prev_center, prev_half)) => {
                        desired.max(prev_center + prev_half + half + self.node_spacing)
                    }
                    None => desired,
                };
                assigned.push((node_id, center));
                prev = Some((center, half));
            }
            let actual_mean =
                assigned.iter().map(|(_, c)| *c).sum::<f32>() / assigned.len() as f32;
            let delta = desired_mean - actual_mean;
            for (node_id, center) in assigned {
                cross_pos.insert(node_id.clone(), center + delta);
            }
        };

        for _ in 0..2 {
            for bucket in &rank_buckets {
                place_rank(bucket, &incoming, &mut cross_pos);
            }
            for bucket in rank_buckets.iter().rev() {
                place_rank(bucket, &outgoing, &mut cross_pos);
            }
        }

        let min_main = node_ids
            .iter()
            .map(|id| main_pos.get(id).copied().unwrap_or(0.0) - main_extent(id) / 2.0)
            .fold(f32::INFINITY, f32::min);
        let min_cross = node_ids
            .iter()
            .map(|id| cross_pos.get(id).copied().unwrap_or(0.0) - cross_half(id))
            .fold(f32::INFINITY, f32::min);

        let mut result = LayoutResult::default();
        for id in &node_ids {
            let main = main_pos.get(id).copied().unwrap_or(0.0) - min_main;
            let cross = cross_pos.get(id).copied().unwrap_or(0.0) - min_cross;
            let center = if horizontal {
                Point::new(main, cross)
            } else {
                Point::new(cross, main)
            };
            result.centers.insert(id.clone(), center);
        }
        Ok(result)
    }
}
