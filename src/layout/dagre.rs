use dagre_rust::{
    GraphConfig as DagreConfig, GraphEdge as DagreEdge, GraphNode as DagreNode,
    layout as dagre_layout,
};
use graphlib_rust::{Graph as DagreGraph, GraphOption};

use crate::config::LayoutConfig;
use crate::ir::Direction;

use super::LayoutEngine;
use super::types::{LayoutError, LayoutGraph, LayoutResult, Point};

const DAGRE_RANKER: &str = "longest-path";

/// Layout through the `dagre_rust` port of dagre.js.
#[derive(Debug, Clone)]
pub struct DagreLayout {
    pub node_spacing: f32,
    pub rank_spacing: f32,
}

impl DagreLayout {
    pub fn from_config(config: &LayoutConfig) -> Self {
        Self {
            node_spacing: config.node_spacing.max(0.0),
            rank_spacing: config.rank_spacing.max(0.0),
        }
    }
}

impl Default for DagreLayout {
    fn default() -> Self {
        Self::from_config(&LayoutConfig::default())
    }
}

impl LayoutEngine for DagreLayout {
    fn layout(&self, graph: &LayoutGraph) -> Result<LayoutResult, LayoutError> {
        graph.validate()?;
        let nodes = graph.sized_nodes();
        if nodes.is_empty() {
            return Ok(LayoutResult::default());
        }

        let mut dagre_graph: DagreGraph<DagreConfig, DagreNode, DagreEdge> =
            DagreGraph::new(Some(GraphOption {
                directed: Some(true),
                multigraph: Some(false),
                compound: Some(false),
            }));

        let mut graph_config = DagreConfig::default();
        graph_config.rankdir = Some(dagre_rankdir(graph.direction).to_string());
        graph_config.nodesep = Some(self.node_spacing);
        graph_config.ranksep = Some(self.rank_spacing);
        graph_config.marginx = Some(0.0);
        graph_config.marginy = Some(0.0);
        // network-simplex in dagre_rust 0.0.5 can spin forever when no entering edge exists
        graph_config.ranker = Some(DAGRE_RANKER.to_string());
        dagre_graph.set_graph(graph_config);

        for layout_node in &nodes {
            let mut node = DagreNode::default();
            node.width = layout_node.width;
            node.height = layout_node.height;
            dagre_graph.set_node(layout_node.id.clone(), Some(node));
        }

        // dagre draws loops itself; they carry no rank constraint here
        for edge in graph.rank_edges() {
            let edge_label = DagreEdge::default();
            let _ = dagre_graph.set_edge(&edge.from, &edge.to, Some(edge_label), None);
        }

        dagre_layout::run_layout(&mut dagre_graph);

        let mut result = LayoutResult::default();
        for layout_node in &nodes {
            let Some(dagre_node) = dagre_graph.node(&layout_node.id) else {
                return Err(LayoutError::MissingPosition(layout_node.id.clone()));
            };
            result
                .centers
                .insert(layout_node.id.clone(), Point::new(dagre_node.x, dagre_node.y));
        }
        Ok(result)
    }
}

fn dagre_rankdir(direction: Direction) -> &'static str {
    match direction {
        Direction::LeftRight => "lr",
        Direction::TopBottom => "tb",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rankdir_follows_direction() {
        assert_eq!(dagre_rankdir(Direction::LeftRight), "lr");
        assert_eq!(dagre_rankdir(Direction::TopBottom), "tb");
    }

    #[test]
    fn chain_flows_left_to_right() {
        let mut graph = LayoutGraph::new(Direction::LeftRight);
        graph.add_node("user", 250.0, 88.0);
        graph.add_node("wrote", 250.0, 60.0);
        graph.add_node("post", 250.0, 116.0);
        graph.add_edge("user", "wrote");
        graph.add_edge("wrote", "post");
        let result = DagreLayout::default().layout(&graph).unwrap();
        let user = result.center("user").unwrap();
        let wrote = result.center("wrote").unwrap();
        let post = result.center("post").unwrap();
        assert!(user.x < wrote.x);
        assert!(wrote.x < post.x);
    }

    #[test]
    fn acyclic_graph_with_shared_sinks_terminates() {
        let mut graph = LayoutGraph::new(Direction::LeftRight);
        for idx in 0..8 {
            graph.add_node(&format!("n{idx}"), 250.0, 60.0 + 28.0 * idx as f32);
        }
        let pairs = [(3, 6), (2, 7), (3, 1), (4, 0), (3, 5), (6, 0), (1, 4), (2, 4), (7, 3)];
        for (from, to) in pairs {
            graph.add_edge(&format!("n{from}"), &format!("n{to}"));
        }
        let result = DagreLayout::default().layout(&graph).unwrap();
        assert_eq!(result.centers.len(), 8);
        for (from, to) in pairs {
            let from = result.center(&format!("n{from}")).unwrap();
            let to = result.center(&format!("n{to}")).unwrap();
            assert!(from.x < to.x);
        }
    }

    #[test]
    fn empty_graph_skips_dagre() {
        let result = DagreLayout::default().layout(&LayoutGraph::default()).unwrap();
        assert!(result.centers.is_empty());
    }
}
