use std::collections::{HashMap, HashSet};

use serde::Serialize;
use thiserror::Error;

use crate::ir::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Top-left anchored canvas position.
pub type Position = Point;

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutNode {
    pub id: String,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LayoutEdge {
    pub from: String,
    pub to: String,
}

/// Abstract directed graph handed to a [`LayoutEngine`](super::LayoutEngine).
#[derive(Debug, Clone, Default)]
pub struct LayoutGraph {
    pub direction: Direction,
    pub nodes: Vec<LayoutNode>,
    pub edges: Vec<LayoutEdge>,
}

/// Node centers keyed by node id.
#[derive(Debug, Clone, Default)]
pub struct LayoutResult {
    pub centers: HashMap<String, Point>,
}

impl LayoutResult {
    pub fn center(&self, id: &str) -> Option<Point> {
        self.centers.get(id).copied()
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("node `{id}` has invalid size {width}x{height}")]
    InvalidNodeSize { id: String, width: f32, height: f32 },
    #[error("layout engine produced no position for node `{0}`")]
    MissingPosition(String),
}

impl LayoutGraph {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn add_node(&mut self, id: &str, width: f32, height: f32) {
        self.nodes.push(LayoutNode {
            id: id.to_string(),
            width,
            height,
        });
    }

    pub fn add_edge(&mut self, from: &str, to: &str) {
        self.edges.push(LayoutEdge {
            from: from.to_string(),
            to: to.to_string(),
        });
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        for node in &self.nodes {
            let valid = |v: f32| v.is_finite() && v >= 0.0;
            if !valid(node.width) || !valid(node.height) {
                return Err(LayoutError::InvalidNodeSize {
                    id: node.id.clone(),
                    width: node.width,
                    height: node.height,
                });
            }
        }
        Ok(())
    }

    /// Declared nodes (first declaration wins for repeated ids) followed by
    /// zero-sized placeholders for edge endpoints that were never declared.
    pub fn sized_nodes(&self) -> Vec<LayoutNode> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut nodes = Vec::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if seen.insert(node.id.as_str()) {
                nodes.push(node.clone());
            }
        }
        for edge in &self.edges {
            for id in [&edge.from, &edge.to] {
                if seen.insert(id.as_str()) {
                    nodes.push(LayoutNode {
                        id: id.clone(),
                        width: 0.0,
                        height: 0.0,
                    });
                }
            }
        }
        nodes
    }

    /// Edges with self-loops and parallel duplicates removed, in first
    /// occurrence order.
    pub fn rank_edges(&self) -> Vec<LayoutEdge> {
        let mut seen: HashSet<(&str, &str)> = HashSet::new();
        self.edges
            .iter()
            .filter(|edge| edge.from != edge.to)
            .filter(|edge| seen.insert((edge.from.as_str(), edge.to.as_str())))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_follow_declared_nodes() {
        let mut graph = LayoutGraph::new(Direction::LeftRight);
        graph.add_node("a", 10.0, 10.0);
        graph.add_node("a", 99.0, 99.0);
        graph.add_edge("a", "ghost");
        let nodes = graph.sized_nodes();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].width, 10.0);
        assert_eq!(nodes[1].id, "ghost");
        assert_eq!(nodes[1].height, 0.0);
    }

    #[test]
    fn rank_edges_drop_loops_and_duplicates() {
        let mut graph = LayoutGraph::new(Direction::LeftRight);
        graph.add_edge("a", "b");
        graph.add_edge("a", "a");
        graph.add_edge("a", "b");
        graph.add_edge("b", "a");
        let edges = graph.rank_edges();
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[1].from, "b");
    }

    #[test]
    fn negative_size_is_rejected() {
        let mut graph = LayoutGraph::new(Direction::LeftRight);
        graph.add_node("bad", -1.0, 10.0);
        assert!(matches!(
            graph.validate(),
            Err(LayoutError::InvalidNodeSize { .. })
        ));
    }
}
