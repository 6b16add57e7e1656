use std::collections::{HashMap, HashSet};

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::classify::{NormalizedTable, normalize_tables};
use crate::config::NodeSizeConfig;
use crate::ir::{Direction, DisplayMode, TableDefinition};
use crate::layout::{LayoutGraph, Position};
use crate::sizing::{node_height, node_width};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Table,
    Edge,
}

/// Renderer payload carried by every node.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeData {
    pub table: TableDefinition,
    pub is_selected: bool,
    /// An edge enters this node (incoming side).
    pub has_left_edge: bool,
    /// An edge leaves this node (outgoing side).
    pub has_right_edge: bool,
    pub node_mode: DisplayMode,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DesignerNode {
    pub id: String,
    pub kind: NodeKind,
    pub width: f32,
    pub height: f32,
    /// Top-left position; zero until a layout has been applied.
    pub position: Position,
    pub data: NodeData,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignerEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub focusable: bool,
}

/// Nodes and edges before layout, plus the abstract graph for the engine.
#[derive(Debug, Clone)]
pub struct GraphDraft {
    pub nodes: Vec<DesignerNode>,
    pub edges: Vec<DesignerEdge>,
    pub layout: LayoutGraph,
}

/// Positioned nodes and edges ready for the canvas.
#[derive(Debug, Clone, Default)]
pub struct DesignerGraph {
    pub nodes: Vec<DesignerNode>,
    pub edges: Vec<DesignerEdge>,
}

impl DesignerGraph {
    pub fn node(&self, id: &str) -> Option<&DesignerNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    pub fn edge(&self, id: &str) -> Option<&DesignerEdge> {
        self.edges.iter().find(|edge| edge.id == id)
    }

    /// Right and bottom extent of all node boxes.
    pub fn extent(&self) -> (f32, f32) {
        self.nodes.iter().fold((0.0_f32, 0.0_f32), |(w, h), node| {
            (
                w.max(node.position.x + node.width),
                h.max(node.position.y + node.height),
            )
        })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("duplicate schema name `{0}`")]
    DuplicateTableName(String),
}

/// Opt-in uniqueness check; [`build_graph`] itself never rejects duplicates.
pub fn validate_unique_names(tables: &[TableDefinition]) -> Result<(), SchemaError> {
    let mut seen: HashSet<&str> = HashSet::new();
    for table in tables {
        if !seen.insert(table.name()) {
            return Err(SchemaError::DuplicateTableName(table.name().to_string()));
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, Default)]
struct AnchorFlags {
    left: bool,
    right: bool,
}

pub fn build_graph(
    tables: &[TableDefinition],
    active: Option<&TableDefinition>,
    mode: DisplayMode,
    sizing: &NodeSizeConfig,
    direction: Direction,
) -> GraphDraft {
    let normalized = normalize_tables(tables);
    let declared: HashSet<&str> = normalized.iter().map(|table| table.name()).collect();
    let edge_tables: Vec<&NormalizedTable<'_>> =
        normalized.iter().filter(|table| table.is_edge).collect();

    let mut edges: Vec<DesignerEdge> = Vec::new();
    let mut layout = LayoutGraph::new(direction);

    for table in &edge_tables {
        let name = table.name();
        for source in &table.from {
            edges.push(DesignerEdge {
                id: format!("{name}{source}"),
                source: source.clone(),
                target: name.to_string(),
                focusable: false,
            });
            layout.add_edge(source, name);
        }
        for target in &table.to {
            edges.push(DesignerEdge {
                id: format!("{name}{target}"),
                source: name.to_string(),
                target: target.clone(),
                focusable: false,
            });
            layout.add_edge(name, target);
        }
    }

    let anchors: HashMap<&str, AnchorFlags> =
        edge_tables
            .iter()
            .fold(HashMap::new(), |mut anchors, table| {
                for source in &table.from {
                    anchors.entry(source.as_str()).or_default().right = true;
                }
                for target in &table.to {
                    anchors.entry(target.as_str()).or_default().left = true;
                }
                anchors
            });

    let dangling: Vec<&&str> = anchors
        .keys()
        .filter(|name| !declared.contains(**name))
        .collect();
    if !dangling.is_empty() {
        debug!(?dangling, "relation tables reference undeclared tables");
    }

    let active_name = active.map(|table| table.name());
    let width = node_width(mode, sizing);
    let nodes: Vec<DesignerNode> = normalized
        .iter()
        .map(|table| {
            let name = table.name();
            let flags = anchors.get(name).copied().unwrap_or_default();
            let height = node_height(mode, table.table, sizing);
            layout.add_node(name, width, height);
            DesignerNode {
                id: name.to_string(),
                kind: if table.is_edge {
                    NodeKind::Edge
                } else {
                    NodeKind::Table
                },
                width,
                height,
                position: Position::default(),
                data: NodeData {
                    table: table.table.clone(),
                    is_selected: active_name == Some(name),
                    has_left_edge: flags.left,
                    has_right_edge: flags.right,
                    node_mode: mode,
                },
            }
        })
        .collect();

    debug!(
        nodes = nodes.len(),
        edges = edges.len(),
        relations = edge_tables.len(),
        "built designer graph"
    );

    GraphDraft {
        nodes,
        edges,
        layout,
    }
}
