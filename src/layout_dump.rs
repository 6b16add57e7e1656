use crate::graph::{DesignerGraph, NodeKind};
use crate::ir::{DisplayMode, TableDefinition};
use crate::layout::Position;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Canvas-ready JSON form of a positioned designer graph.
#[derive(Debug, Serialize)]
pub struct GraphDump {
    pub width: f32,
    pub height: f32,
    pub nodes: Vec<NodeDump>,
    pub edges: Vec<EdgeDump>,
}

#[derive(Debug, Serialize)]
pub struct NodeDump {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub position: Position,
    pub width: f32,
    pub height: f32,
    pub data: NodeDataDump,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDataDump {
    pub table: TableDefinition,
    pub is_selected: bool,
    pub has_left_edge: bool,
    pub has_right_edge: bool,
    pub node_mode: DisplayMode,
}

#[derive(Debug, Serialize)]
pub struct EdgeDump {
    pub id: String,
    pub source: String,
    pub target: String,
    pub focusable: bool,
}

impl GraphDump {
    /// `margin` pads the far side of the bounds to match the near-side offset.
    pub fn from_graph(graph: &DesignerGraph, margin: f32) -> Self {
        let nodes = graph
            .nodes
            .iter()
            .map(|node| NodeDump {
                id: node.id.clone(),
                kind: node.kind,
                position: node.position,
                width: node.width,
                height: node.height,
                data: NodeDataDump {
                    table: node.data.table.clone(),
                    is_selected: node.data.is_selected,
                    has_left_edge: node.data.has_left_edge,
                    has_right_edge: node.data.has_right_edge,
                    node_mode: node.data.node_mode,
                },
            })
            .collect();

        let edges = graph
            .edges
            .iter()
            .map(|edge| EdgeDump {
                id: edge.id.clone(),
                source: edge.source.clone(),
                target: edge.target.clone(),
                focusable: edge.focusable,
            })
            .collect();

        let (width, height) = if graph.nodes.is_empty() {
            (0.0, 0.0)
        } else {
            let (right, bottom) = graph.extent();
            (right + margin, bottom + margin)
        };

        GraphDump {
            width,
            height,
            nodes,
            edges,
        }
    }
}

/// Writes pretty JSON to `path`, or to stdout when no path is given.
pub fn write_graph_dump(path: Option<&Path>, dump: &GraphDump) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path)?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, dump)?;
            writer.write_all(b"\n")?;
            writer.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            serde_json::to_writer_pretty(&mut writer, dump)?;
            writer.write_all(b"\n")?;
            writer.flush()?;
        }
    }
    Ok(())
}
