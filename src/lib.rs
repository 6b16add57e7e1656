pub mod classify;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod graph;
pub mod ir;
pub mod layout;
pub mod layout_dump;
pub mod parser;
pub mod sizing;

pub use classify::{EdgeClassification, NormalizedTable, classify_table, normalize_tables};
#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, LayoutAlgorithm, LayoutConfig, NodeSizeConfig, load_config};
pub use graph::{
    DesignerEdge, DesignerGraph, DesignerNode, GraphDraft, NodeData, NodeKind, SchemaError,
    build_graph, validate_unique_names,
};
pub use ir::{Direction, DisplayMode, TableDefinition, TableKind};
pub use layout::{LayoutEngine, LayoutError, compute_layout, translate_center};
pub use parser::parse_schema;
pub use sizing::{node_height, node_width};

/// Builds the designer graph for `tables` and lays it out with `config`.
pub fn design_graph(
    tables: &[TableDefinition],
    active: Option<&TableDefinition>,
    mode: DisplayMode,
    config: &Config,
) -> Result<DesignerGraph, LayoutError> {
    let draft = build_graph(tables, active, mode, &config.sizing, config.layout.direction);
    compute_layout(draft, &config.layout)
}
