mod dagre;
mod layered;
mod ordering;
mod ranking;
pub mod translate;
pub(crate) mod types;

pub use dagre::DagreLayout;
pub use layered::LayeredLayout;
pub use translate::{translate, translate_center};
pub use types::*;

use tracing::debug;

use crate::config::{LayoutAlgorithm, LayoutConfig};
use crate::graph::{DesignerGraph, GraphDraft};

/// Positions the nodes of a directed graph. Implementations return node
/// centers and must not let two nodes of one rank overlap.
pub trait LayoutEngine {
    fn layout(&self, graph: &LayoutGraph) -> Result<LayoutResult, LayoutError>;
}

pub fn engine_for(config: &LayoutConfig) -> Box<dyn LayoutEngine> {
    match config.algorithm {
        LayoutAlgorithm::Layered => Box::new(LayeredLayout::from_config(config)),
        LayoutAlgorithm::Dagre => Box::new(DagreLayout::from_config(config)),
    }
}

/// Runs the configured engine over `draft` and anchors every node at its
/// translated top-left position.
pub fn compute_layout(draft: GraphDraft, config: &LayoutConfig) -> Result<DesignerGraph, LayoutError> {
    let engine = engine_for(config);
    compute_layout_with(draft, engine.as_ref(), config.margin)
}

pub fn compute_layout_with(
    draft: GraphDraft,
    engine: &dyn LayoutEngine,
    margin: f32,
) -> Result<DesignerGraph, LayoutError> {
    let GraphDraft {
        mut nodes,
        edges,
        layout,
    } = draft;

    let result = engine.layout(&layout)?;
    let positions = translate(
        &result,
        nodes
            .iter()
            .map(|node| (node.id.as_str(), node.width, node.height)),
        margin,
    );
    for node in &mut nodes {
        let Some(position) = positions.get(&node.id) else {
            return Err(LayoutError::MissingPosition(node.id.clone()));
        };
        node.position = *position;
    }

    debug!(
        nodes = nodes.len(),
        edges = edges.len(),
        direction = ?layout.direction,
        "laid out designer graph"
    );
    Ok(DesignerGraph { nodes, edges })
}
