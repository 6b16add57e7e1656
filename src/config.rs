use crate::ir::Direction;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutAlgorithm {
    /// Built-in layered layout.
    #[default]
    Layered,
    /// `dagre_rust` port of dagre.js.
    Dagre,
}

impl LayoutAlgorithm {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "layered" => Some(Self::Layered),
            "dagre" => Some(Self::Dagre),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    pub direction: Direction,
    pub algorithm: LayoutAlgorithm,
    /// Gap between neighbouring nodes of one rank.
    pub node_spacing: f32,
    /// Gap between consecutive ranks.
    pub rank_spacing: f32,
    /// Offset added to every translated position.
    pub margin: f32,
    pub order_passes: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            direction: Direction::LeftRight,
            algorithm: LayoutAlgorithm::Layered,
            node_spacing: 40.0,
            rank_spacing: 100.0,
            margin: 50.0,
            order_passes: 4,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NodeSizeConfig {
    pub width: f32,
    pub fields_base_height: f32,
    pub field_row_height: f32,
    pub summary_height: f32,
    pub simple_height: f32,
}

impl Default for NodeSizeConfig {
    fn default() -> Self {
        Self {
            width: 250.0,
            fields_base_height: 60.0,
            field_row_height: 28.0,
            summary_height: 140.0,
            simple_height: 52.0,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub layout: LayoutConfig,
    pub sizing: NodeSizeConfig,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    parse_config(&contents).with_context(|| format!("invalid config {}", path.display()))
}

/// Strict JSON first; hand-written files with comments or trailing commas go
/// through json5.
pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    match serde_json::from_str::<Config>(contents) {
        Ok(config) => Ok(config),
        Err(json_err) => json5::from_str::<Config>(contents)
            .map_err(|_| anyhow::Error::new(json_err)),
    }
}
