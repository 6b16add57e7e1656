use schema_designer_graph::config::{Config, LayoutAlgorithm};
use schema_designer_graph::ir::{Direction, DisplayMode, TableDefinition};
use schema_designer_graph::layout_dump::GraphDump;
use schema_designer_graph::design_graph;
use serde::Deserialize;
use wasm_bindgen::prelude::*;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DesignerLayoutOptions {
    mode: Option<String>,
    active: Option<String>,
    direction: Option<String>,
    engine: Option<String>,
}

fn build_config(options: &DesignerLayoutOptions) -> Result<(Config, DisplayMode), String> {
    let mut config = Config::default();
    if let Some(direction) = options.direction.as_deref() {
        config.layout.direction = Direction::from_token(direction)
            .ok_or_else(|| format!("unknown direction `{direction}`"))?;
    }
    if let Some(engine) = options.engine.as_deref() {
        config.layout.algorithm = LayoutAlgorithm::from_token(engine)
            .ok_or_else(|| format!("unknown engine `{engine}`"))?;
    }
    let mode = match options.mode.as_deref() {
        Some(mode) => DisplayMode::from_token(mode).ok_or_else(|| format!("unknown mode `{mode}`"))?,
        None => DisplayMode::default(),
    };
    Ok((config, mode))
}

fn layout_to_json(tables_json: &str, options: DesignerLayoutOptions) -> Result<String, String> {
    let tables: Vec<TableDefinition> =
        serde_json::from_str(tables_json).map_err(|error| error.to_string())?;
    let (config, mode) = build_config(&options)?;
    let active = match options.active.as_deref() {
        Some(name) => Some(
            tables
                .iter()
                .find(|table| table.name() == name)
                .ok_or_else(|| format!("active table `{name}` is not defined"))?,
        ),
        None => None,
    };
    let graph = design_graph(&tables, active, mode, &config).map_err(|error| error.to_string())?;
    serde_json::to_string(&GraphDump::from_graph(&graph, config.layout.margin))
        .map_err(|error| error.to_string())
}

#[wasm_bindgen]
pub fn layout_schema(tables_json: &str, options_json: Option<String>) -> Result<String, JsValue> {
    let options = if let Some(raw_options) = options_json {
        serde_json::from_str::<DesignerLayoutOptions>(&raw_options)
            .map_err(|error| JsValue::from_str(&error.to_string()))?
    } else {
        DesignerLayoutOptions::default()
    };

    layout_to_json(tables_json, options).map_err(|error| JsValue::from_str(&error))
}

#[cfg(test)]
mod tests {
    use crate::{DesignerLayoutOptions, layout_to_json};

    const TABLES: &str = r#"[
        {"schema": {"name": "person"}},
        {"schema": {"name": "likes", "kind": {"type": "relation", "from": ["person"], "to": ["dog"]}}},
        {"schema": {"name": "dog"}}
    ]"#;

    #[test]
    fn lays_out_relation_tables() {
        let options = DesignerLayoutOptions {
            mode: Some("simple".to_string()),
            active: Some("dog".to_string()),
            ..Default::default()
        };
        let json = layout_to_json(TABLES, options).expect("schema should lay out");
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["nodes"].as_array().unwrap().len(), 3);
        assert_eq!(value["nodes"][1]["type"], "edge");
        assert_eq!(value["nodes"][2]["data"]["isSelected"], true);
        assert_eq!(value["edges"][1]["id"], "likesdog");
    }

    #[test]
    fn rejects_unknown_options() {
        let options = DesignerLayoutOptions {
            engine: Some("spring".to_string()),
            ..Default::default()
        };
        assert!(layout_to_json(TABLES, options).is_err());
    }
}
