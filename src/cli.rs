use crate::config::{LayoutAlgorithm, load_config};
use crate::design_graph;
use crate::graph::validate_unique_names;
use crate::ir::{Direction, DisplayMode, TableDefinition};
use crate::layout_dump::{GraphDump, write_graph_dump};
use crate::parser::parse_schema;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "sdg",
    version,
    about = "Lay out a SurrealDB schema as a designer graph"
)]
pub struct Args {
    /// Schema file (.surql, or .json table definitions) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output JSON file. Defaults to stdout if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Node display mode
    #[arg(short = 'm', long = "mode", value_enum, default_value = "fields")]
    pub mode: ModeArg,

    /// Table to mark as selected
    #[arg(short = 'a', long = "active")]
    pub active: Option<String>,

    /// Config JSON file (layout and sizing)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Layout engine, overrides the config file
    #[arg(long = "engine", value_enum)]
    pub engine: Option<EngineArg>,

    /// Flow direction, overrides the config file
    #[arg(long = "direction", value_enum)]
    pub direction: Option<DirectionArg>,

    /// Reject schemas that declare a table name twice
    #[arg(long = "strict")]
    pub strict: bool,

    /// Log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum ModeArg {
    Fields,
    Summary,
    Simple,
}

impl From<ModeArg> for DisplayMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Fields => DisplayMode::Fields,
            ModeArg::Summary => DisplayMode::Summary,
            ModeArg::Simple => DisplayMode::Simple,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum EngineArg {
    Layered,
    Dagre,
}

impl From<EngineArg> for LayoutAlgorithm {
    fn from(engine: EngineArg) -> Self {
        match engine {
            EngineArg::Layered => LayoutAlgorithm::Layered,
            EngineArg::Dagre => LayoutAlgorithm::Dagre,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum DirectionArg {
    Lr,
    Tb,
}

impl From<DirectionArg> for Direction {
    fn from(direction: DirectionArg) -> Self {
        match direction {
            DirectionArg::Lr => Direction::LeftRight,
            DirectionArg::Tb => Direction::TopBottom,
        }
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut config = load_config(args.config.as_deref())?;
    if let Some(engine) = args.engine {
        config.layout.algorithm = engine.into();
    }
    if let Some(direction) = args.direction {
        config.layout.direction = direction.into();
    }

    let (input, is_json) = read_input(args.input.as_deref())?;
    let tables = load_tables(&input, is_json)?;
    if args.strict {
        validate_unique_names(&tables)?;
    }
    let active = resolve_active(&tables, args.active.as_deref())?;

    let graph = design_graph(&tables, active, args.mode.into(), &config)?;
    info!(
        tables = tables.len(),
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        "designer graph ready"
    );
    let dump = GraphDump::from_graph(&graph, config.layout.margin);
    write_graph_dump(args.output.as_deref(), &dump)
}

/// Level forced by `-v`, or the quiet default when `RUST_LOG` is unset.
fn log_directive(verbose: u8, env_filter_set: bool) -> Option<Level> {
    match verbose {
        0 if env_filter_set => None,
        0 => Some(Level::WARN),
        1 => Some(Level::DEBUG),
        _ => Some(Level::TRACE),
    }
}

fn init_tracing(verbose: u8) {
    let env_filter_set = std::env::var_os(EnvFilter::DEFAULT_ENV).is_some();
    let mut filter = EnvFilter::from_default_env();
    if let Some(level) = log_directive(verbose, env_filter_set) {
        filter = filter.add_directive(level.into());
    }
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn read_input(path: Option<&Path>) -> Result<(String, bool)> {
    if let Some(path) = path {
        if path == Path::new("-") {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            return Ok((buf, false));
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read schema {}", path.display()))?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        return Ok((content, is_json));
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok((buf, false))
}

fn load_tables(input: &str, is_json: bool) -> Result<Vec<TableDefinition>> {
    if is_json {
        return serde_json::from_str(input).context("invalid table definitions");
    }
    parse_schema(input)
}

fn resolve_active<'a>(
    tables: &'a [TableDefinition],
    active: Option<&str>,
) -> Result<Option<&'a TableDefinition>> {
    let Some(name) = active else {
        return Ok(None);
    };
    tables
        .iter()
        .find(|table| table.name() == name)
        .map(Some)
        .ok_or_else(|| anyhow::anyhow!("Active table `{name}` is not defined in the schema"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags() {
        let args = Args::try_parse_from([
            "sdg", "-i", "schema.surql", "-m", "summary", "--engine", "dagre", "--direction",
            "tb", "-a", "user", "-vv",
        ])
        .unwrap();
        assert_eq!(args.input.as_deref(), Some(Path::new("schema.surql")));
        assert_eq!(DisplayMode::from(args.mode), DisplayMode::Summary);
        assert_eq!(
            args.engine.map(LayoutAlgorithm::from),
            Some(LayoutAlgorithm::Dagre)
        );
        assert_eq!(args.direction.map(Direction::from), Some(Direction::TopBottom));
        assert_eq!(args.active.as_deref(), Some("user"));
        assert_eq!(args.verbose, 2);
        assert!(!args.strict);
    }

    #[test]
    fn rust_log_wins_without_verbose_flag() {
        assert_eq!(log_directive(0, true), None);
        assert_eq!(log_directive(0, false), Some(Level::WARN));
        assert_eq!(log_directive(1, true), Some(Level::DEBUG));
        assert_eq!(log_directive(3, false), Some(Level::TRACE));
    }

    #[test]
    fn loads_json_and_surql() {
        let json = load_tables(r#"[{"schema":{"name":"user"}}]"#, true).unwrap();
        assert_eq!(json[0].name(), "user");
        let surql = load_tables("DEFINE TABLE user SCHEMAFULL;", false).unwrap();
        assert_eq!(surql[0].name(), "user");
        assert!(load_tables("{not json", true).is_err());
    }

    #[test]
    fn unknown_active_table_is_an_error() {
        let tables = vec![TableDefinition::new("user")];
        assert!(resolve_active(&tables, Some("ghost")).is_err());
        assert_eq!(
            resolve_active(&tables, Some("user")).unwrap().map(|t| t.name()),
            Some("user")
        );
        assert!(resolve_active(&tables, None).unwrap().is_none());
    }
}
