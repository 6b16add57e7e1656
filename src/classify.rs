//! Relation ("edge") table detection.
//!
//! A table is an edge table when it is declared `TYPE RELATION`, or when it
//! carries both an `in` and an `out` field. The tables it connects are read
//! from the declared relation lists, falling back to the record kinds of the
//! `in` / `out` fields.

use std::collections::HashSet;

use crate::ir::{TableDefinition, TableKind};

/// Result of classifying a single table. `from`/`to` keep declaration order
/// and may contain duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EdgeClassification {
    pub is_edge: bool,
    pub from: Vec<String>,
    pub to: Vec<String>,
}

/// A table paired with its classification, as consumed by the graph builder.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedTable<'a> {
    pub is_edge: bool,
    pub table: &'a TableDefinition,
    pub from: Vec<String>,
    pub to: Vec<String>,
}

impl NormalizedTable<'_> {
    pub fn name(&self) -> &str {
        self.table.name()
    }
}

pub fn classify_table(table: &TableDefinition) -> EdgeClassification {
    let field_records = |name: &str| {
        table
            .field(name)
            .map(|field| extract_kind_records(&field.kind))
            .unwrap_or_default()
    };

    match &table.schema.kind {
        TableKind::Relation { from, to } => EdgeClassification {
            is_edge: true,
            from: if from.is_empty() {
                field_records("in")
            } else {
                from.clone()
            },
            to: if to.is_empty() {
                field_records("out")
            } else {
                to.clone()
            },
        },
        TableKind::Any | TableKind::Normal => {
            if table.field("in").is_some() && table.field("out").is_some() {
                EdgeClassification {
                    is_edge: true,
                    from: field_records("in"),
                    to: field_records("out"),
                }
            } else {
                EdgeClassification::default()
            }
        }
    }
}

/// Record targets named by a field kind.
///
/// `record<a | b>` and `record(a, b)` yield `[a, b]`; `option<...>` wrappers
/// are looked through; a bare `record` or any other kind yields nothing.
pub fn extract_kind_records(kind: &str) -> Vec<String> {
    let mut kind = kind.trim();
    while let Some(inner) = strip_wrapper(kind, "option") {
        kind = inner;
    }

    let Some(rest) = kind.strip_prefix("record") else {
        return Vec::new();
    };
    let rest = rest.trim();
    let inner = if let Some(inner) = rest.strip_prefix('<').and_then(|r| r.strip_suffix('>')) {
        inner
    } else if let Some(inner) = rest.strip_prefix('(').and_then(|r| r.strip_suffix(')')) {
        inner
    } else {
        return Vec::new();
    };

    inner
        .split(['|', ','])
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

fn strip_wrapper<'a>(kind: &'a str, wrapper: &str) -> Option<&'a str> {
    kind.strip_prefix(wrapper)?
        .trim_start()
        .strip_prefix('<')?
        .strip_suffix('>')
        .map(str::trim)
}

pub fn normalize_tables(tables: &[TableDefinition]) -> Vec<NormalizedTable<'_>> {
    tables
        .iter()
        .map(|table| {
            let EdgeClassification { is_edge, from, to } = classify_table(table);
            if !is_edge {
                return NormalizedTable {
                    is_edge,
                    table,
                    from: Vec::new(),
                    to: Vec::new(),
                };
            }
            NormalizedTable {
                is_edge,
                table,
                from: dedup_names(from),
                to: dedup_names(to),
            }
        })
        .collect()
}

fn dedup_names(names: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect()
}
