use crate::ir::{
    EventDefinition, FieldDefinition, IndexDefinition, IndexKind, Permissions, TableDefinition,
    TableKind, TableSchema, TableView,
};
use anyhow::{Result, anyhow, bail};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use tracing::trace;

static DEFINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?is)^DEFINE\s+(?P<what>TABLE|FIELD|INDEX|EVENT)\s+(?:(?:IF\s+NOT\s+EXISTS|OVERWRITE)\s+)?(?P<name>\S+)\s*(?P<rest>.*)$",
    )
    .unwrap()
});
static ON_TABLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)^ON\s+(?:TABLE\s+)?(?P<table>\S+)\s*(?P<rest>.*)$").unwrap());
static VIEW_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?is)^\(?\s*SELECT\s+(?P<expr>.+?)\s+FROM\s+(?P<what>.+?)(?:\s+WHERE\s+(?P<cond>.+?))?(?:\s+GROUP\s+(?:BY\s+)?(?P<group>.+?))?\s*\)?$",
    )
    .unwrap()
});

const TABLE_CLAUSES: &[&str] = &["DROP", "SCHEMAFULL", "SCHEMALESS", "CHANGEFEED", "COMMENT"];
const FIELD_CLAUSES: &[&str] = &[
    "FLEXIBLE",
    "TYPE",
    "VALUE",
    "ASSERT",
    "DEFAULT",
    "READONLY",
    "COMMENT",
];
const INDEX_CLAUSES: &[&str] = &[
    "FIELDS", "COLUMNS", "UNIQUE", "SEARCH", "MTREE", "HNSW", "COMMENT",
];
const EVENT_CLAUSES: &[&str] = &["WHEN", "THEN", "COMMENT"];

enum Definition {
    Table(TableSchema),
    Field(String, FieldDefinition),
    Index(String, IndexDefinition),
    Event(String, EventDefinition),
}

/// Reads `DEFINE TABLE | FIELD | INDEX | EVENT` statements into table
/// definitions, in `DEFINE TABLE` order. Other statements are skipped.
pub fn parse_schema(input: &str) -> Result<Vec<TableDefinition>> {
    let mut tables: Vec<TableDefinition> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut attached: Vec<Definition> = Vec::new();

    for statement in split_statements(input) {
        match parse_statement(&statement)? {
            Some(Definition::Table(schema)) => match index.get(&schema.name) {
                Some(&idx) => tables[idx].schema = schema,
                None => {
                    index.insert(schema.name.clone(), tables.len());
                    tables.push(TableDefinition {
                        schema,
                        ..Default::default()
                    });
                }
            },
            Some(other) => attached.push(other),
            None => trace!(statement = %statement, "skipping statement"),
        }
    }

    for definition in attached {
        let (table_name, kind, item) = match &definition {
            Definition::Field(table, field) => (table, "field", &field.name),
            Definition::Index(table, idx) => (table, "index", &idx.name),
            Definition::Event(table, event) => (table, "event", &event.name),
            Definition::Table(_) => continue,
        };
        let Some(&idx) = index.get(table_name) else {
            bail!("{kind} `{item}` is defined on unknown table `{table_name}`");
        };
        let table = &mut tables[idx];
        match definition {
            Definition::Field(_, field) => {
                match table.fields.iter_mut().find(|f| f.name == field.name) {
                    Some(existing) => *existing = field,
                    None => table.fields.push(field),
                }
            }
            Definition::Index(_, idx) => table.indexes.push(idx),
            Definition::Event(_, event) => table.events.push(event),
            Definition::Table(_) => {}
        }
    }

    Ok(tables)
}

fn parse_statement(statement: &str) -> Result<Option<Definition>> {
    let Some(caps) = DEFINE_RE.captures(statement) else {
        return Ok(None);
    };
    let what = caps["what"].to_ascii_uppercase();
    let name = unquote_ident(&caps["name"]);
    let rest = caps.name("rest").map_or("", |m| m.as_str());

    if what == "TABLE" {
        return Ok(Some(Definition::Table(parse_table(name, rest))));
    }

    let on = ON_TABLE_RE.captures(rest).ok_or_else(|| {
        anyhow!(
            "DEFINE {what} `{name}` is missing ON <table>: {}",
            statement.trim()
        )
    })?;
    let table = unquote_ident(&on["table"]);
    let rest = on.name("rest").map_or("", |m| m.as_str());
    let definition = match what.as_str() {
        "FIELD" => Definition::Field(table, parse_field(name, rest)),
        "INDEX" => Definition::Index(table, parse_index(name, rest)),
        _ => Definition::Event(table, parse_event(name, rest)),
    };
    Ok(Some(definition))
}

fn parse_table(name: String, rest: &str) -> TableSchema {
    let mut tokens = tokenize(rest);
    let mut schema = TableSchema {
        name,
        permissions: Permissions::none(),
        ..Default::default()
    };

    if let Some(args) = split_permissions(&mut tokens) {
        schema.permissions = parse_permissions(&args, Permissions::none());
    }

    // The view query may itself contain `AS`; it runs until the next trailing clause.
    if let Some(start) = tokens.iter().position(|t| t.eq_ignore_ascii_case("AS")) {
        let end = tokens[start..]
            .iter()
            .position(|t| t.eq_ignore_ascii_case("CHANGEFEED") || t.eq_ignore_ascii_case("COMMENT"))
            .map_or(tokens.len(), |offset| start + offset);
        let query: Vec<String> = tokens.drain(start..end).skip(1).collect();
        schema.view = parse_view(&query.join(" "));
    }

    if let Some(start) = tokens.iter().position(|t| t.eq_ignore_ascii_case("TYPE")) {
        let (kind, used) = parse_table_kind(&tokens[start + 1..]);
        schema.kind = kind;
        tokens.drain(start..start + 1 + used);
    }

    for (keyword, args) in clauses(&tokens, TABLE_CLAUSES) {
        match keyword.as_str() {
            "DROP" => schema.drop = true,
            "SCHEMAFULL" => schema.schemafull = true,
            "SCHEMALESS" => schema.schemafull = false,
            "CHANGEFEED" => {
                schema.changefeed = true;
                schema.changetime = args.join(" ");
            }
            "COMMENT" => schema.comment = unquote_string(&args.join(" ")),
            _ => {}
        }
    }
    schema
}

/// Reads `ANY | NORMAL | RELATION [IN|FROM a | b] [OUT|TO c | d] [ENFORCED]`
/// and returns the kind with the number of tokens it spans. A name is always
/// taken after `IN`, `FROM`, `OUT`, `TO` or `|`, so relation ends may share a
/// name with a clause keyword.
fn parse_table_kind(tokens: &[String]) -> (TableKind, usize) {
    let Some(first) = tokens.first() else {
        return (TableKind::Any, 0);
    };
    if first.eq_ignore_ascii_case("NORMAL") {
        return (TableKind::Normal, 1);
    }
    if first.eq_ignore_ascii_case("ANY") {
        return (TableKind::Any, 1);
    }
    if !first.eq_ignore_ascii_case("RELATION") {
        return (TableKind::Any, 0);
    }

    let mut from = Vec::new();
    let mut to = Vec::new();
    let mut into_from = true;
    let mut expect_name = false;
    let mut used = 1;
    for token in &tokens[1..] {
        let upper = token.to_ascii_uppercase();
        match upper.as_str() {
            "IN" | "FROM" if !expect_name => {
                into_from = true;
                expect_name = true;
            }
            "OUT" | "TO" if !expect_name => {
                into_from = false;
                expect_name = true;
            }
            "ENFORCED" if !expect_name => {}
            _ if expect_name || token.starts_with('|') => {
                let list = if into_from { &mut from } else { &mut to };
                list.extend(
                    token
                        .split('|')
                        .map(str::trim)
                        .filter(|name| !name.is_empty())
                        .map(unquote_ident),
                );
                expect_name = token.ends_with('|');
            }
            _ => break,
        }
        used += 1;
    }
    (TableKind::Relation { from, to }, used)
}

fn parse_view(text: &str) -> Option<TableView> {
    let caps = VIEW_RE.captures(text.trim())?;
    let group = |name: &str| {
        caps.name(name)
            .map_or(String::new(), |m| m.as_str().trim().to_string())
    };
    Some(TableView {
        expr: group("expr"),
        what: group("what"),
        cond: group("cond"),
        group: group("group"),
    })
}

fn parse_field(name: String, rest: &str) -> FieldDefinition {
    let mut tokens = tokenize(rest);
    let mut field = FieldDefinition {
        name,
        ..Default::default()
    };
    if let Some(args) = split_permissions(&mut tokens) {
        field.permissions = parse_permissions(&args, Permissions::full());
    }
    for (keyword, args) in clauses(&tokens, FIELD_CLAUSES) {
        let text = args.join(" ");
        match keyword.as_str() {
            "FLEXIBLE" => field.flexible = true,
            "TYPE" => field.kind = text,
            "VALUE" => field.value = text,
            "ASSERT" => field.assert = text,
            "DEFAULT" => field.default = text,
            "COMMENT" => field.comment = unquote_string(&text),
            _ => {}
        }
    }
    field
}

fn parse_index(name: String, rest: &str) -> IndexDefinition {
    let tokens = tokenize(rest);
    let mut index = IndexDefinition {
        name,
        ..Default::default()
    };
    for (keyword, args) in clauses(&tokens, INDEX_CLAUSES) {
        let text = args.join(" ");
        match keyword.as_str() {
            "FIELDS" | "COLUMNS" => {
                index.fields = text
                    .split(',')
                    .map(str::trim)
                    .filter(|f| !f.is_empty())
                    .collect::<Vec<_>>()
                    .join(", ");
            }
            "UNIQUE" => index.kind = IndexKind::Unique,
            "SEARCH" => {
                index.kind = IndexKind::Search;
                index.search = format!("SEARCH {text}").trim().to_string();
            }
            "MTREE" | "HNSW" => {
                index.kind = IndexKind::Vector;
                index.vector = format!("{keyword} {text}").trim().to_string();
            }
            "COMMENT" => index.comment = unquote_string(&text),
            _ => {}
        }
    }
    index
}

fn parse_event(name: String, rest: &str) -> EventDefinition {
    let tokens = tokenize(rest);
    let mut event = EventDefinition {
        name,
        ..Default::default()
    };
    for (keyword, args) in clauses(&tokens, EVENT_CLAUSES) {
        let text = args.join(" ");
        match keyword.as_str() {
            "WHEN" => event.cond = text,
            "THEN" => event.then = strip_block(&text),
            "COMMENT" => event.comment = unquote_string(&text),
            _ => {}
        }
    }
    event
}

/// Detaches everything after `PERMISSIONS`. It is always the last clause and
/// its rules may contain any word.
fn split_permissions(tokens: &mut Vec<String>) -> Option<Vec<String>> {
    let start = tokens
        .iter()
        .position(|t| t.eq_ignore_ascii_case("PERMISSIONS"))?;
    Some(tokens.split_off(start).into_iter().skip(1).collect())
}

/// `NONE`, `FULL`, or `FOR select, create <rule> FOR update <rule> ...`.
fn parse_permissions(args: &[String], mut permissions: Permissions) -> Permissions {
    match args.first() {
        Some(first) if first.eq_ignore_ascii_case("NONE") => return Permissions::none(),
        Some(first) if first.eq_ignore_ascii_case("FULL") => return Permissions::full(),
        _ => {}
    }

    let mut idx = 0;
    while idx < args.len() {
        if !args[idx].eq_ignore_ascii_case("FOR") {
            idx += 1;
            continue;
        }
        idx += 1;
        let mut actions: Vec<String> = Vec::new();
        while idx < args.len() {
            let names: Vec<String> = args[idx]
                .split(',')
                .map(|a| a.trim().to_ascii_lowercase())
                .filter(|a| !a.is_empty())
                .collect();
            let all_actions = !names.is_empty()
                && names
                    .iter()
                    .all(|a| matches!(a.as_str(), "select" | "create" | "update" | "delete"));
            if !all_actions && args[idx].trim() != "," {
                break;
            }
            actions.extend(names);
            idx += 1;
        }
        let start = idx;
        while idx < args.len() && !args[idx].eq_ignore_ascii_case("FOR") {
            idx += 1;
        }
        let rule = args[start..idx].join(" ");
        for action in actions {
            let slot = match action.as_str() {
                "select" => &mut permissions.select,
                "create" => &mut permissions.create,
                "update" => &mut permissions.update,
                _ => &mut permissions.delete,
            };
            *slot = rule.clone();
        }
    }
    permissions
}

/// Groups tokens under the clause keyword that precedes them. Tokens before
/// the first keyword are dropped.
fn clauses<'a>(tokens: &'a [String], keywords: &[&str]) -> Vec<(String, Vec<&'a str>)> {
    let mut groups: Vec<(String, Vec<&'a str>)> = Vec::new();
    for token in tokens {
        let keyword = keywords
            .iter()
            .find(|keyword| token.eq_ignore_ascii_case(keyword));
        match (keyword, groups.last_mut()) {
            (Some(keyword), _) => groups.push((keyword.to_string(), Vec::new())),
            (None, Some((_, args))) => args.push(token.as_str()),
            (None, None) => {}
        }
    }
    groups
}

/// Splits on whitespace outside quotes and brackets. `<`/`>` count as
/// brackets only right after an identifier, as in `record<user>`.
fn tokenize(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut depth = 0usize;
    let mut angle = 0usize;
    let mut prev: Option<char> = None;
    let mut chars = input.chars();

    while let Some(ch) = chars.next() {
        if let Some(q) = quote {
            current.push(ch);
            if ch == '\\' {
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
            } else if ch == q {
                quote = None;
            }
            prev = Some(ch);
            continue;
        }
        match ch {
            '"' | '\'' | '`' => quote = Some(ch),
            '(' | '{' | '[' => depth += 1,
            ')' | '}' | ']' => depth = depth.saturating_sub(1),
            '<' if prev.is_some_and(|p| p.is_alphanumeric() || p == '_') => angle += 1,
            '>' if angle > 0 => angle -= 1,
            _ => {}
        }
        if ch.is_whitespace() && depth == 0 && angle == 0 && quote.is_none() {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
        } else {
            current.push(ch);
        }
        prev = Some(ch);
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

/// Splits a script on `;` outside quotes and brackets, dropping `--`, `//`,
/// `#` and `/* */` comments.
fn split_statements(input: &str) -> Vec<String> {
    let mut statements = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut depth = 0usize;
    let mut chars = input.chars().peekable();

    let mut flush = |current: &mut String| {
        let statement = current.trim();
        if !statement.is_empty() {
            statements.push(statement.to_string());
        }
        current.clear();
    };

    while let Some(ch) = chars.next() {
        if let Some(q) = quote {
            current.push(ch);
            if ch == '\\' {
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
            } else if ch == q {
                quote = None;
            }
            continue;
        }
        match ch {
            '"' | '\'' | '`' => {
                quote = Some(ch);
                current.push(ch);
            }
            '-' if chars.peek() == Some(&'-') => skip_line(&mut chars),
            '/' if chars.peek() == Some(&'/') => skip_line(&mut chars),
            '#' => skip_line(&mut chars),
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut last = ' ';
                for c in chars.by_ref() {
                    if last == '*' && c == '/' {
                        break;
                    }
                    last = c;
                }
                current.push(' ');
            }
            '(' | '{' | '[' => {
                depth += 1;
                current.push(ch);
            }
            ')' | '}' | ']' => {
                depth = depth.saturating_sub(1);
                current.push(ch);
            }
            ';' if depth == 0 => flush(&mut current),
            _ => current.push(ch),
        }
    }
    flush(&mut current);
    statements
}

fn skip_line(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) {
    for c in chars.by_ref() {
        if c == '\n' {
            break;
        }
    }
}

fn unquote_ident(raw: &str) -> String {
    let raw = raw.trim();
    raw.strip_prefix('`')
        .and_then(|r| r.strip_suffix('`'))
        .or_else(|| raw.strip_prefix('⟨').and_then(|r| r.strip_suffix('⟩')))
        .unwrap_or(raw)
        .to_string()
}

fn unquote_string(raw: &str) -> String {
    let raw = raw.trim();
    for quote in ['"', '\''] {
        if raw.len() >= 2 && raw.starts_with(quote) && raw.ends_with(quote) {
            return raw[1..raw.len() - 1]
                .replace(&format!("\\{quote}"), &quote.to_string());
        }
    }
    raw.to_string()
}

fn strip_block(raw: &str) -> String {
    let raw = raw.trim();
    for (open, close) in [('{', '}'), ('(', ')')] {
        if let Some(inner) = raw.strip_prefix(open).and_then(|r| r.strip_suffix(close)) {
            return inner.trim().to_string();
        }
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: &str = r#"
-- accounts
DEFINE TABLE user SCHEMAFULL COMMENT "people; with accounts"
    PERMISSIONS FOR select FULL FOR create, update WHERE id = $auth.id;
DEFINE FIELD name ON TABLE user TYPE string ASSERT $value != NONE;
DEFINE FIELD tags ON user FLEXIBLE TYPE option<array<string>> DEFAULT [];
DEFINE INDEX user_name ON TABLE user FIELDS name UNIQUE;
DEFINE TABLE post SCHEMALESS CHANGEFEED 3d;
DEFINE INDEX post_body ON post FIELDS body SEARCH ANALYZER simple BM25;
DEFINE TABLE wrote TYPE RELATION IN user OUT post | comment;
DEFINE FIELD in ON wrote TYPE record<user>;
DEFINE FIELD out ON wrote TYPE record<post | comment>;
DEFINE EVENT audit ON TABLE wrote WHEN $event = "CREATE" THEN { CREATE log SET at = time::now() };
DEFINE ANALYZER simple TOKENIZERS blank;
"#;

    #[test]
    fn parses_tables_in_order() {
        let tables = parse_schema(SCHEMA).unwrap();
        let names: Vec<&str> = tables.iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["user", "post", "wrote"]);
    }

    #[test]
    fn parses_table_clauses() {
        let tables = parse_schema(SCHEMA).unwrap();
        let user = &tables[0].schema;
        assert!(user.schemafull);
        assert_eq!(user.comment, "people; with accounts");
        assert_eq!(user.permissions.select, "FULL");
        assert_eq!(user.permissions.create, "WHERE id = $auth.id");
        assert_eq!(user.permissions.update, "WHERE id = $auth.id");
        assert_eq!(user.permissions.delete, "NONE");

        let post = &tables[1].schema;
        assert!(!post.schemafull);
        assert!(post.changefeed);
        assert_eq!(post.changetime, "3d");
    }

    #[test]
    fn parses_relation_kind() {
        let tables = parse_schema(SCHEMA).unwrap();
        assert_eq!(
            tables[2].schema.kind,
            TableKind::Relation {
                from: vec!["user".to_string()],
                to: vec!["post".to_string(), "comment".to_string()],
            }
        );
        assert_eq!(tables[2].field("out").unwrap().kind, "record<post | comment>");
    }

    #[test]
    fn parses_fields_indexes_and_events() {
        let tables = parse_schema(SCHEMA).unwrap();
        let user = &tables[0];
        assert_eq!(user.fields.len(), 2);
        assert_eq!(user.fields[0].kind, "string");
        assert_eq!(user.fields[0].assert, "$value != NONE");
        assert_eq!(user.fields[0].permissions, Permissions::full());
        assert!(user.fields[1].flexible);
        assert_eq!(user.fields[1].kind, "option<array<string>>");
        assert_eq!(user.fields[1].default, "[]");
        assert_eq!(user.indexes[0].kind, IndexKind::Unique);
        assert_eq!(user.indexes[0].fields, "name");

        let post = &tables[1];
        assert_eq!(post.indexes[0].kind, IndexKind::Search);
        assert_eq!(post.indexes[0].search, "SEARCH ANALYZER simple BM25");

        let event = &tables[2].events[0];
        assert_eq!(event.cond, "$event = \"CREATE\"");
        assert_eq!(event.then, "CREATE log SET at = time::now()");
    }

    #[test]
    fn relation_ends_may_share_names_with_keywords() {
        let tables = parse_schema(
            "DEFINE TABLE replied TYPE RELATION FROM comment TO post | comment;
             DEFINE TABLE marks TYPE RELATION IN type OUT drop|permissions ENFORCED SCHEMAFULL;",
        )
        .unwrap();
        assert_eq!(
            tables[0].schema.kind,
            TableKind::Relation {
                from: vec!["comment".to_string()],
                to: vec!["post".to_string(), "comment".to_string()],
            }
        );
        assert_eq!(
            tables[1].schema.kind,
            TableKind::Relation {
                from: vec!["type".to_string()],
                to: vec!["drop".to_string(), "permissions".to_string()],
            }
        );
        assert!(tables[1].schema.schemafull);
        assert!(!tables[1].schema.drop);
    }

    #[test]
    fn permission_rules_keep_keyword_words() {
        let tables = parse_schema(
            "DEFINE TABLE doc SCHEMAFULL PERMISSIONS FOR select WHERE type = 'public' FOR create FULL;
             DEFINE FIELD secret ON doc TYPE string PERMISSIONS FOR select WHERE type = 'admin' AND comment = NONE;",
        )
        .unwrap();
        let doc = &tables[0];
        assert_eq!(doc.schema.kind, TableKind::Any);
        assert_eq!(doc.schema.permissions.select, "WHERE type = 'public'");
        assert_eq!(doc.schema.permissions.create, "FULL");
        assert_eq!(doc.schema.permissions.update, "NONE");

        let secret = &doc.fields[0];
        assert_eq!(secret.kind, "string");
        assert_eq!(secret.comment, "");
        assert_eq!(
            secret.permissions.select,
            "WHERE type = 'admin' AND comment = NONE"
        );
        assert_eq!(secret.permissions.update, "FULL");
    }

    #[test]
    fn parses_view_tables() {
        let tables = parse_schema(
            "DEFINE TABLE stats AS SELECT count() AS total FROM post WHERE published = true GROUP BY author;",
        )
        .unwrap();
        let view = tables[0].schema.view.as_ref().unwrap();
        assert_eq!(view.expr, "count() AS total");
        assert_eq!(view.what, "post");
        assert_eq!(view.cond, "published = true");
        assert_eq!(view.group, "author");
    }

    #[test]
    fn overwrite_and_escaped_names() {
        let tables = parse_schema(
            "DEFINE TABLE `order` SCHEMALESS; DEFINE TABLE OVERWRITE `order` SCHEMAFULL;
             DEFINE FIELD total ON `order` TYPE number;",
        )
        .unwrap();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].name(), "order");
        assert!(tables[0].schema.schemafull);
        assert_eq!(tables[0].fields.len(), 1);
    }

    #[test]
    fn field_on_unknown_table_is_an_error() {
        let err = parse_schema("DEFINE FIELD name ON ghost TYPE string;").unwrap_err();
        assert!(err.to_string().contains("ghost"));
    }

    #[test]
    fn missing_on_clause_is_an_error() {
        assert!(parse_schema("DEFINE FIELD name TYPE string;").is_err());
    }

    #[test]
    fn comments_and_quoted_semicolons_do_not_split() {
        let statements = split_statements(
            "/* header; */ DEFINE TABLE a COMMENT 'x;y'; # tail;\nDEFINE TABLE b",
        );
        assert_eq!(statements.len(), 2);
        assert!(statements[0].ends_with("'x;y'"));
        assert_eq!(statements[1], "DEFINE TABLE b");
    }

    #[test]
    fn tokenizer_keeps_kinds_together() {
        let tokens = tokenize("TYPE record<a | b> ASSERT $value < 5");
        assert_eq!(tokens, vec!["TYPE", "record<a | b>", "ASSERT", "$value", "<", "5"]);
    }
}
