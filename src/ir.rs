use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    #[serde(rename = "LR", alias = "lr")]
    LeftRight,
    #[serde(rename = "TB", alias = "tb", alias = "TD")]
    TopBottom,
}

impl Direction {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "LR" | "lr" => Some(Self::LeftRight),
            "TB" | "tb" | "TD" | "td" => Some(Self::TopBottom),
            _ => None,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::LeftRight)
    }
}

/// How much of a table each designer node shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// One row per field.
    #[default]
    Fields,
    /// Condensed card with counts.
    Summary,
    /// Name-only chip.
    Simple,
}

impl DisplayMode {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "fields" => Some(Self::Fields),
            "summary" => Some(Self::Summary),
            "simple" => Some(Self::Simple),
            _ => None,
        }
    }
}

/// Rule strings per action: `FULL`, `NONE` or a `WHERE` expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Permissions {
    pub select: String,
    pub create: String,
    pub update: String,
    pub delete: String,
}

impl Permissions {
    pub fn uniform(rule: &str) -> Self {
        Self {
            select: rule.to_string(),
            create: rule.to_string(),
            update: rule.to_string(),
            delete: rule.to_string(),
        }
    }

    pub fn none() -> Self {
        Self::uniform("NONE")
    }

    pub fn full() -> Self {
        Self::uniform("FULL")
    }
}

impl Default for Permissions {
    fn default() -> Self {
        Self::full()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "type")]
pub enum TableKind {
    #[default]
    Any,
    Normal,
    Relation {
        #[serde(default)]
        from: Vec<String>,
        #[serde(default)]
        to: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TableView {
    pub expr: String,
    pub what: String,
    pub cond: String,
    pub group: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableSchema {
    pub name: String,
    pub drop: bool,
    pub schemafull: bool,
    pub kind: TableKind,
    pub view: Option<TableView>,
    pub permissions: Permissions,
    pub comment: String,
    pub changefeed: bool,
    pub changetime: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldDefinition {
    pub name: String,
    pub flexible: bool,
    pub kind: String,
    pub value: String,
    pub assert: String,
    pub default: String,
    pub permissions: Permissions,
    pub comment: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IndexKind {
    #[default]
    Normal,
    Unique,
    Search,
    Vector,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexDefinition {
    pub name: String,
    pub fields: String,
    pub kind: IndexKind,
    pub search: String,
    pub vector: String,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EventDefinition {
    pub name: String,
    pub cond: String,
    pub then: String,
    pub comment: String,
}

/// A table as supplied by the schema source. The schema name is the
/// table's identity.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TableDefinition {
    pub schema: TableSchema,
    pub fields: Vec<FieldDefinition>,
    pub indexes: Vec<IndexDefinition>,
    pub events: Vec<EventDefinition>,
}

impl TableDefinition {
    pub fn new(name: &str) -> Self {
        Self {
            schema: TableSchema {
                name: name.to_string(),
                permissions: Permissions::none(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.schema.name
    }

    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Adds or replaces a field with the given kind.
    pub fn with_field(mut self, name: &str, kind: &str) -> Self {
        let field = FieldDefinition {
            name: name.to_string(),
            kind: kind.to_string(),
            ..Default::default()
        };
        match self.fields.iter_mut().find(|existing| existing.name == name) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
        self
    }

    pub fn with_kind(mut self, kind: TableKind) -> Self {
        self.schema.kind = kind;
        self
    }
}
