use serde::{Deserialize, Serialize};

/// A column shown inside a table box.
///
/// `name` is the identifier as written in the query. `alias` is only set when
/// the query renames the column, either with `AS` or with a trailing bare word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl ColumnInfo {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            alias: None,
        }
    }

    pub fn with_alias(name: &str, alias: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            alias: alias.map(str::to_string),
        }
    }

    /// Label used by the rendering layer: `alias (name)` when the column was
    /// renamed, otherwise just the name.
    pub fn display_name(&self) -> String {
        match self.alias.as_deref() {
            Some(alias) if !alias.trim().is_empty() && alias != self.name => {
                format!("{} ({})", alias, self.name)
            }
            _ => self.name.clone(),
        }
    }
}
