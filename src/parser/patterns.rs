use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use crate::parser::DiagramError;

// Optional `server.`, `db.` or `db.schema.` chain in front of a table name,
// every segment bare or bracketed. Only the segment after it is kept.
const PREFIX_CHAIN: &str = r"(?:(?:\[?\w+\]?\.(?:\[?\w+\]?\.)?)*)?";

// `AS alias` where the alias may be bracketed to allow dots and spaces.
const AS_ALIAS: &str = r"(?:\s+AS\s+(?:\[(?P<alias_bracketed>[^\]]+)\]|(?P<alias>\w+)))?";

static PATTERNS: Lazy<Result<DiagramPatterns, regex::Error>> = Lazy::new(DiagramPatterns::compile);

/// Compiled patterns shared by every parse.
///
/// Capture groups come in pairs (`x_bracketed` / `x`) so the bracketed form
/// can win over the bare form, see [`resolve_identifier`](crate::parser::resolve_identifier).
#[derive(Debug)]
pub struct DiagramPatterns {
    /// `FROM <prefix.>table [AS alias]`
    /// groups: `table`, `alias_bracketed`, `alias`
    pub from_table: Regex,
    /// `[kind] [OUTER] JOIN <prefix.>table [AS alias] ON l.col = r.col`
    /// groups: `kind`, `table`, `alias_bracketed`, `alias`,
    /// `left_bracketed`, `left`, `left_column`, `right_bracketed`, `right`, `right_column`
    pub join: Regex,
    /// Projection text between `SELECT` and the first `FROM`, group `columns`.
    pub select_columns: Regex,
    /// `qualifier.column [[AS] alias]`
    /// groups: `qualifier_bracketed`, `qualifier`, `column_bracketed`, `column`,
    /// `alias_bracketed`, `alias`
    pub qualified_column: Regex,
}

impl DiagramPatterns {
    pub fn compile() -> Result<Self, regex::Error> {
        let from_table = Regex::new(&format!(
            r"(?i)\bFROM\s+{PREFIX_CHAIN}\[?(?P<table>\w+)\]?{AS_ALIAS}"
        ))?;

        let join = Regex::new(&format!(
            concat!(
                r"(?i)\b(?P<kind>LEFT|RIGHT|INNER|FULL|CROSS)?(?:\s+OUTER)?\s*JOIN\s+",
                r"{prefix}\[?(?P<table>\w+)\]?{alias}",
                r"\s+ON\s+(?:\[(?P<left_bracketed>[^\]]+)\]|(?P<left>\w+))\s*\.\s*\[?(?P<left_column>\w+)\]?",
                r"\s*=\s*(?:\[(?P<right_bracketed>[^\]]+)\]|(?P<right>\w+))\s*\.\s*\[?(?P<right_column>\w+)\]?",
            ),
            prefix = PREFIX_CHAIN,
            alias = AS_ALIAS,
        ))?;

        let select_columns = Regex::new(r"(?is)SELECT\s+(?P<columns>.*?)\s+FROM")?;

        let qualified_column = Regex::new(concat!(
            r"(?i)(?:\[(?P<qualifier_bracketed>[^\]]+)\]|(?P<qualifier>\w+))",
            r"\s*\.\s*(?:\[(?P<column_bracketed>[^\]]+)\]|(?P<column>\w+))",
            r"(?:\s+(?:AS\s+)?(?:\[(?P<alias_bracketed>[^\]]+)\]|(?P<alias>\w+)))?",
        ))?;

        Ok(Self { from_table, join, select_columns, qualified_column })
    }

    /// Process-wide patterns, compiled on first use.
    pub fn get() -> Result<&'static DiagramPatterns, DiagramError> {
        Lazy::force(&PATTERNS).as_ref().map_err(|err| {
            warn!(error = %err, "diagram patterns failed to compile");
            DiagramError::Pattern(err.clone())
        })
    }
}
