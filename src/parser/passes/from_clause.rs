use tracing::debug;

use crate::parser::{capture, resolve_identifier_or, DiagramPatterns, ParseContext};

pub struct FromClause;

impl FromClause {
    /// Registers the table named by the first `FROM` of the query.
    ///
    /// Only the first target is taken, comma separated lists are not
    /// expanded. Returns whether a table was registered.
    pub fn extract(ctx: &mut ParseContext, patterns: &DiagramPatterns, sql: &str) -> bool {
        let Some(caps) = patterns.from_table.captures(sql) else {
            debug!("no FROM clause found");
            return false;
        };
        let Some(name) = capture(&caps, "table") else {
            return false;
        };
        let alias = resolve_identifier_or(&caps, "alias_bracketed", "alias", name);

        debug!(name, alias, "FROM table");
        ctx.register_table(name, alias)
    }
}
