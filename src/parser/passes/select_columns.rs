use tracing::{debug, trace};

use crate::{
    model::ColumnInfo,
    parser::{resolve_identifier, DiagramPatterns, ParseContext},
};

pub struct SelectColumns;

impl SelectColumns {
    /// Attaches every `qualifier.column` of the projection to the table the
    /// qualifier names.
    ///
    /// Unknown qualifiers are dropped. A column is added once per table, the
    /// first alias seen is kept, and every hit marks the column as selected.
    /// References inside function calls such as `COUNT(o.Id)` match too.
    pub fn extract(ctx: &mut ParseContext, patterns: &DiagramPatterns, sql: &str) -> usize {
        let Some(projection) = patterns.select_columns.captures(sql) else {
            debug!("no SELECT list found");
            return 0;
        };
        let Some(columns) = projection.name("columns") else {
            return 0;
        };

        let mut attached = 0;
        for caps in patterns.qualified_column.captures_iter(columns.as_str()) {
            let qualifier = resolve_identifier(&caps, "qualifier_bracketed", "qualifier");
            let column = resolve_identifier(&caps, "column_bracketed", "column");
            let (Some(qualifier), Some(column)) = (qualifier, column) else {
                continue;
            };
            let alias = resolve_identifier(&caps, "alias_bracketed", "alias");

            let Some(table) = ctx.table_mut(qualifier) else {
                trace!(qualifier, column, "qualifier matches no table");
                continue;
            };

            table.add_column(ColumnInfo::with_alias(column, alias));
            table.select_column(column);
            trace!(qualifier, column, alias, "select column");
            attached += 1;
        }

        debug!(columns = attached, "SELECT columns");
        attached
    }
}
