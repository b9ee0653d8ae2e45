use tracing::debug;

use crate::parser::ParseContext;

pub struct Backfill;

impl Backfill {
    /// Final pass: join keys first, then placeholders for tables still empty.
    /// After it every table has at least one column.
    pub fn apply(ctx: &mut ParseContext) {
        let keys = ctx.backfill_join_keys();
        let placeholders = ctx.fill_empty_tables();

        debug!(keys, placeholders, "backfill");
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        config::DiagramConfig,
        model::DiagramData,
        parser::{passes::{Backfill, FromClause, JoinClause, SelectColumns}, DiagramPatterns, ParseContext},
    };

    fn extract(config: &DiagramConfig, sql: &str) -> DiagramData {
        let patterns = DiagramPatterns::get().unwrap();
        let mut ctx = ParseContext::new(config);
        FromClause::extract(&mut ctx, patterns, sql);
        JoinClause::extract(&mut ctx, patterns, sql).expect("Failed to extract joins");
        SelectColumns::extract(&mut ctx, patterns, sql);
        Backfill::apply(&mut ctx);
        ctx.into_data()
    }

    #[test]
    pub fn test_join_keys_not_selected() {
        let data = extract(
            &DiagramConfig::default(),
            "SELECT o.OrderId FROM Orders AS o INNER JOIN Customers AS c ON o.CustomerId = c.Id",
        );

        let orders = data.table("o").unwrap();
        let names: Vec<_> = orders.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["OrderId", "CustomerId"]);
        assert!(orders.is_selected("OrderId"));
        assert!(!orders.is_selected("CustomerId"));

        let customers = data.table("c").unwrap();
        assert_eq!(customers.columns.len(), 1);
        assert_eq!(customers.columns[0].name, "Id");
        assert!(customers.selected_columns.is_empty());
    }

    #[test]
    pub fn test_key_already_selected_not_duplicated() {
        let data = extract(
            &DiagramConfig::default(),
            "SELECT o.customerid FROM Orders AS o JOIN Customers AS c ON o.CustomerId = c.Id",
        );

        let orders = data.table("o").unwrap();
        assert_eq!(orders.columns.len(), 1);
        assert_eq!(orders.columns[0].name, "customerid");
    }

    #[test]
    pub fn test_placeholder_uses_config_suffix() {
        let config = DiagramConfig::default().with_placeholder_suffix("_key");
        let data = extract(&config, "SELECT * FROM Customers");

        assert_eq!(data.tables[0].columns[0].name, "Customers_key");
        assert!(data.tables[0].selected_columns.is_empty());
    }
}
