use regex::Captures;
use tracing::{debug, trace};

use crate::{
    model::{JoinRelationship, JoinType},
    parser::{capture, resolve_identifier, resolve_identifier_or, DiagramError, DiagramPatterns, ParseContext},
};

pub struct JoinClause;

impl JoinClause {
    /// Walks every `JOIN ... ON a.x = b.y` of the query.
    ///
    /// A table is registered when its alias is new. The edge is recorded in
    /// every case, so a repeated alias still contributes its join. Returns the
    /// number of joins recorded.
    pub fn extract(ctx: &mut ParseContext, patterns: &DiagramPatterns, sql: &str) -> Result<usize, DiagramError> {
        let mut recorded = 0;
        for caps in patterns.join.captures_iter(sql) {
            let Some(join) = Self::parse_join(ctx, &caps)? else {
                trace!(text = caps.get(0).map(|m| m.as_str()), "incomplete join skipped");
                continue;
            };
            ctx.add_join(join);
            recorded += 1;
        }

        debug!(joins = recorded, tables = ctx.table_count(), "JOIN clauses");
        Ok(recorded)
    }

    fn parse_join(ctx: &mut ParseContext, caps: &Captures) -> Result<Option<JoinRelationship>, DiagramError> {
        let join_type = match capture(caps, "kind") {
            Some(kind) => JoinType::parse(kind)?,
            None => JoinType::Inner,
        };

        let Some(name) = capture(caps, "table") else {
            return Ok(None);
        };
        let alias = resolve_identifier_or(caps, "alias_bracketed", "alias", name);

        let sides = (
            resolve_identifier(caps, "left_bracketed", "left"),
            capture(caps, "left_column"),
            resolve_identifier(caps, "right_bracketed", "right"),
            capture(caps, "right_column"),
        );
        let (Some(from_table), Some(from_column), Some(to_table), Some(to_column)) = sides else {
            return Ok(None);
        };

        if !ctx.is_known_alias(alias) {
            ctx.register_table(name, alias);
        }

        Ok(Some(JoinRelationship {
            from_table: from_table.to_string(),
            to_table: to_table.to_string(),
            from_column: from_column.to_string(),
            to_column: to_column.to_string(),
            join_type,
        }))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        config::DiagramConfig,
        model::{DiagramData, JoinType},
        parser::{passes::{FromClause, JoinClause}, DiagramPatterns, ParseContext},
    };

    fn extract(sql: &str) -> DiagramData {
        let config = DiagramConfig::default();
        let patterns = DiagramPatterns::get().unwrap();
        let mut ctx = ParseContext::new(&config);
        FromClause::extract(&mut ctx, patterns, sql);
        JoinClause::extract(&mut ctx, patterns, sql).expect("Failed to extract joins");
        ctx.into_data()
    }

    #[test]
    pub fn test_all_join_kinds() {
        let data = extract(r#"SELECT * FROM A AS a
            INNER JOIN B AS b ON a.id = b.a_id
            LEFT JOIN C AS c ON a.id = c.a_id
            right outer join D AS d ON a.id = d.a_id
            FULL OUTER JOIN E AS e ON a.id = e.a_id
            CROSS JOIN F AS f ON a.id = f.a_id
            JOIN G AS g ON a.id = g.a_id"#);

        let kinds: Vec<_> = data.joins.iter().map(|j| j.join_type).collect();
        assert_eq!(kinds, vec![
            JoinType::Inner,
            JoinType::Left,
            JoinType::Right,
            JoinType::Full,
            JoinType::Cross,
            JoinType::Inner,
        ]);
    }

    #[test]
    pub fn test_edge_keeps_operand_order() {
        let data = extract("SELECT * FROM Orders AS o JOIN Customers AS c ON c.Id = o.CustomerId");

        let join = &data.joins[0];
        assert_eq!(join.from_table, "c");
        assert_eq!(join.from_column, "Id");
        assert_eq!(join.to_table, "o");
        assert_eq!(join.to_column, "CustomerId");
    }

    #[test]
    pub fn test_repeated_alias_records_edge_only() {
        let data = extract(r#"SELECT * FROM Orders AS o
            INNER JOIN Customers AS c ON o.CustomerId = c.Id
            LEFT JOIN Customers AS C ON o.BillingId = c.Id"#);

        assert_eq!(data.tables.len(), 2);
        assert_eq!(data.joins.len(), 2);
        assert_eq!(data.joins[1].from_column, "BillingId");
    }

    #[test]
    pub fn test_bracketed_operands() {
        let data = extract(
            "SELECT * FROM [dbo].[Orders] AS [Sales Orders] JOIN [dbo].[Lines] AS l ON [Sales Orders].[Id] = l.[OrderId]",
        );

        assert_eq!(data.tables[0].alias, "Sales Orders");
        assert_eq!(data.tables[1].name, "Lines");
        assert_eq!(data.joins[0].from_table, "Sales Orders");
        assert_eq!(data.joins[0].from_column, "Id");
        assert_eq!(data.joins[0].to_column, "OrderId");
    }

    #[test]
    pub fn test_alias_without_as_is_not_a_join() {
        let data = extract(r#"SELECT * FROM Orders AS o
            INNER JOIN Customers c ON o.CustomerId = c.Id
            LEFT JOIN Products AS p ON o.ProductId = p.Id"#);

        assert_eq!(data.joins.len(), 1);
        assert_eq!(data.joins[0].join_type, JoinType::Left);
        assert_eq!(data.tables.len(), 2);
    }

    #[test]
    pub fn test_join_without_on_is_ignored() {
        let data = extract("SELECT * FROM Orders AS o CROSS JOIN Customers AS c");

        assert_eq!(data.tables.len(), 1);
        assert!(data.joins.is_empty());
    }

    #[test]
    pub fn test_join_without_from() {
        let data = extract("JOIN Customers AS c ON o.CustomerId = c.Id");

        assert_eq!(data.tables.len(), 1);
        assert_eq!(data.tables[0].alias, "c");
        assert_eq!((data.tables[0].x, data.tables[0].y), (50.0, 50.0));
    }
}
