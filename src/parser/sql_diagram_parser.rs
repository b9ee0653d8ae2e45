use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, warn};

use crate::{
    config::DiagramConfig,
    model::DiagramData,
    parser::{
        passes::{Backfill, FromClause, JoinClause, SelectColumns},
        DiagramError, DiagramPatterns, ParseContext,
    },
};

/// Extracts a [`DiagramData`] from a SQL `SELECT`.
///
/// The parser is pattern based and tolerant: it looks for the first `FROM`
/// table, every `JOIN ... ON a.x = b.y`, and the qualified columns of the
/// projection, in that order. Anything it does not recognise is skipped.
///
/// ```
/// use sqldiagram::SqlDiagramParser;
///
/// let parser = SqlDiagramParser::new();
/// let diagram = parser.parse_sql("SELECT o.Id FROM Orders AS o JOIN Customers AS c ON o.CustomerId = c.Id");
///
/// assert_eq!(diagram.tables.len(), 2);
/// assert_eq!(diagram.joins[0].to_table, "c");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SqlDiagramParser {
    config: DiagramConfig,
}

impl SqlDiagramParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DiagramConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DiagramConfig {
        &self.config
    }

    /// Never fails: every error, and any panic raised while matching, yields
    /// the empty diagram.
    pub fn parse_sql(&self, sql: &str) -> DiagramData {
        if sql.trim().is_empty() {
            return DiagramData::default();
        }

        match panic::catch_unwind(AssertUnwindSafe(|| self.try_parse_sql(sql))) {
            Ok(Ok(data)) => data,
            Ok(Err(err)) => {
                debug!(error = %err, "query produced no diagram");
                DiagramData::default()
            }
            Err(_) => {
                warn!("diagram extraction panicked, returning an empty diagram");
                DiagramData::default()
            }
        }
    }

    /// `None` stands for a missing query and gives the empty diagram.
    pub fn parse_sql_opt(&self, sql: Option<&str>) -> DiagramData {
        sql.map(|sql| self.parse_sql(sql)).unwrap_or_default()
    }

    /// Same passes as [`parse_sql`](Self::parse_sql) but reports why nothing
    /// could be drawn.
    pub fn try_parse_sql(&self, sql: &str) -> Result<DiagramData, DiagramError> {
        if sql.trim().is_empty() {
            return Err(DiagramError::EmptyInput);
        }

        let patterns = DiagramPatterns::get()?;
        let mut ctx = ParseContext::new(&self.config);

        FromClause::extract(&mut ctx, patterns, sql);
        JoinClause::extract(&mut ctx, patterns, sql)?;
        SelectColumns::extract(&mut ctx, patterns, sql);
        Backfill::apply(&mut ctx);

        if ctx.table_count() == 0 {
            return Err(DiagramError::NoTables);
        }

        debug!(tables = ctx.table_count(), joins = ctx.join_count(), "diagram extracted");
        Ok(ctx.into_data())
    }
}

/// Parse with the default configuration.
pub fn parse_sql(sql: &str) -> DiagramData {
    SqlDiagramParser::default().parse_sql(sql)
}

impl TryFrom<&str> for DiagramData {
    type Error = DiagramError;

    fn try_from(sql: &str) -> Result<Self, Self::Error> {
        SqlDiagramParser::default().try_parse_sql(sql)
    }
}
