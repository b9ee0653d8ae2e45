use indexmap::IndexMap;
use tracing::debug;

use crate::{
    layout::{query_hash, LayoutError, LayoutStore},
    model::{same_identifier, DiagramData, TableInfo},
    parser::SqlDiagramParser,
};

/// State of one diagram view: the query it was built from, the parsed
/// diagram and what the user did to it (moved, collapsed, selected, deleted
/// tables).
///
/// Collapse state belongs to the session, two sessions never share it.
#[derive(Debug, Default)]
pub struct DiagramSession {
    parser: SqlDiagramParser,
    query: String,
    diagram: Option<DiagramData>,
    has_attempted_parse: bool,
    collapsed: IndexMap<String, bool>,
    selected: Option<String>,
}

impl DiagramSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parser(parser: SqlDiagramParser) -> Self {
        Self { parser, ..Default::default() }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn diagram(&self) -> Option<&DiagramData> {
        self.diagram.as_ref()
    }

    pub fn has_attempted_parse(&self) -> bool {
        self.has_attempted_parse
    }

    /// Applies a new query text. Blank text and the text already shown are
    /// ignored; returns whether the diagram was rebuilt.
    pub fn set_query(&mut self, sql: &str) -> bool {
        if sql.trim().is_empty() || sql == self.query {
            return false;
        }
        self.generate(sql);
        true
    }

    /// Parses `sql` unconditionally, replacing the current diagram.
    pub fn generate(&mut self, sql: &str) -> &DiagramData {
        self.query = sql.to_string();
        self.has_attempted_parse = true;
        self.selected = None;

        let diagram = self.parser.parse_sql(sql);
        debug!(tables = diagram.tables.len(), joins = diagram.joins.len(), "diagram generated");
        self.diagram.insert(diagram)
    }

    /// Parses `sql` then restores a saved layout for it, if any. A failing
    /// store is logged and otherwise ignored.
    pub fn generate_with_layout(&mut self, sql: &str, store: &dyn LayoutStore) -> &DiagramData {
        self.generate(sql);
        if let Err(err) = self.load_layout(store) {
            debug!(error = %err, "saved layout ignored");
        }
        self.diagram.get_or_insert_with(DiagramData::default)
    }

    pub fn update_table_position(&mut self, alias: &str, x: f64, y: f64) -> bool {
        self.diagram
            .as_mut()
            .is_some_and(|diagram| diagram.update_table_position(alias, x, y))
    }

    /// First toggle collapses the table, the next one expands it again.
    pub fn toggle_collapse(&mut self, alias: &str) -> bool {
        let collapsed = self.collapsed.entry(alias.to_string()).or_insert(false);
        *collapsed = !*collapsed;
        *collapsed
    }

    pub fn is_collapsed(&self, alias: &str) -> bool {
        self.collapsed.get(alias).copied().unwrap_or(false)
    }

    pub fn select_table(&mut self, alias: &str) -> bool {
        let Some(table) = self.diagram.as_ref().and_then(|diagram| diagram.table(alias)) else {
            return false;
        };
        self.selected = Some(table.alias.clone());
        true
    }

    pub fn selected_table(&self) -> Option<&TableInfo> {
        let alias = self.selected.as_deref()?;
        self.diagram.as_ref()?.table(alias)
    }

    /// Removes the selected table from the diagram and clears the selection.
    pub fn delete_selected(&mut self) -> Option<TableInfo> {
        let alias = self.selected.take()?;
        let removed = self.diagram.as_mut()?.remove_table(&alias)?;
        self.collapsed.retain(|key, _| !same_identifier(key, &alias));
        Some(removed)
    }

    pub fn filtered_tables(&self, term: &str) -> Vec<&TableInfo> {
        self.diagram
            .as_ref()
            .map(|diagram| diagram.filter_tables(term))
            .unwrap_or_default()
    }

    pub fn is_join_column(&self, alias: &str, column: &str) -> bool {
        self.diagram
            .as_ref()
            .is_some_and(|diagram| diagram.is_join_column(alias, column))
    }

    /// Returns `false` when there is nothing to save.
    pub fn save_layout(&self, store: &dyn LayoutStore) -> Result<bool, LayoutError> {
        let Some(diagram) = self.diagram.as_ref() else {
            return Ok(false);
        };
        store.save_layout(&query_hash(&self.query), &diagram.layout())?;
        Ok(true)
    }

    /// Returns whether a saved layout was found and applied.
    pub fn load_layout(&mut self, store: &dyn LayoutStore) -> Result<bool, LayoutError> {
        let Some(diagram) = self.diagram.as_mut() else {
            return Ok(false);
        };
        if diagram.tables.is_empty() {
            return Ok(false);
        }

        match store.load_layout(&query_hash(&self.query))? {
            Some(layout) => {
                let moved = diagram.apply_layout(&layout);
                debug!(moved, "layout restored");
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
