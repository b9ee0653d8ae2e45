use serde::{Deserialize, Serialize};

use crate::{
    layout::{TableLayout, TablePosition},
    model::{contains_identifier, same_identifier, JoinRelationship, TableInfo},
};

/// Output of a parse: the tables of the query and the joins between them.
///
/// The default value, with no tables and no joins, is also what every failed
/// parse returns. Consumers treat it as "nothing to draw".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramData {
    #[serde(default)]
    pub tables: Vec<TableInfo>,
    #[serde(default)]
    pub joins: Vec<JoinRelationship>,
}

impl DiagramData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty() && self.joins.is_empty()
    }

    pub fn table(&self, alias: &str) -> Option<&TableInfo> {
        self.tables.iter().find(|table| same_identifier(&table.alias, alias))
    }

    pub fn table_mut(&mut self, alias: &str) -> Option<&mut TableInfo> {
        self.tables.iter_mut().find(|table| same_identifier(&table.alias, alias))
    }

    /// Drag callback from the diagram. Unknown aliases are ignored.
    pub fn update_table_position(&mut self, alias: &str, x: f64, y: f64) -> bool {
        match self.table_mut(alias) {
            Some(table) => {
                table.move_to(x, y);
                true
            }
            None => false,
        }
    }

    /// Removes a table box. Joins that mention the alias are kept as they are.
    pub fn remove_table(&mut self, alias: &str) -> Option<TableInfo> {
        let index = self.tables.iter().position(|table| same_identifier(&table.alias, alias))?;
        Some(self.tables.remove(index))
    }

    pub fn is_join_column(&self, alias: &str, column: &str) -> bool {
        self.joins.iter().any(|join| join.uses_column(alias, column))
    }

    /// Tables whose name, alias or one of the column names contains `term`.
    /// A blank term keeps every table.
    pub fn filter_tables(&self, term: &str) -> Vec<&TableInfo> {
        if term.trim().is_empty() {
            return self.tables.iter().collect();
        }

        self.tables
            .iter()
            .filter(|table| {
                contains_identifier(&table.name, term)
                    || contains_identifier(&table.alias, term)
                    || table.columns.iter().any(|column| contains_identifier(&column.name, term))
            })
            .collect()
    }

    pub fn layout(&self) -> TableLayout {
        self.tables
            .iter()
            .map(|table| (table.alias.clone(), TablePosition::new(table.x, table.y)))
            .collect()
    }

    /// Moves every table whose alias is a key of `layout`. Returns how many
    /// tables were moved.
    pub fn apply_layout(&mut self, layout: &TableLayout) -> usize {
        let mut moved = 0;
        for table in self.tables.iter_mut() {
            if let Some(position) = layout.get(&table.alias) {
                table.move_to(position.x, position.y);
                moved += 1;
            }
        }
        moved
    }
}
