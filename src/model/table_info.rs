use serde::{Deserialize, Serialize};

use crate::model::{same_identifier, ColumnInfo, SelectedColumns};

/// One box of the diagram.
///
/// `alias` is how the rest of the query refers to the table and defaults to
/// `name`. `x`/`y` are the seed coordinates assigned when the table was first
/// discovered; only the owning layer moves them afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableInfo {
    pub name: String,
    pub alias: String,
    #[serde(default)]
    pub columns: Vec<ColumnInfo>,
    #[serde(default)]
    pub selected_columns: SelectedColumns,
    pub x: f64,
    pub y: f64,
}

impl TableInfo {
    pub fn new(name: &str, alias: &str, x: f64, y: f64) -> Self {
        Self {
            name: name.to_string(),
            alias: alias.to_string(),
            columns: vec![],
            selected_columns: SelectedColumns::new(),
            x,
            y,
        }
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|column| same_identifier(&column.name, name))
    }

    pub fn column(&self, name: &str) -> Option<&ColumnInfo> {
        self.columns.iter().find(|column| same_identifier(&column.name, name))
    }

    /// Appends the column unless one with the same name already exists.
    /// The first occurrence wins, including its alias.
    pub fn add_column(&mut self, column: ColumnInfo) -> bool {
        if self.has_column(&column.name) {
            return false;
        }
        self.columns.push(column);
        true
    }

    pub fn select_column(&mut self, name: &str) -> bool {
        self.selected_columns.insert(name)
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected_columns.contains(name)
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::model::{ColumnInfo, TableInfo};

    #[test]
    pub fn test_add_column_first_wins() {
        let mut table = TableInfo::new("Orders", "o", 50.0, 50.0);

        assert!(table.add_column(ColumnInfo::with_alias("OrderId", Some("Number"))));
        assert!(!table.add_column(ColumnInfo::with_alias("orderid", Some("Other"))));

        assert_eq!(table.columns.len(), 1);
        assert_eq!(table.column("ORDERID").unwrap().alias.as_deref(), Some("Number"));
    }

    #[test]
    pub fn test_select_column() {
        let mut table = TableInfo::new("Orders", "o", 50.0, 50.0);
        table.select_column("OrderId");

        assert!(table.is_selected("orderid"));
        assert!(!table.is_selected("CustomerId"));
    }

    #[test]
    pub fn test_serialize_camel_case() {
        let mut table = TableInfo::new("Orders", "o", 50.0, 90.0);
        table.add_column(ColumnInfo::new("OrderId"));
        table.select_column("OrderId");

        let value = serde_json::to_value(&table).unwrap();
        assert_eq!(value, json!({
            "name": "Orders",
            "alias": "o",
            "columns": [{ "name": "OrderId" }],
            "selectedColumns": ["OrderId"],
            "x": 50.0,
            "y": 90.0
        }));
    }
}
