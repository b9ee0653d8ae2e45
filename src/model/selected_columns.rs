use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::fold_identifier;

/// Names of the columns a query actually selects from a table.
///
/// Membership ignores case and the first spelling seen is the one kept, so
/// `o.OrderId, o.orderid` yields a single entry `OrderId`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SelectedColumns {
    // folded name -> first spelling
    names: IndexMap<String, String>,
}

impl SelectedColumns {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the name was not present yet.
    pub fn insert(&mut self, name: &str) -> bool {
        let key = fold_identifier(name);
        if self.names.contains_key(&key) {
            return false;
        }
        self.names.insert(key, name.to_string());
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(&fold_identifier(name))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.values().map(String::as_str)
    }
}

impl From<Vec<String>> for SelectedColumns {
    fn from(values: Vec<String>) -> Self {
        let mut selected = SelectedColumns::new();
        for value in values {
            selected.insert(&value);
        }
        selected
    }
}

impl From<SelectedColumns> for Vec<String> {
    fn from(selected: SelectedColumns) -> Self {
        selected.names.into_values().collect()
    }
}
