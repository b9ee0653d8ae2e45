use serde::{Deserialize, Serialize};

use crate::model::{same_identifier, JoinType};

/// Edge between two tables taken from a single `ON a.x = b.y` condition.
///
/// `from_table` and `to_table` are the qualifiers written left and right of
/// `=`, exactly as they appear in the query. They are not reordered to match
/// the order in which the tables were declared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRelationship {
    pub from_table: String,
    pub to_table: String,
    pub from_column: String,
    pub to_column: String,
    #[serde(default)]
    pub join_type: JoinType,
}

impl JoinRelationship {
    /// Whether `(alias, column)` is the key on either side of this join.
    pub fn uses_column(&self, alias: &str, column: &str) -> bool {
        (same_identifier(&self.from_table, alias) && same_identifier(&self.from_column, column))
            || (same_identifier(&self.to_table, alias) && same_identifier(&self.to_column, column))
    }

    pub fn color(&self) -> &'static str {
        self.join_type.color()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::model::{JoinRelationship, JoinType};

    fn orders_to_customers() -> JoinRelationship {
        JoinRelationship {
            from_table: "o".into(),
            to_table: "c".into(),
            from_column: "CustomerId".into(),
            to_column: "Id".into(),
            join_type: JoinType::Left,
        }
    }

    #[test]
    pub fn test_uses_column() {
        let join = orders_to_customers();

        assert!(join.uses_column("O", "customerid"));
        assert!(join.uses_column("c", "ID"));
        assert!(!join.uses_column("o", "Id"));
        assert!(!join.uses_column("c", "CustomerId"));
    }

    #[test]
    pub fn test_serialize_camel_case() {
        let value = serde_json::to_value(orders_to_customers()).unwrap();
        assert_eq!(value, json!({
            "fromTable": "o",
            "toTable": "c",
            "fromColumn": "CustomerId",
            "toColumn": "Id",
            "joinType": "LEFT"
        }));
    }
}
