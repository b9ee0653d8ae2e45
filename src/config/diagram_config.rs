use serde::{Deserialize, Serialize};

/// Parser configuration.
///
/// - `anchor_x`/`anchor_y` place the first table discovered.
/// - `step_x`/`step_y` offset every following table so boxes cascade
///   diagonally instead of stacking.
/// - `placeholder_suffix` is appended to a table name to build the column
///   given to tables that would otherwise have none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DiagramConfig {
    pub anchor_x: f64,
    pub anchor_y: f64,
    pub step_x: f64,
    pub step_y: f64,
    pub placeholder_suffix: String,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            anchor_x: 50.0,
            anchor_y: 50.0,
            step_x: 150.0,
            step_y: 40.0,
            placeholder_suffix: "Id".to_string(),
        }
    }
}

impl DiagramConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_anchor(mut self, x: f64, y: f64) -> Self { self.anchor_x = x; self.anchor_y = y; self }
    pub fn with_step(mut self, x: f64, y: f64) -> Self { self.step_x = x; self.step_y = y; self }
    pub fn with_placeholder_suffix(mut self, suffix: &str) -> Self { self.placeholder_suffix = suffix.to_string(); self }

    /// Seed position of the table registered at `index` (0-based).
    pub fn position_of(&self, index: usize) -> (f64, f64) {
        let index = index as f64;
        (self.anchor_x + self.step_x * index, self.anchor_y + self.step_y * index)
    }

    pub fn placeholder_column(&self, table_name: &str) -> String {
        format!("{}{}", table_name, self.placeholder_suffix)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::config::DiagramConfig;

    #[test]
    pub fn test_default_cascade() {
        let config = DiagramConfig::default();

        assert_eq!(config.position_of(0), (50.0, 50.0));
        assert_eq!(config.position_of(1), (200.0, 90.0));
        assert_eq!(config.position_of(2), (350.0, 130.0));
        assert_eq!(config.placeholder_column("Customers"), "CustomersId");
    }

    #[test]
    pub fn test_builder() {
        let config = DiagramConfig::new()
            .with_anchor(0.0, 10.0)
            .with_step(100.0, 0.0)
            .with_placeholder_suffix("_id");

        assert_eq!(config.position_of(3), (300.0, 10.0));
        assert_eq!(config.placeholder_column("orders"), "orders_id");
    }

    #[test]
    pub fn test_partial_json_uses_defaults() {
        let config: DiagramConfig = serde_json::from_value(json!({ "stepX": 200.0 })).unwrap();

        assert_eq!(config.step_x, 200.0);
        assert_eq!(config.anchor_x, 50.0);
        assert_eq!(config.placeholder_suffix, "Id");
    }
}
