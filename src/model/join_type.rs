use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::parser::DiagramError;

const UNKNOWN_JOIN_COLOR: &str = "#666666";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum JoinType {
    #[default]
    Inner,
    Left,
    Right,
    Full,
    Cross,
}

impl JoinType {
    /// Resolve a join keyword (`left`, `INNER`, ...). `OUTER` is never part of
    /// the keyword handed in here.
    pub fn parse(keyword: &str) -> Result<JoinType, DiagramError> {
        match keyword.trim().to_ascii_uppercase().as_str() {
            "INNER" => Ok(JoinType::Inner),
            "LEFT" => Ok(JoinType::Left),
            "RIGHT" => Ok(JoinType::Right),
            "FULL" => Ok(JoinType::Full),
            "CROSS" => Ok(JoinType::Cross),
            _ => Err(DiagramError::UnknownJoinType(keyword.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JoinType::Inner => "INNER",
            JoinType::Left => "LEFT",
            JoinType::Right => "RIGHT",
            JoinType::Full => "FULL",
            JoinType::Cross => "CROSS",
        }
    }

    /// Stroke colour of the edge drawn for this join.
    pub fn color(&self) -> &'static str {
        match self {
            JoinType::Inner => "#1976d2",
            JoinType::Left => "#388e3c",
            JoinType::Right => "#f57c00",
            JoinType::Full => "#7b1fa2",
            JoinType::Cross => "#c62828",
        }
    }
}

impl Display for JoinType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Colour for a join type given as free text; anything unrecognised is gray.
pub fn join_color(join_type: &str) -> &'static str {
    JoinType::parse(join_type)
        .map(|join_type| join_type.color())
        .unwrap_or(UNKNOWN_JOIN_COLOR)
}

#[cfg(test)]
mod tests {
    use crate::{model::{join_color, JoinType}, parser::DiagramError};

    #[test]
    pub fn test_parse_join_type() {
        assert_eq!(JoinType::parse("left").unwrap(), JoinType::Left);
        assert_eq!(JoinType::parse("Inner").unwrap(), JoinType::Inner);
        assert_eq!(JoinType::parse("CROSS").unwrap(), JoinType::Cross);

        match JoinType::parse("OUTER") {
            Err(DiagramError::UnknownJoinType(keyword)) => assert_eq!(keyword, "OUTER"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    pub fn test_join_colors() {
        assert_eq!(join_color("INNER"), "#1976d2");
        assert_eq!(join_color("left"), "#388e3c");
        assert_eq!(join_color("RIGHT"), "#f57c00");
        assert_eq!(join_color("FULL"), "#7b1fa2");
        assert_eq!(join_color("CROSS"), "#c62828");
        assert_eq!(join_color("NATURAL"), "#666666");
        assert_eq!(join_color(""), "#666666");
    }

    #[test]
    pub fn test_display_and_serde() {
        assert_eq!(JoinType::Full.to_string(), "FULL");
        assert_eq!(serde_json::to_string(&JoinType::Left).unwrap(), "\"LEFT\"");
        assert_eq!(serde_json::from_str::<JoinType>("\"CROSS\"").unwrap(), JoinType::Cross);
    }
}
