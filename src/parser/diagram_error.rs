use std::fmt::Display;

/// Reasons a query produced no diagram.
///
/// Only [`SqlDiagramParser::try_parse_sql`](crate::parser::SqlDiagramParser::try_parse_sql)
/// surfaces these. The infallible entry points collapse all of them into the
/// empty diagram.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagramError {
    EmptyInput,
    NoTables,
    UnknownJoinType(String),
    Pattern(regex::Error),
}

impl Display for DiagramError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiagramError::EmptyInput => write!(f, "DiagramError: query is empty"),
            DiagramError::NoTables => write!(f, "DiagramError: no table found in query"),
            DiagramError::UnknownJoinType(keyword) => {
                write!(f, "DiagramError: unknown join type '{}'", keyword)
            }
            DiagramError::Pattern(err) => write!(f, "DiagramError: invalid pattern\n  {}", err),
        }
    }
}

impl std::error::Error for DiagramError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DiagramError::Pattern(err) => Some(err),
            _ => None,
        }
    }
}

impl From<regex::Error> for DiagramError {
    fn from(err: regex::Error) -> Self {
        DiagramError::Pattern(err)
    }
}
