use std::fmt::Display;

#[derive(Debug)]
pub enum LayoutError {
    Io(std::io::Error),
    Serialization(serde_json::Error),
    Poisoned,
}

impl Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::Io(err) => write!(f, "LayoutError: io failure\n  {}", err),
            LayoutError::Serialization(err) => write!(f, "LayoutError: invalid layout document\n  {}", err),
            LayoutError::Poisoned => write!(f, "LayoutError: layout store lock poisoned"),
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LayoutError::Io(err) => Some(err),
            LayoutError::Serialization(err) => Some(err),
            LayoutError::Poisoned => None,
        }
    }
}

impl From<std::io::Error> for LayoutError {
    fn from(err: std::io::Error) -> Self {
        LayoutError::Io(err)
    }
}

impl From<serde_json::Error> for LayoutError {
    fn from(err: serde_json::Error) -> Self {
        LayoutError::Serialization(err)
    }
}
