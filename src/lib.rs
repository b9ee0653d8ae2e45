pub mod model;
pub use model::{ColumnInfo, DiagramData, JoinRelationship, JoinType, SelectedColumns, TableInfo, join_color};

pub mod config;
pub use config::DiagramConfig;

pub mod parser;
pub use parser::{parse_sql, DiagramError, SqlDiagramParser};

pub mod layout;
pub use layout::{query_hash, FileLayoutStore, LayoutError, LayoutStore, MemoryLayoutStore, TableLayout, TablePosition};

pub mod session;
pub use session::DiagramSession;
