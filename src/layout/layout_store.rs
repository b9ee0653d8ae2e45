use crate::layout::{LayoutError, TableLayout};

/// Persistence for user-arranged layouts.
///
/// Keys are produced by [`query_hash`](crate::layout::query_hash). Stores are
/// a convenience: a parse never depends on one.
pub trait LayoutStore {
    fn save_layout(&self, query_hash: &str, layout: &TableLayout) -> Result<(), LayoutError>;
    fn load_layout(&self, query_hash: &str) -> Result<Option<TableLayout>, LayoutError>;
}
