pub mod from_clause;
pub use from_clause::*;

pub mod join_clause;
pub use join_clause::*;

pub mod select_columns;
pub use select_columns::*;

pub mod backfill;
pub use backfill::*;
