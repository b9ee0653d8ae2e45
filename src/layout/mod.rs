pub mod query_hash;
pub use query_hash::*;

pub mod table_position;
pub use table_position::*;

pub mod layout_error;
pub use layout_error::*;

pub mod layout_store;
pub use layout_store::*;

pub mod memory_store;
pub use memory_store::*;

pub mod file_store;
pub use file_store::*;
