pub mod identifier_case;
pub use identifier_case::*;

pub mod column_info;
pub use column_info::*;

pub mod selected_columns;
pub use selected_columns::*;

pub mod table_info;
pub use table_info::*;

pub mod join_type;
pub use join_type::*;

pub mod join_relationship;
pub use join_relationship::*;

pub mod diagram_data;
pub use diagram_data::*;
