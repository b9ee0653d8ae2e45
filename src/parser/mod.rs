pub mod diagram_error;
pub use diagram_error::*;

pub mod identifier;
pub use identifier::*;

pub mod patterns;
pub use patterns::*;

pub mod parse_context;
pub use parse_context::*;

pub mod passes;

pub mod sql_diagram_parser;
pub use sql_diagram_parser::*;
