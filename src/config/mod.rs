pub mod diagram_config;
pub use diagram_config::*;
