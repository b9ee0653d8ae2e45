pub mod diagram_session;
pub use diagram_session::*;
