//! Infrastructure layer - edge decoding, loading, validation

pub mod edge_parser;
pub mod loader;
pub mod validator;

pub use edge_parser::{parse_edge_line, RawEdge};
pub use loader::GraphLoader;
pub use validator::validate_loaded;
