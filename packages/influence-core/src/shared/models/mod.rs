//! Core data model: weight matrix, node registry, edge records

pub mod edge;
pub mod matrix;
pub mod registry;

pub use edge::{EdgeRecord, FIELD_SEPARATOR};
pub use matrix::Matrix;
pub use registry::NodeRegistry;
