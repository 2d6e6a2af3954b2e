//! Shared models used by every feature

pub mod models;

pub use models::{EdgeRecord, Matrix, NodeRegistry};
