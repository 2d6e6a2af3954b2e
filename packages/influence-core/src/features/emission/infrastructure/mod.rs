//! Infrastructure layer - edge list output

pub mod edge_writer;

pub use edge_writer::{influence_records, EdgeWriter};
