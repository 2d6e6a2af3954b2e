//! Graph Loader
//!
//! Turns a `from;to;value` edge list into a node registry plus a dense
//! weight matrix, then checks the matrix before anything downstream runs.
//!
//! ```rust,ignore
//! use influence_core::features::graph_loader::{validate_loaded, GraphLoader};
//!
//! let graph = GraphLoader::new(UnitScale::One).load(reader)?;
//! validate_loaded(&graph, 1e-10, true)?;
//! ```

pub mod domain;
pub mod infrastructure;

pub use domain::{LoadStats, LoadedGraph};
pub use infrastructure::{parse_edge_line, validate_loaded, GraphLoader, RawEdge};
