//! Result Emitter
//!
//! Output has the same `from;to;value` shape as the input, with a dot
//! decimal separator.

pub mod infrastructure;

pub use infrastructure::{influence_records, EdgeWriter};
