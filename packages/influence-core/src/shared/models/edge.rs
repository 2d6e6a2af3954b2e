//! Weighted edge record
//!
//! Shared by the loader (input lines) and the emitter (output lines); both
//! use the `from;to;value` shape.

use std::fmt;

/// Field separator for edge list files
pub const FIELD_SEPARATOR: char = ';';

/// Directed weighted edge between two labeled nodes
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
    pub value: f64,
}

impl EdgeRecord {
    pub fn new(from: impl Into<String>, to: impl Into<String>, value: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            value,
        }
    }
}

/// Renders `from;to;value` with a dot decimal separator
impl fmt::Display for EdgeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}",
            self.from,
            self.to,
            self.value,
            sep = FIELD_SEPARATOR
        )
    }
}
