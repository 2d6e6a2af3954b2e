//! Result Emitter
//!
//! Turns the non-zero off-diagonal cells of a group's inverse back into
//! labeled `from;to;value` records, row-major within the group. Diagonal
//! cells and singleton groups never produce output.

use std::io::{BufWriter, Write};

use tracing::debug;

use crate::errors::{InfluenceError, Result};
use crate::features::grouping::Group;
use crate::shared::models::{EdgeRecord, Matrix, NodeRegistry};

/// Labeled records for the cells of `inverse` with |value| > ε, i ≠ j
pub fn influence_records(
    group: &Group,
    inverse: &Matrix,
    registry: &NodeRegistry,
    epsilon: f64,
) -> Result<Vec<EdgeRecord>> {
    let n = group.len();
    if inverse.rows() != n || inverse.cols() != n {
        return Err(InfluenceError::dimension(format!(
            "inverse is {}x{} but the group has {} members",
            inverse.rows(),
            inverse.cols(),
            n
        )));
    }
    if group.is_singleton() {
        return Ok(Vec::new());
    }

    let labels = group
        .members()
        .iter()
        .map(|&id| {
            registry
                .label(id)
                .ok_or_else(|| InfluenceError::dimension(format!("node #{} is not registered", id)))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut records = Vec::new();
    for (i, row) in inverse.iter_rows().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            if i == j || value.abs() <= epsilon {
                continue;
            }
            records.push(EdgeRecord::new(labels[i], labels[j], value));
        }
    }
    Ok(records)
}

/// Buffered `from;to;value` line writer
pub struct EdgeWriter<W: Write> {
    writer: BufWriter<W>,
    written: usize,
}

impl<W: Write> EdgeWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: BufWriter::new(sink),
            written: 0,
        }
    }

    pub fn write_record(&mut self, record: &EdgeRecord) -> Result<()> {
        writeln!(self.writer, "{}", record)?;
        self.written += 1;
        Ok(())
    }

    /// Write every record of one inverted group; returns how many were written
    pub fn emit_group(
        &mut self,
        group: &Group,
        inverse: &Matrix,
        registry: &NodeRegistry,
        epsilon: f64,
    ) -> Result<usize> {
        let records = influence_records(group, inverse, registry, epsilon)?;
        for record in &records {
            self.write_record(record)?;
        }
        debug!(
            "Emitted {} records for group of {}",
            records.len(),
            group.len()
        );
        Ok(records.len())
    }

    /// Records written so far
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush and hand back the sink
    pub fn finish(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|err| InfluenceError::from(err.into_error()))
    }
}
