//! Graph Loader
//!
//! Streams edge records into a `NodeRegistry` and a dense weight matrix
//! that grow in lockstep: every new label adds one row and one column.
//!
//! Repeated `(from, to)` pairs overwrite; weights are never accumulated.

use std::io::BufRead;

use tracing::{debug, info};

/// UTF-8 byte-order mark some editors put in front of the first line
const BYTE_ORDER_MARK: char = '\u{FEFF}';

use crate::config::UnitScale;
use crate::errors::{InfluenceError, Result};
use crate::features::graph_loader::domain::LoadedGraph;
use crate::features::graph_loader::infrastructure::edge_parser::parse_edge_line;

/// Incremental builder for a [`LoadedGraph`]
///
/// # Example
/// ```ignore
/// let graph = GraphLoader::new(UnitScale::Hundred).load(reader)?;
/// assert!(graph.matrix.is_square());
/// ```
pub struct GraphLoader {
    divisor: f64,
    graph: LoadedGraph,
}

impl GraphLoader {
    pub fn new(unit: UnitScale) -> Self {
        Self {
            divisor: unit.divisor(),
            graph: LoadedGraph::default(),
        }
    }

    /// Read every line of `reader`; the first malformed line aborts the load
    pub fn load<R: BufRead>(mut self, reader: R) -> Result<LoadedGraph> {
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line = if idx == 0 {
                line.strip_prefix(BYTE_ORDER_MARK).unwrap_or(&line)
            } else {
                &line
            };
            self.load_line(idx + 1, line)?;
        }

        let graph = self.finish();
        info!(
            "Read {} lines: {} nodes, {} edge records",
            graph.stats.lines, graph.stats.nodes, graph.stats.edges
        );
        Ok(graph)
    }

    /// Decode and apply one line (`line_no` is 1-based, for error messages)
    pub fn load_line(&mut self, line_no: usize, line: &str) -> Result<()> {
        self.graph.stats.lines += 1;
        let edge = parse_edge_line(line).ok_or_else(|| InfluenceError::parse(line_no, line))?;
        self.insert(edge.from, edge.to, edge.value);
        Ok(())
    }

    /// Register both endpoints and store `raw_value / unit` at `[from][to]`
    pub fn insert(&mut self, from: &str, to: &str, raw_value: f64) {
        let i = self.register(from);
        let j = self.register(to);
        self.graph.matrix.set(i, j, raw_value / self.divisor);
        self.graph.stats.edges += 1;
    }

    pub fn finish(mut self) -> LoadedGraph {
        self.graph.stats.nodes = self.graph.registry.len();
        self.graph
    }

    fn register(&mut self, label: &str) -> usize {
        let (id, is_new) = self.graph.registry.register(label);
        if is_new {
            self.graph.matrix.grow();
            debug!(
                "Registered node '{}' as #{}; matrix is now {}x{}",
                label,
                id,
                self.graph.matrix.rows(),
                self.graph.matrix.cols()
            );
        }
        id
    }
}
