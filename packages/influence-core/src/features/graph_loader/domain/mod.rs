//! Domain models for graph loading

use serde::{Deserialize, Serialize};

use crate::shared::models::{Matrix, NodeRegistry};

/// Counters collected while reading an edge list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadStats {
    /// Lines consumed from the source
    pub lines: usize,
    /// Distinct node labels registered
    pub nodes: usize,
    /// Records applied to the matrix (overwrites included)
    pub edges: usize,
}

impl LoadStats {
    pub fn is_empty(&self) -> bool {
        self.edges == 0
    }
}

/// Registry and weight matrix built from one input
///
/// `matrix[i][j]` is the scaled weight of the edge from `registry.label(i)`
/// to `registry.label(j)`.
#[derive(Debug, Clone, Default)]
pub struct LoadedGraph {
    pub registry: NodeRegistry,
    pub matrix: Matrix,
    pub stats: LoadStats,
}

impl LoadedGraph {
    pub fn node_count(&self) -> usize {
        self.registry.len()
    }
}
