//! Post-load checks on the weight matrix
//!
//! - square, and sized like the registry
//! - every weight in [-ε, 1 + ε]
//! - optionally, every column sum Σ_j M[j][i] ≤ 1 + ε
//!
//! Loading stores `M[from][to]` while the column check sums over rows; the
//! two conventions are transposed relative to each other on purpose.

use tracing::debug;

use crate::errors::{InfluenceError, Result};
use crate::features::graph_loader::domain::LoadedGraph;

/// Validate a freshly loaded graph
pub fn validate_loaded(graph: &LoadedGraph, epsilon: f64, check_column_sums: bool) -> Result<()> {
    let matrix = &graph.matrix;
    let registry = &graph.registry;

    if !matrix.is_square() {
        return Err(InfluenceError::dimension(format!(
            "weight matrix is {}x{}, expected square",
            matrix.rows(),
            matrix.cols()
        )));
    }
    if matrix.rows() != registry.len() {
        return Err(InfluenceError::dimension(format!(
            "weight matrix has {} rows but {} nodes are registered",
            matrix.rows(),
            registry.len()
        )));
    }

    for (i, row) in matrix.iter_rows().enumerate() {
        if let Some((j, value)) = row
            .iter()
            .enumerate()
            .find(|(_, v)| **v < -epsilon || **v > 1.0 + epsilon)
        {
            return Err(InfluenceError::range(format!(
                "weight {} from '{}' to '{}' is outside [0, 1]",
                value,
                registry.label(i).unwrap_or_default(),
                registry.label(j).unwrap_or_default()
            )));
        }
    }

    if check_column_sums {
        for col in 0..matrix.cols() {
            let sum = matrix.column_sum(col);
            if sum > 1.0 + epsilon {
                return Err(InfluenceError::range(format!(
                    "weights into '{}' sum to {}, above 1",
                    registry.label(col).unwrap_or_default(),
                    sum
                )));
            }
        }
    }

    debug!(
        "Weight matrix {}x{} passed validation",
        matrix.rows(),
        matrix.cols()
    );
    Ok(())
}
