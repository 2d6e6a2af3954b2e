//! Component Grouper
//!
//! Partitions node ids into weakly-connected components using only zero
//! tests on submatrices of the weight matrix; no adjacency list is built.
//!
//! # Algorithm
//! ```text
//! groups = [{0}, {1}, ..., {N-1}]
//! i = count - 1
//! while i > 0:
//!     for j in count-1 down to i:
//!         A = groups[j - i], B = groups[j]
//!         if M[A][B] ≈ 0 and M[B][A] ≈ 0: continue
//!         A += B; remove B; i = count; break
//!     i -= 1
//! ```
//!
//! The later group is always folded into the earlier one, so a component's
//! position in the output follows its smallest node id.
//!
//! # Performance
//! - O(count²) submatrix tests per pass, restarting after every merge
//! - Polynomial in N (distinct nodes), independent of edge count

use tracing::{debug, info};

use crate::errors::{InfluenceError, Result};
use crate::features::grouping::domain::Group;
use crate::shared::models::Matrix;

/// Fixed-point merger of interacting groups
pub struct SparsityGrouper {
    epsilon: f64,
}

impl SparsityGrouper {
    pub fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }

    /// Group all `matrix.rows()` node ids; output is disjoint and exhaustive
    pub fn group(&self, matrix: &Matrix) -> Result<Vec<Group>> {
        if !matrix.is_square() {
            return Err(InfluenceError::dimension(format!(
                "cannot group nodes of a {}x{} matrix",
                matrix.rows(),
                matrix.cols()
            )));
        }

        let mut groups: Vec<Group> = (0..matrix.rows()).map(Group::singleton).collect();
        let mut merges = 0usize;

        let mut offset = groups.len().saturating_sub(1);
        while offset > 0 {
            let candidate = (offset..groups.len())
                .rev()
                .find(|&j| self.interacts(matrix, &groups[j - offset], &groups[j]));

            if let Some(j) = candidate {
                let later = groups.remove(j);
                debug!("Group {} merged into group {}", j, j - offset);
                groups[j - offset].absorb(later);
                merges += 1;
                // Re-test the enlarged group against everything
                offset = groups.len();
            }
            offset -= 1;
        }

        info!(
            "Found {} groups among {} nodes ({} merges)",
            groups.len(),
            matrix.rows(),
            merges
        );
        Ok(groups)
    }

    /// True when any edge runs between `a` and `b` in either direction
    pub fn interacts(&self, matrix: &Matrix, a: &Group, b: &Group) -> bool {
        !(matrix.submatrix(a.members(), b.members()).is_zero(self.epsilon)
            && matrix.submatrix(b.members(), a.members()).is_zero(self.epsilon))
    }
}
