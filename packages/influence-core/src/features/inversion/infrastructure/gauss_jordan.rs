//! Gauss-Jordan Inverter
//!
//! Inverts B = I - A for one group by row-reducing the augmented matrix
//! `[B | I]` until the left half is an identity up to row order, then reading
//! the inverse out of the right half.
//!
//! # Algorithm
//! ```text
//! for k in 0..n:
//!     p = first row >= k with |aug[p][k]| > ε      (else: singular)
//!     swap rows p, k
//!     aug[k] /= aug[k][k]
//!     for r != k: aug[r] -= aug[r][k] * aug[k]
//! for each row: pivot column = first |left[c]| > ε
//! inverse[c] = right half of the row whose pivot column is c
//! ```
//!
//! No partial pivoting: the pivot is the first candidate above ε, not the
//! largest. Ill-conditioned matrices lose precision accordingly.

use crate::errors::{ErrorKind, InfluenceError, Result};
use crate::shared::models::Matrix;

/// `I - A` for a square `A`
pub fn leontief_matrix(a: &Matrix) -> Result<Matrix> {
    if !a.is_square() {
        return Err(InfluenceError::dimension(format!(
            "cannot form I - A for a {}x{} matrix",
            a.rows(),
            a.cols()
        )));
    }
    Matrix::identity(a.rows()).sub(a)
}

/// Exact elimination with first-nonzero pivoting
pub struct GaussJordanInverter {
    epsilon: f64,
}

impl GaussJordanInverter {
    pub fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }

    /// Inverse of the square matrix `b`
    ///
    /// `b` is left untouched; elimination runs on an augmented copy.
    pub fn invert(&self, b: &Matrix) -> Result<Matrix> {
        if !b.is_square() {
            return Err(InfluenceError::dimension(format!(
                "cannot invert a {}x{} matrix",
                b.rows(),
                b.cols()
            )));
        }
        let n = b.rows();

        let mut augmented = b.clone();
        augmented.append_columns(&Matrix::identity(n))?;

        self.reduce(&mut augmented, n)?;
        self.canonicalize(augmented, n)
    }

    /// Row-reduce the left `n` columns of `aug` to a permuted identity
    fn reduce(&self, aug: &mut Matrix, n: usize) -> Result<()> {
        for k in 0..n {
            let pivot_row = (k..n)
                .find(|&r| aug[r][k].abs() > self.epsilon)
                .ok_or_else(|| InfluenceError::singular(k, n))?;
            if pivot_row != k {
                aug.swap_rows(pivot_row, k);
            }

            let pivot = aug[k][k];
            for v in aug[k].iter_mut() {
                *v /= pivot;
            }

            let pivot_values = aug.row(k).to_vec();
            for (r, row) in aug.rows_mut().iter_mut().enumerate() {
                if r == k {
                    continue;
                }
                let factor = row[k];
                if factor == 0.0 {
                    continue;
                }
                for (v, p) in row.iter_mut().zip(&pivot_values) {
                    *v -= factor * p;
                }
            }
        }
        Ok(())
    }

    /// Reorder rows by pivot column and keep the right half
    fn canonicalize(&self, aug: Matrix, n: usize) -> Result<Matrix> {
        let mut row_for_pivot: Vec<Option<usize>> = vec![None; n];

        for (r, row) in aug.iter_rows().enumerate() {
            let col = row[..n]
                .iter()
                .position(|v| v.abs() > self.epsilon)
                .ok_or_else(|| {
                    InfluenceError::new(
                        ErrorKind::SingularMatrix,
                        format!("row {} reduced to zero in {}x{} elimination", r, n, n),
                    )
                })?;
            if row_for_pivot[col].replace(r).is_some() {
                return Err(InfluenceError::new(
                    ErrorKind::SingularMatrix,
                    format!("two rows share pivot column {} in {}x{} elimination", col, n, n),
                ));
            }
        }

        let rows = aug.into_rows();
        let inverse = row_for_pivot
            .iter()
            .enumerate()
            .map(|(col, r)| {
                r.map(|r| rows[r][n..].to_vec())
                    .ok_or_else(|| InfluenceError::singular(col, n))
            })
            .collect::<Result<Vec<_>>>()?;
        Matrix::from_rows(inverse)
    }
}
