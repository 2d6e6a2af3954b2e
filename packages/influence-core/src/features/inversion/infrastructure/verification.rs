//! Inverse self-check: C · B must equal I within ε, cell by cell

use crate::errors::{InfluenceError, Result};
use crate::shared::models::Matrix;

/// Largest |(C·B − I)[i][j]| over all cells
pub fn max_residual(inverse: &Matrix, original: &Matrix) -> Result<f64> {
    let product = inverse.mul(original)?;
    let residual = product
        .iter_rows()
        .enumerate()
        .flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .map(move |(j, &v)| (v - if i == j { 1.0 } else { 0.0 }).abs())
        })
        .fold(0.0, f64::max);
    Ok(residual)
}

/// Fail with a verification error if C·B differs from I by ε or more
pub fn verify_inverse(inverse: &Matrix, original: &Matrix, epsilon: f64) -> Result<()> {
    let product = inverse.mul(original)?;
    if !product.is_square() {
        return Err(InfluenceError::dimension(format!(
            "inverse check produced a {}x{} product",
            product.rows(),
            product.cols()
        )));
    }

    for (i, row) in product.iter_rows().enumerate() {
        for (j, &v) in row.iter().enumerate() {
            let expected = if i == j { 1.0 } else { 0.0 };
            if (v - expected).abs() >= epsilon {
                return Err(InfluenceError::verification(format!(
                    "C·(I - A) differs from identity at ({}, {}): {} vs {}",
                    i, j, v, expected
                )));
            }
        }
    }
    Ok(())
}
