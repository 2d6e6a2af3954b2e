//! Linear Solver
//!
//! Leontief inverse of one group: (I - A)^-1, where A is the group's weight
//! submatrix. Entry (i, j) of the inverse is the total (direct plus
//! indirect) influence of member i on member j.
//!
//! ```rust,ignore
//! use influence_core::features::inversion::{leontief_matrix, verify_inverse, GaussJordanInverter};
//!
//! let a = matrix.submatrix(group.members(), group.members());
//! let b = leontief_matrix(&a)?;
//! let c = GaussJordanInverter::new(epsilon).invert(&b)?;
//! verify_inverse(&c, &b, epsilon)?;
//! ```

pub mod infrastructure;

pub use infrastructure::{leontief_matrix, max_residual, verify_inverse, GaussJordanInverter};
