//! Infrastructure layer - elimination and self-check

pub mod gauss_jordan;
pub mod verification;

pub use gauss_jordan::{leontief_matrix, GaussJordanInverter};
pub use verification::{max_residual, verify_inverse};
