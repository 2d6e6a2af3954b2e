//! Feature modules - one per pipeline stage
//!
//! Each feature contains:
//! - domain/         - Plain data types
//! - infrastructure/ - The stage's algorithm and its I/O

/// Edge list → node registry + weight matrix
pub mod graph_loader;

/// Weight matrix → weakly-connected groups
pub mod grouping;

/// Group submatrix → (I - A)^-1
pub mod inversion;

/// Inverse → labeled edge records
pub mod emission;
