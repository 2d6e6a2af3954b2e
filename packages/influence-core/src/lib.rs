/*
 * Influence Core - Total influence via the Leontief inverse
 *
 * Feature-First Architecture:
 * - shared/      : Weight matrix, node registry, edge records
 * - features/    : Pipeline stages (graph_loader → grouping → inversion → emission)
 * - pipeline/    : Orchestration and run report
 * - config/      : Run configuration (defaults, YAML, CLI overrides)
 *
 * For every weakly-connected group of size > 1 the crate computes
 * (I - A)^-1 over the group's weight submatrix A and reports its non-zero
 * off-diagonal cells as a new weighted edge list.
 */

#![allow(clippy::needless_range_loop)] // Index loops mirror the matrix notation
#![allow(clippy::new_without_default)]

/// Shared models
pub mod shared;

/// Pipeline stages
pub mod features;

/// Pipeline orchestration
pub mod pipeline;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{RunConfig, SingularPolicy, UnitScale};
pub use errors::{ErrorKind, InfluenceError, Result};
pub use pipeline::{InfluencePipeline, RunReport};
pub use shared::models::{EdgeRecord, Matrix, NodeRegistry};
