//! Component Grouper
//!
//! Two nodes share a group iff a path of non-zero weights (in either
//! direction) connects them: weak connectivity of the weight graph.
//!
//! ```rust,ignore
//! use influence_core::features::grouping::SparsityGrouper;
//!
//! let groups = SparsityGrouper::new(1e-10).group(&graph.matrix)?;
//! for group in groups.iter().filter(|g| !g.is_singleton()) {
//!     // invert I - A restricted to group.members()
//! }
//! ```

pub mod domain;
pub mod infrastructure;

pub use domain::Group;
pub use infrastructure::SparsityGrouper;
