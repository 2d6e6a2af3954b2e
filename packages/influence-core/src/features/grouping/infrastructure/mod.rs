//! Infrastructure layer - sparsity-based grouping

pub mod sparsity_grouper;

pub use sparsity_grouper::SparsityGrouper;
