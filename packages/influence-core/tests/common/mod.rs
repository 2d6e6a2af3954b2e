//! Common test utilities for influence-core
//!
//! Shared edge-list fixtures, output parsing and tolerance assertions
//! for the integration and property tests.

#![allow(dead_code)]

mod assertions;
mod fixtures;

pub use assertions::*;
pub use fixtures::*;
