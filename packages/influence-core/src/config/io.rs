//! Configuration file schema (YAML)
//!
//! Every field except `version` is optional; absent fields keep the value
//! from [`RunConfig::default`](super::RunConfig). Loading and export live in
//! `run_config.rs`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::run_config::{SingularPolicy, UnitScale};

/// Versions this build can read
pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// YAML Schema v1
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileV1 {
    /// Schema version (always 1 for v1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    /// Divisor applied to raw weights (1 or 100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<UnitScale>,

    /// Tolerance is 10^-epsilon_exponent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epsilon_exponent: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub singular_policy: Option<SingularPolicy>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_column_sums: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify_inverse: Option<bool>,
}
