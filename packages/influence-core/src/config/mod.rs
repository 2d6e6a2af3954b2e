//! Configuration system
//!
//! ```rust,ignore
//! use influence_core::config::{RunConfig, UnitScale};
//!
//! // Defaults, adjusted in code
//! let config = RunConfig::default().unit(UnitScale::Hundred).epsilon_exponent(9);
//!
//! // Or from a versioned YAML file
//! let config = RunConfig::from_yaml("influence.yaml")?;
//! ```

pub mod error;
pub mod io;
pub mod run_config;
pub mod validation;

// Re-exports
pub use error::{ConfigError, ConfigResult};
pub use io::{ConfigFileV1, SUPPORTED_VERSIONS};
pub use run_config::{
    RunConfig, SingularPolicy, UnitScale, MAX_EPSILON_EXPONENT, MIN_EPSILON_EXPONENT,
};
pub use validation::Validatable;
