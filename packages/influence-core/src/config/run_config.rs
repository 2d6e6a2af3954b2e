//! Run configuration
//!
//! Two layers, later wins:
//! - Defaults (`input.csv` → `output.csv`, unit 1, ε = 1e-10)
//! - YAML file via [`RunConfig::from_yaml`]
//!
//! The CLI applies its flags on top with the builder setters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::error::{ConfigError, ConfigResult};
use super::io::{ConfigFileV1, SUPPORTED_VERSIONS};
use super::validation::Validatable;

/// Smallest accepted tolerance exponent (ε = 0.1)
pub const MIN_EPSILON_EXPONENT: u32 = 1;

/// Largest accepted tolerance exponent; below 1e-15 rounding noise in `f64`
/// elimination is indistinguishable from signal.
pub const MAX_EPSILON_EXPONENT: u32 = 15;

/// Divisor applied to every raw weight while loading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum UnitScale {
    /// Weights are fractions (`0.25`)
    One,
    /// Weights are percentages (`25`)
    Hundred,
}

impl UnitScale {
    pub fn divisor(&self) -> f64 {
        match self {
            Self::One => 1.0,
            Self::Hundred => 100.0,
        }
    }

    pub fn as_u32(&self) -> u32 {
        match self {
            Self::One => 1,
            Self::Hundred => 100,
        }
    }
}

impl Default for UnitScale {
    fn default() -> Self {
        Self::One
    }
}

impl TryFrom<u32> for UnitScale {
    type Error = ConfigError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            100 => Ok(Self::Hundred),
            other => Err(ConfigError::invalid_choice("unit", other, &["1", "100"])),
        }
    }
}

impl From<UnitScale> for u32 {
    fn from(unit: UnitScale) -> u32 {
        unit.as_u32()
    }
}

impl fmt::Display for UnitScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u32())
    }
}

/// What to do when a group's `I - A` has no inverse, or its inverse fails
/// the self-check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SingularPolicy {
    /// Fail the whole run
    Abort,
    /// Log the group, emit nothing for it, keep going
    Skip,
}

impl SingularPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Abort => "abort",
            Self::Skip => "skip",
        }
    }
}

impl Default for SingularPolicy {
    fn default() -> Self {
        Self::Abort
    }
}

impl FromStr for SingularPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "abort" => Ok(Self::Abort),
            "skip" => Ok(Self::Skip),
            _ => Err(ConfigError::invalid_choice(
                "singular_policy",
                s,
                &["abort", "skip"],
            )),
        }
    }
}

impl fmt::Display for SingularPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Complete settings for one pipeline run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub unit: UnitScale,
    /// Tolerance is 10^-epsilon_exponent
    pub epsilon_exponent: u32,
    pub singular_policy: SingularPolicy,
    /// Reject inputs where some column sums above 1 + ε
    pub check_column_sums: bool,
    /// Check C·(I - A) = I for every computed inverse
    pub verify_inverse: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("input.csv"),
            output: PathBuf::from("output.csv"),
            unit: UnitScale::One,
            epsilon_exponent: 10,
            singular_policy: SingularPolicy::Abort,
            check_column_sums: true,
            verify_inverse: true,
        }
    }
}

impl RunConfig {
    /// Zero tolerance: 10^-epsilon_exponent
    pub fn epsilon(&self) -> f64 {
        10f64.powi(-(self.epsilon_exponent as i32))
    }

    pub fn input(mut self, path: impl Into<PathBuf>) -> Self {
        self.input = path.into();
        self
    }

    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = path.into();
        self
    }

    pub fn unit(mut self, unit: UnitScale) -> Self {
        self.unit = unit;
        self
    }

    pub fn epsilon_exponent(mut self, exponent: u32) -> Self {
        self.epsilon_exponent = exponent;
        self
    }

    pub fn singular_policy(mut self, policy: SingularPolicy) -> Self {
        self.singular_policy = policy;
        self
    }

    pub fn check_column_sums(mut self, enabled: bool) -> Self {
        self.check_column_sums = enabled;
        self
    }

    pub fn verify_inverse(mut self, enabled: bool) -> Self {
        self.verify_inverse = enabled;
        self
    }

    /// Load a v1 YAML file over the defaults and validate the result
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let file: ConfigFileV1 = serde_yaml::from_str(content)?;

        let version = file.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let config = Self::default().apply(file);
        config.validate()?;
        Ok(config)
    }

    /// Export as a complete v1 YAML document
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let file = ConfigFileV1 {
            version: Some(1),
            input: Some(self.input.clone()),
            output: Some(self.output.clone()),
            unit: Some(self.unit),
            epsilon_exponent: Some(self.epsilon_exponent),
            singular_policy: Some(self.singular_policy),
            check_column_sums: Some(self.check_column_sums),
            verify_inverse: Some(self.verify_inverse),
        };
        Ok(serde_yaml::to_string(&file)?)
    }

    fn apply(mut self, file: ConfigFileV1) -> Self {
        if let Some(input) = file.input {
            self.input = input;
        }
        if let Some(output) = file.output {
            self.output = output;
        }
        if let Some(unit) = file.unit {
            self.unit = unit;
        }
        if let Some(exponent) = file.epsilon_exponent {
            self.epsilon_exponent = exponent;
        }
        if let Some(policy) = file.singular_policy {
            self.singular_policy = policy;
        }
        if let Some(enabled) = file.check_column_sums {
            self.check_column_sums = enabled;
        }
        if let Some(enabled) = file.verify_inverse {
            self.verify_inverse = enabled;
        }
        self
    }
}

impl Validatable for RunConfig {
    fn validate(&self) -> ConfigResult<()> {
        if !(MIN_EPSILON_EXPONENT..=MAX_EPSILON_EXPONENT).contains(&self.epsilon_exponent) {
            return Err(ConfigError::range_with_hint(
                "epsilon_exponent",
                self.epsilon_exponent,
                MIN_EPSILON_EXPONENT,
                MAX_EPSILON_EXPONENT,
                "Tolerance is 10^-N",
            ));
        }
        if self.input == self.output {
            return Err(ConfigError::invalid_choice(
                "output",
                self.output.display(),
                &["any path other than the input"],
            ));
        }
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "RunConfig"
    }
}
