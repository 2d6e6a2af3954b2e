//! Configuration error types

use thiserror::Error;

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Range validation error
    #[error("Invalid range for field '{field}': {value} not in {min}..={max}. {hint}")]
    Range {
        field: String,
        value: String,
        min: String,
        max: String,
        hint: String,
    },

    /// Value outside a closed set of choices
    #[error("Invalid value '{value}' for field '{field}'. Valid values: {}", valid.join(", "))]
    InvalidChoice {
        field: String,
        value: String,
        valid: Vec<String>,
    },

    /// Missing version field in YAML
    #[error("Missing 'version' field in configuration file. Add 'version: 1' to the top of your YAML file.")]
    MissingVersion,

    /// Unsupported version
    #[error("Unsupported configuration version {found}. Supported versions: {}", supported.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", "))]
    UnsupportedVersion { found: u32, supported: Vec<u32> },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;

impl ConfigError {
    /// Create a range error with a hint
    pub fn range_with_hint(
        field: impl Into<String>,
        value: impl ToString,
        min: impl ToString,
        max: impl ToString,
        hint: impl Into<String>,
    ) -> Self {
        Self::Range {
            field: field.into(),
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
            hint: hint.into(),
        }
    }

    pub fn invalid_choice(field: impl Into<String>, value: impl ToString, valid: &[&str]) -> Self {
        Self::InvalidChoice {
            field: field.into(),
            value: value.to_string(),
            valid: valid.iter().map(|v| v.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_formatting() {
        let err = ConfigError::range_with_hint(
            "epsilon_exponent",
            0,
            1,
            15,
            "Tolerance is 10^-N",
        );
        let msg = err.to_string();
        assert!(msg.contains("epsilon_exponent"));
        assert!(msg.contains("0 not in 1..=15"));
        assert!(msg.contains("10^-N"));
    }

    #[test]
    fn test_invalid_choice_formatting() {
        let err = ConfigError::invalid_choice("unit", 10, &["1", "100"]);
        assert_eq!(
            err.to_string(),
            "Invalid value '10' for field 'unit'. Valid values: 1, 100"
        );
    }

    #[test]
    fn test_unsupported_version_formatting() {
        let err = ConfigError::UnsupportedVersion {
            found: 3,
            supported: vec![1],
        };
        assert_eq!(
            err.to_string(),
            "Unsupported configuration version 3. Supported versions: 1"
        );
    }
}
