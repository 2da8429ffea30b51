//! Error types and handling for assistant-config

use thiserror::Error;

/// Result type alias for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Configuration-specific errors
///
/// All of these are fatal to the load call that produced them. Non-fatal
/// conditions are reported as [`ConfigWarning`] instead.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid value for field '{field}': {value:?}")]
    InvalidValue { field: String, value: String },

    #[error("Configuration declares no models")]
    NoModels,
}

/// Non-fatal conditions surfaced alongside a successfully loaded configuration
///
/// The loader never logs these itself; the host decides whether to log,
/// prompt, or ignore them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    #[error("Environment variable '{var}' referenced by '{field}' is not set")]
    UnresolvedEnvVar { field: String, var: String },
}
