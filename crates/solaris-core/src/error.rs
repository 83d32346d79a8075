use thiserror::Error;

/// Top-level error type for the Solaris system.
///
/// Subsystem crates define their own error types and implement
/// `From<SolarisError>` so that the `?` operator works across crate
/// boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SolarisError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for SolarisError {
    fn from(err: toml::de::Error) -> Self {
        SolarisError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for SolarisError {
    fn from(err: toml::ser::Error) -> Self {
        SolarisError::Config(err.to_string())
    }
}

/// A specialized `Result` type for Solaris operations.
pub type Result<T> = std::result::Result<T, SolarisError>;
