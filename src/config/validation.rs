//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::{Config, Verbosity};
use thiserror::Error;

/// Validation errors for configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("server.name is required")]
    MissingServerName,
    #[error("server.name must not contain spaces, got '{0}'")]
    InvalidServerName(String),
    #[error("server.password is required")]
    MissingPassword,
    #[error("listen.address must be empty or an IPv4 literal, got '{0}'")]
    InvalidListenAddress(String),
    #[error("logging.verbose must be 0, 1 or 2, got {0}")]
    InvalidVerbosity(u8),
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    // Required fields
    if config.server.name.is_empty() {
        errors.push(ValidationError::MissingServerName);
    } else if config.server.name.contains(' ') {
        errors.push(ValidationError::InvalidServerName(config.server.name.clone()));
    }
    if config.server.password.is_empty() {
        errors.push(ValidationError::MissingPassword);
    }

    if config.listen.socket_addr().is_err() {
        errors.push(ValidationError::InvalidListenAddress(
            config.listen.address.clone(),
        ));
    }

    if Verbosity::from_level(config.logging.verbose).is_err() {
        errors.push(ValidationError::InvalidVerbosity(config.logging.verbose));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
