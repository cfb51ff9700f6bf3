//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Config struct definitions (Config, ServerConfig, ListenConfig, LoggingConfig)
//! - [`validation`]: Startup checks that collect every problem at once

mod types;
mod validation;

pub use types::{Config, ConfigError, ListenConfig, LoggingConfig, ServerConfig, Verbosity};
pub use validation::{ValidationError, validate};
