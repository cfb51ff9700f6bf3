//! Core configuration types and loading.

use serde::Deserialize;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use crate::error::ServerError;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server identity and connection password.
    pub server: ServerConfig,
    /// Listening socket.
    pub listen: ListenConfig,
    /// Log verbosity and idle-loop cadence.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Server identity configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server display name, used as the prefix of every numeric reply.
    pub name: String,
    /// Connection password clients must send with PASS.
    pub password: String,
    /// Network name shown in RPL_WELCOME.
    #[serde(default = "default_network")]
    pub network: String,
}

fn default_network() -> String {
    "PlexNet".to_string()
}

/// Network listener configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ListenConfig {
    /// TCP port. 0 asks the OS for an ephemeral port.
    pub port: u16,
    /// IPv4 literal to bind to. Empty binds all interfaces.
    #[serde(default)]
    pub address: String,
}

impl ListenConfig {
    /// Create a listener config for `address:port`.
    pub fn new(address: impl Into<String>, port: u16) -> Self {
        Self {
            port,
            address: address.into(),
        }
    }

    /// Resolve to a socket address.
    ///
    /// Fails with [`ServerError::Settings`] when the address is not a valid
    /// IPv4 literal.
    pub fn socket_addr(&self) -> Result<SocketAddr, ServerError> {
        let ip = if self.address.is_empty() {
            Ipv4Addr::UNSPECIFIED
        } else {
            self.address
                .parse::<Ipv4Addr>()
                .map_err(|_| ServerError::Settings(format!("invalid IPv4 address {:?}", self.address)))?
        };
        Ok(SocketAddr::V4(SocketAddrV4::new(ip, self.port)))
    }
}

/// Log verbosity of the multiplexer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Critical events only.
    #[default]
    Critical = 0,
    /// Plus connects and disconnects.
    Connections = 1,
    /// Plus payloads and debug detail.
    Debug = 2,
}

impl Verbosity {
    /// Map a numeric level (0..=2).
    pub fn from_level(level: u8) -> Result<Self, ServerError> {
        match level {
            0 => Ok(Verbosity::Critical),
            1 => Ok(Verbosity::Connections),
            2 => Ok(Verbosity::Debug),
            other => Err(ServerError::Settings(format!(
                "verbosity level {other} does not exist"
            ))),
        }
    }

    /// Default `tracing` filter directive for this level.
    pub fn filter_directive(&self) -> &'static str {
        match self {
            Verbosity::Critical => "error",
            Verbosity::Connections => "info",
            Verbosity::Debug => "debug",
        }
    }
}

/// Logging and idle-loop configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Verbosity level: 0 critical, 1 connections, 2 debug.
    #[serde(default = "default_verbose")]
    pub verbose: u8,
    /// Milliseconds the idle loop waits for readiness per iteration.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

impl LoggingConfig {
    /// Idle-loop wait as a `Duration`.
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            verbose: default_verbose(),
            tick_ms: default_tick_ms(),
        }
    }
}

fn default_verbose() -> u8 {
    1
}

fn default_tick_ms() -> u64 {
    50
}
