//! plexircd binary.
//!
//! Loads the configuration, wires the protocol engine to the multiplexer
//! and runs the idle loop until a poll failure.

use plexircd::config::{self, Config, Verbosity};
use plexircd::{Engine, Server};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());
    let loaded = Config::load(&config_path);

    // RUST_LOG wins; otherwise follow the configured verbosity.
    let directive = loaded
        .as_ref()
        .ok()
        .and_then(|c| Verbosity::from_level(c.logging.verbose).ok())
        .unwrap_or(Verbosity::Connections)
        .filter_directive();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive)),
        )
        .with_target(true)
        .init();

    let config = loaded.map_err(|e| {
        error!(path = %config_path, error = %e, "Failed to load config");
        e
    })?;

    if let Err(errors) = config::validate(&config) {
        for e in &errors {
            error!(error = %e, "Invalid configuration");
        }
        anyhow::bail!("configuration has {} error(s)", errors.len());
    }

    info!(
        server = %config.server.name,
        network = %config.server.network,
        port = config.listen.port,
        "Starting plexircd"
    );

    let mut server = Server::new(config.listen.clone());
    server.set_verbose(config.logging.verbose)?;
    server.set_event_handler(Box::new(Engine::from_config(&config.server)));
    server.activate()?;

    if let Some(addr) = server.local_addr() {
        info!(addr = %addr, "Accepting connections");
    }

    let tick = config.logging.tick();
    loop {
        if let Err(e) = server.wait(tick) {
            error!(error = %e, "Poll failed, shutting down");
            server.deactivate();
            return Err(e.into());
        }
    }
}
