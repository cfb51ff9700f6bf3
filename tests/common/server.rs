//! Test server management.
//!
//! Runs a real `Server` + `Engine` on 127.0.0.1 with an ephemeral port.

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::Duration;

use plexircd::config::ListenConfig;
use plexircd::state::ServerInfo;
use plexircd::{Engine, Server};

/// Connection password of every test server.
pub const PASSWORD: &str = "abc";

/// Server name used as the prefix of numerics.
#[allow(dead_code)]
pub const SERVER_NAME: &str = "test.server";

/// A test server instance, stopped on drop.
pub struct TestServer {
    addr: SocketAddr,
    stop: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl TestServer {
    /// Start a server and wait until it is listening.
    pub fn spawn() -> anyhow::Result<Self> {
        let stop = Arc::new(AtomicBool::new(false));
        let (tx, rx) = mpsc::channel();

        let stop_flag = Arc::clone(&stop);
        let thread = std::thread::spawn(move || {
            let mut server = Server::new(ListenConfig::new("127.0.0.1", 0));
            let engine = Engine::new(ServerInfo::new(SERVER_NAME, "TestNet"), PASSWORD);
            server.set_event_handler(Box::new(engine));

            let started = server
                .activate()
                .map_err(|e| e.to_string())
                .and_then(|()| server.local_addr().ok_or_else(|| "no local address".to_string()));
            let ok = started.is_ok();
            let _ = tx.send(started);
            if !ok {
                return;
            }

            while !stop_flag.load(Ordering::Relaxed) {
                if server.wait(Duration::from_millis(10)).is_err() {
                    break;
                }
            }
            server.deactivate();
        });

        let addr = rx
            .recv_timeout(Duration::from_secs(5))?
            .map_err(|e| anyhow::anyhow!("server failed to start: {e}"))?;

        Ok(Self {
            addr,
            stop,
            thread: Some(thread),
        })
    }

    pub fn address(&self) -> SocketAddr {
        self.addr
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}
