//! Integration test common infrastructure.
//!
//! Provides a server running its poll loop on a background thread and a
//! blocking line-oriented client.

pub mod client;
pub mod server;

#[allow(unused_imports)]
pub use client::TestClient;
#[allow(unused_imports)]
pub use server::{PASSWORD, TestServer};
