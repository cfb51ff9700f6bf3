//! Core handler infrastructure.

mod context;
mod registry;
#[cfg(test)]
pub(crate) mod testing;

pub use context::{Context, Handler, first_param};
pub use registry::Registry;
