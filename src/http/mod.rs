//! HTTP server lifecycle.
//!
//! Binds the listener from configuration, serves the router and drains
//! in-flight requests on SIGTERM/SIGINT.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
