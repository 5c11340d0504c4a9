//! FooBar: a FizzBuzz-style sequence served over HTTP.
//!
//! `GET /foobar?length=N` returns the tokens for positions `1..=N`, and
//! `GET /healthz` answers liveness probes. The sequence rules live in
//! [`sequence`]; everything else is the HTTP service around them.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod sequence;

pub use error::AppError;
pub use routes::create_router;
pub use sequence::{generate, Sequence, SequenceError, Token};
