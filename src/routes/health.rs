//! Health check endpoint for container orchestration.
//!
//! A liveness probe: returns 200 OK whenever the process can answer HTTP.

/// Body returned by the health probe.
pub const HEALTH_MESSAGE: &str = "Server is healthy :)\n";

/// Health check handler.
pub async fn health() -> &'static str {
    HEALTH_MESSAGE
}
