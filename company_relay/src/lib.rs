//! HTTP surface of the company relay.
//!
//! Exposes the batch search and single company endpoints over axum, with the
//! caller's registry API key passed through and CORS configured for a
//! browser front end.

pub mod config;
pub mod cors;
pub mod error;
pub mod extract;
pub mod routes;

pub use config::{CorsConfig, RelayConfig};
pub use routes::{build_router, AppState};
