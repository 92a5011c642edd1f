//! HTTP server for jsoncmp.
//!
//! Serves an HTML comparison of two configured documents and a JSON API
//! that compares documents posted in the request body.

pub mod api;
pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use api::{endpoints, CompareRequest, CompareResponse, HealthResponse};
pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{AppState, JsonCmpServer};
