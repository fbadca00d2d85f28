//! HTTP server layer
//!
//! Axum server with:
//! - CORS (localhost only by default)
//! - Request tracing
//! - Panic recovery into 500 responses
//! - Graceful shutdown with a deadline
//! - JSON error responses

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, serve_with_shutdown, AppState, ServerConfig, ServerError};
