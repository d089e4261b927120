//! HTTP server layer
//!
//! Axum server with:
//! - CORS open to any origin
//! - Request tracing
//! - Graceful shutdown
//! - Fixed JSON error envelopes

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerError};
