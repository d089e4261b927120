//! trivia-server: HTTP API backing the trivia game
//!
//! Serves paginated question lists and categories, question creation,
//! deletion and search, and random quiz question selection.

pub mod config;
pub mod http;
pub mod models;
pub mod store;

pub use config::{DatabaseConfig, ServerConfig};
pub use http::{build_router, run_server, ApiError, AppState};
pub use store::{MemoryStore, PgStore, StoreError, TriviaStore};
