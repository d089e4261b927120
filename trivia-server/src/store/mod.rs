//! Store layer - the only code that touches persisted questions and categories
//!
//! Handlers depend on the [`TriviaStore`] trait; [`PgStore`] backs it with
//! Postgres and [`MemoryStore`] keeps everything in process.

pub mod memory;
mod migrations;
pub mod postgres;

use async_trait::async_trait;

use crate::models::{Category, NewQuestion, Question};

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl StoreError {
    pub fn question_not_found(id: i32) -> Self {
        Self::NotFound {
            resource: "question",
            id: id.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence operations behind the HTTP handlers.
///
/// Every list is ordered by id ascending.
#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// All categories.
    async fn categories(&self) -> StoreResult<Vec<Category>>;

    /// A single category, `None` if absent.
    async fn category(&self, id: i32) -> StoreResult<Option<Category>>;

    /// All questions.
    async fn questions(&self) -> StoreResult<Vec<Question>>;

    /// Questions whose category equals `category`.
    async fn questions_in_category(&self, category: i32) -> StoreResult<Vec<Question>>;

    /// Questions whose text contains `term`, ignoring case.
    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>>;

    /// Insert a question and return it with its generated id.
    async fn insert_question(&self, new: NewQuestion) -> StoreResult<Question>;

    /// Delete a question; `StoreError::NotFound` if it does not exist.
    async fn delete_question(&self, id: i32) -> StoreResult<()>;
}
