//! Postgres-backed store
//!
//! - Reads go straight to the pool
//! - Insert and delete run in a transaction; dropping it on an error path
//!   rolls back, and the pooled connection is released either way

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use super::{migrations, StoreError, StoreResult, TriviaStore};
use crate::models::{Category, NewQuestion, Question};

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

/// Store backed by a sqlx connection pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool capped at `max_connections` and wrap it.
    ///
    /// The pool is the only holder of connections; every store call
    /// borrows one and hands it back when the call returns.
    pub async fn connect(database_url: &str, max_connections: u32) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        tracing::debug!(max_connections, "Database pool ready");
        Ok(Self::new(pool))
    }

    /// Create the trivia tables if they are missing.
    pub async fn migrate(&self) -> StoreResult<()> {
        migrations::run(&self.pool).await?;
        Ok(())
    }

    /// Wait for pooled connections to close.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Escape `ILIKE` wildcards so the term matches literally.
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl TriviaStore for PgStore {
    async fn categories(&self) -> StoreResult<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, type FROM categories ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(categories)
    }

    async fn category(&self, id: i32) -> StoreResult<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(
            "SELECT id, type FROM categories WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(category)
    }

    async fn questions(&self) -> StoreResult<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(questions)
    }

    async fn questions_in_category(&self, category: i32) -> StoreResult<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE category = $1 ORDER BY id"
        ))
        .bind(category)
        .fetch_all(&self.pool)
        .await?;
        Ok(questions)
    }

    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE question ILIKE $1 ORDER BY id"
        ))
        .bind(like_pattern(term))
        .fetch_all(&self.pool)
        .await?;
        Ok(questions)
    }

    async fn insert_question(&self, new: NewQuestion) -> StoreResult<Question> {
        let mut tx = self.pool.begin().await?;

        let question = sqlx::query_as::<_, Question>(&format!(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING {QUESTION_COLUMNS}
            "#
        ))
        .bind(&new.question)
        .bind(&new.answer)
        .bind(new.category)
        .bind(new.difficulty)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(question)
    }

    async fn delete_question(&self, id: i32) -> StoreResult<()> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(StoreError::question_not_found(id));
        }

        tx.commit().await?;
        Ok(())
    }
}
