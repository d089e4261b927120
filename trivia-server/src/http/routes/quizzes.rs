//! Quiz endpoint - serves one random question not yet seen in this quiz

use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::{pick_random, quiz_candidates, Question, QuizRequest};

#[derive(Serialize)]
pub struct QuizResponse {
    pub success: bool,
    /// `None` once every candidate has been served
    pub question: Option<Question>,
    pub previous_questions: Vec<i32>,
}

/// POST /quizzes
///
/// Category id 0, or no category, draws from every question. Any failure
/// is reported as 422.
async fn next_question(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<QuizRequest>,
) -> Result<Json<QuizResponse>, ApiError> {
    let store = state.store();
    let questions = match req.category_filter()? {
        None => store.questions().await,
        Some(category) => store.questions_in_category(category).await,
    }
    .map_err(ApiError::unprocessable)?;

    let candidates = quiz_candidates(questions, &req.previous_questions);
    let question = pick_random(&candidates, &mut rand::thread_rng()).cloned();

    Ok(Json(QuizResponse {
        success: true,
        question,
        previous_questions: req.previous_questions,
    }))
}

/// Quiz routes
pub fn router() -> Router<AppState> {
    Router::new().route("/quizzes", post(next_question))
}
