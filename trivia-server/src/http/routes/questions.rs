//! Question endpoints
//!
//! - GET lists one page of every question
//! - POST either creates a question or searches, depending on `searchTerm`
//! - DELETE removes a question and returns the refreshed first page

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, PageQuery, PathId};
use crate::http::server::AppState;
use crate::models::{
    Category, CategoryMap, NewQuestion, Page, Question, QuestionAction, QuestionForm,
};
use crate::store::TriviaStore;

/// Question listing response
#[derive(Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    /// Type of the first category; `None` when there are no categories
    pub current_category: Option<String>,
    pub categories: CategoryMap,
}

/// Search results; `total_questions` counts every match, not just this page
#[derive(Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: i32,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: i32,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// GET /questions?page=N
///
/// An empty page is a 404. Store failures here are not folded into a fixed
/// status and surface as 500.
async fn list_questions(
    State(state): State<AppState>,
    PageQuery(page): PageQuery,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let store = state.store();
    let questions = store.questions().await?;
    let total_questions = questions.len();
    let categories = store.categories().await?;

    let questions = page.slice(questions);
    if questions.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(QuestionListResponse {
        success: true,
        questions,
        total_questions,
        current_category: categories.first().map(|c| c.kind.clone()),
        categories: Category::to_map(&categories),
    }))
}

/// DELETE /questions/{id}
async fn delete_question(
    State(state): State<AppState>,
    PathId(id): PathId,
    PageQuery(page): PageQuery,
) -> Result<Json<DeletedResponse>, ApiError> {
    let store = state.store();
    store
        .delete_question(id)
        .await
        .map_err(ApiError::not_found)?;
    tracing::info!(question_id = id, "Question deleted");

    let questions = store.questions().await.map_err(ApiError::not_found)?;
    let total_questions = questions.len();

    Ok(Json(DeletedResponse {
        success: true,
        deleted: id,
        questions: page.slice(questions),
        total_questions,
    }))
}

/// POST /questions - create, or search when `searchTerm` is present
async fn create_or_search(
    State(state): State<AppState>,
    PageQuery(page): PageQuery,
    JsonBody(form): JsonBody<QuestionForm>,
) -> Result<Response, ApiError> {
    match form.into_action()? {
        QuestionAction::Search(term) => search(state.store(), &term, page).await,
        QuestionAction::Create(new) => create(state.store(), new, page).await,
    }
}

async fn search(store: &dyn TriviaStore, term: &str, page: Page) -> Result<Response, ApiError> {
    let matches = store
        .search_questions(term)
        .await
        .map_err(ApiError::unprocessable)?;
    let total_questions = matches.len();

    Ok(Json(SearchResponse {
        success: true,
        questions: page.slice(matches),
        total_questions,
    })
    .into_response())
}

async fn create(store: &dyn TriviaStore, new: NewQuestion, page: Page) -> Result<Response, ApiError> {
    let question = store
        .insert_question(new)
        .await
        .map_err(ApiError::unprocessable)?;
    tracing::info!(question_id = question.id, "Question created");

    let questions = store.questions().await.map_err(ApiError::unprocessable)?;
    let total_questions = questions.len();

    let body = CreatedResponse {
        success: true,
        created: question.id,
        questions: page.slice(questions),
        total_questions,
    };
    Ok((StatusCode::CREATED, Json(body)).into_response())
}

/// Question routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/questions", get(list_questions).post(create_or_search))
        .route("/questions/{id}", delete(delete_question))
}
