//! Category endpoints
//!
//! Failures on these routes are always reported as 404.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::{PageQuery, PathId};
use crate::http::server::AppState;
use crate::models::{Category, CategoryMap, Question};

/// Category listing response
#[derive(Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
    pub total_categories: usize,
}

/// Questions of one category
#[derive(Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: String,
}

/// GET /categories - every category as an id -> type map
async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = state
        .store()
        .categories()
        .await
        .map_err(ApiError::not_found)?;

    Ok(Json(CategoriesResponse {
        success: true,
        total_categories: categories.len(),
        categories: Category::to_map(&categories),
    }))
}

/// GET /categories/{id}/questions - one page of a category's questions
async fn category_questions(
    State(state): State<AppState>,
    PathId(id): PathId,
    PageQuery(page): PageQuery,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let store = state.store();
    let category = store
        .category(id)
        .await
        .map_err(ApiError::not_found)?
        .ok_or(ApiError::NotFound)?;

    let questions = store
        .questions_in_category(category.id)
        .await
        .map_err(ApiError::not_found)?;
    let total_questions = questions.len();

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: page.slice(questions),
        total_questions,
        current_category: category.kind,
    }))
}

/// Category routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}/questions", get(category_questions))
}
