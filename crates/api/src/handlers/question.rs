//! Handlers for the `/questions` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use trivia_core::error::CoreError;
use trivia_core::paging::clamp_page;
use trivia_core::types::DbId;
use trivia_db::models::category::category_map;
use trivia_db::models::question::CreateQuestion;
use trivia_db::repositories::{CategoryRepo, QuestionRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract;
use crate::query::PageParams;
use crate::response::{CreatedResponse, DeletedResponse, QuestionListResponse, SearchResponse};
use crate::state::AppState;

/// Body for `POST /questions/search`. The client sends camelCase.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

/// GET /questions?page=N
///
/// Questions in stable id order, 10 per page. An empty slice is a 404,
/// including page 1 of an empty table.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<QuestionListResponse>> {
    let page = clamp_page(params.page);
    let questions = QuestionRepo::list_page(&state.pool, page).await?;
    if questions.is_empty() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Question page",
            id: page,
        }));
    }

    let total_questions = QuestionRepo::count(&state.pool).await?;
    let categories = CategoryRepo::list(&state.pool).await?;

    Ok(Json(QuestionListResponse {
        success: true,
        questions,
        total_questions,
        categories: category_map(&categories),
    }))
}

/// POST /questions
///
/// Validates the payload (non-empty text, difficulty 1-5); an unknown
/// category surfaces as a foreign-key violation and maps to 422.
pub async fn create(
    State(state): State<AppState>,
    extract::Json(input): extract::Json<CreateQuestion>,
) -> AppResult<Json<CreatedResponse>> {
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;

    let question = QuestionRepo::create(&state.pool, &input).await?;

    Ok(Json(CreatedResponse {
        success: true,
        created: question.id,
    }))
}

/// DELETE /questions/{id}
///
/// Echoes the deleted id and returns the first page of what remains.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DeletedResponse>> {
    let deleted = QuestionRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Question",
            id,
        }));
    }

    let questions = QuestionRepo::list_page(&state.pool, 1).await?;

    Ok(Json(DeletedResponse {
        success: true,
        deleted: id,
        questions,
    }))
}

/// POST /questions/search
///
/// Case-insensitive substring match on the question text. No matches is a
/// success with an empty list, not an error.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
    extract::Json(input): extract::Json<SearchRequest>,
) -> AppResult<Json<SearchResponse>> {
    let page = clamp_page(params.page);
    let questions = QuestionRepo::search_page(&state.pool, &input.search_term, page).await?;
    let total_questions = QuestionRepo::count_search(&state.pool, &input.search_term).await?;

    Ok(Json(SearchResponse {
        success: true,
        questions,
        total_questions,
    }))
}
