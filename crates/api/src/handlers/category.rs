//! Handlers for the `/categories` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use trivia_core::error::CoreError;
use trivia_core::paging::clamp_page;
use trivia_core::types::DbId;
use trivia_db::models::category::category_map;
use trivia_db::repositories::{CategoryRepo, QuestionRepo};

use crate::error::{AppError, AppResult};
use crate::query::PageParams;
use crate::response::{CategoriesResponse, CategoryQuestionsResponse};
use crate::state::AppState;

/// GET /categories
pub async fn list(State(state): State<AppState>) -> AppResult<Json<CategoriesResponse>> {
    let categories = CategoryRepo::list(&state.pool).await?;

    Ok(Json(CategoriesResponse {
        success: true,
        categories: category_map(&categories),
    }))
}

/// GET /categories/{id}/questions
///
/// 422 when the category does not exist.
pub async fn questions_by_category(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<CategoryQuestionsResponse>> {
    if !CategoryRepo::exists(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::Unprocessable(format!(
            "category {id} does not exist"
        ))));
    }

    let page = clamp_page(params.page);
    let questions = QuestionRepo::list_by_category_page(&state.pool, id, page).await?;
    let total_questions = QuestionRepo::count_by_category(&state.pool, id).await?;
    let categories = CategoryRepo::list(&state.pool).await?;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions,
        total_questions,
        categories: category_map(&categories),
        current_category: id,
    }))
}
