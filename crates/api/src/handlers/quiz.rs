//! Handler for the `/quizzes` resource.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use trivia_core::error::CoreError;
use trivia_core::types::DbId;
use trivia_db::repositories::{CategoryRepo, QuestionRepo};

use crate::error::{AppError, AppResult};
use crate::extract;
use crate::response::QuizResponse;
use crate::state::AppState;

/// Category id the gameplay client sends for "all categories".
const ALL_CATEGORIES: DbId = 0;

/// Body for `POST /quizzes`.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub quiz_category: DbId,
    #[serde(default)]
    pub previous_questions: Vec<DbId>,
}

/// POST /quizzes
///
/// Serves one random question from the category that is not in
/// `previous_questions`. `quiz_category` 0 draws from all categories; any
/// other value must reference an existing category (422 otherwise).
/// `question` is null once the category is exhausted.
pub async fn next_question(
    State(state): State<AppState>,
    extract::Json(input): extract::Json<QuizRequest>,
) -> AppResult<Json<QuizResponse>> {
    let category_id = if input.quiz_category == ALL_CATEGORIES {
        None
    } else {
        if !CategoryRepo::exists(&state.pool, input.quiz_category).await? {
            return Err(AppError::Core(CoreError::Unprocessable(format!(
                "category {} does not exist",
                input.quiz_category
            ))));
        }
        Some(input.quiz_category)
    };

    let question =
        QuestionRepo::random_unseen(&state.pool, category_id, &input.previous_questions).await?;

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}
