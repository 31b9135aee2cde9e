//! Question model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trivia_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `questions` table.
///
/// The `category_id` column is exposed as `category` on the wire; queries
/// alias the column accordingly (see `QuestionRepo::COLUMNS`).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Question {
    pub id: DbId,
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: DbId,
    #[serde(skip_serializing)]
    pub created_at: Timestamp,
}

/// DTO for creating a new question.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuestion {
    #[validate(length(min = 1, message = "question text must not be empty"))]
    pub question: String,
    #[validate(length(min = 1, message = "answer text must not be empty"))]
    pub answer: String,
    #[validate(range(min = 1, max = 5, message = "difficulty must be between 1 and 5"))]
    pub difficulty: i32,
    pub category: DbId,
}
