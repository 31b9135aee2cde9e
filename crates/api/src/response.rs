//! Success envelope types for API handlers.
//!
//! Every success response carries `"success": true` plus endpoint-specific
//! fields. Use these instead of ad-hoc `serde_json::json!` to get
//! compile-time type safety and consistent serialization.

use serde::Serialize;
use trivia_core::types::DbId;
use trivia_db::models::category::CategoryMap;
use trivia_db::models::question::Question;

/// `GET /categories`
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
}

/// `GET /questions`
#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub categories: CategoryMap,
}

/// `DELETE /questions/{id}`
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: DbId,
    pub questions: Vec<Question>,
}

/// `POST /questions`
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: DbId,
}

/// `POST /questions/search`
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
}

/// `GET /categories/{id}/questions`
#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub categories: CategoryMap,
    pub current_category: DbId,
}

/// `POST /quizzes`
///
/// `question` is `null` once every question in the category has been seen;
/// the client treats that as the end of the quiz.
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}
