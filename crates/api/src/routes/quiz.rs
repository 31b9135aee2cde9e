//! Route definition for the quiz endpoint.

use axum::routing::post;
use axum::Router;

use crate::handlers::quiz;
use crate::state::AppState;

/// Routes mounted at `/quizzes`.
///
/// ```text
/// POST /quizzes -> next_question
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/quizzes", post(quiz::next_question))
}
