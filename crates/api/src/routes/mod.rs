pub mod category;
pub mod health;
pub mod question;
pub mod quiz;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// Route hierarchy:
///
/// ```text
/// /categories                      GET    list categories
/// /categories/{id}/questions       GET    questions in one category
///
/// /questions                       GET    paginated list, POST create
/// /questions/{id}                  DELETE delete one question
/// /questions/search                POST   substring search
///
/// /quizzes                         POST   next quiz question
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(category::router())
        .merge(question::router())
        .merge(quiz::router())
}
