//! Route definitions for questions.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::question;
use crate::state::AppState;

/// Routes mounted at `/questions`.
///
/// ```text
/// GET    /questions          -> list (paginated)
/// POST   /questions          -> create
/// DELETE /questions/{id}     -> delete
/// POST   /questions/search   -> search
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/questions", get(question::list).post(question::create))
        .route("/questions/{id}", delete(question::delete))
        .route("/questions/search", post(question::search))
}
