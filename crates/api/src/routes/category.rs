//! Route definitions for categories.

use axum::routing::get;
use axum::Router;

use crate::handlers::category;
use crate::state::AppState;

/// Routes mounted at `/categories`.
///
/// ```text
/// GET /categories                  -> list
/// GET /categories/{id}/questions   -> questions_by_category
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(category::list))
        .route(
            "/categories/{id}/questions",
            get(category::questions_by_category),
        )
}
