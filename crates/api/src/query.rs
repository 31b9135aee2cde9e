//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Generic pagination parameter (`?page=N`, 1-based).
///
/// Used by every handler that returns a page of questions. Values are
/// clamped via `trivia_core::paging::clamp_page`.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
}
