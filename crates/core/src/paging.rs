//! Pagination constants and helpers.
//!
//! This module lives in `core` (zero internal deps) so it can be used by
//! both the repository layer and the API handlers.

/// Number of questions returned per page by every list endpoint.
pub const QUESTIONS_PER_PAGE: i64 = 10;

/// Clamp a user-provided 1-based page number to valid bounds.
///
/// A missing page defaults to 1; zero and negative values floor at 1.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}

/// Row offset for a 1-based page number.
///
/// # Examples
///
/// ```
/// use trivia_core::paging::page_offset;
/// assert_eq!(page_offset(1), 0);
/// assert_eq!(page_offset(3), 20);
/// ```
pub fn page_offset(page: i64) -> i64 {
    (page.max(1) - 1) * QUESTIONS_PER_PAGE
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- clamp_page ----------------------------------------------------------

    #[test]
    fn missing_page_defaults_to_first() {
        assert_eq!(clamp_page(None), 1);
    }

    #[test]
    fn zero_page_floors_at_first() {
        assert_eq!(clamp_page(Some(0)), 1);
    }

    #[test]
    fn negative_page_floors_at_first() {
        assert_eq!(clamp_page(Some(-7)), 1);
    }

    #[test]
    fn valid_page_passes_through() {
        assert_eq!(clamp_page(Some(4)), 4);
    }

    // -- page_offset ---------------------------------------------------------

    #[test]
    fn first_page_starts_at_zero() {
        assert_eq!(page_offset(1), 0);
    }

    #[test]
    fn offset_steps_by_page_size() {
        assert_eq!(page_offset(2), QUESTIONS_PER_PAGE);
        assert_eq!(page_offset(5), 4 * QUESTIONS_PER_PAGE);
    }
}
