//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the corresponding repository in `trivia_db` and map
//! errors via [`crate::error::AppError`].

pub mod category;
pub mod question;
pub mod quiz;
