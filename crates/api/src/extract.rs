//! Request extractors that speak the API's error envelope.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use trivia_core::error::CoreError;

use crate::error::AppError;

/// Drop-in replacement for [`axum::Json`] whose rejection is the API's 422
/// envelope instead of axum's plain-text response.
///
/// Missing fields, type mismatches, and unparseable bodies all surface as
/// `{"success": false, "message": "unprocessable"}`.
pub struct Json<T>(pub T);

impl<S, T> FromRequest<S> for Json<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::Core(CoreError::Unprocessable(
                rejection.body_text(),
            ))),
        }
    }
}
