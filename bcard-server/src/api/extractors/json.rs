//! JSON body extractor that reports malformed bodies as 400

use crate::api::error::ApiError;

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};

/// Wrapper around [`axum::Json`] whose rejection matches the API error
/// body instead of axum's default plain-text 422.
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

        Ok(ApiJson(value))
    }
}
