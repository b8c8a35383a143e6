//! Custom Axum extractors
//!
//! Both reject with the failure envelope instead of axum's plain-text
//! rejections.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::{UserId, ValidationError};

/// Extract and validate a user id from the path
pub struct ValidUserId(pub UserId);

impl<S> FromRequestParts<S> for ValidUserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::validation("Invalid ID", ValidationError::Empty { field: "id" }))?;

        let id = raw
            .parse::<UserId>()
            .map_err(|cause| ApiError::validation("Invalid ID", cause))?;

        Ok(Self(id))
    }
}

/// JSON body bound to `T`. Any rejection (bad syntax, wrong types, missing
/// fields, wrong content type) is a 400.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| {
                ApiError::validation(
                    "Invalid input",
                    ValidationError::MalformedBody {
                        reason: rejection.body_text(),
                    },
                )
            })?;

        Ok(Self(value))
    }
}
