//! Response envelope
//!
//! Success: `{"status": 200, "message": "...", "data": ...}`
//! Failure: `{"status": 404, "error": "..."}`

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
struct SuccessBody<T> {
    status: u16,
    message: &'static str,
    data: Option<T>,
}

#[derive(Serialize)]
struct FailureBody<'a> {
    status: u16,
    error: &'a str,
}

/// Successful response with an optional payload. `None` renders as `"data": null`.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub status: StatusCode,
    pub message: &'static str,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn new(status: StatusCode, message: &'static str, data: T) -> Self {
        Self {
            status,
            message,
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn empty(status: StatusCode, message: &'static str) -> Self {
        Self {
            status,
            message,
            data: None,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let body = SuccessBody {
            status: self.status.as_u16(),
            message: self.message,
            data: self.data,
        };
        (self.status, Json(body)).into_response()
    }
}

/// Render the failure envelope.
pub(crate) fn failure(status: StatusCode, error: &str) -> Response {
    let body = FailureBody {
        status: status.as_u16(),
        error,
    };
    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::{json, Value};

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn success_with_data() {
        let response =
            ApiResponse::new(StatusCode::CREATED, "User created", json!({"id": 1})).into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            body_json(response).await,
            json!({"status": 201, "message": "User created", "data": {"id": 1}})
        );
    }

    #[tokio::test]
    async fn success_without_data_renders_null() {
        let response = ApiResponse::empty(StatusCode::OK, "User deleted").into_response();
        assert_eq!(
            body_json(response).await,
            json!({"status": 200, "message": "User deleted", "data": null})
        );
    }

    #[tokio::test]
    async fn failure_has_no_data_or_message() {
        let response = failure(StatusCode::CONFLICT, "Email already exists");
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(
            body_json(response).await,
            json!({"status": 409, "error": "Email already exists"})
        );
    }
}
