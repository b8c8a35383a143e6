//! User endpoints
//!
//! Existence and email uniqueness are checked before each mutation. The
//! check and the mutation are separate round trips, so a concurrent request
//! can slip in between them.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Router,
};
use serde::Serialize;

use crate::db::DbError;
use crate::http::envelope::ApiResponse;
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ValidUserId};
use crate::http::server::AppState;
use crate::models::{User, UserId, UserInput};

/// Payload of a successful create
#[derive(Debug, Serialize)]
pub struct CreatedUser {
    pub id: i32,
}

/// POST /users - create a user
async fn create_user(
    State(state): State<Arc<AppState>>,
    JsonBody(input): JsonBody<UserInput>,
) -> Result<ApiResponse<CreatedUser>, ApiError> {
    let email_taken = state
        .repo
        .exists_by_email(&input.email)
        .await
        .map_err(|e| ApiError::internal("Failed to check email", e))?;

    if email_taken {
        return Err(ApiError::conflict("Email already exists"));
    }

    // Storage assigns the id; whatever the body carried is dropped here.
    let user = input.into_user(UserId::new(0));
    let id = state
        .repo
        .create(&user)
        .await
        .map_err(|e| ApiError::internal("Failed to create user", e))?;

    tracing::info!(user_id = id, "user created");
    Ok(ApiResponse::new(
        StatusCode::CREATED,
        "User created",
        CreatedUser { id },
    ))
}

/// GET /users/{id} - fetch a single user
async fn get_user(
    State(state): State<Arc<AppState>>,
    ValidUserId(id): ValidUserId,
) -> Result<ApiResponse<User>, ApiError> {
    let user = state.repo.fetch_by_id(id).await.map_err(|e| {
        // Any fetch failure reads as absent to the client.
        if !matches!(e, DbError::NotFound { .. }) {
            tracing::error!(user_id = %id, error = %e, "failed to fetch user");
        }
        ApiError::not_found("User not found")
    })?;

    Ok(ApiResponse::new(StatusCode::OK, "User retrieved", user))
}

/// PUT /users/{id} - replace name, email and age
async fn update_user(
    State(state): State<Arc<AppState>>,
    id: Result<ValidUserId, ApiError>,
    body: Result<JsonBody<UserInput>, ApiError>,
) -> Result<ApiResponse<()>, ApiError> {
    let ValidUserId(id) = id.map_err(|err| match err {
        ApiError::Validation { cause, .. } => ApiError::validation("Invalid user ID", cause),
        other => other,
    })?;
    let JsonBody(input) = body?;

    // The path id always wins over the body id.
    let user = input.into_user(id);

    let exists = state.repo.exists_by_id(id).await.unwrap_or_else(|e| {
        tracing::error!(user_id = %id, error = %e, "failed to check user existence");
        false
    });
    if !exists {
        return Err(ApiError::not_found("User not found"));
    }

    state
        .repo
        .update(id, &user)
        .await
        .map_err(|e| ApiError::internal("Failed to update user", e))?;

    tracing::info!(user_id = %id, "user updated");
    Ok(ApiResponse::empty(StatusCode::OK, "User updated"))
}

/// DELETE /users/{id} - remove a user
async fn delete_user(
    State(state): State<Arc<AppState>>,
    ValidUserId(id): ValidUserId,
) -> Result<ApiResponse<()>, ApiError> {
    let exists = state
        .repo
        .exists_by_id(id)
        .await
        .map_err(|e| ApiError::internal("Failed to check user existence", e))?;
    if !exists {
        return Err(ApiError::not_found("User not found"));
    }

    state
        .repo
        .delete(id)
        .await
        .map_err(|e| ApiError::internal("Failed to delete user", e))?;

    tracing::info!(user_id = %id, "user deleted");
    Ok(ApiResponse::empty(StatusCode::OK, "User deleted"))
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}
