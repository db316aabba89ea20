use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;

use super::{ApiError, AppState};
use crate::records::{User, ROLE_VOLUNTEER};

const INVALID_USER: &str = "Invalid user data.";

/// `POST /api/users`: registers a volunteer. Emails are compared exactly, case
/// included. Any role the client sends is replaced.
pub async fn register_user(
    State(state): State<Arc<AppState>>,
    body: Result<Json<User>, JsonRejection>,
) -> Result<(StatusCode, &'static str), ApiError> {
    let Json(mut user) = body.map_err(|rejection| {
        tracing::debug!(%rejection, "rejected user body");
        ApiError::Validation(INVALID_USER)
    })?;
    if !user.is_complete() {
        return Err(ApiError::Validation(INVALID_USER));
    }
    user.role = Some(ROLE_VOLUNTEER.into());

    state
        .users
        .modify(|users| {
            if users.iter().any(|u| u.email == user.email) {
                return Err(ApiError::Conflict("Email already registered."));
            }
            users.push(user);
            Ok(())
        })
        .await
        .map_err(|e: ApiError| e.store_message("Failed to save user."))?;

    tracing::info!("user registered");
    Ok((
        StatusCode::CREATED,
        "User registered successfully. please login at new email",
    ))
}

/// `GET /api/users/organizers`: users whose role is `"organizer"`.
pub async fn list_organizers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<User>>, ApiError> {
    let organizers = state
        .users
        .filter(User::is_organizer)
        .await
        .map_err(|e| ApiError::from(e).store_message("Failed to fetch organizers."))?;
    Ok(Json(organizers))
}

/// `GET /test-read-users`: diagnostic dump of every stored user, passwords included.
pub async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state
        .users
        .load()
        .await
        .map_err(|e| ApiError::from(e).store_message("Failed to read users."))?;
    Ok(Json(users))
}
