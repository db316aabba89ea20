//! HTTP surface: shared state, routing, and error-to-status mapping.
//!
//! Every handler is one read, mutate, write pass over a [`RecordStore`]. There is
//! no locking between requests, see [`RecordStore`] for what that means.

pub mod initiatives;
pub mod users;

use crate::error::{Error, Result};
use crate::persist::WriteMode;
use crate::records::{Initiative, User};
use crate::store::RecordStore;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use std::path::Path;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// File name of the initiative collection inside the data directory.
pub const INITIATIVES_FILE: &str = "initiatives.json";
/// File name of the user collection inside the data directory.
pub const USERS_FILE: &str = "users.json";

/// The two record stores every handler works against.
#[derive(Debug)]
pub struct AppState {
    pub initiatives: RecordStore<Initiative>,
    pub users: RecordStore<User>,
}

impl AppState {
    /// Stores for `initiatives.json` and `users.json` under `data_dir`.
    pub fn open(data_dir: &Path, pretty: bool, mode: WriteMode) -> Result<Self> {
        let initiatives = RecordStore::builder(data_dir.join(INITIATIVES_FILE))
            .pretty(pretty)
            .write_mode(mode)
            .build()?;
        let users = RecordStore::builder(data_dir.join(USERS_FILE))
            .pretty(pretty)
            .write_mode(mode)
            .build()?;
        Ok(Self { initiatives, users })
    }
}

/// All routes, with request tracing, over shared `state`.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/api/initiatives",
            get(initiatives::list_initiatives).post(initiatives::register_initiative),
        )
        .route("/api/initiatives/:id", post(initiatives::assign_organizer))
        .route(
            "/api/initiatives/organizer/:name",
            get(initiatives::initiatives_by_organizer),
        )
        .route("/api/users", post(users::register_user))
        .route("/api/users/organizers", get(users::list_organizers))
        .route("/test-read-users", get(users::list_users))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Why a request failed. Each variant maps to one status code and a plain-text body.
#[derive(Debug)]
pub enum ApiError {
    /// A required field is missing or the body has the wrong shape.
    Validation(&'static str),
    /// No record with the requested identity.
    NotFound(&'static str),
    /// The identity is already taken. Reported as 400.
    Conflict(&'static str),
    /// Store failure. The message is what the client sees; `source` is only logged.
    Store { message: &'static str, source: Error },
}

impl ApiError {
    /// Replace the client-facing message of a store failure. Other variants pass
    /// through unchanged.
    pub fn store_message(self, message: &'static str) -> Self {
        match self {
            ApiError::Store { source, .. } => ApiError::Store { message, source },
            other => other,
        }
    }

    /// Status code sent to the client.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::Conflict(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<Error> for ApiError {
    fn from(source: Error) -> Self {
        ApiError::Store {
            message: "Internal server error.",
            source,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::Validation(m) | ApiError::NotFound(m) | ApiError::Conflict(m) => m,
            ApiError::Store { message, source } => {
                tracing::error!(error = %source, "{message}");
                message
            }
        };
        (status, message).into_response()
    }
}
