use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;

use super::{ApiError, AppState};
use crate::records::{Initiative, OrganizerAssignment};

const INVALID_INITIATIVE: &str = "Invalid initiative data.";

/// `GET /api/initiatives`: every stored initiative.
pub async fn list_initiatives(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Initiative>>, ApiError> {
    let initiatives = state
        .initiatives
        .load()
        .await
        .map_err(|e| ApiError::from(e).store_message("Failed to fetch initiatives."))?;
    Ok(Json(initiatives))
}

/// `POST /api/initiatives`: append the body as sent once the required fields check out.
pub async fn register_initiative(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Initiative>, JsonRejection>,
) -> Result<(StatusCode, &'static str), ApiError> {
    let Json(initiative) = body.map_err(|rejection| {
        tracing::debug!(%rejection, "rejected initiative body");
        ApiError::Validation(INVALID_INITIATIVE)
    })?;
    if !initiative.is_complete() {
        return Err(ApiError::Validation(INVALID_INITIATIVE));
    }

    state
        .initiatives
        .append(initiative)
        .await
        .map_err(|e| ApiError::from(e).store_message("Failed to save initiative."))?;

    tracing::info!("initiative added");
    Ok((StatusCode::CREATED, "Initiative added successfully."))
}

/// `POST /api/initiatives/:id`: overwrite the organizer with whatever value was sent.
pub async fn assign_organizer(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
    body: Result<Json<OrganizerAssignment>, JsonRejection>,
) -> Result<(StatusCode, &'static str), ApiError> {
    let OrganizerAssignment { organizer } = match body {
        Ok(Json(assignment)) => assignment,
        // A bodyless request leaves the organizer unset, same as `{}`.
        Err(JsonRejection::MissingJsonContentType(_)) => OrganizerAssignment::default(),
        // Only a body that isn't a JSON object at all gets here.
        Err(rejection) => {
            tracing::debug!(%rejection, "rejected organizer body");
            return Err(ApiError::Validation("Invalid organizer data."));
        }
    };
    let id = parse_leading_int(&raw_id);

    state
        .initiatives
        .modify(|initiatives| {
            let initiative = id
                .and_then(|id| initiatives.iter_mut().find(|i| i.has_id(id)))
                .ok_or(ApiError::NotFound("Initiative not found."))?;
            initiative.organizer = organizer;
            Ok(())
        })
        .await
        .map_err(|e: ApiError| e.store_message("Failed to update initiative."))?;

    tracing::info!(id = %raw_id, "initiative organizer updated");
    Ok((StatusCode::OK, "Initiative updated successfully."))
}

/// `GET /api/initiatives/organizer/:name`: initiatives whose organizer matches, ignoring case.
pub async fn initiatives_by_organizer(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<Vec<Initiative>>, ApiError> {
    let initiatives = state
        .initiatives
        .filter(|i| i.organized_by(&name))
        .await
        .map_err(|e| ApiError::from(e).store_message("Failed to fetch initiatives."))?;
    Ok(Json(initiatives))
}

/// Integer prefix of a path segment: leading whitespace, an optional sign, then
/// decimal digits or `0x` hex digits. Trailing junk is ignored (`"12abc"` is 12).
/// `None` when there are no digits or the value doesn't fit in an `i64`.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, s) = match s.get(..2) {
        Some("0x") | Some("0X") => (16, &s[2..]),
        _ => (10, s),
    };
    let digits: &str = {
        let end = s
            .char_indices()
            .find(|(_, c)| !c.is_digit(radix))
            .map_or(s.len(), |(i, _)| i);
        &s[..end]
    };
    if digits.is_empty() {
        return None;
    }
    let magnitude = i64::from_str_radix(digits, radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
