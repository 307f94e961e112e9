//! Report CRUD endpoints.
//!
//! - `GET  /reports`     — list all reports, newest first
//! - `POST /reports`     — create a report from a client-supplied payload
//! - `GET  /reports/:id` — get a single report

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use shiplog_domain::report::CreateReport;

use crate::state::AppState;

/// Fixed message for any payload that fails the shape check. Matches what
/// the UI displays verbatim, so it must not drift.
pub(crate) const INVALID_PAYLOAD: &str = "Invalid payload. Missing required fields.";

/// Build a standardized JSON error response: `{ "error": "<message>" }`.
pub(crate) fn api_error(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(serde_json::json!({ "error": message.into() }))).into_response()
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// GET /reports
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub async fn list_reports(State(state): State<AppState>) -> impl IntoResponse {
    let reports = state.reports.list();
    Json(serde_json::json!({ "data": reports }))
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// GET /reports/:id
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub async fn get_report(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    match state.reports.get(&id) {
        Some(report) => Json(serde_json::json!({ "data": report })).into_response(),
        None => api_error(StatusCode::NOT_FOUND, "Not found"),
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// POST /reports
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Shape validation happens entirely in the extractor: a missing or
/// wrong-typed field surfaces as a [`JsonRejection`] and the store is
/// never touched. Numeric clamping is the store's job, not ours.
pub async fn create_report(
    State(state): State<AppState>,
    payload: Result<Json<CreateReport>, JsonRejection>,
) -> Response {
    let Json(input) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "rejected report payload");
            return api_error(StatusCode::BAD_REQUEST, INVALID_PAYLOAD);
        }
    };

    let report = state.reports.create(input);
    (
        StatusCode::CREATED,
        Json(serde_json::json!({ "data": report })),
    )
        .into_response()
}
