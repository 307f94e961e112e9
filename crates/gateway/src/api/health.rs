//! `GET /healthz` — liveness probe with a report count for quick checks.

use axum::extract::State;
use axum::response::{IntoResponse, Json};

use crate::state::AppState;

pub async fn healthz(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "reports": state.reports.len(),
    }))
}
