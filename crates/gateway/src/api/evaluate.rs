//! `POST /reports/evaluate` — run the configured evaluation provider on a
//! draft report and return the generated score and feedback.
//!
//! The client submits the result back through `POST /reports`; evaluation
//! itself never touches the store.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use shiplog_evaluator::EvaluationRequest;

use crate::state::AppState;

use super::reports::{api_error, INVALID_PAYLOAD};

pub async fn evaluate_report(
    State(state): State<AppState>,
    payload: Result<Json<EvaluationRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "rejected evaluation payload");
            return api_error(StatusCode::BAD_REQUEST, INVALID_PAYLOAD);
        }
    };

    match state.evaluator.evaluate(req).await {
        Ok(evaluation) => Json(serde_json::json!({ "data": evaluation })).into_response(),
        Err(e) => {
            tracing::error!(error = %e, provider = state.evaluator.provider_id(), "evaluation failed");
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("evaluation failed: {e}"),
            )
        }
    }
}
