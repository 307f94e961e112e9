pub mod evaluate;
pub mod health;
pub mod reports;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the full API router.
///
/// All routes are public — authentication is out of scope for this
/// prototype.
pub fn router() -> Router<AppState> {
    Router::new()
        // Health probe
        .route("/healthz", get(health::healthz))
        // Reports
        .route(
            "/reports",
            get(reports::list_reports).post(reports::create_report),
        )
        .route("/reports/evaluate", post(evaluate::evaluate_report))
        .route("/reports/:id", get(reports::get_report))
}
