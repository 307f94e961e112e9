//! End-to-end tests driving the report API through the router.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use shiplog_domain::config::Config;
use shiplog_evaluator::create_evaluator;
use shiplog_gateway::state::AppState;
use shiplog_gateway::store::ReportStore;

fn test_app() -> Router {
    let config = Arc::new(Config::default());
    let state = AppState {
        evaluator: create_evaluator(&config.evaluation),
        reports: Arc::new(ReportStore::new()),
        config,
    };
    shiplog_gateway::api::router().with_state(state)
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn list_returns_seeded_reports_newest_first() {
    let app = test_app();

    let response = app.oneshot(get("/reports")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 3);
    assert_eq!(data[0]["id"], "seed-3");

    let stamps: Vec<chrono::DateTime<chrono::FixedOffset>> = data
        .iter()
        .map(|r| {
            chrono::DateTime::parse_from_rfc3339(r["createdAt"].as_str().unwrap()).unwrap()
        })
        .collect();
    for pair in stamps.windows(2) {
        assert!(pair[0] >= pair[1], "reports out of order: {stamps:?}");
    }
}

#[tokio::test]
async fn get_returns_a_seeded_report() {
    let app = test_app();

    let response = app.oneshot(get("/reports/seed-1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], "seed-1");
    assert_eq!(json["data"]["changedFileCount"], 7);
}

#[tokio::test]
async fn get_unknown_id_returns_404() {
    let app = test_app();

    let response = app.oneshot(get("/reports/does-not-exist")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({ "error": "Not found" }));
}

#[tokio::test]
async fn create_report_end_to_end() {
    let app = test_app();

    let payload = r#"{
        "workDurationSec": 95,
        "githubUrl": "",
        "content": "test",
        "diffSummary": "x",
        "changedFileCount": 3,
        "aiScore": 150,
        "aiFeedback": "y",
        "aiShortComment": "z"
    }"#;

    let response = app
        .clone()
        .oneshot(post_json("/reports", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let report = &json["data"];
    assert_eq!(report["aiScore"], 100, "out-of-range score must clamp");
    assert_eq!(report["workDurationSec"], 95);
    assert!(!report["id"].as_str().unwrap().is_empty());
    assert!(report["createdAt"].as_str().is_some());

    // The new report shows up first in the list.
    let id = report["id"].as_str().unwrap().to_string();
    let response = app.oneshot(get("/reports")).await.unwrap();
    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 4);
    assert_eq!(data[0]["id"], id.as_str());
}

#[tokio::test]
async fn create_rejects_wrong_typed_field() {
    let app = test_app();

    // workDurationSec as a string must fail the shape check.
    let payload = r#"{
        "workDurationSec": "95",
        "githubUrl": "",
        "content": "test",
        "diffSummary": "x",
        "changedFileCount": 3,
        "aiScore": 80,
        "aiFeedback": "y",
        "aiShortComment": "z"
    }"#;

    let response = app
        .clone()
        .oneshot(post_json("/reports", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(
        json,
        serde_json::json!({ "error": "Invalid payload. Missing required fields." })
    );

    // The store was never touched.
    let response = app.oneshot(get("/reports")).await.unwrap();
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn create_rejects_missing_field() {
    let app = test_app();

    let response = app
        .oneshot(post_json("/reports", r#"{ "workDurationSec": 95 }"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(
        json["error"],
        "Invalid payload. Missing required fields."
    );
}

#[tokio::test]
async fn create_clamps_negative_duration() {
    let app = test_app();

    let payload = r#"{
        "workDurationSec": -30,
        "githubUrl": "",
        "content": "test",
        "diffSummary": "x",
        "changedFileCount": 3,
        "aiScore": 80,
        "aiFeedback": "y",
        "aiShortComment": "z"
    }"#;

    let response = app.oneshot(post_json("/reports", payload)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["workDurationSec"], 0);
}

#[tokio::test]
async fn evaluate_returns_a_generated_verdict() {
    let app = test_app();

    let payload = r#"{
        "content": "shipped the importer",
        "githubUrl": "https://github.com/example/repo/pull/7",
        "workDurationSec": 95
    }"#;

    let response = app
        .oneshot(post_json("/reports/evaluate", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let eval = &json["data"];
    let score = eval["aiScore"].as_u64().unwrap();
    assert!((60..=100).contains(&score));
    assert!(eval["changedFileCount"].as_i64().unwrap() >= 2);
    assert!(eval["aiFeedback"]
        .as_str()
        .unwrap()
        .contains("https://github.com/example/repo/pull/7"));
    assert!(!eval["diffSummary"].as_str().unwrap().is_empty());
    assert!(!eval["aiShortComment"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn evaluate_rejects_malformed_payload() {
    let app = test_app();

    let response = app
        .oneshot(post_json("/reports/evaluate", r#"{ "content": 5 }"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn healthz_reports_store_size() {
    let app = test_app();

    let response = app.oneshot(get("/healthz")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["reports"], 3);
}
