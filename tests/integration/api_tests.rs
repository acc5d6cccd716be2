//! API integration tests against the fixture store

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use conectasonda_server::{
    api::create_router, config::AppConfig, repository::FixtureStore, services::Services, AppState,
};

const STATUSES: [&str; 3] = ["operativo", "falla", "mantenimiento"];

/// Helper to build the full router over a fresh fixture
fn app() -> Router {
    let state = AppState {
        config: Arc::new(AppConfig::default()),
        services: Arc::new(Services::new(Arc::new(FixtureStore::seeded()))),
    };
    create_router(state)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).expect("Failed to build request"))
        .await
        .expect("Failed to send request");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

async fn post(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::POST, uri, None).await
}

async fn put(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::PUT, uri, None).await
}

/// Status rule applied to the seeded rows
fn expected_status(id: i64) -> &'static str {
    match id {
        3 | 8 => "falla",
        4 => "mantenimiento",
        _ => "operativo",
    }
}

#[tokio::test]
async fn test_root_banner() {
    let (status, body) = get(&app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().starts_with("ConectaSonda API"));
}

#[tokio::test]
async fn test_health_check() {
    let (status, body) = get(&app(), "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["services"]["database"], "online");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_every_equipment_has_derived_status() {
    let app = app();
    let (_, list) = get(&app, "/api/equipments").await;

    for item in list.as_array().unwrap() {
        let id = item["id"].as_i64().unwrap();
        let (status, body) = get(&app, &format!("/api/equipments/{}", id)).await;
        assert_eq!(status, StatusCode::OK);
        let value = body["status"].as_str().unwrap();
        assert!(STATUSES.contains(&value));
        assert_eq!(value, expected_status(id));
    }
}

#[tokio::test]
async fn test_list_filters_by_type() {
    let app = app();

    let (status, turnstiles) = get(&app, "/api/equipments?equipment_type=torniquete").await;
    assert_eq!(status, StatusCode::OK);
    let turnstiles = turnstiles.as_array().unwrap();
    assert_eq!(turnstiles.len(), 5);
    assert!(turnstiles.iter().all(|e| e["type"] == "torniquete"));

    let (_, all) = get(&app, "/api/equipments?equipment_type=all").await;
    let (_, omitted) = get(&app, "/api/equipments").await;
    let (_, empty) = get(&app, "/api/equipments?equipment_type=").await;
    assert_eq!(all.as_array().unwrap().len(), 8);
    assert_eq!(all, omitted);
    assert_eq!(empty, omitted);
}

#[tokio::test]
async fn test_unknown_equipment_is_not_found() {
    let app = app();

    let (status, body) = get(&app, "/api/equipments/9999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NoSuchEquipment");

    let (status, _) = post(&app, "/api/predict/9999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = put(&app, "/api/equipments/9999/status?status=falla").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_prediction_bounds() {
    let app = app();

    for id in 1..=8 {
        for _ in 0..20 {
            let (status, body) = post(&app, &format!("/api/predict/{}", id)).await;
            assert_eq!(status, StatusCode::OK);

            let probability = body["probability"].as_f64().unwrap();
            let confidence = body["confidence"].as_f64().unwrap();
            assert!((5.0..=95.0).contains(&probability));
            assert!((0.85..=0.98).contains(&confidence));
            assert!(["alto", "medio", "bajo"].contains(&body["risk_level"].as_str().unwrap()));
            assert_eq!(body["equipment_id"], id);
        }
    }
}

#[tokio::test]
async fn test_summaries_sum_to_total() {
    let app = app();
    let (_, metrics) = get(&app, "/api/metrics").await;
    let (_, by_status) = get(&app, "/api/status-summary").await;
    let (_, by_type) = get(&app, "/api/type-summary").await;

    let total = metrics["total_equipments"].as_u64().unwrap();
    let status_sum: u64 = STATUSES.iter().map(|s| by_status[s].as_u64().unwrap()).sum();
    assert_eq!(status_sum, total);
    assert_eq!(
        by_type["torniquetes"].as_u64().unwrap() + by_type["transbank"].as_u64().unwrap(),
        total
    );
    assert_eq!(
        metrics["predicted_failures"].as_u64().unwrap(),
        by_status["falla"].as_u64().unwrap() + by_status["mantenimiento"].as_u64().unwrap()
    );
}

#[tokio::test]
async fn test_invalid_status_is_rejected() {
    let app = app();

    let (status, body) = put(&app, "/api/equipments/1/status?status=roto").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");

    let (status, body) = put(&app, "/api/equipments/1/status").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");
}

#[tokio::test]
async fn test_status_update_is_visible_on_read() {
    let app = app();

    let (status, body) = put(&app, "/api/equipments/1/status?status=falla").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["persisted"], true);

    let (_, equipment) = get(&app, "/api/equipments/1").await;
    assert_eq!(equipment["status"], "falla");

    let (_, metrics) = get(&app, "/api/metrics").await;
    assert_eq!(metrics["active_alerts"], 3);
}

#[tokio::test]
async fn test_failure_history() {
    let (status, body) = get(&app(), "/api/failures").await;
    assert_eq!(status, StatusCode::OK);
    let failures = body.as_array().unwrap();
    assert_eq!(failures.len(), 6);
    assert_eq!(failures.iter().filter(|f| f["resolved"] == false).count(), 2);
}

#[tokio::test]
async fn test_schedule_maintenance() {
    let request = json!({
        "equipment_id": 4,
        "scheduled_date": "2024-12-10",
        "maintenance_type": "preventivo",
        "notes": "Revisar brazo"
    });
    let (status, body) = send(&app(), Method::POST, "/api/maintenance", Some(request)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["scheduled_date"], "2024-12-10");
    assert_eq!(body["maintenance_type"], "preventivo");
}

#[tokio::test]
async fn test_generate_report() {
    let app = app();

    let (_, body) = get(&app, "/api/reports/generate").await;
    assert_eq!(body["report_type"], "general");
    assert_eq!(body["download_url"], "/api/reports/download/general");

    let (_, body) = get(&app, "/api/reports/generate?report_type=mensual").await;
    assert_eq!(body["report_type"], "mensual");
}

#[tokio::test]
async fn test_cors_allows_dashboard_origin() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/metrics")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "GET")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "http://localhost:5173"
    );
}
