use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use shared_config::AppConfig;
use shared_datastore::ReferenceStore;

#[path = "../src/router.rs"]
mod router;

fn test_app() -> Router {
    let reference = Arc::new(ReferenceStore::sample());
    router::create_router(reference, &AppConfig::default())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json_body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json_body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&bytes).to_string(),
        ))
    };
    (status, value)
}

#[tokio::test]
async fn liveness_route_responds() {
    let app = test_app();
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn catalog_list_and_get() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/providers", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 10);

    let (status, body) = send(&app, Method::GET, "/providers/prov_001", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Dr. Jayanth Kotte");
    assert_eq!(body["specialty"], "Cardiologist");

    let (status, _) = send(&app, Method::GET, "/providers/prov_999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn match_endpoint_ranks_in_network_providers() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/providers/match",
        Some(json!({
            "symptoms": "chest pain",
            "insurance": "Apollo Munich"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let matches = body["matches"].as_array().unwrap();
    assert!(!matches.is_empty());
    assert!(matches.len() <= 3);
    // The in-network cardiologist leads the ranking.
    assert_eq!(matches[0]["id"], "prov_001");
    assert_eq!(matches[0]["specialty_match"], true);

    let (status, body) = send(
        &app,
        Method::POST,
        "/providers/match",
        Some(json!({
            "symptoms": "chest pain",
            "insurance": "XYZ Unknown Co"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn estimate_endpoint_returns_breakdown_or_actionable_error() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/estimates",
        Some(json!({
            "symptoms": ["skin rash"],
            "insurance": "Star Health"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["estimate"]["cpt_code"], "80050");
    assert_eq!(body["estimate"]["covered_amount"], 480.0);
    assert_eq!(body["estimate"]["out_of_pocket_cost"], 120.0);
    assert_eq!(body["coverage_percentage"], 80.0);

    let (status, body) = send(
        &app,
        Method::POST,
        "/estimates",
        Some(json!({
            "symptoms": "fever",
            "insurance": "XYZ Unknown Co"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("update your insurance information"));
}

#[tokio::test]
async fn full_intake_to_booking_flow() {
    let app = test_app();

    let (status, _) = send(
        &app,
        Method::POST,
        "/intake",
        Some(json!({
            "user_id": "u42",
            "primarySymptoms": "chest pain and fatigue",
            "insuranceProvider": "Apollo Munich",
            "city": "Guntur",
            "urgencyLevel": "high",
            "severity": 7
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, session) = send(
        &app,
        Method::POST,
        "/intake/u42/provider",
        Some(json!({ "provider_id": "prov_001" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(session["provider"]["id"], "prov_001");
    // Selecting a provider caches the estimate: chest pain maps to the
    // complex visit under the Apollo Munich plan.
    assert_eq!(session["session"]["cost_estimate"]["cpt_code"], "99214");

    let appointment_time = (chrono::Utc::now() + chrono::Duration::days(7)).to_rfc3339();
    let (status, booking) = send(
        &app,
        Method::POST,
        "/bookings",
        Some(json!({
            "user_id": "u42",
            "provider_id": "prov_001",
            "appointment_time": appointment_time.as_str(),
            "estimated_cost": 120.0
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(booking["status"], "pending");

    let (status, confirmed) = send(
        &app,
        Method::PUT,
        "/bookings/confirm",
        Some(json!({
            "user_id": "u42",
            "provider_id": "prov_001",
            "appointment_time": appointment_time
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(confirmed["booking"]["status"], "confirmed");

    let (status, listing) = send(&app, Method::GET, "/bookings/user/u42", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listing["total"], 1);
}

#[tokio::test]
async fn invalid_intake_is_rejected() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/intake",
        Some(json!({
            "user_id": "u1",
            "primarySymptoms": "cough",
            "insuranceProvider": "Apollo Munich",
            "city": "Guntur"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("detailed"));
}
