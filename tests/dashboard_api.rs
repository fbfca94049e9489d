/// Router-level tests for the dashboard page and JSON endpoints
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt; // for oneshot

use soil_dashboard::dashboard::DEMO_MODE_MESSAGE;
use soil_dashboard::source::{StaticSource, UnconfiguredSource};
use soil_dashboard::{create_router, AppState, ReadingSource, SensorReading};

fn app(source: impl ReadingSource + 'static) -> Router {
    create_router(AppState::new(Arc::new(source)))
}

async fn get(app: Router, uri: &str) -> axum::response::Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    String::from_utf8(body.to_vec()).expect("Body is not UTF-8")
}

async fn json_response(response: axum::response::Response) -> Value {
    serde_json::from_str(&body_text(response).await).expect("Failed to parse JSON")
}

fn live(soil: f64) -> StaticSource {
    StaticSource::new(SensorReading::live(soil, 22.4, 58.0, "2025-06-01T09:30:00Z"))
}

#[tokio::test]
async fn health_check() {
    let response = get(app(StaticSource::empty()), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_response(response).await;
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn dashboard_json_with_live_reading() {
    let response = get(app(live(85.0)), "/api/dashboard").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_response(response).await;
    assert_eq!(body["data_available"], true);
    assert_eq!(body["demo_mode"], false);
    assert!(body["error_message"].is_null());
    assert_eq!(body["sensor_data"]["soil_moisture"], 85.0);
    assert_eq!(body["sensor_data"]["available"], true);
    assert_eq!(body["soil_analysis"]["classification"], "Overwatered");
    assert_eq!(body["soil_analysis"]["urgency"], "High");
    assert_eq!(body["soil_analysis"]["valid"], true);
}

#[tokio::test]
async fn dashboard_json_falls_back_to_demo_data() {
    let body = json_response(get(app(UnconfiguredSource), "/api/dashboard").await).await;

    assert_eq!(body["demo_mode"], true);
    assert_eq!(body["data_available"], true);
    assert_eq!(body["error_message"], DEMO_MODE_MESSAGE);
    assert_eq!(body["sensor_data"]["timestamp"], "Demo Data (Not Real-time)");
    assert_eq!(body["sensor_data"]["available"], false);
    assert_eq!(body["soil_analysis"]["classification"], "Optimal");
    assert_eq!(body["soil_analysis"]["urgency"], "Low");
}

#[tokio::test]
async fn dashboard_page_renders_analysis() {
    let response = get(app(live(20.0)), "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Soil Analysis: Dry"));
    assert!(html.contains("urgency medium"));
    assert!(html.contains("20.0%"));
    assert!(html.contains("01.06.2025 - 09:30:00 UTC"));
    assert!(!html.contains("DEMO MODE"));
}

#[tokio::test]
async fn dashboard_page_shows_demo_banner() {
    let html = body_text(get(app(StaticSource::empty()), "/").await).await;
    assert!(html.contains("banner demo"));
    assert!(html.contains("DEMO MODE"));
    assert!(html.contains("Soil Analysis: Optimal"));
}

#[tokio::test]
async fn dashboard_page_lists_defaulted_fields() {
    let reading = SensorReading::live(50.0, 25.0, 60.0, "2025-06-01T09:30:00Z")
        .with_defaults(true, false);
    let html = body_text(get(app(StaticSource::new(reading)), "/").await).await;
    assert!(html.contains("Temperature not reported by the sensor"));
}

#[tokio::test]
async fn assess_endpoint_classifies_value() {
    let response = get(app(StaticSource::empty()), "/api/assess?soil_moisture=60").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_response(response).await;
    assert_eq!(body["soil_moisture"], 60.0);
    assert_eq!(body["classification"], "Optimal");
    assert_eq!(body["urgency"], "Low");
}

#[tokio::test]
async fn assess_endpoint_rejects_invalid_input() {
    for uri in [
        "/api/assess?soil_moisture=soggy",
        "/api/assess?soil_moisture=101",
        "/api/assess?soil_moisture=-1",
        "/api/assess",
    ] {
        let response = get(app(StaticSource::empty()), uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);
        let body = json_response(response).await;
        assert!(
            body["error"]
                .as_str()
                .unwrap()
                .starts_with("invalid soil moisture"),
            "{}",
            uri
        );
    }
}
