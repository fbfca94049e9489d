/// Route handlers for the HTML page and JSON endpoints
use askama::Template;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json},
};
use log::{debug, error};
use serde::Deserialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use super::view::{build_dashboard, DashboardContext};
use super::AppState;
use crate::analysis::{SoilAnalyzer, SoilAssessment};
use crate::utils::display_timestamp;

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub title: String,
    pub has_error: bool,
    pub error_message: String,
    pub demo_mode: bool,
    pub has_reading: bool,
    pub soil_moisture: String,
    pub temperature: String,
    pub humidity: String,
    pub timestamp: String,
    pub has_analysis: bool,
    pub classification: String,
    pub urgency: String,
    pub urgency_class: String,
    pub recommendation: String,
    pub notes: Vec<String>,
}

impl From<&DashboardContext> for DashboardTemplate {
    fn from(ctx: &DashboardContext) -> Self {
        let reading = ctx.sensor_data.as_ref();
        let analysis = ctx.soil_analysis.as_ref();

        DashboardTemplate {
            title: "Smart Farming Assistant".to_string(),
            has_error: ctx.error_message.is_some(),
            error_message: ctx.error_message.clone().unwrap_or_default(),
            demo_mode: ctx.demo_mode,
            has_reading: reading.is_some(),
            soil_moisture: reading
                .map(|r| format!("{:.1}", r.soil_moisture))
                .unwrap_or_default(),
            temperature: reading
                .map(|r| format!("{:.1}", r.temperature))
                .unwrap_or_default(),
            humidity: reading
                .map(|r| format!("{:.1}", r.humidity))
                .unwrap_or_default(),
            timestamp: reading
                .map(|r| display_timestamp(&r.timestamp))
                .unwrap_or_default(),
            has_analysis: analysis.is_some(),
            classification: analysis
                .map(|a| a.classification.to_string())
                .unwrap_or_default(),
            urgency: analysis.map(|a| a.urgency.to_string()).unwrap_or_default(),
            urgency_class: analysis
                .map(|a| a.urgency.label().to_lowercase())
                .unwrap_or_default(),
            recommendation: analysis
                .map(|a| a.recommendation.clone())
                .unwrap_or_default(),
            notes: ctx.notes.clone(),
        }
    }
}

pub async fn dashboard_page(State(state): State<AppState>) -> impl IntoResponse {
    let ctx = build_dashboard(state.source.as_ref()).await;
    let template = DashboardTemplate::from(&ctx);
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Template error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, format!("Template error: {}", e)).into_response()
        }
    }
}

pub async fn dashboard_json(State(state): State<AppState>) -> Json<DashboardContext> {
    Json(build_dashboard(state.source.as_ref()).await)
}

#[derive(Debug, Deserialize)]
pub struct AssessParams {
    pub soil_moisture: Option<String>,
}

/// Classify an arbitrary moisture value passed as a query parameter
pub async fn assess(
    Query(params): Query<AssessParams>,
) -> Result<Json<SoilAssessment>, (StatusCode, Json<serde_json::Value>)> {
    let raw = params.soil_moisture.unwrap_or_default();
    debug!("Assess request for soil_moisture='{}'", raw);

    let analyzer = raw.parse::<SoilAnalyzer>().map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": format!("{}", e) })),
        )
    })?;
    Ok(Json(analyzer.assess()))
}

pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_default(),
    }))
}
