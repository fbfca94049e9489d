pub mod handlers;
pub mod view;

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::source::ReadingSource;

pub use view::{build_dashboard, DashboardContext, DEMO_MODE_MESSAGE};

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn ReadingSource>,
}

impl AppState {
    pub fn new(source: Arc<dyn ReadingSource>) -> Self {
        AppState { source }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::dashboard_page))
        .route("/api/dashboard", get(handlers::dashboard_json))
        .route("/api/assess", get(handlers::assess))
        .route("/health", get(handlers::health_check))
        .with_state(state)
}
