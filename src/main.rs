use log::{error, info};
use std::sync::Arc;

use soil_dashboard::config::DashboardConfig;
use soil_dashboard::dashboard::{create_router, AppState};
use soil_dashboard::source;
use soil_dashboard::utils::init_logging;

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Program terminated by user. Exiting gracefully.");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let config = match DashboardConfig::new() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e);
        }
    };

    let reading_source = source::from_config(&config.thingspeak)?;
    info!("Reading source: {}", reading_source.describe());

    let app = create_router(AppState::new(Arc::from(reading_source)));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Dashboard listening on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
