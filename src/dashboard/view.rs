/// Dashboard context assembled from one reading-source poll
use log::{info, warn};
use serde::Serialize;

use crate::analysis::{SoilAnalyzer, SoilAssessment};
use crate::models::SensorReading;
use crate::source::ReadingSource;

pub const DEMO_MODE_MESSAGE: &str = "📡 DEMO MODE: Using sample data for testing. \
    Live sensor data is unavailable. \
    To use real data, set THINGSPEAK_CHANNEL_ID and THINGSPEAK_READ_KEY in .env \
    for a channel that has readings.";

#[derive(Debug, Clone, Serialize)]
pub struct DashboardContext {
    pub sensor_data: Option<SensorReading>,
    pub soil_analysis: Option<SoilAssessment>,
    pub error_message: Option<String>,
    pub data_available: bool,
    pub demo_mode: bool,
    /// Data-quality remarks, e.g. substituted fields
    pub notes: Vec<String>,
}

fn quality_notes(reading: &SensorReading) -> Vec<String> {
    let mut notes = Vec::new();
    if reading.temperature_defaulted {
        notes.push(format!(
            "Temperature not reported by the sensor, showing default {:.1}°C",
            reading.temperature
        ));
    }
    if reading.humidity_defaulted {
        notes.push(format!(
            "Humidity not reported by the sensor, showing default {:.1}%",
            reading.humidity
        ));
    }
    notes
}

impl DashboardContext {
    /// Analyse a reading. A rejected moisture value leaves the reading on
    /// display but produces no analysis.
    pub fn from_reading(reading: SensorReading) -> Self {
        let notes = quality_notes(&reading);
        match SoilAnalyzer::new(reading.soil_moisture) {
            Ok(analyzer) => DashboardContext {
                sensor_data: Some(reading),
                soil_analysis: Some(analyzer.assess()),
                error_message: None,
                data_available: true,
                demo_mode: false,
                notes,
            },
            Err(e) => {
                warn!("Reading rejected by soil analyzer: {}", e);
                DashboardContext {
                    sensor_data: Some(reading),
                    soil_analysis: None,
                    error_message: Some(format!("Validation Error: {}", e)),
                    data_available: false,
                    demo_mode: false,
                    notes,
                }
            }
        }
    }

    /// Demo reading with the demo-mode warning, still analysed
    pub fn demo() -> Self {
        let mut context = Self::from_reading(SensorReading::demo());
        context.demo_mode = true;
        context.error_message = Some(DEMO_MODE_MESSAGE.to_string());
        context
    }
}

/// Poll the source once and build the dashboard, falling back to demo data
/// when the source is unavailable.
///
/// # Arguments
/// * `source` - Reading source polled exactly once
///
/// # Returns
/// Context for the HTML page and the JSON endpoint
pub async fn build_dashboard(source: &dyn ReadingSource) -> DashboardContext {
    match source.latest_reading().await {
        Ok(reading) => {
            info!(
                "Reading from {}: soil={:.1}%, temp={:.1}°C, humidity={:.1}%",
                source.describe(),
                reading.soil_moisture,
                reading.temperature,
                reading.humidity
            );
            DashboardContext::from_reading(reading)
        }
        Err(e) => {
            warn!("{} unavailable, using demo data: {}", source.describe(), e);
            DashboardContext::demo()
        }
    }
}
