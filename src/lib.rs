//! Soil moisture dashboard: polls a ThingSpeak channel, classifies soil
//! moisture and serves the recommendation as HTML or JSON.

pub mod analysis;
pub mod config;
pub mod dashboard;
pub mod models;
pub mod source;
pub mod thingspeak;
pub mod utils;

pub use analysis::{SoilAnalyzer, SoilAssessment, SoilClassification, SoilError, Urgency};
pub use config::{DashboardConfig, ThingSpeakConfig};
pub use dashboard::{create_router, AppState};
pub use models::SensorReading;
pub use source::ReadingSource;
