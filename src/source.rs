/// Producers of sensor readings for the dashboard
use async_trait::async_trait;

use crate::config::ThingSpeakConfig;
use crate::models::SensorReading;
use crate::thingspeak::{SourceError, ThingSpeakClient};

#[async_trait]
pub trait ReadingSource: Send + Sync {
    /// Most recent reading, or the reason none is available
    async fn latest_reading(&self) -> Result<SensorReading, SourceError>;

    /// Short label for logs
    fn describe(&self) -> String;
}

#[async_trait]
impl ReadingSource for ThingSpeakClient {
    async fn latest_reading(&self) -> Result<SensorReading, SourceError> {
        self.fetch_latest().await
    }

    fn describe(&self) -> String {
        format!("ThingSpeak channel {}", self.channel_id().unwrap_or("-"))
    }
}

/// Source used when no channel is configured
#[derive(Debug, Clone, Default)]
pub struct UnconfiguredSource;

#[async_trait]
impl ReadingSource for UnconfiguredSource {
    async fn latest_reading(&self) -> Result<SensorReading, SourceError> {
        Err(SourceError::NotConfigured)
    }

    fn describe(&self) -> String {
        "unconfigured source".to_string()
    }
}

/// Fixed reading; empty means the source reports no data
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    reading: Option<SensorReading>,
}

impl StaticSource {
    pub fn new(reading: SensorReading) -> Self {
        StaticSource {
            reading: Some(reading),
        }
    }

    pub fn empty() -> Self {
        StaticSource { reading: None }
    }
}

#[async_trait]
impl ReadingSource for StaticSource {
    async fn latest_reading(&self) -> Result<SensorReading, SourceError> {
        self.reading.clone().ok_or(SourceError::NoData)
    }

    fn describe(&self) -> String {
        "static source".to_string()
    }
}

/// Pick the ThingSpeak client when a channel is configured
pub fn from_config(config: &ThingSpeakConfig) -> Result<Box<dyn ReadingSource>, SourceError> {
    match ThingSpeakClient::new(config) {
        Ok(client) => Ok(Box::new(client)),
        Err(SourceError::NotConfigured) => Ok(Box::new(UnconfiguredSource)),
        Err(e) => Err(e),
    }
}
