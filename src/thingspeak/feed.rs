/// ThingSpeak channel feed payloads and conversion into sensor readings
use serde::Deserialize;
use serde_json::Value;

use super::error::SourceError;
use crate::models::{SensorReading, DEFAULT_HUMIDITY, DEFAULT_TEMPERATURE};

// Channel field layout
pub const SOIL_MOISTURE_FIELD: &str = "field1";
pub const TEMPERATURE_FIELD: &str = "field2";
pub const HUMIDITY_FIELD: &str = "field3";

/// Response of `GET /channels/{id}/feeds.json`
#[derive(Debug, Clone, Deserialize)]
pub struct ChannelFeeds {
    #[serde(default)]
    pub channel: Channel,
    #[serde(default)]
    pub feeds: Vec<Feed>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Channel {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub last_entry_id: Option<u64>,
    pub field1: Option<String>,
    pub field2: Option<String>,
    pub field3: Option<String>,
}

/// One channel entry. ThingSpeak sends field values as strings, but numbers
/// and nulls are accepted too.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Feed {
    pub created_at: Option<String>,
    pub entry_id: Option<u64>,
    pub field1: Option<Value>,
    pub field2: Option<Value>,
    pub field3: Option<Value>,
}

/// Text of a field, `None` when absent, null or blank
fn field_text(value: &Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

fn parse_number(field: &'static str, text: &str) -> Result<f64, SourceError> {
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(SourceError::InvalidField {
            field,
            value: text.to_string(),
        }),
    }
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), SourceError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(SourceError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

/// Optional field, falling back to `default` when the channel left it empty.
/// Returns the value and whether the default was used.
fn optional_field(
    field: &'static str,
    value: &Option<Value>,
    default: f64,
) -> Result<(f64, bool), SourceError> {
    match field_text(value) {
        Some(text) => Ok((parse_number(field, &text)?, false)),
        None => Ok((default, true)),
    }
}

impl Feed {
    /// Convert this entry into a validated reading.
    ///
    /// Soil moisture is required. Temperature and humidity fall back to
    /// 25.0 and 60.0 and the substitution is flagged on the reading.
    ///
    /// # Returns
    /// The reading, or the first missing, unparsable or out-of-range field
    pub fn to_reading(&self) -> Result<SensorReading, SourceError> {
        let soil_text =
            field_text(&self.field1).ok_or(SourceError::MissingField(SOIL_MOISTURE_FIELD))?;
        let soil_moisture = parse_number(SOIL_MOISTURE_FIELD, &soil_text)?;

        let (temperature, temperature_defaulted) =
            optional_field(TEMPERATURE_FIELD, &self.field2, DEFAULT_TEMPERATURE)?;
        let (humidity, humidity_defaulted) =
            optional_field(HUMIDITY_FIELD, &self.field3, DEFAULT_HUMIDITY)?;

        check_range("Soil moisture", soil_moisture, 0.0, 100.0)?;
        check_range("Temperature", temperature, -50.0, 60.0)?;
        check_range("Humidity", humidity, 0.0, 100.0)?;

        let timestamp = self.created_at.clone().unwrap_or_default();
        Ok(
            SensorReading::live(soil_moisture, temperature, humidity, &timestamp)
                .with_defaults(temperature_defaulted, humidity_defaulted),
        )
    }
}

impl ChannelFeeds {
    /// Most recent entry; ThingSpeak lists feeds oldest first
    pub fn latest(&self) -> Option<&Feed> {
        self.feeds.last()
    }

    pub fn latest_reading(&self) -> Result<SensorReading, SourceError> {
        self.latest().ok_or(SourceError::NoData)?.to_reading()
    }
}
