use serde::Serialize;

// Substitutes used when a channel does not report temperature or humidity
pub const DEFAULT_TEMPERATURE: f64 = 25.0;
pub const DEFAULT_HUMIDITY: f64 = 60.0;

pub const DEMO_TIMESTAMP: &str = "Demo Data (Not Real-time)";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorReading {
    pub soil_moisture: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub timestamp: String,
    pub available: bool,
    pub temperature_defaulted: bool,
    pub humidity_defaulted: bool,
}

impl SensorReading {
    /// A complete live reading with every field reported
    pub fn live(soil_moisture: f64, temperature: f64, humidity: f64, timestamp: &str) -> Self {
        SensorReading {
            soil_moisture,
            temperature,
            humidity,
            timestamp: timestamp.to_string(),
            available: true,
            temperature_defaulted: false,
            humidity_defaulted: false,
        }
    }

    /// Mark which fields were substituted because the sensor did not report them
    ///
    /// # Arguments
    /// * `temperature_defaulted` - Temperature holds a substitute value
    /// * `humidity_defaulted` - Humidity holds a substitute value
    ///
    /// # Returns
    /// The same reading carrying the data-quality flags
    pub fn with_defaults(self, temperature_defaulted: bool, humidity_defaulted: bool) -> Self {
        SensorReading {
            temperature_defaulted,
            humidity_defaulted,
            ..self
        }
    }

    /// Substitute reading shown while the reading source is unavailable
    pub fn demo() -> Self {
        SensorReading {
            soil_moisture: 45.0,
            temperature: 25.5,
            humidity: 65.0,
            timestamp: DEMO_TIMESTAMP.to_string(),
            available: false,
            temperature_defaulted: false,
            humidity_defaulted: false,
        }
    }

    pub fn has_defaulted_fields(&self) -> bool {
        self.temperature_defaulted || self.humidity_defaulted
    }
}
