use thiserror::Error;

/// Failures of the ThingSpeak reading source
#[derive(Error, Debug)]
pub enum SourceError {
    /// No channel id configured
    #[error("THINGSPEAK_CHANNEL_ID is not configured")]
    NotConfigured,

    /// Request did not complete within the configured timeout
    #[error("ThingSpeak request timed out")]
    Timeout,

    /// Could not reach the API host
    #[error("connection error while contacting ThingSpeak: {0}")]
    Connection(String),

    /// API answered with a non-success status
    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },

    /// Channel exists but has no entries
    #[error("no sensor data available from ThingSpeak channel")]
    NoData,

    #[error("missing required sensor field ({0})")]
    MissingField(&'static str),

    #[error("field {field} is not a number: '{value}'")]
    InvalidField { field: &'static str, value: String },

    #[error("{field} {value} out of valid range ({min} to {max})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Write API answered with entry id 0
    #[error("ThingSpeak rejected the update (entry id 0), check the write API key")]
    Rejected,

    #[error("failed to decode ThingSpeak response: {0}")]
    Decode(String),

    #[error("invalid ThingSpeak URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("request error: {0}")]
    Request(reqwest::Error),
}

impl From<reqwest::Error> for SourceError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            SourceError::Timeout
        } else if e.is_connect() {
            SourceError::Connection(e.to_string())
        } else if e.is_decode() {
            SourceError::Decode(e.to_string())
        } else {
            SourceError::Request(e)
        }
    }
}
