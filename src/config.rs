use log::{info, warn};
use std::env;
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.thingspeak.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

#[derive(Debug, Clone)]
pub struct ThingSpeakConfig {
    pub base_url: String,
    pub channel_id: Option<String>,
    pub read_key: Option<String>,
    pub write_key: Option<String>,
    pub timeout: Duration,
}

impl Default for ThingSpeakConfig {
    fn default() -> Self {
        ThingSpeakConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            channel_id: None,
            read_key: None,
            write_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub thingspeak: ThingSpeakConfig,
    pub bind_addr: SocketAddr,
}

/// Non-empty, trimmed value of a variable
fn non_empty(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl DashboardConfig {
    /// Load configuration from the process environment, reading `.env` first
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let timeout_secs = match non_empty(&lookup, "THINGSPEAK_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(format!(
                        "THINGSPEAK_TIMEOUT_SECS must be a positive number of seconds, got '{}'",
                        raw
                    )
                    .into())
                }
            },
            None => DEFAULT_TIMEOUT_SECS,
        };

        let thingspeak = ThingSpeakConfig {
            base_url: non_empty(&lookup, "THINGSPEAK_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            channel_id: non_empty(&lookup, "THINGSPEAK_CHANNEL_ID"),
            read_key: non_empty(&lookup, "THINGSPEAK_READ_KEY"),
            write_key: non_empty(&lookup, "THINGSPEAK_WRITE_KEY"),
            timeout: Duration::from_secs(timeout_secs),
        };

        let addr = non_empty(&lookup, "DASHBOARD_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = addr
            .parse()
            .map_err(|e| format!("DASHBOARD_ADDR '{}' is not a socket address: {}", addr, e))?;

        match &thingspeak.channel_id {
            Some(channel) => info!(
                "ThingSpeak channel {} ({})",
                channel,
                if thingspeak.read_key.is_some() {
                    "with read key"
                } else {
                    "public"
                }
            ),
            None => warn!("THINGSPEAK_CHANNEL_ID not set, dashboard will run on demo data"),
        }

        Ok(DashboardConfig {
            thingspeak,
            bind_addr,
        })
    }
}
