/// Utility functions for formatting, rounding and simulated readings
use rand::Rng;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::OffsetDateTime;

use crate::models::SensorReading;

/// Initialize env_logger at info level unless RUST_LOG says otherwise
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();
}

/// Format a timestamp as DD.MM.YYYY - HH:MM:SS
pub fn format_datetime(dt: &OffsetDateTime) -> String {
    let format = format_description!("[day].[month].[year] - [hour]:[minute]:[second]");
    dt.format(&format).unwrap_or_else(|_| dt.to_string())
}

/// Human-readable form of a reading timestamp.
///
/// RFC 3339 timestamps (what ThingSpeak sends in `created_at`) are shown in
/// UTC; anything else is passed through unchanged.
pub fn display_timestamp(raw: &str) -> String {
    match OffsetDateTime::parse(raw, &Rfc3339) {
        Ok(dt) => format!(
            "{} UTC",
            format_datetime(&dt.to_offset(time::UtcOffset::UTC))
        ),
        Err(_) => raw.to_string(),
    }
}

/// Parse an optional positional count argument
///
/// # Arguments
/// * `arg` - Raw command-line argument, if any
/// * `name` - Argument name used in the error message
/// * `default` - Value used when the argument is absent
///
/// # Returns
/// The count, or an error message when the argument is not a positive integer
pub fn parse_count_arg(arg: Option<&str>, name: &str, default: usize) -> Result<usize, String> {
    match arg {
        None => Ok(default),
        Some(raw) => match raw.trim().parse::<usize>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(format!("{} must be a positive integer, got '{}'", name, raw)),
        },
    }
}

/// Round to one decimal place
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Plausible reading for exercising a channel: moisture 25-65 %,
/// temperature 18-32 °C, humidity 40-80 %.
pub fn simulated_reading<R: Rng>(rng: &mut R) -> SensorReading {
    SensorReading::live(
        round1(rng.gen_range(25.0..=65.0)),
        round1(rng.gen_range(18.0..=32.0)),
        round1(rng.gen_range(40.0..=80.0)),
        &OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_default(),
    )
}
