/// Print channel metadata and the most recent entries of a ThingSpeak channel
///
/// Usage: probe_channel [results]
use log::error;

use soil_dashboard::config::DashboardConfig;
use soil_dashboard::thingspeak::{ThingSpeakClient, DEFAULT_PROBE_RESULTS};
use soil_dashboard::utils::{display_timestamp, init_logging, parse_count_arg};

fn default_marker(defaulted: bool) -> &'static str {
    if defaulted {
        " (default)"
    } else {
        ""
    }
}

fn show(label: &str, value: Option<&str>) {
    println!("  {}: {}", label, value.unwrap_or("-"));
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let arg = std::env::args().nth(1);
    let results = parse_count_arg(arg.as_deref(), "results", DEFAULT_PROBE_RESULTS)?;

    let config = DashboardConfig::new()?;
    let client = ThingSpeakClient::new(&config.thingspeak)?;
    println!(
        "Fetching {}/channels/{}/feeds.json ({})",
        client.base_url(),
        client.channel_id().unwrap_or("-"),
        if config.thingspeak.read_key.is_some() {
            "with read key"
        } else {
            "public"
        }
    );

    let feeds = match client.fetch_feeds(results).await {
        Ok(feeds) => feeds,
        Err(e) => {
            error!("Request failed: {}", e);
            return Err(e.into());
        }
    };

    let channel = &feeds.channel;
    println!("Channel:");
    show("Name", channel.name.as_deref());
    println!(
        "  Last entry id: {}",
        channel
            .last_entry_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string())
    );
    show("Field1", channel.field1.as_deref());
    show("Field2", channel.field2.as_deref());
    show("Field3", channel.field3.as_deref());

    println!("Feeds: {} entries found", feeds.feeds.len());
    if feeds.feeds.is_empty() {
        println!("No data in channel yet");
        return Ok(());
    }

    for (i, feed) in feeds.feeds.iter().enumerate() {
        println!("Entry {}:", i + 1);
        match feed.to_reading() {
            Ok(reading) => {
                println!("  Soil moisture: {}%", reading.soil_moisture);
                println!(
                    "  Temperature: {}°C{}",
                    reading.temperature,
                    default_marker(reading.temperature_defaulted)
                );
                println!(
                    "  Humidity: {}%{}",
                    reading.humidity,
                    default_marker(reading.humidity_defaulted)
                );
                println!("  Created: {}", display_timestamp(&reading.timestamp));
            }
            Err(e) => println!("  Unusable entry: {}", e),
        }
    }

    Ok(())
}
