/// Upload simulated sensor readings to a ThingSpeak channel
///
/// Usage: upload_sample [count]
/// Write key comes from THINGSPEAK_WRITE_KEY or an interactive prompt.
use log::{error, info, warn};
use std::io::{self, BufRead, Write};

use soil_dashboard::config::DashboardConfig;
use soil_dashboard::thingspeak::{
    upload_samples, ThingSpeakClient, DEFAULT_UPLOADS, RATE_LIMIT_WAIT,
};
use soil_dashboard::utils::{init_logging, parse_count_arg};

fn prompt_write_key() -> io::Result<String> {
    print!("Enter your THINGSPEAK_WRITE_KEY: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let arg = std::env::args().nth(1);
    let uploads = parse_count_arg(arg.as_deref(), "count", DEFAULT_UPLOADS)?;

    let config = DashboardConfig::new()?;
    let client = ThingSpeakClient::writer(&config.thingspeak)?;

    let write_key = match config.thingspeak.write_key.clone() {
        Some(key) => key,
        None => prompt_write_key()?,
    };
    if write_key.is_empty() {
        error!("Write key is required to upload data to ThingSpeak");
        return Err("Write key is required to upload data to ThingSpeak".into());
    }

    info!(
        "Uploading {} sample readings to channel {}",
        uploads,
        client.channel_id().unwrap_or("(set by write key)")
    );

    let mut rng = rand::thread_rng();
    let summary = upload_samples(&client, &write_key, uploads, RATE_LIMIT_WAIT, &mut rng).await;

    if summary.failed() > 0 {
        warn!("{} of {} uploads failed", summary.failed(), summary.attempted);
    } else {
        info!("Sample data upload complete");
    }
    Ok(())
}
