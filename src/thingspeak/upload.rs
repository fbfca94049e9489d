/// Batch upload of simulated readings through the ThingSpeak write API
use log::{error, info};
use rand::Rng;
use std::time::Duration;

use super::client::ThingSpeakClient;
use crate::utils::simulated_reading;

pub const DEFAULT_UPLOADS: usize = 3;
/// Free channels accept one update per 15 seconds
pub const RATE_LIMIT_WAIT: Duration = Duration::from_secs(16);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadSummary {
    pub attempted: usize,
    pub entry_ids: Vec<u64>,
}

impl UploadSummary {
    pub fn succeeded(&self) -> usize {
        self.entry_ids.len()
    }

    pub fn failed(&self) -> usize {
        self.attempted - self.entry_ids.len()
    }
}

/// Upload `count` simulated readings, waiting `wait` between uploads
///
/// A failed upload is logged and counted; the remaining uploads still run.
/// There is no wait after the last upload.
///
/// # Arguments
/// * `client` - Client pointed at the ThingSpeak API
/// * `write_key` - Channel write API key
/// * `count` - Number of readings to upload
/// * `wait` - Pause between consecutive uploads
/// * `rng` - Source of the simulated values
///
/// # Returns
/// Summary with the entry id of every accepted upload
pub async fn upload_samples<R: Rng>(
    client: &ThingSpeakClient,
    write_key: &str,
    count: usize,
    wait: Duration,
    rng: &mut R,
) -> UploadSummary {
    let mut summary = UploadSummary::default();

    for i in 0..count {
        let reading = simulated_reading(rng);
        info!(
            "Upload {}/{}: soil={}%, temp={}°C, humidity={}%",
            i + 1,
            count,
            reading.soil_moisture,
            reading.temperature,
            reading.humidity
        );

        summary.attempted += 1;
        match client.write_reading(write_key, &reading).await {
            Ok(entry_id) => {
                info!("Data uploaded successfully, entry id {}", entry_id);
                summary.entry_ids.push(entry_id);
            }
            Err(e) => error!("Upload failed: {}", e),
        }

        if i + 1 < count {
            info!("Waiting {} seconds (ThingSpeak rate limit)", wait.as_secs());
            tokio::time::sleep(wait).await;
        }
    }

    summary
}
