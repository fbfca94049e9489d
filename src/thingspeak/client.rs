/// HTTP client for the ThingSpeak channel read and write APIs
use log::debug;
use std::time::Duration;
use url::Url;

use super::error::SourceError;
use super::feed::ChannelFeeds;
use crate::config::ThingSpeakConfig;
use crate::models::SensorReading;

/// Entries fetched by the channel probe when no count is given
pub const DEFAULT_PROBE_RESULTS: usize = 2;

#[derive(Debug, Clone)]
pub struct ThingSpeakClient {
    http: reqwest::Client,
    base_url: String,
    channel_id: Option<String>,
    read_key: Option<String>,
}

impl ThingSpeakClient {
    /// Build a client for the configured channel; fails with `NotConfigured`
    /// when no channel id is set.
    pub fn new(config: &ThingSpeakConfig) -> Result<Self, SourceError> {
        let channel_id = config
            .channel_id
            .as_deref()
            .ok_or(SourceError::NotConfigured)?;
        Self::with_channel(
            &config.base_url,
            channel_id,
            config.read_key.as_deref(),
            config.timeout,
        )
    }

    /// Build a client for the write API only. The update endpoint is keyed
    /// by the write key, so no channel id is required.
    pub fn writer(config: &ThingSpeakConfig) -> Result<Self, SourceError> {
        Self::build(
            &config.base_url,
            config.channel_id.as_deref(),
            None,
            config.timeout,
        )
    }

    pub fn with_channel(
        base_url: &str,
        channel_id: &str,
        read_key: Option<&str>,
        timeout: Duration,
    ) -> Result<Self, SourceError> {
        Self::build(base_url, Some(channel_id), read_key, timeout)
    }

    fn build(
        base_url: &str,
        channel_id: Option<&str>,
        read_key: Option<&str>,
        timeout: Duration,
    ) -> Result<Self, SourceError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(SourceError::Request)?;

        Ok(ThingSpeakClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            channel_id: channel_id.map(str::to_string),
            read_key: read_key.map(str::to_string),
        })
    }

    pub fn channel_id(&self) -> Option<&str> {
        self.channel_id.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn feeds_url(&self, results: usize) -> Result<Url, SourceError> {
        let channel_id = self.channel_id().ok_or(SourceError::NotConfigured)?;
        let endpoint = format!("{}/channels/{}/feeds.json", self.base_url, channel_id);
        let results = results.to_string();
        let mut params = vec![("results", results.as_str())];
        // Public channels are readable without a key
        if let Some(key) = &self.read_key {
            params.push(("api_key", key.as_str()));
        }
        Ok(Url::parse_with_params(&endpoint, &params)?)
    }

    async fn get(&self, url: Url) -> Result<reqwest::Response, SourceError> {
        debug!("GET {}", url.path());
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::Http {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Channel metadata plus up to `results` most recent entries
    pub async fn fetch_feeds(&self, results: usize) -> Result<ChannelFeeds, SourceError> {
        let url = self.feeds_url(results)?;
        let feeds: ChannelFeeds = self.get(url).await?.json().await?;
        debug!(
            "Channel {} returned {} feed entries",
            self.channel_id().unwrap_or("-"),
            feeds.feeds.len()
        );
        Ok(feeds)
    }

    /// Latest entry of the channel as a validated reading
    pub async fn fetch_latest(&self) -> Result<SensorReading, SourceError> {
        self.fetch_feeds(1).await?.latest_reading()
    }

    /// Append a reading through the write API, returning the new entry id
    pub async fn write_reading(
        &self,
        write_key: &str,
        reading: &SensorReading,
    ) -> Result<u64, SourceError> {
        let endpoint = format!("{}/update", self.base_url);
        let url = Url::parse_with_params(
            &endpoint,
            &[
                ("api_key", write_key.to_string()),
                ("field1", reading.soil_moisture.to_string()),
                ("field2", reading.temperature.to_string()),
                ("field3", reading.humidity.to_string()),
            ],
        )?;

        let body = self.get(url).await?.text().await?;
        let entry_id = body.trim().parse::<u64>().map_err(|_| {
            SourceError::Decode(format!("unexpected update response '{}'", body))
        })?;

        if entry_id == 0 {
            return Err(SourceError::Rejected);
        }
        debug!("Update accepted as entry {}", entry_id);
        Ok(entry_id)
    }
}
