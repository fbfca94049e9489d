pub mod client;
pub mod error;
pub mod feed;
pub mod upload;

pub use client::{ThingSpeakClient, DEFAULT_PROBE_RESULTS};
pub use error::SourceError;
pub use feed::{Channel, ChannelFeeds, Feed};
pub use upload::{upload_samples, UploadSummary, DEFAULT_UPLOADS, RATE_LIMIT_WAIT};
