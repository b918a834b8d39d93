//! Channel snapshot model.
//!
//! The JSON format written by the stats collector looks like:
//!
//! ```json
//! {
//!   "timestamp": "2024-01-01T00:00:00",
//!   "channels": [
//!     { "url": "https://t.me/s/alpha", "enabled": true, "metrics": { ... } }
//!   ]
//! }
//! ```
//!
//! Only `timestamp` and `channels` are optional; every channel field is required.
//! A `null` timestamp or `last_success` reads as "N/A".

use crate::Result;

use anyhow::Context;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::cmp::Ordering;

/// Placeholder shown when the snapshot carries no timestamp.
pub const MISSING_TIMESTAMP: &str = "N/A";

#[derive(Debug, Clone, Deserialize)]
pub struct Snapshot {
    #[serde(default = "missing_timestamp", deserialize_with = "null_as_missing")]
    pub timestamp: String,

    #[serde(default)]
    pub channels: Vec<Channel>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Channel {
    pub url: String,
    pub enabled: bool,
    pub metrics: Metrics,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Metrics {
    pub overall_score: f64,
    pub success_count: u64,
    pub fail_count: u64,
    /// Seconds.
    pub avg_response_time: f64,
    pub valid_configs: u64,
    pub total_configs: u64,
    #[serde(deserialize_with = "null_as_missing")]
    pub last_success: String,
}

fn missing_timestamp() -> String {
    MISSING_TIMESTAMP.to_string()
}

fn null_as_missing<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(missing_timestamp))
}

/// Score band shared by the chart bars and the report badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Good,
    Warning,
    Critical,
}

impl ScoreTier {
    pub const GOOD_THRESHOLD: f64 = 70.0;
    pub const WARNING_THRESHOLD: f64 = 50.0;

    pub fn for_score(score: f64) -> Self {
        if score >= Self::GOOD_THRESHOLD {
            ScoreTier::Good
        } else if score >= Self::WARNING_THRESHOLD {
            ScoreTier::Warning
        } else {
            ScoreTier::Critical
        }
    }
}

impl Snapshot {
    /// Snapshot used when the input document is empty.
    pub fn empty_now() -> Self {
        Self {
            timestamp: chrono::Local::now()
                .format("%Y-%m-%dT%H:%M:%S%.6f")
                .to_string(),
            channels: Vec::new(),
        }
    }

    /// Parse a snapshot document. Falsy documents (`null`, `false`, `0`, `""`,
    /// `{}`, `[]`) yield [`Snapshot::empty_now`].
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text).context("parse snapshot JSON")?;
        if is_empty_document(&value) {
            return Ok(Self::empty_now());
        }
        serde_json::from_value(value).context("decode snapshot")
    }

    /// Channels ordered by score, highest first. Equal scores keep input order.
    pub fn sorted_by_score(&self) -> Vec<&Channel> {
        let mut sorted: Vec<&Channel> = self.channels.iter().collect();
        sorted.sort_by(|a, b| by_score_desc(a, b));
        sorted
    }
}

fn is_empty_document(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
    }
}

fn by_score_desc(a: &Channel, b: &Channel) -> Ordering {
    b.metrics.overall_score.total_cmp(&a.metrics.overall_score)
}

impl Channel {
    /// Last `/`-separated segment of the url.
    pub fn display_name(&self) -> &str {
        display_name(&self.url)
    }

    pub fn score(&self) -> f64 {
        self.metrics.overall_score
    }

    pub fn tier(&self) -> ScoreTier {
        ScoreTier::for_score(self.score())
    }

    /// Percentage of successful checks; 0 when nothing was attempted.
    pub fn success_rate(&self) -> f64 {
        let m = &self.metrics;
        let attempts = (m.success_count + m.fail_count).max(1);
        m.success_count as f64 / attempts as f64 * 100.0
    }
}

pub fn display_name(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}
