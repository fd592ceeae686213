//! Price point models

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A single sample on the price chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricePoint {
    /// Sample instant, serialized as integer milliseconds since the Unix epoch
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    pub price: f64,
    /// Timestamp rendered at the resolution the point was sampled at
    pub label: String,
}

impl PricePoint {
    /// Milliseconds since the Unix epoch
    pub fn timestamp_millis(&self) -> i64 {
        self.timestamp.timestamp_millis()
    }
}
