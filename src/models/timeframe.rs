//! Timeframe keys and their windows into a series

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::series::{DAILY_POINTS, HOURLY_POINTS, MONTHLY_POINTS};

/// Error for timeframe keys outside the supported set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown timeframe: '{0}'. Supported: 24h, 7d, 30d, 1y")]
pub struct ParseTimeframeError(pub String);

/// The selectable chart timeframes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    /// Twenty-four hourly points ending at the reference time
    #[serde(rename = "24h")]
    Hour24,
    /// Seven daily points
    ///
    /// The window is cut from the head of the daily segment, so it covers
    /// the oldest week of daily data rather than the week nearest the
    /// reference time.
    #[serde(rename = "7d")]
    Day7,
    /// All thirty daily points
    #[serde(rename = "30d")]
    Day30,
    /// Twelve month-start points
    #[serde(rename = "1y")]
    Year1,
}

impl Timeframe {
    /// Canonical key, also the `Display`/`FromStr` form
    pub fn key(&self) -> &'static str {
        match self {
            Timeframe::Hour24 => "24h",
            Timeframe::Day7 => "7d",
            Timeframe::Day30 => "30d",
            Timeframe::Year1 => "1y",
        }
    }

    /// Caption for this timeframe's selector button
    pub fn label(&self) -> &'static str {
        match self {
            Timeframe::Hour24 => "24H",
            Timeframe::Day7 => "7D",
            Timeframe::Day30 => "30D",
            Timeframe::Year1 => "1Y",
        }
    }

    /// All timeframes in selector button order
    pub fn all() -> [Timeframe; 4] {
        [
            Timeframe::Hour24,
            Timeframe::Day7,
            Timeframe::Day30,
            Timeframe::Year1,
        ]
    }

    /// Index range of this timeframe's points within a full series
    pub fn window(&self) -> Range<usize> {
        match self {
            Timeframe::Hour24 => 0..HOURLY_POINTS,
            Timeframe::Day7 => HOURLY_POINTS..HOURLY_POINTS + 7,
            Timeframe::Day30 => HOURLY_POINTS..HOURLY_POINTS + DAILY_POINTS,
            Timeframe::Year1 => {
                HOURLY_POINTS + DAILY_POINTS..HOURLY_POINTS + DAILY_POINTS + MONTHLY_POINTS
            }
        }
    }
}

impl Default for Timeframe {
    fn default() -> Self {
        Timeframe::Hour24
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Timeframe {
    type Err = ParseTimeframeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "24h" => Ok(Timeframe::Hour24),
            "7d" => Ok(Timeframe::Day7),
            "30d" => Ok(Timeframe::Day30),
            "1y" => Ok(Timeframe::Year1),
            _ => Err(ParseTimeframeError(s.to_string())),
        }
    }
}
