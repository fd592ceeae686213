//! Data models for the price chart core
//!
//! This module organizes the point, series, timeframe and view types shared
//! between the generator, the selector and consumers of the chart data.

pub mod price;
pub mod series;
pub mod timeframe;
pub mod view;

// Re-export commonly used types for convenience
pub use price::PricePoint;
pub use series::{PriceSeries, DAILY_POINTS, HOURLY_POINTS, MONTHLY_POINTS, TOTAL_POINTS};
pub use timeframe::{ParseTimeframeError, Timeframe};
pub use view::{PriceStats, TimeframeView};
