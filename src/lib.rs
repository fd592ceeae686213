//! Price history chart core
//!
//! Generates a synthetic multi-resolution price series and derives the
//! sub-series and summary statistics for a selected timeframe. Rendering is
//! left to the consumer; this crate only produces the data a chart needs:
//! the points to plot and the current/highest/lowest stats beside them.

pub mod models;
pub mod services;
pub mod session;
pub mod utils;

// Re-export commonly used types for convenience
pub use models::{ParseTimeframeError, PricePoint, PriceSeries, PriceStats, Timeframe, TimeframeView};
pub use services::series_service::SeriesGenerator;
pub use services::timeframe_service::{select, SelectionError};
pub use session::ChartSession;
