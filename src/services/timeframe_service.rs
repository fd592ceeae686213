use thiserror::Error;

use crate::models::{PriceSeries, PriceStats, Timeframe, TimeframeView};

/// Errors from selecting a timeframe's data out of a series
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Series has {actual} points but timeframe '{timeframe}' needs {needed}")]
    SeriesTooShort {
        timeframe: Timeframe,
        needed: usize,
        actual: usize,
    },
    #[error("No data points in timeframe '{timeframe}'")]
    NoData { timeframe: Timeframe },
}

/// Select the sub-series and stats for one timeframe
///
/// Pure with respect to its inputs: the same series and timeframe always
/// produce the same view, and the series is never modified. Series shorter
/// than the timeframe's window are rejected rather than truncated.
pub fn select(
    series: &PriceSeries,
    timeframe: Timeframe,
) -> Result<TimeframeView<'_>, SelectionError> {
    let window = timeframe.window();
    let needed = window.end;

    let points = series
        .points()
        .get(window)
        .ok_or(SelectionError::SeriesTooShort {
            timeframe,
            needed,
            actual: series.len(),
        })?;

    let stats = PriceStats::from_points(points).ok_or(SelectionError::NoData { timeframe })?;

    Ok(TimeframeView {
        timeframe,
        points,
        stats,
    })
}
