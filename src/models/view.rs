//! Derived view models for a selected timeframe

use serde::Serialize;

use super::price::PricePoint;
use super::timeframe::Timeframe;

/// Summary statistics over a run of price points
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceStats {
    /// Price of the most recent point in the run
    pub current: f64,
    pub highest: f64,
    pub lowest: f64,
}

impl PriceStats {
    /// Compute stats over a run of points, `None` when the run is empty
    ///
    /// `current` is positional, not an extremum: it is the last point's
    /// price and may sit anywhere between `lowest` and `highest`.
    pub fn from_points(points: &[PricePoint]) -> Option<PriceStats> {
        let last = points.last()?;

        let highest = points
            .iter()
            .map(|p| p.price)
            .fold(f64::NEG_INFINITY, f64::max);
        let lowest = points
            .iter()
            .map(|p| p.price)
            .fold(f64::INFINITY, f64::min);

        Some(PriceStats {
            current: last.price,
            highest,
            lowest,
        })
    }
}

/// The slice of a series selected for one timeframe, plus its stats
///
/// Borrows from the series it was cut from; rebuild it after any timeframe
/// change rather than holding it across one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeframeView<'a> {
    pub timeframe: Timeframe,
    pub points: &'a [PricePoint],
    pub stats: PriceStats,
}
