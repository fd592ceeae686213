//! Series container and its canonical layout

use serde::Serialize;

use super::price::PricePoint;

/// Hour-resolution points at the head of a full series
pub const HOURLY_POINTS: usize = 24;
/// Day-resolution points after the hourly segment
pub const DAILY_POINTS: usize = 30;
/// Month-resolution points at the tail
pub const MONTHLY_POINTS: usize = 12;
/// Points in a full generated series
pub const TOTAL_POINTS: usize = HOURLY_POINTS + DAILY_POINTS + MONTHLY_POINTS;

/// An ordered run of price points
///
/// A generated series concatenates three segments, oldest first within each:
/// 24 hourly points, 30 daily points, 12 monthly points. The container does
/// not enforce that layout itself; selection checks the length it needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Wrap an ordered run of points
    pub fn new(points: Vec<PricePoint>) -> Self {
        PriceSeries { points }
    }

    /// All points, oldest first
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
