use chrono::{DateTime, Datelike, Duration, Months, NaiveTime, Utc};
use rand::Rng;

use crate::models::{PricePoint, PriceSeries, DAILY_POINTS, HOURLY_POINTS, MONTHLY_POINTS, TOTAL_POINTS};

/// Default lower bound for generated prices
pub const DEFAULT_PRICE_FLOOR: f64 = 30_000.0;
/// Default upper bound for generated prices (exclusive)
pub const DEFAULT_PRICE_CEILING: f64 = 35_000.0;

/// Generator for the synthetic multi-resolution price series
///
/// Produces the canonical 66-point layout: 24 hourly points ending at the
/// reference time, 30 daily points ending at the reference time, then 12
/// points anchored to the first of each month. Prices are drawn uniformly
/// and independently from `[price_floor, price_ceiling)`; no continuity
/// between neighboring points is intended.
#[derive(Debug, Clone)]
pub struct SeriesGenerator {
    price_floor: f64,
    price_ceiling: f64,
}

impl Default for SeriesGenerator {
    fn default() -> Self {
        SeriesGenerator::new(DEFAULT_PRICE_FLOOR, DEFAULT_PRICE_CEILING)
    }
}

impl SeriesGenerator {
    /// Create a generator with custom price bounds
    ///
    /// `price_floor` must be strictly below `price_ceiling`.
    pub fn new(price_floor: f64, price_ceiling: f64) -> Self {
        SeriesGenerator {
            price_floor,
            price_ceiling,
        }
    }

    /// Generate the full series relative to `reference_time`
    ///
    /// Always returns exactly 66 points, ordered oldest first within each
    /// resolution segment. The caller supplies the random source, so a
    /// seeded generator reproduces the same series.
    pub fn generate<R: Rng>(&self, reference_time: DateTime<Utc>, rng: &mut R) -> PriceSeries {
        let mut points = Vec::with_capacity(TOTAL_POINTS);

        // Hourly segment: one point per hour, ending at the reference time
        for i in (0..HOURLY_POINTS).rev() {
            let timestamp = reference_time - Duration::hours(i as i64);
            points.push(PricePoint {
                timestamp,
                price: self.draw_price(rng),
                label: timestamp.format("%Y-%m-%d %H:%M").to_string(),
            });
        }

        // Daily segment: one point per day, ending at the reference time
        for i in (0..DAILY_POINTS).rev() {
            let timestamp = reference_time - Duration::days(i as i64);
            points.push(PricePoint {
                timestamp,
                price: self.draw_price(rng),
                label: timestamp.format("%Y-%m-%d").to_string(),
            });
        }

        // Monthly segment: anchored to the first of each calendar month
        for i in (0..MONTHLY_POINTS).rev() {
            let timestamp = month_start(reference_time, i as u32);
            points.push(PricePoint {
                timestamp,
                price: self.draw_price(rng),
                label: timestamp.format("%b %Y").to_string(),
            });
        }

        PriceSeries::new(points)
    }

    fn draw_price<R: Rng>(&self, rng: &mut R) -> f64 {
        rng.gen_range(self.price_floor..self.price_ceiling)
    }
}

/// Midnight UTC on the first day of the month `months_back` months before `reference`
fn month_start(reference: DateTime<Utc>, months_back: u32) -> DateTime<Utc> {
    // checked_sub_months clamps short months (Mar 31 minus one month lands
    // on the end of February) before the day is normalized to 1
    let date = reference
        .date_naive()
        .checked_sub_months(Months::new(months_back))
        .and_then(|d| d.with_day(1))
        .unwrap_or_else(|| reference.date_naive());

    DateTime::<Utc>::from_naive_utc_and_offset(date.and_time(NaiveTime::MIN), Utc)
}
