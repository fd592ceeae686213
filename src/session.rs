use crate::models::{PriceSeries, Timeframe, TimeframeView};
use crate::services::timeframe_service::{self, SelectionError};

/// One chart's worth of state: an owned series and the active timeframe
///
/// The series is injected at construction and read-only afterwards; the
/// timeframe is the only thing that changes. Views are recomputed from
/// scratch on every call rather than cached.
#[derive(Debug, Clone)]
pub struct ChartSession {
    series: PriceSeries,
    timeframe: Timeframe,
}

impl ChartSession {
    /// Create a session over a series with the default timeframe
    pub fn new(series: PriceSeries) -> Self {
        ChartSession {
            series,
            timeframe: Timeframe::default(),
        }
    }

    /// Create a session with an explicit starting timeframe
    pub fn with_timeframe(series: PriceSeries, timeframe: Timeframe) -> Self {
        ChartSession { series, timeframe }
    }

    /// The active timeframe
    pub fn timeframe(&self) -> Timeframe {
        self.timeframe
    }

    /// Switch the active timeframe; any timeframe can follow any other
    pub fn set_timeframe(&mut self, timeframe: Timeframe) {
        self.timeframe = timeframe;
    }

    /// The full underlying series
    pub fn series(&self) -> &PriceSeries {
        &self.series
    }

    /// Recompute the view for the active timeframe
    pub fn view(&self) -> Result<TimeframeView<'_>, SelectionError> {
        timeframe_service::select(&self.series, self.timeframe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::series_service::SeriesGenerator;
    use chrono::{TimeZone, Utc};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session() -> ChartSession {
        let reference = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        ChartSession::new(SeriesGenerator::default().generate(reference, &mut rng))
    }

    #[test]
    fn test_new_session_starts_on_24h() {
        assert_eq!(session().timeframe(), Timeframe::Hour24);
    }

    #[test]
    fn test_every_timeframe_is_reachable_from_every_other() {
        let mut session = session();
        for from in Timeframe::all() {
            for to in Timeframe::all() {
                session.set_timeframe(from);
                session.set_timeframe(to);
                assert_eq!(session.timeframe(), to);
            }
        }
    }

    #[test]
    fn test_view_follows_the_active_timeframe() {
        let mut session = session();

        let initial = session.view().expect("24h view");
        assert_eq!(initial.timeframe, Timeframe::Hour24);
        assert_eq!(initial.points.len(), 24);

        session.set_timeframe(Timeframe::Year1);
        let switched = session.view().expect("1y view");
        assert_eq!(switched.timeframe, Timeframe::Year1);
        assert_eq!(switched.points.len(), 12);
    }

    #[test]
    fn test_view_is_stable_between_timeframe_changes() {
        let session = session();
        let first = session.view().expect("first");
        let second = session.view().expect("second");
        assert_eq!(first, second);
    }
}
