use super::{NO_TRIPS, Report};
use crate::models::table::TripView;
use crate::utils::formatting::secs2readable;
use std::fmt;

/// Total and mean trip duration, in seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct DurationStats {
    pub trips: usize,
    pub total_secs: u64,
    /// `None` for an empty view
    pub mean_secs: Option<f64>,
}

impl Report for DurationStats {
    const TITLE: &'static str = "Analyzing Trip Durations...";

    fn compute(view: &TripView<'_>) -> Self {
        let trips = view.len();
        let total_secs: u64 = view.iter().map(|t| t.duration_secs).sum();
        let mean_secs = (trips > 0).then(|| total_secs as f64 / trips as f64);

        Self {
            trips,
            total_secs,
            mean_secs,
        }
    }
}

impl fmt::Display for DurationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(mean) = self.mean_secs else {
            return writeln!(f, "{NO_TRIPS}");
        };

        writeln!(f, "Trips: {}", self.trips)?;
        writeln!(
            f,
            "Total Duration: {} seconds ({})",
            self.total_secs,
            secs2readable(self.total_secs)
        )?;
        writeln!(
            f,
            "Average Duration: {:.2} seconds ({})",
            mean,
            secs2readable(mean.round() as u64)
        )
    }
}
