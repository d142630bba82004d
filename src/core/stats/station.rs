use super::{NO_TRIPS, Report, mode::mode};
use crate::models::table::TripView;
use std::fmt;

/// Most popular stations and trip route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub route: Option<String>,
}

impl Report for StationStats {
    const TITLE: &'static str = "Analyzing Station Usage...";

    fn compute(view: &TripView<'_>) -> Self {
        Self {
            start_station: mode(view.iter().map(|t| t.start_station.as_str())).map(str::to_string),
            end_station: mode(view.iter().map(|t| t.end_station.as_str())).map(str::to_string),
            // derived for this report only
            route: mode(view.iter().map(|t| t.route())),
        }
    }
}

impl fmt::Display for StationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (Some(start), Some(end), Some(route)) =
            (&self.start_station, &self.end_station, &self.route)
        else {
            return writeln!(f, "{NO_TRIPS}");
        };

        writeln!(f, "Most Popular Start Station: {start}")?;
        writeln!(f, "Most Popular End Station: {end}")?;
        writeln!(f, "Most Common Trip Route: {route}")
    }
}
