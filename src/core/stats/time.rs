use super::{NO_TRIPS, Report, mode::mode};
use crate::models::table::TripView;
use crate::utils::date::{month_name, weekday_name};
use chrono::Weekday;
use std::fmt;

/// Most frequent times of travel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    pub month: Option<u32>,
    pub day: Option<Weekday>,
    pub hour: Option<u32>,
}

impl Report for TimeStats {
    const TITLE: &'static str = "Analyzing Travel Time Statistics...";

    fn compute(view: &TripView<'_>) -> Self {
        Self {
            month: mode(view.iter().map(|t| t.month())),
            day: mode(view.iter().map(|t| t.weekday())),
            hour: mode(view.iter().map(|t| t.hour())),
        }
    }
}

impl fmt::Display for TimeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (Some(month), Some(day), Some(hour)) = (self.month, self.day, self.hour) else {
            return writeln!(f, "{NO_TRIPS}");
        };

        writeln!(
            f,
            "Most Frequent Month: {}",
            month_name(month).unwrap_or("unknown")
        )?;
        writeln!(f, "Most Frequent Day: {}", weekday_name(day))?;
        writeln!(f, "Most Frequent Start Hour: {hour}")
    }
}
