//! Descriptive statistics over a filtered trip view.
//!
//! Each reporter is computed from a [`TripView`] without touching the
//! underlying table and renders itself through `Display`.

pub mod duration;
pub mod mode;
pub mod station;
pub mod time;
pub mod user;

use crate::models::table::TripView;
use std::fmt;
use std::io::{self, Write};

pub use duration::DurationStats;
pub use station::StationStats;
pub use time::TimeStats;
pub use user::UserStats;

pub(crate) const NO_TRIPS: &str = "No trips match the selected filters.";

pub trait Report: fmt::Display + Sized {
    /// Heading printed before the section
    const TITLE: &'static str;

    fn compute(view: &TripView<'_>) -> Self;
}

/// Compute one report and write it as a titled section.
pub fn write_report<R: Report, W: Write>(
    out: &mut W,
    view: &TripView<'_>,
    separator: &str,
) -> io::Result<()> {
    let report = R::compute(view);
    writeln!(out, "\n{}\n", R::TITLE)?;
    write!(out, "{report}")?;
    writeln!(out, "{separator}")
}

/// Time, station, duration and user sections, in that order.
pub fn write_all<W: Write>(out: &mut W, view: &TripView<'_>, separator: &str) -> io::Result<()> {
    write_report::<TimeStats, _>(out, view, separator)?;
    write_report::<StationStats, _>(out, view, separator)?;
    write_report::<DurationStats, _>(out, view, separator)?;
    write_report::<UserStats, _>(out, view, separator)
}
