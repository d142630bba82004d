use crate::models::filter::{DayFilter, FilterSelection, MonthFilter};
use crate::models::table::{TripTable, TripView};

/// Rows of `table` whose derived month and weekday match the filters.
/// `All` leaves that dimension untouched; source order is kept.
pub fn apply(table: &TripTable, month: MonthFilter, day: DayFilter) -> TripView<'_> {
    let rows: Vec<usize> = table
        .trips()
        .iter()
        .enumerate()
        .filter(|(_, t)| month.matches(t.month()) && day.matches(t.weekday()))
        .map(|(i, _)| i)
        .collect();

    log::debug!(
        "filter month={} day={}: {} of {} rows",
        month,
        day,
        rows.len(),
        table.len()
    );

    TripView::new(table, rows)
}

pub fn apply_selection<'a>(table: &'a TripTable, selection: &FilterSelection) -> TripView<'a> {
    apply(table, selection.month, selection.day)
}
