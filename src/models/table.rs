use super::city::City;
use super::trip::Trip;
use std::borrow::Cow;

/// Optional columns a city source may or may not carry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionalColumns {
    pub gender: bool,
    pub birth_year: bool,
}

/// All trips loaded for one city, in source order.
#[derive(Debug, Clone)]
pub struct TripTable {
    pub city: City,
    pub columns: OptionalColumns,
    trips: Vec<Trip>,
}

impl TripTable {
    pub fn new(city: City, columns: OptionalColumns, trips: Vec<Trip>) -> Self {
        Self {
            city,
            columns,
            trips,
        }
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    /// View over every row.
    pub fn view(&self) -> TripView<'_> {
        TripView::new(self, (0..self.trips.len()).collect::<Vec<_>>())
    }
}

/// An ordered subset of a [`TripTable`], by row position.
///
/// Filtering builds views; the underlying table is never modified.
#[derive(Debug, Clone)]
pub struct TripView<'a> {
    table: &'a TripTable,
    rows: Cow<'a, [usize]>,
}

impl<'a> TripView<'a> {
    pub fn new(table: &'a TripTable, rows: impl Into<Cow<'a, [usize]>>) -> Self {
        Self {
            table,
            rows: rows.into(),
        }
    }

    pub fn columns(&self) -> OptionalColumns {
        self.table.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Trip> + '_ {
        let table = self.table;
        self.rows.iter().map(move |&row| &table.trips[row])
    }

    /// Trips in `[start, end)` of the view, clamped to its length.
    pub fn slice(&self, start: usize, end: usize) -> Vec<&'a Trip> {
        let end = end.min(self.rows.len());
        let start = start.min(end);
        let table = self.table;
        self.rows[start..end]
            .iter()
            .map(|&row| &table.trips[row])
            .collect()
    }

    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<usize> {
        self.rows.into_owned()
    }
}
