//! Table rendering utilities for CLI outputs.

use crate::models::table::OptionalColumns;
use crate::models::trip::Trip;
use crate::utils::formatting::pad_right;
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            columns: headers
                .iter()
                .map(|h| Column {
                    header: h.to_string(),
                    width: h.width(),
                })
                .collect(),
            rows: Vec::new(),
        }
    }

    /// Widens columns as needed; missing cells render empty.
    pub fn add_row(&mut self, row: Vec<String>) {
        for (col, cell) in self.columns.iter_mut().zip(&row) {
            col.width = col.width.max(cell.width());
        }
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&pad_right(&col.header, col.width));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                out.push_str(&pad_right(cell, col.width));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}

/// Raw trip rows as printed by the pager.
pub fn trips_table(trips: &[&Trip], columns: OptionalColumns) -> Table {
    let mut headers = vec![
        "#",
        "Start Time",
        "Start Station",
        "End Station",
        "Trip Duration",
        "User Type",
    ];
    if columns.gender {
        headers.push("Gender");
    }
    if columns.birth_year {
        headers.push("Birth Year");
    }

    let mut table = Table::new(&headers);
    for t in trips {
        let mut row = vec![
            t.index.to_string(),
            t.start_time.format("%Y-%m-%d %H:%M:%S").to_string(),
            t.start_station.clone(),
            t.end_station.clone(),
            t.duration_secs.to_string(),
            t.user_type.clone().unwrap_or_default(),
        ];
        if columns.gender {
            row.push(t.gender.clone().unwrap_or_default());
        }
        if columns.birth_year {
            row.push(t.birth_year.map(|y| y.to_string()).unwrap_or_default());
        }
        table.add_row(row);
    }
    table
}
