//! Fixed-size windows over a filtered view, handed out on demand.

use crate::models::table::TripView;
use crate::utils::table::trips_table;
use std::io::{self, Write};
use std::ops::Range;

pub const NO_MORE_DATA: &str = "No more data available.";

/// One window of rows, by position in the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub range: Range<usize>,
    /// True when this page reaches the end of the view
    pub exhausted: bool,
}

#[derive(Debug, Clone)]
pub struct Pager {
    cursor: usize,
    len: usize,
    page_size: usize,
    done: bool,
}

impl Pager {
    pub fn new(len: usize, page_size: usize) -> Self {
        Self {
            cursor: 0,
            len,
            page_size: page_size.max(1),
            done: false,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_exhausted(&self) -> bool {
        self.done
    }

    /// Rows `[cursor, cursor + page_size)` clamped to the view, then
    /// advances. Returns `None` once a page has reported exhaustion.
    pub fn next_page(&mut self) -> Option<Page> {
        if self.done {
            return None;
        }

        let start = self.cursor.min(self.len);
        let end = (self.cursor + self.page_size).min(self.len);
        self.cursor += self.page_size;
        self.done = self.cursor >= self.len;

        Some(Page {
            range: start..end,
            exhausted: self.done,
        })
    }
}

/// Print the trips of `page` as an aligned table.
pub fn write_page<W: Write>(out: &mut W, view: &TripView<'_>, page: &Page) -> io::Result<()> {
    let trips = view.slice(page.range.start, page.range.end);
    write!(out, "{}", trips_table(&trips, view.columns()).render())
}
