use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

/// One ride from a city source file.
///
/// Month, weekday and hour are derived from `start_time` in [`Trip::new`]
/// and only exposed through accessors, so they cannot drift from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    /// Zero-based position of the row in the source file
    pub index: usize,
    pub start_time: NaiveDateTime,
    pub start_station: String,
    pub end_station: String,
    pub duration_secs: u64,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,

    month: u32,
    weekday: Weekday,
    hour: u32,
}

impl Trip {
    pub fn new(
        index: usize,
        start_time: NaiveDateTime,
        start_station: String,
        end_station: String,
        duration_secs: u64,
    ) -> Self {
        Self {
            index,
            start_time,
            start_station,
            end_station,
            duration_secs,
            user_type: None,
            gender: None,
            birth_year: None,
            month: start_time.month(),
            weekday: start_time.weekday(),
            hour: start_time.hour(),
        }
    }

    pub fn with_user_type(mut self, user_type: Option<String>) -> Self {
        self.user_type = user_type;
        self
    }

    pub fn with_gender(mut self, gender: Option<String>) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_birth_year(mut self, birth_year: Option<i32>) -> Self {
        self.birth_year = birth_year;
        self
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// "<start> to <end>"
    pub fn route(&self) -> String {
        format!("{} to {}", self.start_station, self.end_station)
    }
}
