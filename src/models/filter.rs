use super::city::City;
use chrono::Weekday;
use std::fmt;

/// Months covered by the source data, in calendar order (january = 1).
pub const MONTHS: [&str; 6] = ["january", "february", "march", "april", "may", "june"];

pub const DAYS: [(&str, Weekday); 7] = [
    ("monday", Weekday::Mon),
    ("tuesday", Weekday::Tue),
    ("wednesday", Weekday::Wed),
    ("thursday", Weekday::Thu),
    ("friday", Weekday::Fri),
    ("saturday", Weekday::Sat),
    ("sunday", Weekday::Sun),
];

pub const ALL: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    /// Month ordinal, 1..=6
    Only(u32),
}

impl MonthFilter {
    /// Case-insensitive: "March" → Only(3), "ALL" → All
    pub fn from_input(s: &str) -> Option<Self> {
        let key = s.trim().to_lowercase();
        if key == ALL {
            return Some(MonthFilter::All);
        }
        MONTHS
            .iter()
            .position(|m| *m == key)
            .map(|i| MonthFilter::Only(i as u32 + 1))
    }

    pub fn matches(&self, month: u32) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Only(m) => *m == month,
        }
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str(ALL),
            MonthFilter::Only(m) => match (*m as usize).checked_sub(1).and_then(|i| MONTHS.get(i)) {
                Some(name) => f.write_str(name),
                None => write!(f, "month {m}"),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Only(Weekday),
}

impl DayFilter {
    pub fn from_input(s: &str) -> Option<Self> {
        let key = s.trim().to_lowercase();
        if key == ALL {
            return Some(DayFilter::All);
        }
        DAYS.iter()
            .find(|(name, _)| *name == key)
            .map(|(_, wd)| DayFilter::Only(*wd))
    }

    pub fn matches(&self, weekday: Weekday) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Only(wd) => *wd == weekday,
        }
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str(ALL),
            DayFilter::Only(wd) => {
                let name = DAYS
                    .iter()
                    .find(|(_, d)| d == wd)
                    .map(|(n, _)| *n)
                    .unwrap_or_default();
                f.write_str(name)
            }
        }
    }
}

/// The choices made once per analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelection {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl FilterSelection {
    pub fn new(city: City, month: MonthFilter, day: DayFilter) -> Self {
        Self { city, month, day }
    }
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | month: {} | day: {}", self.city, self.month, self.day)
    }
}
