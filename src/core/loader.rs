//! CSV loading for a city's trip file.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::city::City;
use crate::models::table::{OptionalColumns, TripTable};
use crate::models::trip::Trip;
use crate::utils::date::parse_start_time;
use crate::utils::path::city_file;
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;

pub const COL_START_TIME: &str = "Start Time";
pub const COL_START_STATION: &str = "Start Station";
pub const COL_END_STATION: &str = "End Station";
pub const COL_DURATION: &str = "Trip Duration";
pub const COL_USER_TYPE: &str = "User Type";
pub const COL_GENDER: &str = "Gender";
pub const COL_BIRTH_YEAR: &str = "Birth Year";

/// Header positions resolved once per file.
struct Layout {
    start_time: usize,
    start_station: usize,
    end_station: usize,
    duration: usize,
    user_type: usize,
    gender: Option<usize>,
    birth_year: Option<usize>,
}

impl Layout {
    fn from_headers(headers: &StringRecord, source_name: &str) -> AppResult<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| AppError::MissingColumn {
                source_name: source_name.to_string(),
                column: name.to_string(),
            })
        };

        Ok(Self {
            start_time: require(COL_START_TIME)?,
            start_station: require(COL_START_STATION)?,
            end_station: require(COL_END_STATION)?,
            duration: require(COL_DURATION)?,
            user_type: require(COL_USER_TYPE)?,
            gender: find(COL_GENDER),
            birth_year: find(COL_BIRTH_YEAR),
        })
    }

    fn columns(&self) -> OptionalColumns {
        OptionalColumns {
            gender: self.gender.is_some(),
            birth_year: self.birth_year.is_some(),
        }
    }
}

/// Load the source file configured for `city`.
pub fn load_city(cfg: &Config, city: City) -> AppResult<TripTable> {
    let path = city_file(&cfg.data_path(), city);
    if !path.is_file() {
        return Err(AppError::DataFileMissing(path));
    }

    log::info!("loading {} from {}", city, path.display());
    let file = File::open(&path)?;
    load_from_reader(city, &path.display().to_string(), file)
}

/// Parse trip rows from any CSV reader; `source_name` is used in errors.
pub fn load_from_reader<R: Read>(city: City, source_name: &str, reader: R) -> AppResult<TripTable> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = rdr.headers()?.clone();
    let layout = Layout::from_headers(&headers, source_name)?;

    let mut trips = Vec::new();
    for (index, record) in rdr.records().enumerate() {
        let record = record?;
        trips.push(parse_trip(index, &record, &layout)?);
    }

    log::debug!("{}: {} trips loaded", source_name, trips.len());
    Ok(TripTable::new(city, layout.columns(), trips))
}

fn parse_trip(index: usize, record: &StringRecord, layout: &Layout) -> AppResult<Trip> {
    let field = |i: usize| record.get(i).unwrap_or("").trim();
    // data rows are 1-based after the header line
    let row = index + 1;

    let raw_start = field(layout.start_time);
    let start_time = parse_start_time(raw_start).ok_or_else(|| AppError::InvalidTimestamp {
        row,
        value: raw_start.to_string(),
    })?;

    let raw_duration = field(layout.duration);
    let duration_secs = parse_duration(raw_duration).ok_or_else(|| AppError::InvalidDuration {
        row,
        value: raw_duration.to_string(),
    })?;

    let trip = Trip::new(
        index,
        start_time,
        field(layout.start_station).to_string(),
        field(layout.end_station).to_string(),
        duration_secs,
    )
    .with_user_type(non_empty(field(layout.user_type)))
    .with_gender(layout.gender.and_then(|i| non_empty(field(i))))
    .with_birth_year(layout.birth_year.and_then(|i| parse_year(field(i))));

    Ok(trip)
}

/// "1039" or "1039.0" → 1039; rounds fractional seconds.
fn parse_duration(s: &str) -> Option<u64> {
    if let Ok(secs) = s.parse::<u64>() {
        return Some(secs);
    }
    let secs = s.parse::<f64>().ok()?;
    (secs.is_finite() && secs >= 0.0).then(|| secs.round() as u64)
}

/// "1992" or "1992.0" → 1992; empty → None
fn parse_year(s: &str) -> Option<i32> {
    if s.is_empty() {
        return None;
    }
    s.parse::<i32>()
        .ok()
        .or_else(|| s.parse::<f64>().ok().filter(|y| y.is_finite()).map(|y| y as i32))
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}
