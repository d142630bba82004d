mod common;
use chrono::{Datelike, Timelike, Weekday};
use common::{CHICAGO_CSV, chicago_table, config_for, setup_data_dir, washington_table};
use rbikeshare::core::loader::{load_city, load_from_reader};
use rbikeshare::errors::AppError;
use rbikeshare::models::city::City;

#[test]
fn test_derived_fields_match_start_time() {
    for table in [chicago_table(), washington_table()] {
        for trip in table.trips() {
            assert_eq!(trip.month(), trip.start_time.month());
            assert_eq!(trip.weekday(), trip.start_time.weekday());
            assert_eq!(trip.hour(), trip.start_time.hour());
        }
    }
}

#[test]
fn test_chicago_rows_and_derived_values() {
    let table = chicago_table();
    assert_eq!(table.len(), 7);
    assert!(table.columns.gender);
    assert!(table.columns.birth_year);

    let first = &table.trips()[0];
    assert_eq!(first.index, 0);
    assert_eq!(first.month(), 1);
    assert_eq!(first.weekday(), Weekday::Mon);
    assert_eq!(first.hour(), 8);
    assert_eq!(first.duration_secs, 300);
    assert_eq!(first.birth_year, Some(1980));
    assert_eq!(first.route(), "Canal St to Clark St");

    // empty gender and birth-year cells
    let third = &table.trips()[2];
    assert_eq!(third.gender, None);
    assert_eq!(third.birth_year, None);
    assert_eq!(third.user_type.as_deref(), Some("Customer"));
}

#[test]
fn test_washington_has_no_optional_columns() {
    let table = washington_table();
    assert_eq!(table.len(), 12);
    assert!(!table.columns.gender);
    assert!(!table.columns.birth_year);
    // "60.0" parsed as whole seconds
    assert_eq!(table.trips()[0].duration_secs, 60);
    assert!(table.trips().iter().all(|t| t.gender.is_none()));
}

#[test]
fn test_missing_required_column() {
    let csv = "Start Time,Start Station,End Station,Trip Duration\n2017-01-02 08:05:00,A,B,300\n";
    let err = load_from_reader(City::Chicago, "broken.csv", csv.as_bytes()).unwrap_err();
    match err {
        AppError::MissingColumn { column, source_name } => {
            assert_eq!(column, "User Type");
            assert_eq!(source_name, "broken.csv");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_invalid_start_time() {
    let csv = "Start Time,Start Station,End Station,Trip Duration,User Type\nyesterday,A,B,300,Subscriber\n";
    let err = load_from_reader(City::Chicago, "bad.csv", csv.as_bytes()).unwrap_err();
    assert!(matches!(err, AppError::InvalidTimestamp { row: 1, .. }));
}

#[test]
fn test_invalid_duration() {
    let csv = "Start Time,Start Station,End Station,Trip Duration,User Type\n2017-01-02 08:05:00,A,B,long,Subscriber\n";
    let err = load_from_reader(City::Chicago, "bad.csv", csv.as_bytes()).unwrap_err();
    assert!(matches!(err, AppError::InvalidDuration { row: 1, .. }));
}

#[test]
fn test_alternative_timestamp_layouts() {
    let csv = "Start Time,Start Station,End Station,Trip Duration,User Type\n\
               2017-05-03T21:15:00,A,B,10,Subscriber\n\
               2017-05-04 06:30,A,B,10,Subscriber\n";
    let table = load_from_reader(City::Chicago, "iso.csv", csv.as_bytes()).expect("load");
    assert_eq!(table.trips()[0].hour(), 21);
    assert_eq!(table.trips()[1].weekday(), Weekday::Thu);
}

#[test]
fn test_load_city_from_data_dir() {
    let dir = setup_data_dir("loader_city");
    let cfg = config_for(&dir);

    let table = load_city(&cfg, City::Chicago).expect("load chicago");
    assert_eq!(table.city, City::Chicago);
    assert_eq!(table.len(), CHICAGO_CSV.lines().count() - 1);

    let err = load_city(&cfg, City::NewYorkCity).unwrap_err();
    assert!(matches!(err, AppError::DataFileMissing(_)));
    assert!(err.to_string().contains("new_york_city.csv"));
}
