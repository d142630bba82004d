mod common;
use chrono::Weekday;
use common::{chicago_table, washington_table};
use rbikeshare::core::filter::{apply, apply_selection};
use rbikeshare::models::city::City;
use rbikeshare::models::filter::{DayFilter, FilterSelection, MONTHS, MonthFilter};

#[test]
fn test_month_selector_ordinals() {
    for (i, name) in MONTHS.iter().enumerate() {
        assert_eq!(
            MonthFilter::from_input(name),
            Some(MonthFilter::Only(i as u32 + 1))
        );
    }
    assert_eq!(MonthFilter::from_input("  MARCH "), Some(MonthFilter::Only(3)));
    assert_eq!(MonthFilter::from_input("All"), Some(MonthFilter::All));
    assert_eq!(MonthFilter::from_input("july"), None);
}

#[test]
fn test_day_selector_case_insensitive() {
    assert_eq!(DayFilter::from_input("Monday"), Some(DayFilter::Only(Weekday::Mon)));
    assert_eq!(DayFilter::from_input("SUNDAY"), Some(DayFilter::Only(Weekday::Sun)));
    assert_eq!(DayFilter::from_input("all"), Some(DayFilter::All));
    assert_eq!(DayFilter::from_input("mon"), None);
}

#[test]
fn test_all_all_keeps_every_row_in_order() {
    let table = chicago_table();
    let view = apply(&table, MonthFilter::All, DayFilter::All);

    assert_eq!(view.len(), table.len());
    let rows: Vec<usize> = view.iter().map(|t| t.index).collect();
    assert_eq!(rows, (0..table.len()).collect::<Vec<_>>());
}

#[test]
fn test_filter_by_month_only() {
    let table = chicago_table();
    let view = apply(&table, MonthFilter::Only(3), DayFilter::All);

    assert_eq!(view.len(), 4);
    assert!(view.iter().all(|t| t.month() == 3));
    assert_eq!(view.rows(), &[1, 2, 3, 4]);
}

#[test]
fn test_filter_by_day_only() {
    let table = chicago_table();
    let view = apply(&table, MonthFilter::All, DayFilter::Only(Weekday::Mon));

    assert_eq!(view.len(), 3);
    assert!(view.iter().all(|t| t.weekday() == Weekday::Mon));
}

#[test]
fn test_filter_by_month_and_day() {
    let table = chicago_table();
    let selection = FilterSelection::new(
        City::Chicago,
        MonthFilter::from_input("march").unwrap(),
        DayFilter::from_input("monday").unwrap(),
    );
    let view = apply_selection(&table, &selection);

    assert_eq!(view.rows(), &[1, 2]);
}

#[test]
fn test_filter_with_no_match_is_empty() {
    let table = washington_table();
    let view = apply(&table, MonthFilter::Only(1), DayFilter::All);
    assert!(view.is_empty());
    // table untouched
    assert_eq!(table.len(), 12);
}
