use chrono::NaiveDate;
use rworktime::core::aggregator::{parse_work_time, summarize_current_month, summarize_month};
use rworktime::errors::AppError;
use rworktime::models::stored_row::StoredRow;

mod common;
use common::{MemoryStore, row};

fn nov(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 11, day).unwrap()
}

#[test]
fn test_two_entries_in_the_same_month() {
    let rows = vec![
        row("2024/11/01", "10:00", "20:00", "09:00"),
        row("2024/11/04", "09:30", "19:00", "08:30"),
    ];
    let s = summarize_month(&rows, nov(15)).unwrap();

    assert_eq!(s.entry_count, 2);
    assert_eq!(s.total_hours, 17);
    assert_eq!(s.total_minutes, 30);
    assert_eq!(s.last_date, Some(nov(4)));
    assert!(!s.is_empty());
}

#[test]
fn test_no_entries_gives_empty_summary() {
    let rows = vec![row("2024/10/31", "10:00", "20:00", "09:00")];
    let s = summarize_month(&rows, nov(15)).unwrap();

    assert!(s.is_empty());
    assert_eq!(s.last_date, None);
    assert_eq!((s.year, s.month), (2024, 11));
    assert_eq!((s.total_hours, s.total_minutes), (0, 0));

    let mut store = MemoryStore::default();
    assert!(summarize_current_month(&mut store, nov(15)).unwrap().is_empty());
}

#[test]
fn test_minutes_carry_into_hours() {
    let rows = vec![
        row("2024/11/01", "09:00", "17:45", "07:45"),
        row("2024/11/02", "09:00", "18:30", "08:30"),
        row("2024/11/03", "09:00", "18:50", "8:50"),
    ];
    let s = summarize_month(&rows, nov(3)).unwrap();

    // 23h + 125m
    assert_eq!((s.total_hours, s.total_minutes), (25, 5));
    assert_eq!(s.total_in_minutes(), 25 * 60 + 5);
}

#[test]
fn test_draft_rows_are_skipped() {
    let mut draft = row("2024/11/02", "10:00", "20:00", "09:00");
    draft.rest = None;
    let blank = StoredRow {
        date: Some("2024/11/03".into()),
        work_time: Some("  ".into()),
        ..Default::default()
    };
    let rows = vec![row("2024/11/01", "10:00", "20:00", "09:00"), draft, blank];

    let s = summarize_month(&rows, nov(30)).unwrap();
    assert_eq!(s.entry_count, 1);
    assert_eq!(s.last_date, Some(nov(1)));
}

#[test]
fn test_same_month_of_another_year_is_excluded() {
    let rows = vec![
        row("2023/11/10", "10:00", "20:00", "09:00"),
        row("2024-11-12", "10:00", "19:00", "08:00"),
    ];
    let s = summarize_month(&rows, nov(30)).unwrap();

    assert_eq!(s.entry_count, 1);
    assert_eq!((s.total_hours, s.total_minutes), (8, 0));
}

#[test]
fn test_malformed_stored_values() {
    let rows = vec![row("2024/11/01", "10:00", "20:00", "9h")];
    assert!(matches!(
        summarize_month(&rows, nov(1)),
        Err(AppError::DataParse(_))
    ));

    let rows = vec![row("yesterday", "10:00", "20:00", "09:00")];
    assert!(matches!(
        summarize_month(&rows, nov(1)),
        Err(AppError::DataParse(_))
    ));
}

#[test]
fn test_parse_work_time() {
    assert_eq!(parse_work_time("09:00").unwrap(), 540);
    assert_eq!(parse_work_time("8:30").unwrap(), 510);
    assert!(parse_work_time("8:75").is_err());
    assert!(parse_work_time("").is_err());
}
