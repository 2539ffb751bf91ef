use chrono::{NaiveDate, NaiveDateTime, Timelike};
use rworktime::core::rounding::round_to_nearest_15_minutes;

fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 11, 1)
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap()
}

#[test]
fn test_rounding_boundaries() {
    assert_eq!(round_to_nearest_15_minutes(at(10, 7, 33)), at(10, 0, 0));
    assert_eq!(round_to_nearest_15_minutes(at(10, 8, 0)), at(10, 0, 0));
    assert_eq!(round_to_nearest_15_minutes(at(10, 9, 59)), at(10, 0, 0));
    assert_eq!(round_to_nearest_15_minutes(at(10, 10, 0)), at(10, 15, 0));
    assert_eq!(round_to_nearest_15_minutes(at(10, 24, 0)), at(10, 15, 0));
    assert_eq!(round_to_nearest_15_minutes(at(10, 25, 0)), at(10, 30, 0));
    assert_eq!(round_to_nearest_15_minutes(at(10, 54, 0)), at(10, 45, 0));
    assert_eq!(round_to_nearest_15_minutes(at(10, 55, 0)), at(11, 0, 0));
}

#[test]
fn test_rounding_rolls_over_midnight() {
    let next_day = NaiveDate::from_ymd_opt(2024, 11, 2)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    assert_eq!(round_to_nearest_15_minutes(at(23, 58, 10)), next_day);
}

#[test]
fn test_rounding_is_idempotent_and_lands_on_quarters() {
    for minute in 0..60 {
        for second in [0, 29, 59] {
            let once = round_to_nearest_15_minutes(at(9, minute, second));
            let twice = round_to_nearest_15_minutes(once);

            assert_eq!(once, twice, "minute {minute} second {second}");
            assert!([0, 15, 30, 45].contains(&once.minute()));
            assert_eq!(once.second(), 0);
            assert_eq!(once.nanosecond(), 0);
        }
    }
}
