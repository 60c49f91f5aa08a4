// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Properties of the business-day walkers checked across the loaded
//! holiday years.

use crate::{BusinessCalendar, DomainError, MAX_BUSINESS_DAY_STEP, add_calendar_days, is_weekend};
use time::Date;
use time::macros::date;

fn every_day(start: Date, end: Date) -> Vec<Date> {
    let mut days: Vec<Date> = Vec::new();
    let mut current: Date = start;
    while current <= end {
        days.push(current);
        current = current.next_day().unwrap();
    }
    days
}

#[test]
fn test_add_business_days_lands_on_nth_business_day() {
    let calendar: BusinessCalendar = BusinessCalendar::hong_kong();

    for start in every_day(date!(2024 - 01 - 01), date!(2025 - 11 - 30)) {
        for n in 1..=10 {
            let result: Date = calendar.add_business_days(start, n).unwrap();
            assert!(calendar.is_business_day(result));
            assert!(result > start);
            assert_eq!(
                calendar.count_business_days(start.next_day().unwrap(), result),
                n,
                "start {start}, n {n}"
            );
        }
    }
}

#[test]
fn test_add_zero_business_days_is_first_business_day_on_or_after() {
    let calendar: BusinessCalendar = BusinessCalendar::hong_kong();

    for start in every_day(date!(2024 - 01 - 01), date!(2025 - 12 - 20)) {
        let result: Date = calendar.add_business_days(start, 0).unwrap();
        assert!(calendar.is_business_day(result));
        assert!(result >= start);
        if result > start {
            assert_eq!(
                calendar.count_business_days(start, result.previous_day().unwrap()),
                0
            );
        }
    }
}

#[test]
fn test_subtract_business_days_lands_on_nth_business_day_before() {
    let calendar: BusinessCalendar = BusinessCalendar::hong_kong();

    for start in every_day(date!(2024 - 02 - 01), date!(2025 - 12 - 31)) {
        for n in 1..=10 {
            let result: Date = calendar.subtract_business_days(start, n).unwrap();
            assert!(calendar.is_business_day(result));
            assert!(result < start);
            assert_eq!(
                calendar.count_business_days(result, start.previous_day().unwrap()),
                n,
                "start {start}, n {n}"
            );
        }
    }
}

#[test]
fn test_backward_adjustment_never_moves_forward() {
    let calendar: BusinessCalendar = BusinessCalendar::hong_kong();

    for day in every_day(date!(2024 - 01 - 10), date!(2025 - 12 - 31)) {
        let adjusted: Date = calendar.business_day_on_or_before(day).unwrap();
        assert!(adjusted <= day);
        assert!(calendar.is_business_day(adjusted));
        assert_eq!(
            calendar.count_business_days(adjusted.next_day().unwrap(), day),
            0
        );
    }
}

#[test]
fn test_count_splits_additively() {
    let calendar: BusinessCalendar = BusinessCalendar::hong_kong();
    let start: Date = date!(2025 - 01 - 01);
    let end: Date = date!(2025 - 12 - 31);

    for split in every_day(start, date!(2025 - 12 - 30)) {
        let left: u32 = calendar.count_business_days(start, split);
        let right: u32 = calendar.count_business_days(split.next_day().unwrap(), end);
        assert_eq!(left + right, calendar.count_business_days(start, end));
    }
}

#[test]
fn test_business_days_in_2025() {
    // 261 weekdays less the 15 holidays that fall on a weekday
    let calendar: BusinessCalendar = BusinessCalendar::hong_kong();
    let weekday_holidays: usize = calendar
        .holidays()
        .between(date!(2025 - 01 - 01), date!(2025 - 12 - 31))
        .filter(|day| !crate::is_weekend(*day))
        .count();
    assert_eq!(
        calendar.count_business_days(date!(2025 - 01 - 01), date!(2025 - 12 - 31)),
        261 - u32::try_from(weekday_holidays).unwrap()
    );
}

#[test]
fn test_calendar_days_round_trip() {
    let start: Date = date!(2025 - 02 - 27);
    let forward: Date = add_calendar_days(start, 30).unwrap();
    assert_eq!(add_calendar_days(forward, -30).unwrap(), start);
}

#[test]
fn test_business_day_matches_weekday_and_holiday_table() {
    let calendar: BusinessCalendar = BusinessCalendar::hong_kong();

    for day in every_day(date!(2024 - 01 - 01), date!(2025 - 12 - 31)) {
        let expected: bool = !is_weekend(day) && !calendar.holidays().contains(day);
        assert_eq!(calendar.is_business_day(day), expected, "{day}");
    }

    for (day, name) in calendar.holidays().iter() {
        assert!(!calendar.is_business_day(day), "{name} on {day}");
    }
}

#[test]
fn test_walks_beyond_step_limit_are_rejected() {
    let calendar: BusinessCalendar = BusinessCalendar::hong_kong();
    let start: Date = date!(2025 - 03 - 03);

    assert!(calendar.add_business_days(start, MAX_BUSINESS_DAY_STEP).is_ok());
    assert!(
        calendar
            .subtract_business_days(start, MAX_BUSINESS_DAY_STEP)
            .is_ok()
    );

    let over: u32 = MAX_BUSINESS_DAY_STEP + 1;
    assert_eq!(
        calendar.add_business_days(start, over),
        Err(DomainError::BusinessDayLimitExceeded {
            requested: over,
            limit: MAX_BUSINESS_DAY_STEP,
        })
    );
    assert!(matches!(
        calendar.subtract_business_days(start, u32::MAX),
        Err(DomainError::BusinessDayLimitExceeded { .. })
    ));
}
