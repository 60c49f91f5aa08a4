// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Business-day calendar and date arithmetic.
//!
//! ## Invariants
//!
//! - A business day is Monday-Friday and not a listed public holiday
//! - Dates carry no time of day; equality is by calendar day
//! - Walking helpers always land on a business day
//! - Overflow of the representable date range is an error, never a panic

use crate::error::DomainError;
use crate::holiday::HolidaySet;
use time::{Date, Duration, Weekday};
use time::macros::format_description;

/// Longest business-day walk accepted by [`BusinessCalendar`].
pub const MAX_BUSINESS_DAY_STEP: u32 = 1_000;

/// Parses an ISO `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is empty or not a
/// valid calendar date.
pub fn parse_date(input: &str) -> Result<Date, DomainError> {
    let trimmed: &str = input.trim();
    if trimmed.is_empty() {
        return Err(DomainError::DateParseError {
            date_string: input.to_string(),
            error: String::from("date is empty"),
        });
    }

    Date::parse(trimmed, format_description!("[year]-[month]-[day]")).map_err(|e| {
        DomainError::DateParseError {
            date_string: input.to_string(),
            error: e.to_string(),
        }
    })
}

/// Returns `true` for Saturday and Sunday.
#[must_use]
pub fn is_weekend(date: Date) -> bool {
    matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday)
}

/// Adds `days` calendar days (which may be negative) to `start`.
///
/// # Errors
///
/// Returns an error if the result is outside the representable date range.
pub fn add_calendar_days(start: Date, days: i64) -> Result<Date, DomainError> {
    start
        .checked_add(Duration::days(days))
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: format!("adding {days} calendar days to {start}"),
        })
}

/// Returns `from` if it already falls on `weekday`, otherwise the next
/// occurrence of `weekday` after it.
///
/// # Errors
///
/// Returns an error if the result is outside the representable date range.
pub fn next_weekday(from: Date, weekday: Weekday) -> Result<Date, DomainError> {
    let ahead: u8 = (7 + weekday.number_days_from_sunday() - from.weekday().number_days_from_sunday()) % 7;
    add_calendar_days(from, i64::from(ahead))
}

/// The day after `date`.
fn following_day(date: Date) -> Result<Date, DomainError> {
    date.next_day()
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: format!("stepping forward from {date}"),
        })
}

/// The day before `date`.
fn preceding_day(date: Date) -> Result<Date, DomainError> {
    date.previous_day()
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: format!("stepping backward from {date}"),
        })
}

/// Classifies dates against weekends and an injected holiday table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessCalendar {
    holidays: HolidaySet,
}

impl BusinessCalendar {
    /// Creates a calendar over the given holiday table.
    #[must_use]
    pub const fn new(holidays: HolidaySet) -> Self {
        Self { holidays }
    }

    /// A calendar using the built-in Hong Kong holiday table.
    #[must_use]
    pub fn hong_kong() -> Self {
        Self::new(HolidaySet::hong_kong())
    }

    /// Returns the underlying holiday table.
    #[must_use]
    pub const fn holidays(&self) -> &HolidaySet {
        &self.holidays
    }

    /// Returns `true` if `date` is a listed public holiday.
    #[must_use]
    pub fn is_holiday(&self, date: Date) -> bool {
        self.holidays.contains(date)
    }

    /// Returns the public holiday name for `date`, if any.
    #[must_use]
    pub fn holiday_name(&self, date: Date) -> Option<&str> {
        self.holidays.name(date)
    }

    /// Returns `true` if `date` is a weekday that is not a public holiday.
    #[must_use]
    pub fn is_business_day(&self, date: Date) -> bool {
        !is_weekend(date) && !self.is_holiday(date)
    }

    /// Returns the `n`th business day strictly after `start`.
    ///
    /// With `n == 0` the start date itself is returned, rolled forward to a
    /// business day if it is not one.
    ///
    /// # Errors
    ///
    /// Returns an error if `n` exceeds [`MAX_BUSINESS_DAY_STEP`] or the walk
    /// leaves the representable date range.
    pub fn add_business_days(&self, start: Date, n: u32) -> Result<Date, DomainError> {
        check_step(n)?;
        let mut current: Date = start;
        let mut added: u32 = 0;

        while added < n {
            current = following_day(current)?;
            if self.is_business_day(current) {
                added += 1;
            }
        }

        while !self.is_business_day(current) {
            current = following_day(current)?;
        }

        Ok(current)
    }

    /// Returns the `n`th business day strictly before `start`.
    ///
    /// With `n == 0` the start date itself is returned, rolled backward to a
    /// business day if it is not one.
    ///
    /// # Errors
    ///
    /// Returns an error if `n` exceeds [`MAX_BUSINESS_DAY_STEP`] or the walk
    /// leaves the representable date range.
    pub fn subtract_business_days(&self, start: Date, n: u32) -> Result<Date, DomainError> {
        check_step(n)?;
        let mut current: Date = start;
        let mut subtracted: u32 = 0;

        while subtracted < n {
            current = preceding_day(current)?;
            if self.is_business_day(current) {
                subtracted += 1;
            }
        }

        self.business_day_on_or_before(current)
    }

    /// Counts business days in `[start, end]`, both ends inclusive.
    ///
    /// Returns 0 when `end` precedes `start`.
    #[must_use]
    pub fn count_business_days(&self, start: Date, end: Date) -> u32 {
        let mut count: u32 = 0;
        let mut current: Date = start;

        while current <= end {
            if self.is_business_day(current) {
                count += 1;
            }
            match current.next_day() {
                Some(next) => current = next,
                None => break,
            }
        }

        count
    }

    /// Lists the business days in `(start, end]` in chronological order.
    #[must_use]
    pub fn business_days_after(&self, start: Date, end: Date) -> Vec<Date> {
        let mut days: Vec<Date> = Vec::new();
        let mut current: Date = start;

        while let Some(next) = current.next_day() {
            if next > end {
                break;
            }
            if self.is_business_day(next) {
                days.push(next);
            }
            current = next;
        }

        days
    }

    /// Returns `date` if it is a business day, otherwise the closest earlier
    /// business day. Never moves forward.
    ///
    /// # Errors
    ///
    /// Returns an error if the walk leaves the representable date range.
    pub fn business_day_on_or_before(&self, date: Date) -> Result<Date, DomainError> {
        let mut current: Date = date;
        while !self.is_business_day(current) {
            current = preceding_day(current)?;
        }
        Ok(current)
    }
}

const fn check_step(n: u32) -> Result<(), DomainError> {
    if n > MAX_BUSINESS_DAY_STEP {
        return Err(DomainError::BusinessDayLimitExceeded {
            requested: n,
            limit: MAX_BUSINESS_DAY_STEP,
        });
    }
    Ok(())
}
