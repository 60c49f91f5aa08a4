// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Contractual notice terms and the standard last working day.
//!
//! ## Rules
//!
//! - A notice given in days is that many days of the declared period type
//! - A notice given in months is measured in calendar months and converted
//!   to the number of calendar days it spans
//! - Working-type notice counts business days strictly after the
//!   resignation date
//! - Calendar-type notice lands on resignation + days, then walks backward
//!   to a business day (never forward)

use crate::calendar::{BusinessCalendar, add_calendar_days};
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, Month};

/// Longest notice accepted when expressed in days.
pub const MAX_NOTICE_DAYS: u32 = 365;

/// Longest notice accepted when expressed in months.
pub const MAX_NOTICE_MONTHS: u32 = 12;

/// The unit a notice period is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeUnit {
    /// A number of days.
    Days,
    /// A number of calendar months.
    Months,
}

impl NoticeUnit {
    /// Returns the wire representation of this unit.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Days => "days",
            Self::Months => "months",
        }
    }
}

impl FromStr for NoticeUnit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "days" => Ok(Self::Days),
            "months" => Ok(Self::Months),
            other => Err(DomainError::InvalidNoticeUnit(other.to_string())),
        }
    }
}

impl std::fmt::Display for NoticeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether notice days are counted on the calendar or as working days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticePeriodType {
    /// Every day counts, weekends and holidays included.
    Calendar,
    /// Only business days count.
    Working,
}

impl NoticePeriodType {
    /// Returns the wire representation of this period type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Calendar => "calendar",
            Self::Working => "working",
        }
    }
}

impl FromStr for NoticePeriodType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "calendar" => Ok(Self::Calendar),
            "working" => Ok(Self::Working),
            other => Err(DomainError::InvalidNoticePeriodType(other.to_string())),
        }
    }
}

impl std::fmt::Display for NoticePeriodType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The notice an employee must give, anchored at the resignation date.
///
/// Terms can be serialized for output but are only ever built through
/// [`NoticeTerms::new`], so there is no `Deserialize` impl:
///
/// ```compile_fail
/// fn deserializable<T: serde::de::DeserializeOwned>() {}
/// deserializable::<notice_planner_domain::NoticeTerms>();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NoticeTerms {
    resignation_date: Date,
    value: u32,
    unit: NoticeUnit,
    period_type: NoticePeriodType,
}

impl NoticeTerms {
    /// Creates validated notice terms.
    ///
    /// # Arguments
    ///
    /// * `resignation_date` - The day notice is given
    /// * `value` - The length of the notice, at least 1
    /// * `unit` - Whether `value` is in days or months
    /// * `period_type` - Whether days are calendar or working days
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidNoticePeriod` if `value` is zero or
    /// exceeds the bound for its unit.
    pub fn new(
        resignation_date: Date,
        value: u32,
        unit: NoticeUnit,
        period_type: NoticePeriodType,
    ) -> Result<Self, DomainError> {
        if value == 0 {
            return Err(DomainError::InvalidNoticePeriod {
                value,
                reason: String::from("notice period must be at least 1"),
            });
        }

        let max: u32 = match unit {
            NoticeUnit::Days => MAX_NOTICE_DAYS,
            NoticeUnit::Months => MAX_NOTICE_MONTHS,
        };
        if value > max {
            return Err(DomainError::InvalidNoticePeriod {
                value,
                reason: format!("notice period in {unit} must not exceed {max}"),
            });
        }

        Ok(Self {
            resignation_date,
            value,
            unit,
            period_type,
        })
    }

    /// The day notice is given.
    #[must_use]
    pub const fn resignation_date(&self) -> Date {
        self.resignation_date
    }

    /// The notice length in `unit`s.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// The unit the notice is expressed in.
    #[must_use]
    pub const fn unit(&self) -> NoticeUnit {
        self.unit
    }

    /// Whether notice days are calendar or working days.
    #[must_use]
    pub const fn period_type(&self) -> NoticePeriodType {
        self.period_type
    }

    /// Human-readable notice length, e.g. `"1 month"` or `"30 working days"`.
    #[must_use]
    pub fn describe(&self, days: u32) -> String {
        match self.unit {
            NoticeUnit::Months => {
                let plural: &str = if self.value > 1 { "s" } else { "" };
                format!("{} month{plural}", self.value)
            }
            NoticeUnit::Days => format!("{days} {} days", self.period_type),
        }
    }
}

/// Adds whole calendar months to `date`.
///
/// When the day of month does not exist in the target month the surplus
/// rolls into the following month, so Jan 31 + 1 month is Mar 3 (or Mar 2
/// in a leap year).
///
/// # Errors
///
/// Returns an error if the result is outside the representable date range.
pub fn add_months(date: Date, months: u32) -> Result<Date, DomainError> {
    let overflow = || DomainError::DateArithmeticOverflow {
        operation: format!("adding {months} months to {date}"),
    };

    let month_index: i64 = i64::from(date.year()) * 12
        + i64::from(u8::from(date.month()))
        - 1
        + i64::from(months);
    let year: i32 = i32::try_from(month_index.div_euclid(12)).map_err(|_| overflow())?;
    let month_number: u8 = u8::try_from(month_index.rem_euclid(12) + 1).map_err(|_| overflow())?;
    let month: Month = Month::try_from(month_number).map_err(|_| overflow())?;

    let first: Date = Date::from_calendar_date(year, month, 1).map_err(|_| overflow())?;
    add_calendar_days(first, i64::from(date.day()) - 1)
}

/// The notice period converted to a day count.
///
/// For a day-based notice this is the value itself. For a month-based
/// notice it is the number of calendar days between the resignation date
/// and the same day `value` months later.
///
/// # Errors
///
/// Returns an error if month arithmetic leaves the representable range.
pub fn notice_period_days(terms: &NoticeTerms) -> Result<u32, DomainError> {
    match terms.unit {
        NoticeUnit::Days => Ok(terms.value),
        NoticeUnit::Months => {
            let end: Date = add_months(terms.resignation_date, terms.value)?;
            let days: i64 = (end - terms.resignation_date).whole_days();
            u32::try_from(days).map_err(|_| DomainError::DateArithmeticOverflow {
                operation: format!("converting {} months to days", terms.value),
            })
        }
    }
}

/// The last working day when the full notice is served.
///
/// # Errors
///
/// Returns an error if date arithmetic leaves the representable range.
pub fn standard_last_day(
    terms: &NoticeTerms,
    calendar: &BusinessCalendar,
) -> Result<Date, DomainError> {
    let days: u32 = notice_period_days(terms)?;

    match terms.period_type {
        NoticePeriodType::Working => calendar.add_business_days(terms.resignation_date, days),
        NoticePeriodType::Calendar => {
            let landing: Date = add_calendar_days(terms.resignation_date, i64::from(days))?;
            calendar.business_day_on_or_before(landing)
        }
    }
}

/// The number of working days inside the notice period.
///
/// Working-type notice is already a working-day count. Calendar-type notice
/// counts business days in `[resignation, last_day]`.
///
/// # Errors
///
/// Returns an error if month arithmetic leaves the representable range.
pub fn working_days_in_notice(
    terms: &NoticeTerms,
    calendar: &BusinessCalendar,
    last_day: Date,
) -> Result<u32, DomainError> {
    match terms.period_type {
        NoticePeriodType::Working => notice_period_days(terms),
        NoticePeriodType::Calendar => {
            Ok(calendar.count_business_days(terms.resignation_date, last_day))
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use time::macros::date;

    fn terms(start: Date, value: u32, unit: NoticeUnit, kind: NoticePeriodType) -> NoticeTerms {
        NoticeTerms::new(start, value, unit, kind).unwrap()
    }

    #[test]
    fn test_unit_and_type_parse() {
        assert_eq!("days".parse::<NoticeUnit>().unwrap(), NoticeUnit::Days);
        assert_eq!("months".parse::<NoticeUnit>().unwrap(), NoticeUnit::Months);
        assert_eq!(
            "working".parse::<NoticePeriodType>().unwrap(),
            NoticePeriodType::Working
        );
        assert!(matches!(
            "weeks".parse::<NoticeUnit>(),
            Err(DomainError::InvalidNoticeUnit(_))
        ));
        assert!(matches!(
            "lunar".parse::<NoticePeriodType>(),
            Err(DomainError::InvalidNoticePeriodType(_))
        ));
    }

    #[test]
    fn test_notice_bounds() {
        let start: Date = date!(2025 - 03 - 03);
        assert!(NoticeTerms::new(start, 0, NoticeUnit::Days, NoticePeriodType::Calendar).is_err());
        assert!(NoticeTerms::new(start, 365, NoticeUnit::Days, NoticePeriodType::Calendar).is_ok());
        assert!(NoticeTerms::new(start, 366, NoticeUnit::Days, NoticePeriodType::Calendar).is_err());
        assert!(NoticeTerms::new(start, 12, NoticeUnit::Months, NoticePeriodType::Calendar).is_ok());
        assert!(NoticeTerms::new(start, 13, NoticeUnit::Months, NoticePeriodType::Calendar).is_err());
    }

    #[test]
    fn test_add_months_plain() {
        assert_eq!(
            add_months(date!(2025 - 01 - 15), 1).unwrap(),
            date!(2025 - 02 - 15)
        );
        assert_eq!(
            add_months(date!(2025 - 11 - 30), 3).unwrap(),
            date!(2026 - 03 - 02)
        );
        assert_eq!(
            add_months(date!(2025 - 12 - 01), 1).unwrap(),
            date!(2026 - 01 - 01)
        );
    }

    #[test]
    fn test_add_months_overflows_into_next_month() {
        assert_eq!(
            add_months(date!(2025 - 01 - 31), 1).unwrap(),
            date!(2025 - 03 - 03)
        );
        assert_eq!(
            add_months(date!(2024 - 01 - 31), 1).unwrap(),
            date!(2024 - 03 - 02)
        );
    }

    #[test]
    fn test_month_notice_converts_to_days() {
        let t: NoticeTerms = terms(
            date!(2025 - 01 - 01),
            2,
            NoticeUnit::Months,
            NoticePeriodType::Calendar,
        );
        assert_eq!(notice_period_days(&t).unwrap(), 59);
    }

    #[test]
    fn test_calendar_notice_walks_backward_from_saturday() {
        // 2025-01-01 + 2 months = Sat 2025-03-01 → Fri 2025-02-28
        let calendar: BusinessCalendar = BusinessCalendar::hong_kong();
        let t: NoticeTerms = terms(
            date!(2025 - 01 - 01),
            2,
            NoticeUnit::Months,
            NoticePeriodType::Calendar,
        );
        assert_eq!(
            standard_last_day(&t, &calendar).unwrap(),
            date!(2025 - 02 - 28)
        );
    }

    #[test]
    fn test_calendar_notice_skips_holiday_backward() {
        // 2025-06-01 + 30 days = Tue 2025-07-01, a holiday → Mon 2025-06-30
        let calendar: BusinessCalendar = BusinessCalendar::hong_kong();
        let t: NoticeTerms = terms(
            date!(2025 - 06 - 01),
            30,
            NoticeUnit::Days,
            NoticePeriodType::Calendar,
        );
        assert_eq!(
            standard_last_day(&t, &calendar).unwrap(),
            date!(2025 - 06 - 30)
        );
    }

    #[test]
    fn test_working_notice_counts_business_days() {
        // Mon 2025-03-03 + 5 working days = Mon 2025-03-10
        let calendar: BusinessCalendar = BusinessCalendar::hong_kong();
        let t: NoticeTerms = terms(
            date!(2025 - 03 - 03),
            5,
            NoticeUnit::Days,
            NoticePeriodType::Working,
        );
        let last: Date = standard_last_day(&t, &calendar).unwrap();
        assert_eq!(last, date!(2025 - 03 - 10));
        assert_eq!(working_days_in_notice(&t, &calendar, last).unwrap(), 5);
    }

    #[test]
    fn test_calendar_notice_working_day_count_is_inclusive() {
        // Mon 2025-03-03 + 7 days = Mon 2025-03-10; business days 03..10 = 6
        let calendar: BusinessCalendar = BusinessCalendar::hong_kong();
        let t: NoticeTerms = terms(
            date!(2025 - 03 - 03),
            7,
            NoticeUnit::Days,
            NoticePeriodType::Calendar,
        );
        let last: Date = standard_last_day(&t, &calendar).unwrap();
        assert_eq!(last, date!(2025 - 03 - 10));
        assert_eq!(working_days_in_notice(&t, &calendar, last).unwrap(), 6);
    }

    #[test]
    fn test_describe() {
        let months: NoticeTerms = terms(
            date!(2025 - 03 - 03),
            1,
            NoticeUnit::Months,
            NoticePeriodType::Calendar,
        );
        assert_eq!(months.describe(31), "1 month");
        let two: NoticeTerms = terms(
            date!(2025 - 03 - 03),
            2,
            NoticeUnit::Months,
            NoticePeriodType::Calendar,
        );
        assert_eq!(two.describe(61), "2 months");
        let days: NoticeTerms = terms(
            date!(2025 - 03 - 03),
            30,
            NoticeUnit::Days,
            NoticePeriodType::Working,
        );
        assert_eq!(days.describe(30), "30 working days");
    }
}
