// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod calendar;
mod error;
mod holiday;
mod leave_accrual;
mod leave_days;
mod notice;

#[cfg(test)]
mod tests;

pub use calendar::{
    BusinessCalendar, MAX_BUSINESS_DAY_STEP, add_calendar_days, is_weekend, next_weekday,
    parse_date,
};
pub use holiday::{HolidaySet, HolidaySource};
pub use leave_accrual::{
    LeaveAccount, additional_al_during_notice, leave_year_end, prorated_leave,
};
pub use leave_days::{LeaveDays, MAX_LEAVE_DAYS};
pub use notice::{
    MAX_NOTICE_DAYS, MAX_NOTICE_MONTHS, NoticePeriodType, NoticeTerms, NoticeUnit, add_months,
    notice_period_days, standard_last_day, working_days_in_notice,
};

// Re-export public types
pub use error::DomainError;
