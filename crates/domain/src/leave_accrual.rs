// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Annual leave accrual within a leave year.
//!
//! Entitlement accrues linearly across the leave year and is floored to
//! whole days. All arithmetic is integer so the same inputs always yield
//! the same figure.

use crate::error::DomainError;
use crate::leave_days::LeaveDays;
use crate::notice::add_months;
use serde::{Deserialize, Serialize};
use time::Date;

/// The employee's leave position at the moment of resignation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveAccount {
    total_entitlement: LeaveDays,
    leave_year_start: Date,
    remaining_at_resignation: LeaveDays,
}

impl LeaveAccount {
    /// Creates a leave account snapshot.
    ///
    /// # Arguments
    ///
    /// * `total_entitlement` - Annual leave granted per full leave year
    /// * `leave_year_start` - First day of the current leave year
    /// * `remaining_at_resignation` - Unused leave on the resignation date
    #[must_use]
    pub const fn new(
        total_entitlement: LeaveDays,
        leave_year_start: Date,
        remaining_at_resignation: LeaveDays,
    ) -> Self {
        Self {
            total_entitlement,
            leave_year_start,
            remaining_at_resignation,
        }
    }

    #[must_use]
    pub const fn total_entitlement(&self) -> LeaveDays {
        self.total_entitlement
    }

    #[must_use]
    pub const fn leave_year_start(&self) -> Date {
        self.leave_year_start
    }

    #[must_use]
    pub const fn remaining_at_resignation(&self) -> LeaveDays {
        self.remaining_at_resignation
    }

    /// Leave that accrues between `resignation` and `last_day`.
    ///
    /// # Errors
    ///
    /// Returns an error if the leave year end cannot be computed.
    pub fn additional_during_notice(
        &self,
        resignation: Date,
        last_day: Date,
    ) -> Result<LeaveDays, DomainError> {
        additional_al_during_notice(
            self.total_entitlement,
            self.leave_year_start,
            resignation,
            last_day,
        )
    }
}

/// The day one calendar year after `year_start`.
///
/// A leave year starting on Feb 29 ends on Mar 1 of the following year.
///
/// # Errors
///
/// Returns an error if the result is outside the representable date range.
pub fn leave_year_end(year_start: Date) -> Result<Date, DomainError> {
    add_months(year_start, 12)
}

/// Whole days of leave accrued from `year_start` up to `as_of`.
///
/// Computes `floor(days_elapsed / days_in_year * total)`. The result is
/// negative when `as_of` precedes `year_start`.
///
/// # Errors
///
/// Returns an error if the leave year end cannot be computed.
pub fn prorated_leave(total: LeaveDays, year_start: Date, as_of: Date) -> Result<i64, DomainError> {
    let year_end: Date = leave_year_end(year_start)?;
    let days_in_year: i64 = (year_end - year_start).whole_days();
    let days_elapsed: i64 = (as_of - year_start).whole_days();

    let numerator: i64 = days_elapsed * i64::from(total.tenths());
    let denominator: i64 = days_in_year * 10;

    Ok(numerator.div_euclid(denominator))
}

/// Additional leave that accrues while the notice is served.
///
/// This is the difference between the prorated figures at `last_day` and
/// at `resignation`, never less than zero.
///
/// # Errors
///
/// Returns an error if the leave year end cannot be computed.
pub fn additional_al_during_notice(
    total: LeaveDays,
    year_start: Date,
    resignation: Date,
    last_day: Date,
) -> Result<LeaveDays, DomainError> {
    let at_resignation: i64 = prorated_leave(total, year_start, resignation)?;
    let at_last_day: i64 = prorated_leave(total, year_start, last_day)?;

    let gained: i64 = (at_last_day - at_resignation).max(0);
    Ok(LeaveDays::from_whole_days(
        u32::try_from(gained).unwrap_or(u32::MAX),
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use time::macros::date;

    fn days(n: u32) -> LeaveDays {
        LeaveDays::from_whole_days(n)
    }

    #[test]
    fn test_leave_year_end() {
        assert_eq!(
            leave_year_end(date!(2025 - 01 - 01)).unwrap(),
            date!(2026 - 01 - 01)
        );
        assert_eq!(
            leave_year_end(date!(2024 - 02 - 29)).unwrap(),
            date!(2025 - 03 - 01)
        );
    }

    #[test]
    fn test_prorated_leave_floors() {
        assert_eq!(
            prorated_leave(days(14), date!(2025 - 01 - 01), date!(2025 - 03 - 03)).unwrap(),
            2
        );
        assert_eq!(
            prorated_leave(days(14), date!(2025 - 01 - 01), date!(2025 - 12 - 31)).unwrap(),
            13
        );
    }

    #[test]
    fn test_prorated_leave_full_year() {
        assert_eq!(
            prorated_leave(days(14), date!(2025 - 01 - 01), date!(2026 - 01 - 01)).unwrap(),
            14
        );
    }

    #[test]
    fn test_prorated_leave_leap_year_start() {
        // 366-day leave year, 182 days elapsed
        assert_eq!(
            prorated_leave(days(12), date!(2024 - 02 - 29), date!(2024 - 08 - 29)).unwrap(),
            5
        );
    }

    #[test]
    fn test_prorated_leave_before_year_start_is_negative() {
        assert_eq!(
            prorated_leave(days(10), date!(2025 - 04 - 01), date!(2025 - 03 - 01)).unwrap(),
            -1
        );
    }

    #[test]
    fn test_prorated_leave_fractional_entitlement() {
        assert_eq!(
            prorated_leave(
                LeaveDays::from_tenths(87),
                date!(2025 - 01 - 01),
                date!(2025 - 07 - 02)
            )
            .unwrap(),
            4
        );
    }

    #[test]
    fn test_additional_al_during_notice() {
        let gained: LeaveDays = additional_al_during_notice(
            days(14),
            date!(2025 - 01 - 01),
            date!(2025 - 03 - 03),
            date!(2025 - 04 - 02),
        )
        .unwrap();
        assert_eq!(gained, days(1));
    }

    #[test]
    fn test_additional_al_never_negative() {
        let gained: LeaveDays = additional_al_during_notice(
            days(14),
            date!(2025 - 01 - 01),
            date!(2025 - 04 - 02),
            date!(2025 - 03 - 03),
        )
        .unwrap();
        assert_eq!(gained, LeaveDays::ZERO);
    }

    #[test]
    fn test_zero_entitlement_accrues_nothing() {
        let account: LeaveAccount =
            LeaveAccount::new(LeaveDays::ZERO, date!(2025 - 01 - 01), LeaveDays::ZERO);
        assert_eq!(
            account
                .additional_during_notice(date!(2025 - 01 - 01), date!(2025 - 12 - 31))
                .unwrap(),
            LeaveDays::ZERO
        );
    }
}
