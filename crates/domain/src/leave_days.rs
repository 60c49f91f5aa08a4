// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fixed-point leave quantities.
//!
//! Leave balances are entered with one decimal place (e.g. `8.7` days).
//! Storing them as whole tenths keeps every sum and difference exact, so
//! the used + paid-out split of a scenario always adds back up to the
//! eligible total.

use crate::error::DomainError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};
use std::str::FromStr;

/// Largest leave figure accepted from text input.
pub const MAX_LEAVE_DAYS: u32 = 365;

/// A non-negative amount of leave with 0.1-day resolution.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct LeaveDays {
    /// Leave expressed in tenths of a day.
    tenths: u32,
}

impl LeaveDays {
    /// No leave.
    pub const ZERO: Self = Self { tenths: 0 };

    /// Creates a quantity from a number of tenths of a day.
    #[must_use]
    pub const fn from_tenths(tenths: u32) -> Self {
        Self { tenths }
    }

    /// Creates a quantity from whole days.
    #[must_use]
    pub const fn from_whole_days(days: u32) -> Self {
        Self {
            tenths: days.saturating_mul(10),
        }
    }

    /// Returns the quantity in tenths of a day.
    #[must_use]
    pub const fn tenths(&self) -> u32 {
        self.tenths
    }

    /// Returns the number of complete days held (fraction truncated).
    #[must_use]
    pub const fn whole_days(&self) -> u32 {
        self.tenths / 10
    }

    /// Returns `true` if there is no leave at all.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.tenths == 0
    }

    /// Returns `ceil(self * percent / 100)` as whole days.
    ///
    /// `LeaveDays::from_tenths(87).ceil_percent(60)` is `6` (8.7 * 0.6 = 5.22).
    #[must_use]
    pub fn ceil_percent(&self, percent: u32) -> u32 {
        let scaled: u64 = u64::from(self.tenths) * u64::from(percent);
        u32::try_from(scaled.div_ceil(1000)).unwrap_or(u32::MAX)
    }

    /// Subtraction that stops at zero.
    #[must_use]
    pub const fn saturating_sub(self, other: Self) -> Self {
        Self {
            tenths: self.tenths.saturating_sub(other.tenths),
        }
    }
}

impl Add for LeaveDays {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            tenths: self.tenths.saturating_add(rhs.tenths),
        }
    }
}

impl Sub for LeaveDays {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.saturating_sub(rhs)
    }
}

impl std::fmt::Display for LeaveDays {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole: u32 = self.tenths / 10;
        let fraction: u32 = self.tenths % 10;
        if fraction == 0 {
            write!(f, "{whole}")
        } else {
            write!(f, "{whole}.{fraction}")
        }
    }
}

impl FromStr for LeaveDays {
    type Err = DomainError;

    /// Parses a plain decimal such as `"20"`, `"8.7"` or `"0.25"`.
    ///
    /// Digits after the first decimal place round half-up to tenths. Values
    /// above [`MAX_LEAVE_DAYS`] are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| DomainError::InvalidLeaveDays {
            value: s.to_string(),
            reason: reason.to_string(),
        };

        let trimmed: &str = s.trim();
        if trimmed.is_empty() {
            return Err(invalid("value is empty"));
        }

        let value: Decimal =
            Decimal::from_str(trimmed).map_err(|_| invalid("value is not a number"))?;
        if value.is_sign_negative() && !value.is_zero() {
            return Err(invalid("value must not be negative"));
        }
        if value > Decimal::from(MAX_LEAVE_DAYS) {
            return Err(invalid(&format!(
                "value must not exceed {MAX_LEAVE_DAYS} days"
            )));
        }

        let tenths: u32 = value
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
            .checked_mul(Decimal::TEN)
            .and_then(|t| t.to_u32())
            .ok_or_else(|| invalid("value is too large"))?;

        Ok(Self { tenths })
    }
}
