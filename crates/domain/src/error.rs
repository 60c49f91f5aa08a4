// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while evaluating calendar and leave rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// A business-day walk was asked to step further than allowed.
    BusinessDayLimitExceeded {
        /// Number of business days requested.
        requested: u32,
        /// Largest accepted step.
        limit: u32,
    },
    /// Notice period value is zero or out of range for its unit.
    InvalidNoticePeriod {
        /// The rejected value.
        value: u32,
        /// Description of the validation error.
        reason: String,
    },
    /// Notice period unit is not `days` or `months`.
    InvalidNoticeUnit(String),
    /// Notice period type is not `calendar` or `working`.
    InvalidNoticePeriodType(String),
    /// A leave figure could not be parsed or is negative.
    InvalidLeaveDays {
        /// The rejected input.
        value: String,
        /// Description of the validation error.
        reason: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::BusinessDayLimitExceeded { requested, limit } => {
                write!(
                    f,
                    "Cannot move {requested} business days; the limit is {limit}"
                )
            }
            Self::InvalidNoticePeriod { value, reason } => {
                write!(f, "Invalid notice period {value}: {reason}")
            }
            Self::InvalidNoticeUnit(unit) => {
                write!(
                    f,
                    "Invalid notice period unit '{unit}'. Must be 'days' or 'months'"
                )
            }
            Self::InvalidNoticePeriodType(period_type) => {
                write!(
                    f,
                    "Invalid notice period type '{period_type}'. Must be 'calendar' or 'working'"
                )
            }
            Self::InvalidLeaveDays { value, reason } => {
                write!(f, "Invalid leave days '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
