// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use notice_planner::CoreError;
use notice_planner_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
}

impl ApiError {
    /// Shorthand for an `InvalidInput` error.
    pub(crate) fn invalid_input(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// Domain errors are mapped explicitly to API errors so that internal
/// rule names never leak to callers unchanged.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
        DomainError::DateArithmeticOverflow { operation } => ApiError::DomainRuleViolation {
            rule: String::from("supported_date_range"),
            message: format!("Dates fall outside the supported range while {operation}"),
        },
        DomainError::BusinessDayLimitExceeded { requested, limit } => {
            ApiError::DomainRuleViolation {
                rule: String::from("business_day_limit"),
                message: format!(
                    "Cannot plan across {requested} business days; at most {limit} are supported"
                ),
            }
        }
        DomainError::InvalidNoticePeriod { value, reason } => ApiError::InvalidInput {
            field: String::from("notice_period"),
            message: format!("Invalid notice period {value}: {reason}"),
        },
        DomainError::InvalidNoticeUnit(unit) => ApiError::InvalidInput {
            field: String::from("notice_period_unit"),
            message: format!("Unknown notice period unit '{unit}'. Must be 'days' or 'months'"),
        },
        DomainError::InvalidNoticePeriodType(period_type) => ApiError::InvalidInput {
            field: String::from("notice_period_type"),
            message: format!(
                "Unknown notice period type '{period_type}'. Must be 'calendar' or 'working'"
            ),
        },
        DomainError::InvalidLeaveDays { value, reason } => ApiError::InvalidInput {
            field: String::from("annual_leave"),
            message: format!("Invalid leave figure '{value}': {reason}"),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}
