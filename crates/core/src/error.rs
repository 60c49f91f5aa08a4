// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use notice_planner_domain::DomainError;

/// Errors raised while building a resignation plan.
///
/// Every failure originates in a calendar or leave rule; the wrapped
/// [`DomainError`] is also exposed through [`std::error::Error::source`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A calendar or leave rule could not be applied.
    DomainViolation(DomainError),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Unable to plan resignation: {err}"),
        }
    }
}

impl std::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DomainViolation(err) => Some(err),
        }
    }
}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
