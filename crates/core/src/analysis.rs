// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Recommendation and advisory notes.

use crate::strategy::Scenario;
use notice_planner_domain::LeaveDays;

/// How an employer treats leave left unused at the end of employment.
///
/// Only `payout` and `forfeit` change the advice given; any other tag is
/// carried through verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeavePolicy {
    /// Unused leave is paid out.
    Payout,
    /// Unused leave is lost.
    Forfeit,
    /// Any other policy tag.
    Other(String),
}

impl From<&str> for LeavePolicy {
    fn from(tag: &str) -> Self {
        match tag {
            "payout" => Self::Payout,
            "forfeit" => Self::Forfeit,
            other => Self::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for LeavePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Payout => write!(f, "payout"),
            Self::Forfeit => write!(f, "forfeit"),
            Self::Other(tag) => write!(f, "{tag}"),
        }
    }
}

/// How often salary is paid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SalaryCycle {
    /// Paid once a month.
    Monthly,
    /// Any other cycle tag.
    Other(String),
}

impl From<&str> for SalaryCycle {
    fn from(tag: &str) -> Self {
        match tag {
            "monthly" => Self::Monthly,
            other => Self::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for SalaryCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Monthly => write!(f, "monthly"),
            Self::Other(tag) => write!(f, "{tag}"),
        }
    }
}

/// The flavour of an advisory note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteKind {
    Info,
    Positive,
    Warning,
    Tip,
    Legal,
}

impl NoteKind {
    /// Returns the wire representation of this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Positive => "positive",
            Self::Warning => "warning",
            Self::Tip => "tip",
            Self::Legal => "legal",
        }
    }
}

/// A single piece of advice shown alongside the scenarios.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisNote {
    pub kind: NoteKind,
    pub title: String,
    pub text: String,
}

impl AnalysisNote {
    fn new(kind: NoteKind, title: &str, text: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.to_string(),
            text: text.into(),
        }
    }
}

/// Picks the recommended scenario.
///
/// This is always the standard scenario at index 0. No scoring across
/// scenarios is performed.
#[must_use]
pub const fn find_optimal_scenario(_scenarios: &[Scenario]) -> usize {
    0
}

/// Builds the advisory notes for a calculation.
///
/// Notes are emitted in a fixed order: the leave summary, the leave-policy
/// implication (payout or forfeit only), the salary-cycle tip (monthly
/// only), the compensation summary and the legal reminder.
#[must_use]
pub fn generate_analysis(
    policy: &LeavePolicy,
    cycle: &SalaryCycle,
    optimal: &Scenario,
    total_al_by_last_day: LeaveDays,
) -> Vec<AnalysisNote> {
    let mut notes: Vec<AnalysisNote> = Vec::with_capacity(5);

    notes.push(AnalysisNote::new(
        NoteKind::Info,
        "Annual Leave Analysis",
        format!(
            "You'll have {total_al_by_last_day} AL days eligible by your last working day. This includes any AL that accrues during your notice period. Your leave policy ({policy}) determines how unused days are handled."
        ),
    ));

    match policy {
        LeavePolicy::Payout => notes.push(AnalysisNote::new(
            NoteKind::Positive,
            "Leave Payout Available",
            "Unused AL days will be paid out at your daily salary rate. This provides additional compensation beyond your notice period.",
        )),
        LeavePolicy::Forfeit => notes.push(AnalysisNote::new(
            NoteKind::Warning,
            "Use-it-or-Lose-it Policy",
            "Unused AL days will be forfeited. Consider using AL during your notice period to maximize value.",
        )),
        LeavePolicy::Other(_) => {}
    }

    if *cycle == SalaryCycle::Monthly {
        notes.push(AnalysisNote::new(
            NoteKind::Tip,
            "Monthly Salary Timing",
            "Consider timing your last day near month-end to ensure full final salary payment and avoid pro-rating.",
        ));
    }

    notes.push(AnalysisNote::new(
        NoteKind::Positive,
        "Financial Impact",
        format!(
            "Your optimal strategy provides {} days of total compensation (working days + AL payout/usage).",
            optimal.total_salary_days()
        ),
    ));

    notes.push(AnalysisNote::new(
        NoteKind::Legal,
        "Hong Kong Employment Law",
        "Under the Employment Ordinance, notice must be given in writing. Your employer may accept payment in lieu of notice at their discretion.",
    ));

    notes
}
