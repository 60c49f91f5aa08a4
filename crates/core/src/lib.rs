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

mod analysis;
mod calculation;
mod calendar_view;
mod error;
mod smart_leave;
mod strategy;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use analysis::{
    AnalysisNote, LeavePolicy, NoteKind, SalaryCycle, find_optimal_scenario, generate_analysis,
};
pub use calculation::{CalculationResult, ResignationInputs, calculate_optimal_resignation};
pub use calendar_view::{DayCell, MonthView, build_calendar_view};
pub use error::CoreError;
pub use smart_leave::{
    BRIDGE_REACH_DAYS, DEFAULT_BREAK_PERCENT, FULL_WEEK_MIN_DAYS, MAX_CONSECUTIVE_DAYS,
    PlacementPattern, SEARCH_WEEKS, SMART_LEAVE_PERCENT, SmartLeavePlan,
    WINDOW_DAYS_AFTER_FRIDAY, WINDOW_DAYS_BEFORE_FRIDAY, suggest_leave_placement,
};
pub use strategy::{
    BALANCED_LEAVE_PERCENT, EARLIEST_LEAVE_PERCENT, Narrative, Scenario, ScenarioCategory,
    Strategy, balanced_scenario, earliest_scenario, standard_scenario,
};
