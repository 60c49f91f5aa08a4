// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::analysis::{
    AnalysisNote, LeavePolicy, SalaryCycle, find_optimal_scenario, generate_analysis,
};
use crate::error::CoreError;
use crate::smart_leave::{SmartLeavePlan, suggest_leave_placement};
use crate::strategy::{Scenario, balanced_scenario, earliest_scenario, standard_scenario};
use notice_planner_domain::{
    BusinessCalendar, LeaveAccount, LeaveDays, NoticeTerms, notice_period_days,
    standard_last_day, working_days_in_notice,
};
use time::Date;

/// Validated inputs for a single calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResignationInputs {
    /// The notice the employee must give.
    pub notice: NoticeTerms,
    /// The employee's leave position.
    pub leave: LeaveAccount,
    /// Free-form leave policy, used only for advice.
    pub leave_policy: LeavePolicy,
    /// Free-form salary cycle, used only for advice.
    pub salary_cycle: SalaryCycle,
}

/// The full outcome of a calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculationResult {
    /// The last working day when the full notice is served.
    pub standard_last_day: Date,
    /// Scenarios in generation order: standard, then earliest and balanced
    /// when any leave is eligible.
    pub scenarios: Vec<Scenario>,
    /// Index of the recommended scenario within `scenarios`.
    pub optimal_index: usize,
    /// Unused leave on the resignation date.
    pub remaining_leave_at_resignation: LeaveDays,
    /// Leave eligible by the standard last day.
    pub total_al_by_last_day: LeaveDays,
    /// Leave accrued while serving the notice.
    pub additional_al_during_notice: LeaveDays,
    /// Advisory notes in display order.
    pub analysis: Vec<AnalysisNote>,
    /// Suggested placement of leave after the last working day.
    pub smart_leave_suggestion: Option<SmartLeavePlan>,
}

impl CalculationResult {
    /// Returns the recommended scenario.
    #[must_use]
    pub fn optimal_scenario(&self) -> Option<&Scenario> {
        self.scenarios.get(self.optimal_index)
    }
}

/// Computes every resignation scenario for the given inputs.
///
/// # Arguments
///
/// * `inputs` - The validated notice and leave inputs
/// * `calendar` - The business calendar to evaluate dates against
///
/// # Returns
///
/// The standard last day, leave figures, the generated scenarios with the
/// recommended one marked, advisory notes and a leave placement suggestion.
///
/// # Errors
///
/// Returns an error if date arithmetic leaves the representable range.
pub fn calculate_optimal_resignation(
    inputs: &ResignationInputs,
    calendar: &BusinessCalendar,
) -> Result<CalculationResult, CoreError> {
    let resignation_date: Date = inputs.notice.resignation_date();
    let last_day: Date = standard_last_day(&inputs.notice, calendar)?;

    let additional: LeaveDays = inputs
        .leave
        .additional_during_notice(resignation_date, last_day)?;
    let remaining: LeaveDays = inputs.leave.remaining_at_resignation();
    let total: LeaveDays = remaining + additional;

    let notice_days: u32 = notice_period_days(&inputs.notice)?;
    let working_days: u32 = working_days_in_notice(&inputs.notice, calendar, last_day)?;
    let notice_description: String = inputs.notice.describe(notice_days);

    let mut scenarios: Vec<Scenario> = vec![standard_scenario(
        resignation_date,
        last_day,
        working_days,
        total,
        &notice_description,
    )];

    if !total.is_zero() {
        scenarios.push(earliest_scenario(
            calendar,
            resignation_date,
            last_day,
            total,
        ));
        scenarios.push(balanced_scenario(
            calendar,
            resignation_date,
            last_day,
            working_days,
            total,
        )?);
    }

    let optimal_index: usize = find_optimal_scenario(&scenarios);
    let analysis: Vec<AnalysisNote> = generate_analysis(
        &inputs.leave_policy,
        &inputs.salary_cycle,
        &scenarios[optimal_index],
        total,
    );

    let smart_leave_suggestion: Option<SmartLeavePlan> = if total.is_zero() {
        None
    } else {
        Some(suggest_leave_placement(calendar, last_day, total)?)
    };

    Ok(CalculationResult {
        standard_last_day: last_day,
        scenarios,
        optimal_index,
        remaining_leave_at_resignation: remaining,
        total_al_by_last_day: total,
        additional_al_during_notice: additional,
        analysis,
        smart_leave_suggestion,
    })
}
