// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Requests carry the raw form values exactly as a user typed them; all
//! parsing and validation happens in the handlers. Responses render dates
//! as `YYYY-MM-DD` and leave figures with at most one decimal place.

use serde::{Deserialize, Serialize};

/// API request to compute resignation scenarios.
///
/// Every field is a raw string. A missing field deserializes as empty and is
/// rejected during validation rather than by the JSON decoder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculateRequest {
    /// The day notice is served, `YYYY-MM-DD`.
    pub resignation_date: String,
    /// The notice length as a whole number.
    pub notice_period: String,
    /// `days` or `months`.
    pub notice_period_unit: String,
    /// `calendar` or `working`.
    pub notice_period_type: String,
    /// First day of the current leave year, `YYYY-MM-DD`.
    pub leave_year_start: String,
    /// Annual leave entitlement for a full year.
    pub annual_leave_total: String,
    /// Unused leave on the resignation date.
    pub annual_leave_remaining: String,
    /// Leave policy tag, e.g. `payout` or `forfeit`.
    pub leave_policy: String,
    /// Salary cycle tag, e.g. `monthly`.
    pub salary_cycle: String,
}

/// API request for the month grid of one scenario.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarViewRequest {
    /// The calculation inputs.
    #[serde(flatten)]
    pub inputs: CalculateRequest,
    /// Index of the scenario within the calculation's scenario list.
    #[serde(default)]
    pub scenario_index: usize,
}

/// A single resignation scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioInfo {
    /// Position within the scenario list.
    pub index: usize,
    /// `standard`, `earliest` or `balanced`.
    pub category: String,
    pub name: String,
    pub description: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub resignation_date: String,
    pub last_working_day: String,
    pub contract_end_date: String,
    pub al_eligible_total: String,
    pub al_used_during_notice: String,
    pub al_paid_out: String,
    pub working_days_in_notice: u32,
    pub total_salary_days: String,
    /// Whether this is the recommended scenario.
    pub is_optimal: bool,
}

/// A single advisory note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisNoteInfo {
    /// `info`, `positive`, `warning`, `tip` or `legal`.
    pub kind: String,
    pub title: String,
    pub text: String,
}

/// A suggested placement of leave after the last working day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmartLeaveInfo {
    pub days_to_use: u32,
    pub end_date: String,
    pub consecutive_days: u32,
    /// Machine-readable pattern tag, e.g. `full_week`.
    pub pattern: String,
    /// Human-readable description of the plan.
    pub strategy: String,
}

/// API response for a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculateResponse {
    /// The last working day when the full notice is served.
    pub standard_last_day: String,
    pub remaining_leave_at_resignation: String,
    pub additional_al_during_notice: String,
    pub total_al_by_last_day: String,
    pub optimal_index: usize,
    pub scenarios: Vec<ScenarioInfo>,
    pub analysis: Vec<AnalysisNoteInfo>,
    /// Absent when no leave is eligible.
    pub smart_leave_suggestion: Option<SmartLeaveInfo>,
}

/// Classification of a single calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCellInfo {
    pub date: String,
    /// Day of the month.
    pub day: u8,
    pub is_resignation_date: bool,
    pub is_last_working_day: bool,
    pub is_contract_end_date: bool,
    pub is_al_day: bool,
    pub is_weekend: bool,
    pub is_public_holiday: bool,
    pub holiday_name: Option<String>,
    pub tooltip: String,
}

/// One month of the calendar grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthInfo {
    pub title: String,
    pub year: i32,
    /// Month number, 1 to 12.
    pub month: u8,
    /// Empty cells before the first day in a Sunday-first grid.
    pub leading_blanks: u8,
    pub days: Vec<DayCellInfo>,
}

/// API response for the month grid of one scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarViewResponse {
    pub scenario_index: usize,
    pub scenario_name: String,
    pub months: Vec<MonthInfo>,
}

/// A single public holiday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayInfo {
    pub date: String,
    pub name: String,
}

/// API response describing the loaded holiday table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidaySourceResponse {
    pub country: String,
    pub official_source: String,
    pub source_url: String,
    pub legal_reference: String,
    pub last_updated: String,
    pub note: String,
    pub holiday_count: usize,
    pub holidays: Vec<HolidayInfo>,
}
