// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use notice_planner::{
    AnalysisNote, CalculationResult, DayCell, LeavePolicy, MonthView, PlacementPattern,
    ResignationInputs, SalaryCycle, Scenario, SmartLeavePlan, build_calendar_view,
    calculate_optimal_resignation,
};
use notice_planner_domain::{
    BusinessCalendar, HolidaySource, LeaveAccount, LeaveDays, NoticePeriodType, NoticeTerms,
    NoticeUnit, parse_date,
};
use time::Date;

use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    AnalysisNoteInfo, CalculateRequest, CalculateResponse, CalendarViewResponse, DayCellInfo,
    HolidayInfo, HolidaySourceResponse, MonthInfo, ScenarioInfo, SmartLeaveInfo,
};

/// Parses and validates the raw form values of a calculation request.
///
/// Validation stops at the first bad field.
///
/// # Arguments
///
/// * `request` - The raw request
///
/// # Returns
///
/// * `Ok(ResignationInputs)` when every field is present and well formed
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` naming the offending field when a date,
/// number or tag cannot be parsed, or when the notice length is zero or out
/// of range for its unit.
pub fn parse_calculate_request(request: &CalculateRequest) -> Result<ResignationInputs, ApiError> {
    let resignation_date: Date = parse_date_field("resignation_date", &request.resignation_date)?;

    let notice_value: u32 = request.notice_period.trim().parse().map_err(|_| {
        tracing::warn!(
            notice_period = %request.notice_period,
            "Rejected non-numeric notice period"
        );
        ApiError::invalid_input(
            "notice_period",
            format!(
                "notice period '{}' must be a whole number",
                request.notice_period
            ),
        )
    })?;

    let unit: NoticeUnit = request
        .notice_period_unit
        .trim()
        .parse()
        .map_err(translate_domain_error)?;
    let period_type: NoticePeriodType = request
        .notice_period_type
        .trim()
        .parse()
        .map_err(translate_domain_error)?;

    let notice: NoticeTerms = NoticeTerms::new(resignation_date, notice_value, unit, period_type)
        .map_err(|err| {
            tracing::warn!(notice_period = notice_value, unit = %unit, "Rejected notice period");
            translate_domain_error(err)
        })?;

    let leave_year_start: Date = parse_date_field("leave_year_start", &request.leave_year_start)?;
    let total: LeaveDays = parse_leave_field("annual_leave_total", &request.annual_leave_total)?;
    let remaining: LeaveDays =
        parse_leave_field("annual_leave_remaining", &request.annual_leave_remaining)?;

    Ok(ResignationInputs {
        notice,
        leave: LeaveAccount::new(total, leave_year_start, remaining),
        leave_policy: LeavePolicy::from(request.leave_policy.trim()),
        salary_cycle: SalaryCycle::from(request.salary_cycle.trim()),
    })
}

fn parse_date_field(field: &str, value: &str) -> Result<Date, ApiError> {
    parse_date(value).map_err(|err| {
        tracing::warn!(field, value, "Rejected date");
        ApiError::invalid_input(field, err.to_string())
    })
}

fn parse_leave_field(field: &str, value: &str) -> Result<LeaveDays, ApiError> {
    value.parse::<LeaveDays>().map_err(|err| {
        tracing::warn!(field, value, "Rejected leave figure");
        ApiError::invalid_input(field, err.to_string())
    })
}

/// Computes every resignation scenario for a request.
///
/// # Arguments
///
/// * `calendar` - The business calendar to evaluate dates against
/// * `request` - The raw request
///
/// # Returns
///
/// * `Ok(CalculateResponse)` with the scenarios, leave figures, advisory
///   notes and the leave placement suggestion
///
/// # Errors
///
/// Returns an error if the request fails validation or if date arithmetic
/// leaves the supported range.
pub fn calculate(
    calendar: &BusinessCalendar,
    request: &CalculateRequest,
) -> Result<CalculateResponse, ApiError> {
    let inputs: ResignationInputs = parse_calculate_request(request)?;
    tracing::info!(
        resignation_date = %inputs.notice.resignation_date(),
        notice = inputs.notice.value(),
        unit = %inputs.notice.unit(),
        period_type = %inputs.notice.period_type(),
        "Calculating resignation scenarios"
    );

    let result: CalculationResult =
        calculate_optimal_resignation(&inputs, calendar).map_err(translate_core_error)?;
    tracing::info!(
        standard_last_day = %result.standard_last_day,
        scenario_count = result.scenarios.len(),
        total_al = %result.total_al_by_last_day,
        "Calculation complete"
    );

    Ok(to_calculate_response(&result))
}

/// Builds the month grid for one scenario of a request.
///
/// # Arguments
///
/// * `calendar` - The business calendar to evaluate dates against
/// * `request` - The raw calculation request
/// * `scenario_index` - Position of the scenario within the calculated list
///
/// # Errors
///
/// Returns an error if the request fails validation, if the scenario index
/// is out of range, or if date arithmetic leaves the supported range.
pub fn calendar_view(
    calendar: &BusinessCalendar,
    request: &CalculateRequest,
    scenario_index: usize,
) -> Result<CalendarViewResponse, ApiError> {
    let inputs: ResignationInputs = parse_calculate_request(request)?;
    let result: CalculationResult =
        calculate_optimal_resignation(&inputs, calendar).map_err(translate_core_error)?;

    let scenario: &Scenario = result.scenarios.get(scenario_index).ok_or_else(|| {
        tracing::warn!(
            scenario_index,
            scenario_count = result.scenarios.len(),
            "Requested scenario does not exist"
        );
        ApiError::ResourceNotFound {
            resource_type: String::from("Scenario"),
            message: format!(
                "Scenario {scenario_index} does not exist; {} scenarios were generated",
                result.scenarios.len()
            ),
        }
    })?;

    let months: Vec<MonthView> =
        build_calendar_view(calendar, scenario).map_err(translate_core_error)?;
    tracing::debug!(
        scenario_index,
        month_count = months.len(),
        "Built calendar view"
    );

    Ok(CalendarViewResponse {
        scenario_index,
        scenario_name: scenario.narrative().name.clone(),
        months: months.iter().map(to_month_info).collect(),
    })
}

/// Describes the holiday table a calendar was built from.
#[must_use]
pub fn holiday_source(calendar: &BusinessCalendar) -> HolidaySourceResponse {
    let source: &HolidaySource = calendar.holidays().source();
    let holidays: Vec<HolidayInfo> = calendar
        .holidays()
        .iter()
        .map(|(date, name)| HolidayInfo {
            date: date.to_string(),
            name: name.to_string(),
        })
        .collect();

    HolidaySourceResponse {
        country: source.country.clone(),
        official_source: source.official_source.clone(),
        source_url: source.source_url.clone(),
        legal_reference: source.legal_reference.clone(),
        last_updated: source.last_updated.clone(),
        note: source.note.clone(),
        holiday_count: holidays.len(),
        holidays,
    }
}

fn to_calculate_response(result: &CalculationResult) -> CalculateResponse {
    CalculateResponse {
        standard_last_day: result.standard_last_day.to_string(),
        remaining_leave_at_resignation: result.remaining_leave_at_resignation.to_string(),
        additional_al_during_notice: result.additional_al_during_notice.to_string(),
        total_al_by_last_day: result.total_al_by_last_day.to_string(),
        optimal_index: result.optimal_index,
        scenarios: result
            .scenarios
            .iter()
            .enumerate()
            .map(|(index, scenario)| {
                to_scenario_info(index, scenario, index == result.optimal_index)
            })
            .collect(),
        analysis: result.analysis.iter().map(to_note_info).collect(),
        smart_leave_suggestion: result.smart_leave_suggestion.as_ref().map(to_smart_info),
    }
}

fn to_scenario_info(index: usize, scenario: &Scenario, is_optimal: bool) -> ScenarioInfo {
    ScenarioInfo {
        index,
        category: scenario.category().as_str().to_string(),
        name: scenario.narrative().name.clone(),
        description: scenario.narrative().description.clone(),
        pros: scenario.narrative().pros.clone(),
        cons: scenario.narrative().cons.clone(),
        resignation_date: scenario.resignation_date().to_string(),
        last_working_day: scenario.last_working_day().to_string(),
        contract_end_date: scenario.contract_end_date().to_string(),
        al_eligible_total: scenario.al_eligible_total().to_string(),
        al_used_during_notice: scenario.al_used_during_notice().to_string(),
        al_paid_out: scenario.al_paid_out().to_string(),
        working_days_in_notice: scenario.working_days_in_notice(),
        total_salary_days: scenario.total_salary_days().to_string(),
        is_optimal,
    }
}

fn to_note_info(note: &AnalysisNote) -> AnalysisNoteInfo {
    AnalysisNoteInfo {
        kind: note.kind.as_str().to_string(),
        title: note.title.clone(),
        text: note.text.clone(),
    }
}

fn to_smart_info(plan: &SmartLeavePlan) -> SmartLeaveInfo {
    let pattern: &str = match plan.pattern {
        PlacementPattern::DefaultBreak => "default_break",
        PlacementPattern::FridayExtension => "friday_extension",
        PlacementPattern::MondayExtension => "monday_extension",
        PlacementPattern::FullWeek => "full_week",
        PlacementPattern::HolidayBridge { .. } => "holiday_bridge",
    };

    SmartLeaveInfo {
        days_to_use: plan.days_to_use,
        end_date: plan.end_date.to_string(),
        consecutive_days: plan.consecutive_days,
        pattern: pattern.to_string(),
        strategy: plan.strategy(),
    }
}

fn to_month_info(month: &MonthView) -> MonthInfo {
    MonthInfo {
        title: month.title.clone(),
        year: month.year,
        month: u8::from(month.month),
        leading_blanks: month.leading_blanks,
        days: month.days.iter().map(to_day_info).collect(),
    }
}

fn to_day_info(cell: &DayCell) -> DayCellInfo {
    DayCellInfo {
        date: cell.date.to_string(),
        day: cell.date.day(),
        is_resignation_date: cell.is_resignation_date,
        is_last_working_day: cell.is_last_working_day,
        is_contract_end_date: cell.is_contract_end_date,
        is_al_day: cell.is_al_day,
        is_weekend: cell.is_weekend,
        is_public_holiday: cell.is_public_holiday,
        holiday_name: cell.holiday_name.clone(),
        tooltip: cell.tooltip.clone(),
    }
}
