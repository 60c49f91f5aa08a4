// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-day classification of a scenario for month-grid rendering.
//!
//! Months run from the month of the earlier of the resignation date and the
//! last working day to the month of the later of the contract end date and
//! the last working day. Grids are Sunday-first.

use crate::error::CoreError;
use crate::strategy::{Scenario, ScenarioCategory};
use notice_planner_domain::{BusinessCalendar, DomainError, add_months, is_weekend};
use time::{Date, Month};

/// One month of the calendar grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthView {
    pub year: i32,
    pub month: Month,
    /// Display title, e.g. `"March 2025"`.
    pub title: String,
    /// Empty cells before the first day in a Sunday-first grid.
    pub leading_blanks: u8,
    pub days: Vec<DayCell>,
}

/// Classification of a single day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub date: Date,
    pub is_resignation_date: bool,
    pub is_last_working_day: bool,
    /// Set only when the contract ends after the last working day.
    pub is_contract_end_date: bool,
    pub is_al_day: bool,
    pub is_weekend: bool,
    pub is_public_holiday: bool,
    pub holiday_name: Option<String>,
    pub tooltip: String,
}

/// Classifies every day of every month the scenario touches.
///
/// # Errors
///
/// Returns an error if month arithmetic leaves the representable range.
pub fn build_calendar_view(
    calendar: &BusinessCalendar,
    scenario: &Scenario,
) -> Result<Vec<MonthView>, CoreError> {
    let first_day: Date = scenario
        .resignation_date()
        .min(scenario.last_working_day());
    let last_day: Date = scenario
        .contract_end_date()
        .max(scenario.last_working_day());

    let mut month_start: Date =
        first_day
            .replace_day(1)
            .map_err(|e| DomainError::DateArithmeticOverflow {
                operation: format!("finding the first of the month for {first_day}: {e}"),
            })?;

    let mut months: Vec<MonthView> = Vec::new();
    while month_start <= last_day {
        months.push(build_month(calendar, scenario, month_start));
        month_start = add_months(month_start, 1)?;
    }

    Ok(months)
}

fn build_month(calendar: &BusinessCalendar, scenario: &Scenario, month_start: Date) -> MonthView {
    let mut days: Vec<DayCell> = Vec::new();
    let mut current: Option<Date> = Some(month_start);

    while let Some(date) = current.filter(|d| d.month() == month_start.month()) {
        days.push(classify_day(calendar, scenario, date));
        current = date.next_day();
    }

    MonthView {
        year: month_start.year(),
        month: month_start.month(),
        title: format!("{} {}", month_start.month(), month_start.year()),
        leading_blanks: month_start.weekday().number_days_from_sunday(),
        days,
    }
}

fn classify_day(calendar: &BusinessCalendar, scenario: &Scenario, date: Date) -> DayCell {
    let is_resignation_date: bool = date == scenario.resignation_date();
    let is_last_working_day: bool = date == scenario.last_working_day();
    let is_contract_end: bool = date == scenario.contract_end_date();
    let is_al_day: bool =
        !scenario.al_used_during_notice().is_zero() && scenario.is_al_day(calendar, date);
    let weekend: bool = is_weekend(date);
    let holiday_name: Option<String> = calendar.holiday_name(date).map(str::to_string);

    let mut tooltip: String = date.to_string();
    if is_resignation_date {
        tooltip.push_str(" - Resignation Date");
    }
    if is_last_working_day {
        tooltip.push_str(" - Last Working Day");
    }
    if is_contract_end {
        tooltip.push_str(" - Contract End Date");
    }
    if holiday_name.is_some() {
        tooltip.push_str(" - Public Holiday");
    }
    if is_al_day {
        match scenario.category() {
            ScenarioCategory::Earliest => {
                tooltip.push_str(" - AL Day (Working day replaced to finish earlier)");
            }
            ScenarioCategory::Balanced => {
                tooltip.push_str(" - AL Day (Time off after notice period)");
            }
            ScenarioCategory::Standard => {}
        }
    }
    if weekend {
        tooltip.push_str(" - Weekend");
    }

    DayCell {
        date,
        is_resignation_date,
        is_last_working_day,
        is_contract_end_date: is_contract_end && !is_last_working_day,
        is_al_day,
        is_weekend: weekend,
        is_public_holiday: holiday_name.is_some(),
        holiday_name,
        tooltip,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::strategy::{balanced_scenario, earliest_scenario, standard_scenario};
    use notice_planner_domain::LeaveDays;
    use time::macros::date;

    fn calendar() -> BusinessCalendar {
        BusinessCalendar::hong_kong()
    }

    fn cell(months: &[MonthView], date: Date) -> &DayCell {
        months
            .iter()
            .flat_map(|m| m.days.iter())
            .find(|c| c.date == date)
            .unwrap()
    }

    #[test]
    fn test_months_span_scenario() {
        let scenario: Scenario = balanced_scenario(
            &calendar(),
            date!(2025 - 03 - 17),
            date!(2025 - 04 - 17),
            22,
            LeaveDays::from_whole_days(10),
        )
        .unwrap();
        let months: Vec<MonthView> = build_calendar_view(&calendar(), &scenario).unwrap();

        assert_eq!(months.len(), 2);
        assert_eq!(months[0].title, "March 2025");
        assert_eq!(months[0].days.len(), 31);
        // 2025-03-01 is a Saturday
        assert_eq!(months[0].leading_blanks, 6);
        assert_eq!(months[1].month, Month::April);
        assert_eq!(months[1].days.len(), 30);
        assert_eq!(months[1].leading_blanks, 2);
    }

    #[test]
    fn test_balanced_flags_and_tooltips() {
        let scenario: Scenario = balanced_scenario(
            &calendar(),
            date!(2025 - 03 - 17),
            date!(2025 - 04 - 17),
            22,
            LeaveDays::from_whole_days(10),
        )
        .unwrap();
        let months: Vec<MonthView> = build_calendar_view(&calendar(), &scenario).unwrap();

        let resign: &DayCell = cell(&months, date!(2025 - 03 - 17));
        assert!(resign.is_resignation_date);
        assert_eq!(resign.tooltip, "2025-03-17 - Resignation Date");

        let good_friday: &DayCell = cell(&months, date!(2025 - 04 - 18));
        assert!(good_friday.is_public_holiday);
        assert!(!good_friday.is_al_day);
        assert_eq!(good_friday.holiday_name.as_deref(), Some("Good Friday"));
        assert_eq!(good_friday.tooltip, "2025-04-18 - Public Holiday");

        let holiday_saturday: &DayCell = cell(&months, date!(2025 - 04 - 19));
        assert_eq!(
            holiday_saturday.tooltip,
            "2025-04-19 - Public Holiday - Weekend"
        );

        let first_al: &DayCell = cell(&months, date!(2025 - 04 - 22));
        assert!(first_al.is_al_day);
        assert_eq!(
            first_al.tooltip,
            "2025-04-22 - AL Day (Time off after notice period)"
        );

        let end: &DayCell = cell(&months, date!(2025 - 04 - 28));
        assert!(end.is_contract_end_date);
        assert!(end.is_al_day);
        assert_eq!(
            end.tooltip,
            "2025-04-28 - Contract End Date - AL Day (Time off after notice period)"
        );
    }

    #[test]
    fn test_standard_contract_end_not_flagged_twice() {
        let scenario: Scenario = standard_scenario(
            date!(2025 - 03 - 03),
            date!(2025 - 03 - 14),
            10,
            LeaveDays::from_whole_days(5),
            "14 calendar days",
        );
        let months: Vec<MonthView> = build_calendar_view(&calendar(), &scenario).unwrap();

        assert_eq!(months.len(), 1);
        let last: &DayCell = cell(&months, date!(2025 - 03 - 14));
        assert!(last.is_last_working_day);
        assert!(!last.is_contract_end_date);
        assert_eq!(
            last.tooltip,
            "2025-03-14 - Last Working Day - Contract End Date"
        );
        assert!(months[0].days.iter().all(|c| !c.is_al_day));
    }

    #[test]
    fn test_earliest_marks_replaced_days() {
        let scenario: Scenario = earliest_scenario(
            &calendar(),
            date!(2025 - 03 - 03),
            date!(2025 - 03 - 14),
            LeaveDays::from_whole_days(10),
        );
        let months: Vec<MonthView> = build_calendar_view(&calendar(), &scenario).unwrap();

        let al_days: Vec<Date> = months[0]
            .days
            .iter()
            .filter(|c| c.is_al_day)
            .map(|c| c.date)
            .collect();
        assert_eq!(
            al_days,
            vec![
                date!(2025 - 03 - 07),
                date!(2025 - 03 - 10),
                date!(2025 - 03 - 11),
                date!(2025 - 03 - 12),
                date!(2025 - 03 - 13),
                date!(2025 - 03 - 14),
            ]
        );
        assert_eq!(
            cell(&months, date!(2025 - 03 - 07)).tooltip,
            "2025-03-07 - AL Day (Working day replaced to finish earlier)"
        );
    }

    #[test]
    fn test_view_crosses_year_boundary() {
        let scenario: Scenario = standard_scenario(
            date!(2024 - 12 - 20),
            date!(2025 - 01 - 10),
            13,
            LeaveDays::ZERO,
            "21 calendar days",
        );
        let months: Vec<MonthView> = build_calendar_view(&calendar(), &scenario).unwrap();
        assert_eq!(months.len(), 2);
        assert_eq!(months[0].title, "December 2024");
        assert_eq!(months[1].title, "January 2025");
    }
}
