// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Advisory search for a good place to spend leave after the last working
//! day.
//!
//! The search is greedy. It tries a handful of patterns (a long weekend, a
//! full week off, a holiday bridge) around each of the next few weeks and
//! keeps whichever gives the longest unbroken run of days off. It does not
//! promise the global optimum.

use crate::error::CoreError;
use notice_planner_domain::{
    BusinessCalendar, LeaveDays, add_calendar_days, is_weekend, next_weekday,
};
use time::{Date, Weekday};

/// Share of eligible leave the search may spend, in percent.
pub const SMART_LEAVE_PERCENT: u32 = 70;

/// Share of the search budget used by the fallback plan, in percent.
pub const DEFAULT_BREAK_PERCENT: u32 = 60;

/// Number of weekly starting points examined.
pub const SEARCH_WEEKS: i64 = 4;

/// Longest run of consecutive days a single count will walk.
pub const MAX_CONSECUTIVE_DAYS: u32 = 21;

/// Days before the anchor Friday included in a week's window.
pub const WINDOW_DAYS_BEFORE_FRIDAY: i64 = 7;

/// Days after the anchor Friday included in a week's window.
pub const WINDOW_DAYS_AFTER_FRIDAY: i64 = 14;

/// How far either side of a holiday a weekend may be to bridge it.
pub const BRIDGE_REACH_DAYS: i64 = 7;

/// Minimum budget for a full-week break.
pub const FULL_WEEK_MIN_DAYS: u32 = 3;

/// The shape of a suggested leave placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementPattern {
    /// No pattern beat the fallback; take a plain block of leave.
    DefaultBreak,
    /// Take the Friday before a weekend.
    FridayExtension,
    /// Take the Monday after a weekend.
    MondayExtension,
    /// Take the working days of one Monday-to-Friday week.
    FullWeek,
    /// Join a public holiday to a weekend.
    HolidayBridge {
        /// The holiday being bridged.
        holiday: Date,
    },
}

/// A suggested use of leave after the last working day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmartLeavePlan {
    /// Leave days the plan spends.
    pub days_to_use: u32,
    /// The day the break is over.
    pub end_date: Date,
    /// Length of the unbroken run of days off.
    pub consecutive_days: u32,
    /// Which pattern produced the plan.
    pub pattern: PlacementPattern,
}

impl SmartLeavePlan {
    /// A short phrase describing the plan, e.g. `"to extend weekend (take Friday off)"`.
    #[must_use]
    pub fn strategy(&self) -> String {
        match self.pattern {
            PlacementPattern::DefaultBreak => String::from("for a good break"),
            PlacementPattern::FridayExtension => {
                String::from("to extend weekend (take Friday off)")
            }
            PlacementPattern::MondayExtension => {
                String::from("to extend weekend (take Monday off)")
            }
            PlacementPattern::FullWeek => format!(
                "for a full week break ({} AL + weekends/holidays)",
                self.days_to_use
            ),
            PlacementPattern::HolidayBridge { holiday } => {
                format!("to bridge {holiday} holiday with weekend")
            }
        }
    }
}

/// The inclusive range of days a week's search may look at.
#[derive(Debug, Clone, Copy)]
struct SearchWindow {
    start: Date,
    end: Date,
}

impl SearchWindow {
    fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Suggests where to spend leave after `last_working_day`.
///
/// The budget is 70% of the eligible leave, rounded up and capped at the
/// whole days held. A fallback plan of 60% of the budget is kept unless
/// one of the weekly searches finds a strictly longer run of days off.
///
/// # Arguments
///
/// * `calendar` - The business calendar
/// * `last_working_day` - The final day worked
/// * `eligible` - Leave eligible by the last working day
///
/// # Errors
///
/// Returns an error if date arithmetic leaves the representable range.
pub fn suggest_leave_placement(
    calendar: &BusinessCalendar,
    last_working_day: Date,
    eligible: LeaveDays,
) -> Result<SmartLeavePlan, CoreError> {
    let budget: u32 = eligible
        .ceil_percent(SMART_LEAVE_PERCENT)
        .min(eligible.whole_days());
    let default_days: u32 = u32::try_from(
        (u64::from(budget) * u64::from(DEFAULT_BREAK_PERCENT)).div_ceil(100),
    )
    .unwrap_or(budget);

    let mut best: SmartLeavePlan = SmartLeavePlan {
        days_to_use: default_days,
        end_date: add_calendar_days(last_working_day, i64::from(default_days))?,
        consecutive_days: default_days,
        pattern: PlacementPattern::DefaultBreak,
    };

    let first_day_off: Date = add_calendar_days(last_working_day, 1)?;
    for week in 0..SEARCH_WEEKS {
        let start: Date = add_calendar_days(first_day_off, week * 7)?;
        let candidate: Option<SmartLeavePlan> =
            best_week_plan(calendar, start, first_day_off, budget)?;
        if let Some(plan) = candidate.filter(|p| p.consecutive_days > best.consecutive_days) {
            best = plan;
        }
    }

    Ok(best)
}

/// Finds the best placement around the first Friday on or after `start`.
///
/// Returns `None` when no pattern applies.
fn best_week_plan(
    calendar: &BusinessCalendar,
    start: Date,
    first_day_off: Date,
    budget: u32,
) -> Result<Option<SmartLeavePlan>, CoreError> {
    let friday: Date = next_weekday(start, Weekday::Friday)?;
    let monday: Date = add_calendar_days(friday, 3)?;

    let window: SearchWindow = SearchWindow {
        start: add_calendar_days(friday, -WINDOW_DAYS_BEFORE_FRIDAY)?.max(first_day_off),
        end: add_calendar_days(friday, WINDOW_DAYS_AFTER_FRIDAY)?,
    };

    let mut best: Option<SmartLeavePlan> = None;
    let mut consider = |plan: SmartLeavePlan| {
        if best.is_none_or(|current| plan.consecutive_days > current.consecutive_days) {
            best = Some(plan);
        }
    };

    if budget >= 1 {
        if calendar.is_business_day(friday) {
            consider(SmartLeavePlan {
                days_to_use: 1,
                end_date: add_calendar_days(friday, 3)?,
                consecutive_days: count_consecutive_off_days(calendar, window, friday, 1),
                pattern: PlacementPattern::FridayExtension,
            });
        }

        if calendar.is_business_day(monday) {
            let saturday: Date = add_calendar_days(monday, -2)?;
            consider(SmartLeavePlan {
                days_to_use: 1,
                end_date: add_calendar_days(monday, 1)?,
                consecutive_days: count_consecutive_off_days(calendar, window, saturday, 1),
                pattern: PlacementPattern::MondayExtension,
            });
        }
    }

    if budget >= FULL_WEEK_MIN_DAYS {
        let week_start: Date = next_weekday(start, Weekday::Monday)?;
        let mut working_days: u32 = 0;
        for offset in 0..5 {
            let day: Date = add_calendar_days(week_start, offset)?;
            if window.contains(day) && calendar.is_business_day(day) {
                working_days += 1;
            }
        }

        if working_days > 0 {
            let needed: u32 = working_days.min(budget);
            let saturday: Date = add_calendar_days(week_start, -2)?;
            consider(SmartLeavePlan {
                days_to_use: needed,
                end_date: add_calendar_days(week_start, 6)?,
                consecutive_days: count_consecutive_off_days(calendar, window, saturday, needed),
                pattern: PlacementPattern::FullWeek,
            });
        }
    }

    if budget >= 1 {
        let holidays: Vec<Date> = calendar
            .holidays()
            .between(window.start, window.end)
            .collect();

        for holiday in holidays {
            for offset in -BRIDGE_REACH_DAYS..=BRIDGE_REACH_DAYS {
                let weekend_day: Date = add_calendar_days(holiday, offset)?;
                if !is_weekend(weekend_day) {
                    continue;
                }

                let needed: u32 = bridge_leave_needed(calendar, window, weekend_day, holiday);
                if needed == 0 || needed > budget {
                    continue;
                }

                let from: Date = weekend_day.min(holiday);
                consider(SmartLeavePlan {
                    days_to_use: needed,
                    end_date: add_calendar_days(weekend_day.max(holiday), 1)?,
                    consecutive_days: count_consecutive_off_days(calendar, window, from, needed),
                    pattern: PlacementPattern::HolidayBridge { holiday },
                });
            }
        }
    }

    Ok(best)
}

/// Counts the unbroken run of days off starting at `from`.
///
/// Weekends and holidays are free. A business day is covered while leave
/// remains; the run ends at the first uncovered business day, on leaving
/// the window, or after `MAX_CONSECUTIVE_DAYS` days.
fn count_consecutive_off_days(
    calendar: &BusinessCalendar,
    window: SearchWindow,
    from: Date,
    leave_days: u32,
) -> u32 {
    let mut consecutive: u32 = 0;
    let mut used: u32 = 0;
    let mut current: Date = from;

    for _ in 0..MAX_CONSECUTIVE_DAYS {
        if !window.contains(current) {
            break;
        }

        if !calendar.is_business_day(current) {
            consecutive += 1;
        } else if used < leave_days {
            consecutive += 1;
            used += 1;
        } else {
            break;
        }

        match current.next_day() {
            Some(next) => current = next,
            None => break,
        }
    }

    consecutive
}

/// Business days inside the window between two dates, both inclusive.
fn bridge_leave_needed(
    calendar: &BusinessCalendar,
    window: SearchWindow,
    a: Date,
    b: Date,
) -> u32 {
    let from: Date = a.min(b).max(window.start);
    let to: Date = a.max(b).min(window.end);
    calendar.count_business_days(from, to)
}
