// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Resignation strategies.
//!
//! Each generator is a pure function of its inputs. Every scenario it
//! returns conserves leave: the days used during notice plus the days paid
//! out always equal the eligible total.

use crate::error::CoreError;
use notice_planner_domain::{BusinessCalendar, LeaveDays};
use time::Date;

/// Share of eligible leave the earliest strategy may spend, in percent.
pub const EARLIEST_LEAVE_PERCENT: u32 = 60;

/// Share of eligible leave the balanced strategy takes as time off, in percent.
pub const BALANCED_LEAVE_PERCENT: u32 = 50;

/// Which strategy produced a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScenarioCategory {
    /// Work the full notice, cash out all leave.
    Standard,
    /// Replace trailing notice days with leave to finish early.
    Earliest,
    /// Work the full notice, then take part of the leave as time off.
    Balanced,
}

impl ScenarioCategory {
    /// Returns the wire representation of this category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Earliest => "earliest",
            Self::Balanced => "balanced",
        }
    }
}

impl std::fmt::Display for ScenarioCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Strategy-specific data carried by a scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    /// No strategy-specific data.
    Standard,
    /// The enumerated notice working days and how many of them are worked.
    ///
    /// Entries from `days_worked` onward are taken as leave.
    Earliest {
        /// Business days in `(resignation, standard last day]`, ascending.
        notice_working_days: Vec<Date>,
        /// Number of leading entries still worked.
        days_worked: usize,
    },
    /// Business days of leave taken after the last working day.
    Balanced {
        /// Leave days consumed after the last working day.
        time_off_days: u32,
    },
}

/// Display text describing a scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Narrative {
    pub name: String,
    pub description: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

/// One candidate way of resigning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    strategy: Strategy,
    resignation_date: Date,
    last_working_day: Date,
    contract_end_date: Date,
    al_eligible_total: LeaveDays,
    al_used_during_notice: LeaveDays,
    al_paid_out: LeaveDays,
    working_days_in_notice: u32,
    narrative: Narrative,
}

impl Scenario {
    /// Returns the category of this scenario.
    #[must_use]
    pub const fn category(&self) -> ScenarioCategory {
        match self.strategy {
            Strategy::Standard => ScenarioCategory::Standard,
            Strategy::Earliest { .. } => ScenarioCategory::Earliest,
            Strategy::Balanced { .. } => ScenarioCategory::Balanced,
        }
    }

    #[must_use]
    pub const fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    #[must_use]
    pub const fn resignation_date(&self) -> Date {
        self.resignation_date
    }

    #[must_use]
    pub const fn last_working_day(&self) -> Date {
        self.last_working_day
    }

    /// The last day of employment. Never before the last working day.
    #[must_use]
    pub const fn contract_end_date(&self) -> Date {
        self.contract_end_date
    }

    #[must_use]
    pub const fn al_eligible_total(&self) -> LeaveDays {
        self.al_eligible_total
    }

    #[must_use]
    pub const fn al_used_during_notice(&self) -> LeaveDays {
        self.al_used_during_notice
    }

    #[must_use]
    pub const fn al_paid_out(&self) -> LeaveDays {
        self.al_paid_out
    }

    /// Business days actually worked during the notice.
    #[must_use]
    pub const fn working_days_in_notice(&self) -> u32 {
        self.working_days_in_notice
    }

    /// Worked days plus every eligible leave day, used or paid.
    #[must_use]
    pub fn total_salary_days(&self) -> LeaveDays {
        LeaveDays::from_whole_days(self.working_days_in_notice)
            + self.al_used_during_notice
            + self.al_paid_out
    }

    #[must_use]
    pub const fn narrative(&self) -> &Narrative {
        &self.narrative
    }

    /// Returns `true` if `date` is spent on annual leave under this scenario.
    ///
    /// Standard scenarios never use leave. Earliest scenarios mark the
    /// replaced trailing notice days. Balanced scenarios mark business days
    /// after the last working day, up to the allocated count.
    #[must_use]
    pub fn is_al_day(&self, calendar: &BusinessCalendar, date: Date) -> bool {
        match &self.strategy {
            Strategy::Standard => false,
            Strategy::Earliest {
                notice_working_days,
                days_worked,
            } => notice_working_days
                .get(*days_worked..)
                .is_some_and(|replaced| replaced.binary_search(&date).is_ok()),
            Strategy::Balanced { time_off_days } => {
                if date <= self.last_working_day
                    || date > self.contract_end_date
                    || !calendar.is_business_day(date)
                {
                    return false;
                }
                self.last_working_day.next_day().is_some_and(|first_off| {
                    calendar.count_business_days(first_off, date) <= *time_off_days
                })
            }
        }
    }
}

/// Whole leave days a strategy may spend: `ceil(total * percent / 100)`,
/// never more than the whole days actually held.
fn usable_leave(total: LeaveDays, percent: u32) -> u32 {
    total.ceil_percent(percent).min(total.whole_days())
}

/// Work the full notice and cash out every eligible leave day.
///
/// # Arguments
///
/// * `resignation_date` - The day notice is given
/// * `standard_last_day` - The last working day when the full notice is served
/// * `working_days_in_notice` - Business days worked during the notice
/// * `eligible` - Leave eligible by the last working day
/// * `notice_description` - Human-readable notice length
#[must_use]
pub fn standard_scenario(
    resignation_date: Date,
    standard_last_day: Date,
    working_days_in_notice: u32,
    eligible: LeaveDays,
    notice_description: &str,
) -> Scenario {
    let narrative: Narrative = Narrative {
        name: String::from("Standard Resignation"),
        description: format!(
            "Work full {notice_description} notice period, get all {eligible} AL days paid out as cash"
        ),
        pros: vec![
            String::from("Fulfills notice requirements professionally"),
            format!("Maximum cash compensation ({eligible} days)"),
            String::from("Maintains good relationship with employer"),
            String::from("All AL converted to cash - no AL wasted"),
        ],
        cons: vec![
            format!("Maximum working days ({working_days_in_notice} days)"),
            String::from("No time off during notice period"),
            String::from("Latest possible finish date"),
        ],
    };

    Scenario {
        strategy: Strategy::Standard,
        resignation_date,
        last_working_day: standard_last_day,
        contract_end_date: standard_last_day,
        al_eligible_total: eligible,
        al_used_during_notice: LeaveDays::ZERO,
        al_paid_out: eligible,
        working_days_in_notice,
        narrative,
    }
}

/// Finish early by taking the trailing notice working days as leave.
///
/// Up to 60% of the eligible leave (rounded up, capped at the whole days
/// held) replaces the last business days of the notice. The new last
/// working day is the last day still worked, or the resignation date when
/// every notice day is replaced.
#[must_use]
pub fn earliest_scenario(
    calendar: &BusinessCalendar,
    resignation_date: Date,
    standard_last_day: Date,
    eligible: LeaveDays,
) -> Scenario {
    let notice_working_days: Vec<Date> =
        calendar.business_days_after(resignation_date, standard_last_day);
    let cap: u32 = usable_leave(eligible, EARLIEST_LEAVE_PERCENT);

    let total_days: usize = notice_working_days.len();
    let al_to_use: usize = usize::try_from(cap).map_or(total_days, |c| c.min(total_days));
    let days_worked: usize = total_days - al_to_use;

    let last_working_day: Date = days_worked
        .checked_sub(1)
        .and_then(|index| notice_working_days.get(index))
        .copied()
        .unwrap_or(resignation_date);

    let used: LeaveDays = LeaveDays::from_whole_days(u32::try_from(al_to_use).unwrap_or(cap));
    let paid: LeaveDays = eligible - used;
    let worked: u32 = u32::try_from(days_worked).unwrap_or(u32::MAX);
    let notice_total: u32 = u32::try_from(total_days).unwrap_or(u32::MAX);

    let narrative: Narrative = Narrative {
        name: String::from("Earliest Last Day"),
        description: if used.is_zero() {
            format!(
                "Less than one whole AL day is available to replace notice days - last working day stays {last_working_day}"
            )
        } else {
            format!(
                "Use {used} AL days to replace working days at the end of notice period - finish work early on {last_working_day}"
            )
        },
        pros: vec![
            String::from("Start new job sooner"),
            format!("Fewer working days ({worked} vs {notice_total})"),
            format!("Still get AL payout ({paid} days)"),
            String::from("Smart AL usage - skips holidays automatically"),
            String::from("Perfect for quick job transitions"),
        ],
        cons: vec![
            String::from("May need employer approval"),
            String::from("Less total cash than standard approach"),
            String::from("Shorter handover period"),
        ],
    };

    Scenario {
        strategy: Strategy::Earliest {
            notice_working_days,
            days_worked,
        },
        resignation_date,
        last_working_day,
        contract_end_date: last_working_day,
        al_eligible_total: eligible,
        al_used_during_notice: used,
        al_paid_out: paid,
        working_days_in_notice: worked,
        narrative,
    }
}

/// Serve the full notice, then take half the eligible leave as time off.
///
/// Half the eligible leave (rounded up, capped at the whole days held) is
/// consumed one business day at a time after the standard last day; the
/// contract ends on the day the last of it is taken.
///
/// # Errors
///
/// Returns an error if the walk leaves the representable date range.
pub fn balanced_scenario(
    calendar: &BusinessCalendar,
    resignation_date: Date,
    standard_last_day: Date,
    working_days_in_notice: u32,
    eligible: LeaveDays,
) -> Result<Scenario, CoreError> {
    let time_off_days: u32 = usable_leave(eligible, BALANCED_LEAVE_PERCENT);

    let contract_end_date: Date = if time_off_days == 0 {
        standard_last_day
    } else {
        calendar.add_business_days(standard_last_day, time_off_days)?
    };

    let used: LeaveDays = LeaveDays::from_whole_days(time_off_days);
    let paid: LeaveDays = eligible - used;

    let narrative: Narrative = Narrative {
        name: String::from("Smart Balanced"),
        description: if used.is_zero() {
            format!(
                "Work notice period; less than one whole AL day is available, so the contract ends on {contract_end_date}"
            )
        } else {
            format!(
                "Work notice period, then use {used} AL days within contract period (smart holiday-aware timing)"
            )
        },
        pros: vec![
            String::from("Balanced approach: work + time off + cash"),
            format!("{used} days of time off"),
            format!("Still get AL payout ({paid} days)"),
            String::from("Never uses AL on public holidays"),
            String::from("Respects notice period constraints"),
        ],
        cons: vec![
            String::from("Some extended commitment beyond notice"),
            String::from("Less cash than standard approach"),
            String::from("May delay new job start slightly"),
        ],
    };

    Ok(Scenario {
        strategy: Strategy::Balanced { time_off_days },
        resignation_date,
        last_working_day: standard_last_day,
        contract_end_date,
        al_eligible_total: eligible,
        al_used_during_notice: used,
        al_paid_out: paid,
        working_days_in_notice,
        narrative,
    })
}
