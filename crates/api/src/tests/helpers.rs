// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use notice_planner_domain::BusinessCalendar;

use crate::CalculateRequest;

pub fn create_test_calendar() -> BusinessCalendar {
    BusinessCalendar::hong_kong()
}

/// Two calendar months from New Year's Day with 20 days of annual leave.
pub fn create_valid_request() -> CalculateRequest {
    CalculateRequest {
        resignation_date: String::from("2025-01-01"),
        notice_period: String::from("2"),
        notice_period_unit: String::from("months"),
        notice_period_type: String::from("calendar"),
        leave_year_start: String::from("2025-01-01"),
        annual_leave_total: String::from("20"),
        annual_leave_remaining: String::from("8.7"),
        leave_policy: String::from("payout"),
        salary_cycle: String::from("monthly"),
    }
}
