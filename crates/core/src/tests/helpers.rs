// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{LeavePolicy, ResignationInputs, SalaryCycle};
use notice_planner_domain::{LeaveAccount, LeaveDays, NoticePeriodType, NoticeTerms, NoticeUnit};
use time::Date;

pub fn create_test_inputs(
    resignation_date: Date,
    notice: u32,
    unit: NoticeUnit,
    period_type: NoticePeriodType,
    total_tenths: u32,
    remaining_tenths: u32,
    leave_year_start: Date,
) -> ResignationInputs {
    ResignationInputs {
        notice: NoticeTerms::new(resignation_date, notice, unit, period_type).unwrap(),
        leave: LeaveAccount::new(
            LeaveDays::from_tenths(total_tenths),
            leave_year_start,
            LeaveDays::from_tenths(remaining_tenths),
        ),
        leave_policy: LeavePolicy::Payout,
        salary_cycle: SalaryCycle::Monthly,
    }
}
