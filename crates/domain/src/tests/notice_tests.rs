// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    BusinessCalendar, DomainError, LeaveAccount, LeaveDays, NoticePeriodType, NoticeTerms,
    NoticeUnit,
    notice_period_days, parse_date, standard_last_day, working_days_in_notice,
};
use time::Date;
use time::macros::date;

fn calendar() -> BusinessCalendar {
    BusinessCalendar::hong_kong()
}

#[test]
fn test_two_month_calendar_notice_from_new_year() {
    let terms: NoticeTerms = NoticeTerms::new(
        parse_date("2025-01-01").unwrap(),
        2,
        NoticeUnit::Months,
        NoticePeriodType::Calendar,
    )
    .unwrap();

    let last: Date = standard_last_day(&terms, &calendar()).unwrap();

    // The two-month mark is Saturday 2025-03-01; the adjustment walks back
    assert_eq!(last, date!(2025 - 02 - 28));
    assert!(last <= date!(2025 - 03 - 01));
    assert_eq!(
        working_days_in_notice(&terms, &calendar(), last).unwrap(),
        39
    );
}

#[test]
fn test_working_notice_crosses_establishment_day() {
    let terms: NoticeTerms = NoticeTerms::new(
        date!(2025 - 06 - 25),
        10,
        NoticeUnit::Days,
        NoticePeriodType::Working,
    )
    .unwrap();

    assert_eq!(
        standard_last_day(&terms, &calendar()).unwrap(),
        date!(2025 - 07 - 10)
    );
}

#[test]
fn test_working_notice_crosses_christmas() {
    let terms: NoticeTerms = NoticeTerms::new(
        date!(2024 - 12 - 20),
        5,
        NoticeUnit::Days,
        NoticePeriodType::Working,
    )
    .unwrap();

    assert_eq!(
        standard_last_day(&terms, &calendar()).unwrap(),
        date!(2024 - 12 - 31)
    );
}

#[test]
fn test_working_type_month_notice_uses_day_count_as_business_days() {
    let terms: NoticeTerms = NoticeTerms::new(
        date!(2025 - 01 - 01),
        1,
        NoticeUnit::Months,
        NoticePeriodType::Working,
    )
    .unwrap();

    assert_eq!(notice_period_days(&terms).unwrap(), 31);
    let last: Date = standard_last_day(&terms, &calendar()).unwrap();
    assert_eq!(
        calendar().count_business_days(date!(2025 - 01 - 02), last),
        31
    );
    assert_eq!(
        working_days_in_notice(&terms, &calendar(), last).unwrap(),
        31
    );
}

#[test]
fn test_accrual_across_standard_notice() {
    let terms: NoticeTerms = NoticeTerms::new(
        date!(2025 - 03 - 03),
        1,
        NoticeUnit::Months,
        NoticePeriodType::Calendar,
    )
    .unwrap();
    let last: Date = standard_last_day(&terms, &calendar()).unwrap();
    assert_eq!(last, date!(2025 - 04 - 03));

    let account: LeaveAccount = LeaveAccount::new(
        LeaveDays::from_whole_days(14),
        date!(2025 - 01 - 01),
        LeaveDays::from_tenths(87),
    );
    // prorated 2 on 03-03 and 3 on 04-03
    assert_eq!(
        account
            .additional_during_notice(terms.resignation_date(), last)
            .unwrap(),
        LeaveDays::from_whole_days(1)
    );
}

#[test]
fn test_notice_terms_only_come_from_validated_constructor() {
    fn serializable<T: serde::Serialize>(_: &T) {}

    let terms: NoticeTerms = NoticeTerms::new(
        date!(2025 - 03 - 03),
        3,
        NoticeUnit::Months,
        NoticePeriodType::Calendar,
    )
    .unwrap();
    serializable(&terms);

    let rejected: Result<NoticeTerms, DomainError> = NoticeTerms::new(
        date!(2025 - 03 - 03),
        0,
        NoticeUnit::Days,
        NoticePeriodType::Calendar,
    );
    assert!(matches!(
        rejected,
        Err(DomainError::InvalidNoticePeriod { value: 0, .. })
    ));
}
