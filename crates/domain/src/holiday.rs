// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Public holiday tables.
//!
//! A `HolidaySet` is an immutable table of exact dates for one jurisdiction.
//! It is built once at start-up and handed to a [`crate::BusinessCalendar`];
//! dates outside the loaded years are simply ordinary days.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::Date;
use time::macros::date;

/// Provenance of a holiday table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidaySource {
    /// The jurisdiction the dates apply to.
    pub country: String,
    /// The publishing authority.
    pub official_source: String,
    /// Where the dates were taken from.
    pub source_url: String,
    /// The statute establishing the holidays.
    pub legal_reference: String,
    /// When the table was last checked against the source.
    pub last_updated: String,
    /// Free-form caveat shown alongside results.
    pub note: String,
}

/// An immutable set of public holidays for a single jurisdiction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidaySet {
    source: HolidaySource,
    holidays: BTreeMap<Date, String>,
}

impl HolidaySet {
    /// Creates a holiday set from `(date, name)` pairs.
    ///
    /// Duplicate dates keep the last name supplied.
    #[must_use]
    pub fn new<I>(source: HolidaySource, holidays: I) -> Self
    where
        I: IntoIterator<Item = (Date, String)>,
    {
        Self {
            source,
            holidays: holidays.into_iter().collect(),
        }
    }

    /// Hong Kong general holidays for 2024 and 2025.
    ///
    /// Source: General Holidays Ordinance (Cap. 149), as published at
    /// <https://www.gov.hk/en/about/abouthk/holiday/>.
    #[must_use]
    pub fn hong_kong() -> Self {
        let source: HolidaySource = HolidaySource {
            country: String::from("Hong Kong"),
            official_source: String::from("Hong Kong Government"),
            source_url: String::from("https://www.gov.hk/en/about/abouthk/holiday/"),
            legal_reference: String::from("General Holidays Ordinance (Cap. 149)"),
            last_updated: String::from("July 2025"),
            note: String::from(
                "Please verify current dates with official government sources as holidays may change",
            ),
        };

        Self::new(
            source,
            HONG_KONG_HOLIDAYS
                .iter()
                .map(|(day, name)| (*day, (*name).to_string())),
        )
    }

    /// Returns the provenance of this table.
    #[must_use]
    pub const fn source(&self) -> &HolidaySource {
        &self.source
    }

    /// Returns `true` if `date` is a listed holiday.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.holidays.contains_key(&date)
    }

    /// Returns the holiday name for `date`, if it is a holiday.
    #[must_use]
    pub fn name(&self, date: Date) -> Option<&str> {
        self.holidays.get(&date).map(String::as_str)
    }

    /// Iterates over the holidays in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = (Date, &str)> {
        self.holidays.iter().map(|(day, name)| (*day, name.as_str()))
    }

    /// Iterates over the holidays falling within `[start, end]`.
    pub fn between(&self, start: Date, end: Date) -> impl Iterator<Item = Date> + '_ {
        let upper: Date = if end < start { start } else { end };
        self.holidays
            .range(start..=upper)
            .filter(move |(day, _)| **day <= end)
            .map(|(day, _)| *day)
    }

    /// Number of holidays in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// Returns `true` if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }
}

const HONG_KONG_HOLIDAYS: [(Date, &str); 34] = [
    // 2024
    (date!(2024 - 01 - 01), "New Year's Day"),
    (date!(2024 - 02 - 10), "Lunar New Year's Day"),
    (date!(2024 - 02 - 12), "The second day of Lunar New Year"),
    (date!(2024 - 02 - 13), "The third day of Lunar New Year"),
    (date!(2024 - 03 - 29), "Good Friday"),
    (date!(2024 - 03 - 30), "The day following Good Friday"),
    (date!(2024 - 04 - 01), "Easter Monday"),
    (date!(2024 - 04 - 04), "Ching Ming Festival"),
    (date!(2024 - 05 - 01), "Labour Day"),
    (date!(2024 - 05 - 15), "Buddha's Birthday"),
    (date!(2024 - 06 - 10), "Tuen Ng Festival"),
    (
        date!(2024 - 07 - 01),
        "Hong Kong Special Administrative Region Establishment Day",
    ),
    (
        date!(2024 - 09 - 18),
        "The day following the Chinese Mid-Autumn Festival",
    ),
    (date!(2024 - 10 - 01), "National Day"),
    (date!(2024 - 10 - 11), "Chung Yeung Festival"),
    (date!(2024 - 12 - 25), "Christmas Day"),
    (date!(2024 - 12 - 26), "The first weekday after Christmas Day"),
    // 2025
    (date!(2025 - 01 - 01), "New Year's Day"),
    (date!(2025 - 01 - 29), "Lunar New Year's Day"),
    (date!(2025 - 01 - 30), "The second day of Lunar New Year"),
    (date!(2025 - 01 - 31), "The third day of Lunar New Year"),
    (date!(2025 - 04 - 04), "Ching Ming Festival"),
    (date!(2025 - 04 - 18), "Good Friday"),
    (date!(2025 - 04 - 19), "The day following Good Friday"),
    (date!(2025 - 04 - 21), "Easter Monday"),
    (date!(2025 - 05 - 01), "Labour Day"),
    (date!(2025 - 05 - 05), "Buddha's Birthday"),
    (date!(2025 - 05 - 31), "Tuen Ng Festival"),
    (
        date!(2025 - 07 - 01),
        "Hong Kong Special Administrative Region Establishment Day",
    ),
    (date!(2025 - 10 - 01), "National Day"),
    (
        date!(2025 - 10 - 06),
        "The day following the Chinese Mid-Autumn Festival",
    ),
    (date!(2025 - 10 - 29), "Chung Yeung Festival"),
    (date!(2025 - 12 - 25), "Christmas Day"),
    (date!(2025 - 12 - 26), "The first weekday after Christmas Day"),
];
