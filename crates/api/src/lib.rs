// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod error;
mod handlers;
mod holiday_file;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{calculate, calendar_view, holiday_source, parse_calculate_request};
pub use holiday_file::{HolidayFileError, load_holiday_file, parse_holiday_json};
pub use request_response::{
    AnalysisNoteInfo, CalculateRequest, CalculateResponse, CalendarViewRequest,
    CalendarViewResponse, DayCellInfo, HolidayInfo, HolidaySourceResponse, MonthInfo,
    ScenarioInfo, SmartLeaveInfo,
};
