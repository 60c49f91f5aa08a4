// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Loading holiday tables from JSON files.
//!
//! The file carries the table's provenance alongside the dates:
//!
//! ```json
//! {
//!   "country": "Hong Kong",
//!   "official_source": "Hong Kong Government",
//!   "source_url": "https://www.gov.hk/en/about/abouthk/holiday/",
//!   "legal_reference": "General Holidays Ordinance (Cap. 149)",
//!   "last_updated": "January 2026",
//!   "note": "Verify with official sources",
//!   "holidays": [{ "date": "2026-01-01", "name": "The first day of January" }]
//! }
//! ```

use std::path::{Path, PathBuf};

use notice_planner_domain::{HolidaySet, HolidaySource, parse_date};
use serde::Deserialize;
use thiserror::Error;
use time::Date;

/// Errors raised while loading a holiday file.
#[derive(Debug, Error)]
pub enum HolidayFileError {
    #[error("failed to read holiday file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("holiday file {} is not valid JSON: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("holiday '{name}' has an invalid date '{date}': {reason}")]
    Date {
        name: String,
        date: String,
        reason: String,
    },
}

#[derive(Debug, Deserialize)]
struct HolidayFile {
    #[serde(flatten)]
    source: HolidaySource,
    holidays: Vec<HolidayEntry>,
}

#[derive(Debug, Deserialize)]
struct HolidayEntry {
    date: String,
    name: String,
}

/// Parses a holiday table from JSON text.
///
/// # Errors
///
/// Returns an error if the text is not a valid holiday document or if any
/// entry's date is not a `YYYY-MM-DD` calendar date.
pub fn parse_holiday_json(path: &Path, json: &str) -> Result<HolidaySet, HolidayFileError> {
    let file: HolidayFile =
        serde_json::from_str(json).map_err(|source| HolidayFileError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    let mut holidays: Vec<(Date, String)> = Vec::with_capacity(file.holidays.len());
    for entry in file.holidays {
        let date: Date = parse_date(&entry.date).map_err(|err| HolidayFileError::Date {
            name: entry.name.clone(),
            date: entry.date.clone(),
            reason: err.to_string(),
        })?;
        holidays.push((date, entry.name));
    }

    Ok(HolidaySet::new(file.source, holidays))
}

/// Loads a holiday table from a JSON file.
///
/// # Arguments
///
/// * `path` - Location of the holiday file
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not a valid holiday
/// document, or lists an invalid date.
pub fn load_holiday_file(path: &Path) -> Result<HolidaySet, HolidayFileError> {
    let json: String = std::fs::read_to_string(path).map_err(|source| HolidayFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let holidays: HolidaySet = parse_holiday_json(path, &json)?;
    tracing::info!(
        path = %path.display(),
        country = %holidays.source().country,
        holiday_count = holidays.len(),
        "Loaded holiday file"
    );

    Ok(holidays)
}
