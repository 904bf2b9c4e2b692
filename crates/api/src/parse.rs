// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Parsing of date and time strings from API requests.
//!
//! Requests carry dates as `year-month-day` and times as 24-hour
//! `hour:minute` strings. Both are parsed strictly; anything else is
//! rejected before it reaches the domain layer.

use thiserror::Error;
use time::macros::format_description;
use time::{Date, Time, format_description::BorrowedFormatItem};

const DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");
const TIME_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[hour]:[minute]");

/// Errors that occur while parsing request fields.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The value is not a valid calendar date.
    #[error("'{value}' is not a date in year-month-day form")]
    InvalidDate {
        /// The rejected input.
        value: String,
    },
    /// The value is not a valid time of day.
    #[error("'{value}' is not a time in 24-hour hour:minute form")]
    InvalidTime {
        /// The rejected input.
        value: String,
    },
}

/// Parses a `year-month-day` date string.
///
/// # Errors
///
/// Returns `ParseError::InvalidDate` if the value does not name a real
/// calendar date.
pub fn parse_date(value: &str) -> Result<Date, ParseError> {
    Date::parse(value.trim(), DATE_FORMAT).map_err(|_| ParseError::InvalidDate {
        value: value.to_string(),
    })
}

/// Parses a 24-hour `hour:minute` time string.
///
/// # Errors
///
/// Returns `ParseError::InvalidTime` if the value is not a valid time of
/// day.
pub fn parse_time(value: &str) -> Result<Time, ParseError> {
    Time::parse(value.trim(), TIME_FORMAT).map_err(|_| ParseError::InvalidTime {
        value: value.to_string(),
    })
}
