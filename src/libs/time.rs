//! Wall-clock time values for the Servicebericht time windows.
//!
//! A [`TimeOfDay`] is an hour/minute pair without a date component. All
//! duration calculations in this application happen within a single day;
//! a shift crossing midnight is not representable and gets rejected by
//! the ordering rules in [`crate::libs::report`].
//!
//! Values parse from and display as zero-padded `"HH:MM"` strings, which
//! is also their JSON form inside the draft file.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error raised when a time string cannot be interpreted as `"HH:MM"`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("invalid time '{0}', expected HH:MM")]
    Format(String),
    #[error("hour {0} out of range (0-23)")]
    HourRange(u32),
    #[error("minute {0} out of range (0-59)")]
    MinuteRange(u32),
}

/// A wall-clock time of day (00:00 .. 23:59).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
}

impl TimeOfDay {
    /// Midnight, the neutral value for unused time fields.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay { hour: 0, minute: 0 };

    pub fn new(hour: u32, minute: u32) -> Result<Self, TimeParseError> {
        if hour > 23 {
            return Err(TimeParseError::HourRange(hour));
        }
        if minute > 59 {
            return Err(TimeParseError::MinuteRange(minute));
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Converts to total minutes since midnight.
    ///
    /// All ordering comparisons between time values operate on this
    /// integer form.
    pub fn minutes_of_day(&self) -> i64 {
        (self.hour * 60 + self.minute) as i64
    }

    /// The current local time, truncated to the minute.
    pub fn now() -> Self {
        chrono::Local::now().time().into()
    }

    /// The same wall-clock time one hour later, wrapping at midnight.
    pub fn plus_one_hour(&self) -> Self {
        Self {
            hour: (self.hour + 1) % 24,
            minute: self.minute,
        }
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(t: NaiveTime) -> Self {
        // NaiveTime hours/minutes are already range-checked by chrono.
        Self {
            hour: t.hour(),
            minute: t.minute(),
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hour, minute) = s.trim().split_once(':').ok_or_else(|| TimeParseError::Format(s.to_string()))?;
        let hour: u32 = hour.parse().map_err(|_| TimeParseError::Format(s.to_string()))?;
        let minute: u32 = minute.parse().map_err(|_| TimeParseError::Format(s.to_string()))?;
        Self::new(hour, minute)
    }
}

impl From<TimeOfDay> for String {
    fn from(t: TimeOfDay) -> Self {
        t.to_string()
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = TimeParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
