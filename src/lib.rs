mod clock;
mod config;
mod consts;
mod format;
mod prelude;
mod storage;
mod types;

pub use clock::{elapsed_us, timestamp_us};
pub use config::{AdcScale, CaptureConfig, ConfigError, SampleInterval};
pub use consts::*;
pub use format::{four_digits, two_digits};
pub use storage::{FileIndex, StorageError, create_data_file, data_file_name, data_file_path};
pub use types::{Day, Month};

use crate::prelude::*;
use std::cmp::Ordering;
use std::str::FromStr;

/// A capture date as the logger records it: day of month and month,
/// range-checked and nothing more. Day 31 is accepted in any month; file
/// naming needs no notion of month lengths. 0 in either field marks a card
/// formatted before the date was set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{:02}/{:02}", "day.get()", "month.get()")]
pub struct LogDate {
    day: Day,
    month: Month,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid day: {} (must be 0-{})", "_0", MAX_DAY)]
    InvalidDay(u8),
    #[display(fmt = "Invalid month: {} (must be 0-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
}

impl std::error::Error for DateError {}

/// Error type for date text parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Empty or whitespace-only input.
    #[error("Empty date string")]
    EmptyInput,

    /// Input does not have the `DD/MM` shape.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    /// Both components are numeric but one is out of range.
    #[error(transparent)]
    Date(#[from] DateError),
}

impl LogDate {
    /// Creates a new capture date. The day is validated first, then the
    /// month, so the first violation in that order is the one reported.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` or `DateError::InvalidMonth` for an
    /// out-of-range component.
    pub fn new(day: u8, month: u8) -> Result<Self, DateError> {
        let day = Day::new(day)?;
        let month = Month::new(month)?;
        Ok(Self { day, month })
    }

    /// Creates a capture date from already-validated components.
    pub const fn from_typed(day: Day, month: Month) -> Self {
        Self { day, month }
    }

    /// Returns the day component (as u8 for convenience)
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the month component (as u8 for convenience)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Replaces the day component. A rejected value leaves the stored day
    /// unchanged.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the value is > `MAX_DAY`.
    pub fn set_day(&mut self, value: u8) -> Result<(), DateError> {
        self.day = Day::new(value)?;
        Ok(())
    }

    /// Replaces the month component. A rejected value leaves the stored
    /// month unchanged.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is > `MAX_MONTH`.
    pub fn set_month(&mut self, value: u8) -> Result<(), DateError> {
        self.month = Month::new(value)?;
        Ok(())
    }

    /// Helper to parse u8 with better error messages
    fn parse_u8(s: &str) -> Result<u8, ParseError> {
        s.parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl FromStr for LogDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        // Operator input is `DD/MM`, one strict separator
        let separator_count = trimmed.matches(DATE_SEPARATOR).count();
        if separator_count != 1 {
            return Err(ParseError::InvalidFormat(format!(
                "Expected one '{DATE_SEPARATOR}' separator, found {separator_count}: {s}"
            )));
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        let day = Self::parse_u8(parts[0])?;
        let month = Self::parse_u8(parts[1])?;

        Ok(Self::new(day, month)?)
    }
}

impl PartialOrd for LogDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogDate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Chronological: month first, then day. Placeholder 0 sorts first.
        match self.month.cmp(&other.month) {
            Ordering::Equal => self.day.cmp(&other.day),
            ord => ord,
        }
    }
}

impl TryFrom<(u8, u8)> for LogDate {
    type Error = DateError;

    fn try_from(value: (u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1)
    }
}

impl serde::Serialize for LogDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for LogDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
