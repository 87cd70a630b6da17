use crate::DateError;
use crate::consts::{MAX_DAY, MAX_MONTH};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A day-of-month value guaranteed to be in the range `0..=MAX_DAY` (0..=31).
/// 0 is a legal placeholder for a card formatted before the date is known.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(u8);

impl Day {
    /// Creates a new Day, validating that it's <= `MAX_DAY`
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the value is > `MAX_DAY`.
    pub fn new(value: u8) -> Result<Self, DateError> {
        if value > MAX_DAY {
            return Err(DateError::InvalidDay(value));
        }
        Ok(Self(value))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Day {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `0..=MAX_MONTH` (0..=12).
/// 0 carries the same placeholder meaning as for [`Day`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(u8);

impl Month {
    /// Creates a new Month, validating that it's <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, DateError> {
        if value > MAX_MONTH {
            return Err(DateError::InvalidMonth(value));
        }
        Ok(Self(value))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
