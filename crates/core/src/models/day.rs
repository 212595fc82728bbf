use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::GridError;

pub const DAYS_PER_WEEK: u8 = 7;

/// Column of a week view, `0` (Sunday) through `6` (Saturday)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DayIndex(u8);

impl DayIndex {
    pub fn new(index: u8) -> Option<Self> {
        (index < DAYS_PER_WEEK).then_some(Self(index))
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (0..DAYS_PER_WEEK).map(Self)
    }

    /// Column in which `date` appears in its Sunday-first week
    pub fn of(date: NaiveDate) -> Self {
        // num_days_from_sunday is always 0..=6
        Self(date.weekday().num_days_from_sunday() as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for DayIndex {
    type Error = GridError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| {
            GridError::Validation(format!(
                "Day index {value} is outside 0..{DAYS_PER_WEEK}"
            ))
        })
    }
}

impl From<DayIndex> for u8 {
    fn from(day: DayIndex) -> Self {
        day.0
    }
}

impl fmt::Display for DayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
