use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::GridError;

/// Number of half-hour slots in one day
pub const SLOTS_PER_DAY: u8 = 48;

/// Length of a single slot in minutes
pub const SLOT_MINUTES: u16 = 30;

/// Minutes in a day; the exclusive upper bound for any slot start
pub const MINUTES_PER_DAY: u16 = 1440;

/// Index of a half-hour slot within a day, always in `0..48`
///
/// Slot `n` covers minutes `n*30 .. n*30+30`. Values are produced by
/// enumerating the day (`SlotIndex::all`) or by checked conversion, so an
/// out-of-range index can never reach the selection logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i16", into = "i16")]
pub struct SlotIndex(u8);

impl SlotIndex {
    pub fn new(index: u8) -> Option<Self> {
        (index < SLOTS_PER_DAY).then_some(Self(index))
    }

    /// Every slot of the day in time order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..SLOTS_PER_DAY).map(Self)
    }

    /// Slot starting exactly at `minute`, if that minute is slot-aligned
    pub fn from_start_minute(minute: u16) -> Option<Self> {
        if minute % SLOT_MINUTES != 0 {
            return None;
        }
        u8::try_from(minute / SLOT_MINUTES).ok().and_then(Self::new)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn hour(self) -> u8 {
        self.0 / 2
    }

    /// 0 for the on-the-hour slot, 1 for the half-hour slot
    pub fn half_hour(self) -> u8 {
        self.0 % 2
    }

    pub fn is_on_the_hour(self) -> bool {
        self.half_hour() == 0
    }

    pub fn start_minute(self) -> u16 {
        u16::from(self.0) * SLOT_MINUTES
    }

    pub fn end_minute(self) -> u16 {
        self.start_minute() + SLOT_MINUTES
    }
}

impl TryFrom<i16> for SlotIndex {
    type Error = GridError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| {
                GridError::Validation(format!(
                    "Slot index {value} is outside 0..{SLOTS_PER_DAY}"
                ))
            })
    }
}

impl From<SlotIndex> for i16 {
    fn from(slot: SlotIndex) -> Self {
        i16::from(slot.0)
    }
}

impl fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A row of the schedule grid: the all-day pseudo-row or a half-hour slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotRow {
    AllDay,
    Slot(SlotIndex),
}

impl SlotRow {
    /// Flat row index where the all-day row is `-1`
    pub fn index(self) -> i16 {
        match self {
            SlotRow::AllDay => -1,
            SlotRow::Slot(slot) => slot.into(),
        }
    }

    pub fn slot(self) -> Option<SlotIndex> {
        match self {
            SlotRow::AllDay => None,
            SlotRow::Slot(slot) => Some(slot),
        }
    }
}

impl TryFrom<i16> for SlotRow {
    type Error = GridError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        if value == -1 {
            Ok(SlotRow::AllDay)
        } else {
            SlotIndex::try_from(value).map(SlotRow::Slot)
        }
    }
}

/// Descriptive record for one row of a rendered grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub row: SlotRow,
    pub label: String,
}

impl TimeSlot {
    pub fn slot_index(&self) -> i16 {
        self.row.index()
    }

    pub fn hour_index(&self) -> Option<u8> {
        self.row.slot().map(SlotIndex::hour)
    }

    pub fn half_hour_index(&self) -> Option<u8> {
        self.row.slot().map(SlotIndex::half_hour)
    }

    pub fn is_clickable(&self) -> bool {
        matches!(self.row, SlotRow::Slot(_))
    }
}
