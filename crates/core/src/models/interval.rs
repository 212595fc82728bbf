use serde::Serialize;
use uuid::Uuid;

use super::{day::DayIndex, time_slot::SlotIndex};
use crate::labels::{LabelStyle, format_interval_label};

/// The single highlighted 30-minute block of a grid
///
/// Fields are private so that `end_minute - start_minute` is always one slot
/// and the label always matches the minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedInterval {
    id: Uuid,
    day_index: Option<DayIndex>,
    #[serde(skip)]
    slot: SlotIndex,
    start_minute: u16,
    end_minute: u16,
    label: String,
}

impl SelectedInterval {
    pub fn for_slot(day_index: Option<DayIndex>, slot: SlotIndex, style: LabelStyle) -> Self {
        let start_minute = slot.start_minute();
        let end_minute = slot.end_minute();
        Self {
            id: Uuid::new_v4(),
            day_index,
            slot,
            start_minute,
            end_minute,
            label: format_interval_label(start_minute, end_minute, style),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn day_index(&self) -> Option<DayIndex> {
        self.day_index
    }

    pub fn slot(&self) -> SlotIndex {
        self.slot
    }

    pub fn start_minute(&self) -> u16 {
        self.start_minute
    }

    pub fn end_minute(&self) -> u16 {
        self.end_minute
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// True when a click at `(day_index, slot)` lands on this interval
    pub fn matches(&self, day_index: Option<DayIndex>, slot: SlotIndex) -> bool {
        self.day_index == day_index && self.start_minute == slot.start_minute()
    }
}
