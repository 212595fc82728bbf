//! # Time Grid
//!
//! The half-hour schedule grid shared by the day and week views.
//!
//! A grid is 49 rows tall: the all-day pseudo-row followed by 48 slots of
//! 30 minutes covering 00:00-24:00. At most one slot is selected at a time
//! per grid; in the week view that single selection spans all seven day
//! columns, so selecting in one column clears the selection in any other.
//!
//! ## Selection rules
//!
//! - A click on the all-day row does nothing.
//! - A click on the selected slot clears the selection.
//! - A click anywhere else replaces the selection with that slot.
//! - Any navigation of the anchor date clears the selection.
//!
//! `GridViewState` holds the anchor date and the selection. Its transitions
//! consume the state and return the next one, so a view can be driven and
//! tested without any rendering.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    calendar::week_days,
    labels::{LabelStyle, all_day_label, format_slot_label},
    models::{
        day::DayIndex,
        geometry::{GridMetrics, OverlayGeometry},
        interval::SelectedInterval,
        time_slot::{SlotIndex, SlotRow, TimeSlot},
    },
};

/// Builds the 49 rows of a day: all-day row first, then every slot in order
pub fn generate_slots(style: LabelStyle) -> Vec<TimeSlot> {
    std::iter::once(TimeSlot {
        row: SlotRow::AllDay,
        label: all_day_label(style).to_string(),
    })
    .chain(SlotIndex::all().map(|slot| TimeSlot {
        row: SlotRow::Slot(slot),
        label: slot_label(slot, style),
    }))
    .collect()
}

/// Time-column label of a slot; empty for half-hour rows
pub fn slot_label(slot: SlotIndex, style: LabelStyle) -> String {
    if slot.is_on_the_hour() {
        format_slot_label(slot.hour(), style)
    } else {
        String::new()
    }
}

/// Selection after a click at `(day_index, slot)` given the current one
///
/// Returns `None` when the click toggles off the current selection and a
/// fresh interval otherwise. Never merges the two.
pub fn on_slot_click(
    current: Option<&SelectedInterval>,
    day_index: Option<DayIndex>,
    slot: SlotIndex,
    style: LabelStyle,
) -> Option<SelectedInterval> {
    match current {
        Some(selected) if selected.matches(day_index, slot) => None,
        _ => Some(SelectedInterval::for_slot(day_index, slot, style)),
    }
}

/// Which time-grid view a state belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridKind {
    Day,
    Week,
}

impl GridKind {
    /// Days moved by a single previous/next step
    pub fn step_days(self) -> u64 {
        match self {
            GridKind::Day => 1,
            GridKind::Week => 7,
        }
    }

    pub fn metrics(self) -> GridMetrics {
        match self {
            GridKind::Day => GridMetrics::DAY_VIEW,
            GridKind::Week => GridMetrics::WEEK_VIEW,
        }
    }
}

/// Anchor-date movement requested by the toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Previous,
    Next,
    /// Jump to the given date, normally the caller's notion of today
    Today(NaiveDate),
}

/// State of one day or week grid: anchor date plus the single selection
#[derive(Debug, Clone, PartialEq)]
pub struct GridViewState {
    kind: GridKind,
    anchor: NaiveDate,
    selection: Option<SelectedInterval>,
    style: LabelStyle,
}

impl GridViewState {
    pub fn new(kind: GridKind, anchor: NaiveDate, style: LabelStyle) -> Self {
        Self {
            kind,
            anchor,
            selection: None,
            style,
        }
    }

    pub fn day(anchor: NaiveDate, style: LabelStyle) -> Self {
        Self::new(GridKind::Day, anchor, style)
    }

    pub fn week(anchor: NaiveDate, style: LabelStyle) -> Self {
        Self::new(GridKind::Week, anchor, style)
    }

    pub fn kind(&self) -> GridKind {
        self.kind
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    pub fn selection(&self) -> Option<&SelectedInterval> {
        self.selection.as_ref()
    }

    pub fn style(&self) -> LabelStyle {
        self.style
    }

    pub fn slots(&self) -> Vec<TimeSlot> {
        generate_slots(self.style)
    }

    /// Dates shown as columns: the anchor alone, or its Sunday-first week
    pub fn dates(&self) -> Vec<NaiveDate> {
        match self.kind {
            GridKind::Day => vec![self.anchor],
            GridKind::Week => week_days(self.anchor),
        }
    }

    /// Applies a click on a slot
    ///
    /// Day grids have a single column and ignore `day_index`. Week grids
    /// need a column; a click without one is dropped.
    pub fn with_slot_clicked(mut self, day_index: Option<DayIndex>, slot: SlotIndex) -> Self {
        let day_index = match (self.kind, day_index) {
            (GridKind::Day, _) => None,
            (GridKind::Week, Some(day)) => Some(day),
            (GridKind::Week, None) => {
                warn!(slot = %slot, "Ignoring week grid click without a day column");
                return self;
            }
        };

        self.selection = on_slot_click(self.selection.as_ref(), day_index, slot, self.style);
        match &self.selection {
            Some(selected) => debug!(
                kind = ?self.kind,
                day = ?selected.day_index().map(DayIndex::get),
                start_minute = selected.start_minute(),
                "Selected slot"
            ),
            None => debug!(kind = ?self.kind, slot = %slot, "Cleared selection"),
        }
        self
    }

    /// Applies a click on any grid row; the all-day row is inert
    pub fn with_row_clicked(self, day_index: Option<DayIndex>, row: SlotRow) -> Self {
        match row {
            SlotRow::AllDay => self,
            SlotRow::Slot(slot) => self.with_slot_clicked(day_index, slot),
        }
    }

    /// Moves the anchor date and always clears the selection
    pub fn with_date_advanced(mut self, navigation: Navigation) -> Self {
        let step = Days::new(self.kind.step_days());
        let next = match navigation {
            Navigation::Previous => self.anchor.checked_sub_days(step),
            Navigation::Next => self.anchor.checked_add_days(step),
            Navigation::Today(today) => Some(today),
        };

        match next {
            Some(anchor) => self.anchor = anchor,
            None => warn!(anchor = %self.anchor, "Anchor date out of range, keeping current"),
        }
        self.selection = None;
        debug!(kind = ?self.kind, anchor = %self.anchor, "Moved anchor date");
        self
    }

    /// Overlay rectangle of the current selection
    pub fn overlay(&self, metrics: GridMetrics) -> Option<OverlayGeometry> {
        self.selection.as_ref().map(|selected| metrics.overlay(selected))
    }
}
