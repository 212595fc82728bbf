use serde::{Deserialize, Serialize};

use super::{
    interval::SelectedInterval,
    time_slot::{SLOT_MINUTES, SLOTS_PER_DAY},
};

/// Pixel position of the selection overlay inside a grid column
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayGeometry {
    pub top: f64,
    pub height: f64,
}

/// Row heights used to lay out a grid column
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridMetrics {
    /// Height of one 30-minute row
    pub slot_height: f64,
    /// Height of the all-day row above the first slot
    pub header_height: f64,
}

impl GridMetrics {
    pub const DAY_VIEW: GridMetrics = GridMetrics {
        slot_height: 40.0,
        header_height: 40.0,
    };

    pub const WEEK_VIEW: GridMetrics = GridMetrics {
        slot_height: 44.0,
        header_height: 40.0,
    };

    /// Height of a full column: the all-day row plus every slot
    pub fn column_height(&self) -> f64 {
        self.header_height + f64::from(SLOTS_PER_DAY) * self.slot_height
    }

    pub fn overlay(&self, interval: &SelectedInterval) -> OverlayGeometry {
        compute_overlay_geometry(interval, self.slot_height, self.header_height)
    }
}

/// Projects an interval onto the column; no clamping is applied
pub fn compute_overlay_geometry(
    interval: &SelectedInterval,
    slot_pixel_height: f64,
    header_pixel_height: f64,
) -> OverlayGeometry {
    // Multiply before dividing so whole-pixel results stay exact
    let to_pixels =
        |minutes: u16| f64::from(minutes) * slot_pixel_height / f64::from(SLOT_MINUTES);
    OverlayGeometry {
        top: to_pixels(interval.start_minute()) + header_pixel_height,
        height: to_pixels(interval.end_minute() - interval.start_minute()),
    }
}
