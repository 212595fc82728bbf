//! # TimeGrid Render
//!
//! Terminal front end for the calendar views in `timegrid-core`.
//!
//! - **Config**: environment driven settings
//! - **Events**: scripted clicks and toolbar presses
//! - **Layout**: serializable snapshot of the active view
//! - **Text**: fixed-width renderer for that snapshot

/// Environment configuration for a render run
pub mod config;
/// Scripted input events
pub mod events;
/// Serializable layout model
pub mod layout;
/// Fixed-width text renderer
pub mod text;

use chrono::NaiveDate;
use timegrid_core::{
    calendar::Calendar,
    errors::{GridError, GridResult},
};
use tracing::{debug, info};

use crate::{
    config::{OutputFormat, RenderConfig},
    layout::Layout,
};

/// Builds the initial view and replays every configured event
pub fn replay(config: &RenderConfig, today: NaiveDate) -> Calendar {
    let anchor = config.anchor_date.unwrap_or(today);
    let initial = Calendar::new(config.view, anchor, config.label_style);

    config.events.iter().fold(initial, |calendar, event| {
        debug!(?event, "Applying input event");
        event.apply(calendar, today)
    })
}

pub fn render_json(layout: &Layout) -> GridResult<String> {
    serde_json::to_string_pretty(layout).map_err(|e| GridError::Internal(Box::new(e)))
}

/// Replays the configured script and renders the resulting view
///
/// # Errors
///
/// Returns `GridError::Internal` if the layout cannot be encoded as JSON.
pub fn run(config: &RenderConfig, today: NaiveDate) -> GridResult<String> {
    let calendar = replay(config, today);
    let layout = Layout::from_view(calendar.view(), today);
    info!(view = %calendar.kind(), title = layout.title(), "Rendering calendar");

    match config.output {
        OutputFormat::Text => Ok(text::render_text(&layout)),
        OutputFormat::Json => render_json(&layout),
    }
}
