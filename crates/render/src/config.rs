//! # Render Configuration
//!
//! Settings for the terminal front end, read from environment variables with
//! defaults where appropriate.
//!
//! ## Environment Variables
//!
//! - `TIMEGRID_VIEW`: Initial view, `month`, `week` or `day` (default: "week")
//! - `TIMEGRID_ANCHOR_DATE`: Initial anchor as `YYYY-MM-DD` (default: today)
//! - `TIMEGRID_LABEL_STYLE`: `english` or `korean` (default: "english")
//! - `TIMEGRID_OUTPUT`: `text` or `json` (default: "text")
//! - `TIMEGRID_EVENTS`: Comma separated input script replayed before rendering
//! - `LOG_LEVEL`: Logging level (default: "info")

use chrono::NaiveDate;
use eyre::{Result, WrapErr};
use std::{env, str::FromStr};
use timegrid_core::{calendar::ViewKind, errors::GridError, labels::LabelStyle};
use tracing::Level;

use crate::events::{InputEvent, parse_script};

/// Output encoding of the rendered layout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(GridError::Validation(format!(
                "Unknown output format '{other}', expected text or json"
            ))),
        }
    }
}

/// Configuration for a single render run
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// View shown before any scripted event
    pub view: ViewKind,

    /// Anchor date; `None` means today
    pub anchor_date: Option<NaiveDate>,

    pub label_style: LabelStyle,

    pub output: OutputFormat,

    /// Input events replayed in order before rendering
    pub events: Vec<InputEvent>,

    /// Log level for the application
    pub log_level: Level,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            view: ViewKind::Week,
            anchor_date: None,
            label_style: LabelStyle::default(),
            output: OutputFormat::default(),
            events: Vec::new(),
            log_level: Level::INFO,
        }
    }
}

impl RenderConfig {
    /// Creates a new RenderConfig from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if any variable is set to a value that cannot be
    /// parsed: an unknown view, label style or output format, a malformed
    /// anchor date, or an invalid event in the script.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let view = match lookup("TIMEGRID_VIEW") {
            Some(value) => value.parse().wrap_err("Invalid TIMEGRID_VIEW value")?,
            None => defaults.view,
        };

        let anchor_date = lookup("TIMEGRID_ANCHOR_DATE")
            .map(|value| NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d"))
            .transpose()
            .wrap_err("Invalid TIMEGRID_ANCHOR_DATE value, expected YYYY-MM-DD")?;

        let label_style = match lookup("TIMEGRID_LABEL_STYLE") {
            Some(value) => value.parse().wrap_err("Invalid TIMEGRID_LABEL_STYLE value")?,
            None => defaults.label_style,
        };

        let output = match lookup("TIMEGRID_OUTPUT") {
            Some(value) => value.parse().wrap_err("Invalid TIMEGRID_OUTPUT value")?,
            None => defaults.output,
        };

        let events = match lookup("TIMEGRID_EVENTS") {
            Some(script) => parse_script(&script).wrap_err("Invalid TIMEGRID_EVENTS script")?,
            None => defaults.events,
        };

        // Logging settings
        let log_level = match lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()).as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        Ok(Self {
            view,
            anchor_date,
            label_style,
            output,
            events,
            log_level,
        })
    }
}
