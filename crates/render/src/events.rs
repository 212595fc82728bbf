//! # Input Events
//!
//! A scripted stand-in for pointer clicks and toolbar presses. Scripts are
//! comma separated, for example `view:week,click:2:10,next,today`.
//!
//! | Token                   | Meaning                                   |
//! |-------------------------|-------------------------------------------|
//! | `prev`, `next`          | step the anchor back or forward           |
//! | `today`                 | jump to today                             |
//! | `view:<kind>`           | switch to `month`, `week` or `day`        |
//! | `click:<slot>`          | click a day-view row                      |
//! | `click:<day>:<slot>`    | click a week-view row in column `day`     |
//! | `date:<YYYY-MM-DD>`     | click a month cell                        |
//!
//! A slot of `-1` or `allday` targets the all-day row.

use chrono::NaiveDate;
use std::str::FromStr;
use timegrid_core::{
    calendar::{Calendar, ViewKind},
    errors::{GridError, GridResult},
    grid::Navigation,
    models::{day::DayIndex, time_slot::SlotRow},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Previous,
    Next,
    Today,
    SwitchView(ViewKind),
    ClickRow {
        day_index: Option<DayIndex>,
        row: SlotRow,
    },
    ClickDate(NaiveDate),
}

fn parse_row(token: &str) -> GridResult<SlotRow> {
    if token.eq_ignore_ascii_case("allday") {
        return Ok(SlotRow::AllDay);
    }
    let index: i16 = token
        .parse()
        .map_err(|_| GridError::Validation(format!("Invalid slot '{token}'")))?;
    SlotRow::try_from(index)
}

fn parse_day(token: &str) -> GridResult<DayIndex> {
    let index: u8 = token
        .parse()
        .map_err(|_| GridError::Validation(format!("Invalid day column '{token}'")))?;
    DayIndex::try_from(index)
}

impl FromStr for InputEvent {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let mut parts = token.split(':');
        let head = parts.next().unwrap_or_default().to_ascii_lowercase();
        let args: Vec<&str> = parts.collect();

        match (head.as_str(), args.as_slice()) {
            ("prev" | "previous", []) => Ok(InputEvent::Previous),
            ("next", []) => Ok(InputEvent::Next),
            ("today", []) => Ok(InputEvent::Today),
            ("view", [kind]) => kind.parse().map(InputEvent::SwitchView),
            ("click", [slot]) => Ok(InputEvent::ClickRow {
                day_index: None,
                row: parse_row(slot)?,
            }),
            ("click", [day, slot]) => Ok(InputEvent::ClickRow {
                day_index: Some(parse_day(day)?),
                row: parse_row(slot)?,
            }),
            ("date", [date]) => NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .map(InputEvent::ClickDate)
                .map_err(|_| GridError::Validation(format!("Invalid date '{date}'"))),
            _ => Err(GridError::Validation(format!("Unknown input event '{token}'"))),
        }
    }
}

/// Parses a comma separated script, skipping empty entries
pub fn parse_script(script: &str) -> GridResult<Vec<InputEvent>> {
    script
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect()
}

impl InputEvent {
    /// Feeds the event to a calendar, resolving "today" against `today`
    pub fn apply(self, calendar: Calendar, today: NaiveDate) -> Calendar {
        match self {
            InputEvent::Previous => calendar.navigate(Navigation::Previous),
            InputEvent::Next => calendar.navigate(Navigation::Next),
            InputEvent::Today => calendar.navigate(Navigation::Today(today)),
            InputEvent::SwitchView(kind) => calendar.switch_to(kind, today),
            InputEvent::ClickRow { day_index, row } => calendar.click_row(day_index, row),
            InputEvent::ClickDate(date) => calendar.click_date(date),
        }
    }
}
