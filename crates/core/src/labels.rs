//! # Labels
//!
//! Text shown on the schedule grid: hour labels in the time column, the
//! all-day row caption, interval labels on the selection overlay and the
//! weekday names used by view titles.
//!
//! All times use a 12-hour clock with a leading period marker
//! (`AM 9:30`, `오전 9:30`). Midnight is shown as `AM 12` and noon as `PM 12`.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::GridError;

/// Locale flavor for every label the grid produces
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelStyle {
    #[default]
    English,
    Korean,
}

impl FromStr for LabelStyle {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "english" | "en" => Ok(LabelStyle::English),
            "korean" | "ko" => Ok(LabelStyle::Korean),
            other => Err(GridError::Validation(format!(
                "Unknown label style '{other}', expected english or korean"
            ))),
        }
    }
}

/// Half of the day on a 12-hour clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Am,
    Pm,
}

impl Period {
    pub fn marker(self, style: LabelStyle) -> &'static str {
        match (style, self) {
            (LabelStyle::English, Period::Am) => "AM",
            (LabelStyle::English, Period::Pm) => "PM",
            (LabelStyle::Korean, Period::Am) => "오전",
            (LabelStyle::Korean, Period::Pm) => "오후",
        }
    }
}

/// Converts a 24-hour value to its period and 12-hour display hour
///
/// Hour 24 (the end of the last slot) falls into the PM branch and shows
/// as `PM 12`.
pub fn twelve_hour(hour: u16) -> (Period, u16) {
    match hour {
        0 => (Period::Am, 12),
        1..=11 => (Period::Am, hour),
        12 => (Period::Pm, 12),
        _ => (Period::Pm, hour - 12),
    }
}

/// Label for the on-the-hour row of `hour` (`AM 12`, `PM 3`, `오후 3시`)
pub fn format_slot_label(hour: u8, style: LabelStyle) -> String {
    let (period, display_hour) = twelve_hour(u16::from(hour));
    let marker = period.marker(style);
    match style {
        LabelStyle::English => format!("{marker} {display_hour}"),
        LabelStyle::Korean => format!("{marker} {display_hour}시"),
    }
}

/// Time of day for a minute offset from midnight (`PM 12:30`)
pub fn format_time(minutes: u16, style: LabelStyle) -> String {
    let (period, display_hour) = twelve_hour(minutes / 60);
    format!(
        "{} {}:{:02}",
        period.marker(style),
        display_hour,
        minutes % 60
    )
}

/// Overlay label for an interval: `"{start} - {end} -"`
pub fn format_interval_label(start_minute: u16, end_minute: u16, style: LabelStyle) -> String {
    format!(
        "{} - {} -",
        format_time(start_minute, style),
        format_time(end_minute, style)
    )
}

/// Caption of the non-clickable all-day row
pub fn all_day_label(style: LabelStyle) -> &'static str {
    match style {
        LabelStyle::English => "All day",
        LabelStyle::Korean => "종일",
    }
}

/// Short weekday name for week column headers
pub fn weekday_short(weekday: Weekday, style: LabelStyle) -> &'static str {
    match style {
        LabelStyle::English => match weekday {
            Weekday::Sun => "Sun",
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
        },
        LabelStyle::Korean => match weekday {
            Weekday::Sun => "일",
            Weekday::Mon => "월",
            Weekday::Tue => "화",
            Weekday::Wed => "수",
            Weekday::Thu => "목",
            Weekday::Fri => "금",
            Weekday::Sat => "토",
        },
    }
}

/// Full weekday name shown under the day view title
pub fn weekday_long(weekday: Weekday, style: LabelStyle) -> String {
    match style {
        LabelStyle::English => match weekday {
            Weekday::Sun => "Sunday",
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
        }
        .to_string(),
        LabelStyle::Korean => format!("{}요일", weekday_short(weekday, style)),
    }
}
