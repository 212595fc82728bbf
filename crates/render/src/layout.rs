//! # Layout
//!
//! Serializable snapshot of what a view should draw. The text and JSON
//! renderers both work from a `Layout` so neither touches view state.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;
use timegrid_core::{
    calendar::{CalendarView, MonthViewState, column_label},
    grid::GridViewState,
    labels::{LabelStyle, weekday_short},
    models::{day::DAYS_PER_WEEK, geometry::GridMetrics},
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum Layout {
    Month(MonthLayout),
    Week(GridLayout),
    Day(GridLayout),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnHeader {
    pub date: NaiveDate,
    pub label: String,
    pub weekday: String,
    pub is_today: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowLayout {
    pub slot_index: i16,
    pub label: String,
    pub clickable: bool,
}

/// Positioned selection block
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayLayout {
    /// Column the block is drawn in; always 0 in the day view
    pub column: usize,
    pub slot_index: i16,
    pub top: f64,
    pub height: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridLayout {
    pub title: String,
    pub subtitle: Option<String>,
    pub columns: Vec<ColumnHeader>,
    pub rows: Vec<RowLayout>,
    pub overlay: Option<OverlayLayout>,
    pub metrics: GridMetrics,
    pub column_height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthCellLayout {
    pub day: u32,
    pub date: NaiveDate,
    pub in_current_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthLayout {
    pub title: String,
    pub weekdays: Vec<String>,
    pub weeks: Vec<Vec<MonthCellLayout>>,
}

impl Layout {
    pub fn from_view(view: &CalendarView, today: NaiveDate) -> Self {
        let title = view.title();
        let subtitle = view.subtitle();
        match view {
            CalendarView::Month(state) => Layout::Month(month_layout(state, title, today)),
            CalendarView::Week(state) => Layout::Week(grid_layout(state, title, subtitle, today)),
            CalendarView::Day(state) => Layout::Day(grid_layout(state, title, subtitle, today)),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Layout::Month(month) => &month.title,
            Layout::Week(grid) | Layout::Day(grid) => &grid.title,
        }
    }
}

fn grid_layout(
    state: &GridViewState,
    title: String,
    subtitle: Option<String>,
    today: NaiveDate,
) -> GridLayout {
    let style = state.style();
    let metrics = state.kind().metrics();

    let columns = state
        .dates()
        .into_iter()
        .map(|date| {
            let (label, weekday) = column_label(date, style);
            ColumnHeader {
                date,
                label,
                weekday,
                is_today: date == today,
            }
        })
        .collect();

    let rows = state
        .slots()
        .into_iter()
        .map(|slot| RowLayout {
            slot_index: slot.slot_index(),
            clickable: slot.is_clickable(),
            label: slot.label,
        })
        .collect();

    let overlay = state.selection().map(|selected| {
        let geometry = metrics.overlay(selected);
        OverlayLayout {
            column: selected
                .day_index()
                .map_or(0, |day| usize::from(day.get())),
            slot_index: selected.slot().into(),
            top: geometry.top,
            height: geometry.height,
            label: selected.label().to_string(),
        }
    });

    GridLayout {
        title,
        subtitle,
        columns,
        rows,
        overlay,
        metrics,
        column_height: metrics.column_height(),
    }
}

fn month_layout(state: &MonthViewState, title: String, today: NaiveDate) -> MonthLayout {
    let cells: Vec<MonthCellLayout> = state
        .cells(today)
        .into_iter()
        .map(|cell| MonthCellLayout {
            day: cell.date.day(),
            date: cell.date,
            in_current_month: cell.in_current_month,
            is_today: cell.is_today,
            is_selected: cell.is_selected,
        })
        .collect();

    MonthLayout {
        title,
        weekdays: weekday_headers(state.style()),
        weeks: cells
            .chunks(usize::from(DAYS_PER_WEEK))
            .map(<[MonthCellLayout]>::to_vec)
            .collect(),
    }
}

/// Sunday-first short weekday names
fn weekday_headers(style: LabelStyle) -> Vec<String> {
    std::iter::successors(Some(Weekday::Sun), |day| Some(day.succ()))
        .take(usize::from(DAYS_PER_WEEK))
        .map(|day| weekday_short(day, style).to_string())
        .collect()
}
