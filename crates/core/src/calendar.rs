//! # Calendar
//!
//! Anchor-date arithmetic and view dispatch for the month, week and day
//! calendars.
//!
//! Weeks start on Sunday. The month view shows every date from the Sunday on
//! or before the first of the month to the Saturday on or after its last day,
//! and keeps a single selected date that toggles on repeated clicks. The week
//! and day views wrap a [`GridViewState`].
//!
//! [`CalendarView`] owns exactly one state for the active view. Switching
//! views discards it and starts over on today's date. [`Calendar`] wraps the
//! active view and remembers the month selection while another view is up.

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use tracing::{debug, warn};

use crate::{
    errors::GridError,
    grid::{GridKind, GridViewState, Navigation},
    labels::{LabelStyle, weekday_long, weekday_short},
    models::{
        day::{DAYS_PER_WEEK, DayIndex},
        time_slot::SlotRow,
    },
};

/// Sunday on or before `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date.checked_sub_days(Days::new(u64::from(DayIndex::of(date).get())))
        .unwrap_or(date)
}

/// Saturday on or after `date`
pub fn week_end(date: NaiveDate) -> NaiveDate {
    let remaining = DAYS_PER_WEEK - 1 - DayIndex::of(date).get();
    date.checked_add_days(Days::new(u64::from(remaining)))
        .unwrap_or(date)
}

/// The seven dates of the Sunday-first week containing `date`
pub fn week_days(date: NaiveDate) -> Vec<NaiveDate> {
    week_start(date)
        .iter_days()
        .take(usize::from(DAYS_PER_WEEK))
        .collect()
}

/// First and last day of the month containing `date`
pub fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = date.with_day(1).unwrap_or(date);
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date);
    (first, last)
}

/// One date cell of the month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthCell {
    pub date: NaiveDate,
    pub in_current_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
}

/// Whole weeks covering the month of `anchor`, Sunday first
pub fn month_grid(
    anchor: NaiveDate,
    today: NaiveDate,
    selected: Option<NaiveDate>,
) -> Vec<MonthCell> {
    let (first, last) = month_bounds(anchor);
    let grid_end = week_end(last);

    week_start(first)
        .iter_days()
        .take_while(|date| *date <= grid_end)
        .map(|date| MonthCell {
            date,
            in_current_month: date.month() == anchor.month() && date.year() == anchor.year(),
            is_today: date == today,
            is_selected: selected == Some(date),
        })
        .collect()
}

/// Month calendar state: anchor month plus an optional selected date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthViewState {
    anchor: NaiveDate,
    selected: Option<NaiveDate>,
    style: LabelStyle,
}

impl MonthViewState {
    pub fn new(anchor: NaiveDate, style: LabelStyle) -> Self {
        Self {
            anchor,
            selected: None,
            style,
        }
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    pub fn style(&self) -> LabelStyle {
        self.style
    }

    pub fn cells(&self, today: NaiveDate) -> Vec<MonthCell> {
        month_grid(self.anchor, today, self.selected)
    }

    /// Selects `date`, or clears the selection if it was already selected
    pub fn with_date_clicked(mut self, date: NaiveDate) -> Self {
        self.selected = if self.selected == Some(date) {
            None
        } else {
            Some(date)
        };
        debug!(selected = ?self.selected, "Month date clicked");
        self
    }

    /// Restores a selection carried over from an earlier month view
    pub fn with_selected(mut self, selected: Option<NaiveDate>) -> Self {
        self.selected = selected;
        self
    }

    /// Moves the anchor by a month; the selected date is kept
    ///
    /// Day-of-month is clamped to the target month, so January 31st steps
    /// to the last day of February.
    pub fn with_date_advanced(mut self, navigation: Navigation) -> Self {
        let month = Months::new(1);
        let next = match navigation {
            Navigation::Previous => self.anchor.checked_sub_months(month),
            Navigation::Next => self.anchor.checked_add_months(month),
            Navigation::Today(today) => Some(today),
        };

        match next {
            Some(anchor) => self.anchor = anchor,
            None => warn!(anchor = %self.anchor, "Anchor month out of range, keeping current"),
        }
        debug!(anchor = %self.anchor, "Moved month anchor");
        self
    }
}

/// Identifies a calendar view without its state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    Month,
    Week,
    Day,
}

impl FromStr for ViewKind {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "month" => Ok(ViewKind::Month),
            "week" => Ok(ViewKind::Week),
            "day" => Ok(ViewKind::Day),
            other => Err(GridError::Validation(format!(
                "Unknown view '{other}', expected month, week or day"
            ))),
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ViewKind::Month => "month",
            ViewKind::Week => "week",
            ViewKind::Day => "day",
        };
        f.write_str(name)
    }
}

/// The active calendar view and the state it owns
#[derive(Debug, Clone, PartialEq)]
pub enum CalendarView {
    Month(MonthViewState),
    Week(GridViewState),
    Day(GridViewState),
}

impl CalendarView {
    pub fn new(kind: ViewKind, anchor: NaiveDate, style: LabelStyle) -> Self {
        match kind {
            ViewKind::Month => CalendarView::Month(MonthViewState::new(anchor, style)),
            ViewKind::Week => CalendarView::Week(GridViewState::new(GridKind::Week, anchor, style)),
            ViewKind::Day => CalendarView::Day(GridViewState::new(GridKind::Day, anchor, style)),
        }
    }

    pub fn kind(&self) -> ViewKind {
        match self {
            CalendarView::Month(_) => ViewKind::Month,
            CalendarView::Week(_) => ViewKind::Week,
            CalendarView::Day(_) => ViewKind::Day,
        }
    }

    pub fn anchor(&self) -> NaiveDate {
        match self {
            CalendarView::Month(state) => state.anchor(),
            CalendarView::Week(state) | CalendarView::Day(state) => state.anchor(),
        }
    }

    pub fn style(&self) -> LabelStyle {
        match self {
            CalendarView::Month(state) => state.style(),
            CalendarView::Week(state) | CalendarView::Day(state) => state.style(),
        }
    }

    /// Replaces the view with a fresh one of `kind` anchored on `today`
    ///
    /// Use [`Calendar::switch_to`] to keep the month selection.
    pub fn switch_to(self, kind: ViewKind, today: NaiveDate) -> Self {
        debug!(from = %self.kind(), to = %kind, "Switching calendar view");
        Self::new(kind, today, self.style())
    }

    pub fn navigate(self, navigation: Navigation) -> Self {
        match self {
            CalendarView::Month(state) => CalendarView::Month(state.with_date_advanced(navigation)),
            CalendarView::Week(state) => CalendarView::Week(state.with_date_advanced(navigation)),
            CalendarView::Day(state) => CalendarView::Day(state.with_date_advanced(navigation)),
        }
    }

    /// Forwards a grid row click; ignored by the month view
    pub fn click_row(self, day_index: Option<DayIndex>, row: SlotRow) -> Self {
        match self {
            CalendarView::Week(state) => CalendarView::Week(state.with_row_clicked(day_index, row)),
            CalendarView::Day(state) => CalendarView::Day(state.with_row_clicked(day_index, row)),
            CalendarView::Month(state) => {
                warn!(row = row.index(), "Ignoring slot click in month view");
                CalendarView::Month(state)
            }
        }
    }

    /// Forwards a month cell click; ignored by the time-grid views
    pub fn click_date(self, date: NaiveDate) -> Self {
        match self {
            CalendarView::Month(state) => CalendarView::Month(state.with_date_clicked(date)),
            other => {
                warn!(%date, view = %other.kind(), "Ignoring date click outside month view");
                other
            }
        }
    }

    /// Toolbar heading for the current anchor
    pub fn title(&self) -> String {
        let style = self.style();
        match self {
            CalendarView::Month(state) => month_title(state.anchor(), style),
            CalendarView::Week(state) => week_title(state.anchor(), style),
            CalendarView::Day(state) => date_title(state.anchor(), style),
        }
    }

    /// Secondary heading; only the day view has one (the weekday name)
    pub fn subtitle(&self) -> Option<String> {
        match self {
            CalendarView::Day(state) => Some(weekday_long(state.anchor().weekday(), state.style())),
            CalendarView::Month(_) | CalendarView::Week(_) => None,
        }
    }
}

/// A calendar page: the active view plus the month selection, which
/// outlives switches to the week and day views
#[derive(Debug, Clone, PartialEq)]
pub struct Calendar {
    view: CalendarView,
    selected_date: Option<NaiveDate>,
}

impl Calendar {
    pub fn new(kind: ViewKind, anchor: NaiveDate, style: LabelStyle) -> Self {
        Self {
            view: CalendarView::new(kind, anchor, style),
            selected_date: None,
        }
    }

    pub fn view(&self) -> &CalendarView {
        &self.view
    }

    pub fn into_view(self) -> CalendarView {
        self.view
    }

    pub fn kind(&self) -> ViewKind {
        self.view.kind()
    }

    pub fn anchor(&self) -> NaiveDate {
        self.view.anchor()
    }

    /// Month selection, whichever view is active
    pub fn selected_date(&self) -> Option<NaiveDate> {
        match &self.view {
            CalendarView::Month(state) => state.selected(),
            CalendarView::Week(_) | CalendarView::Day(_) => self.selected_date,
        }
    }

    /// Re-anchors on `today` in a view of `kind`
    ///
    /// Grid selections are dropped; the month selection is restored when
    /// the month view comes back.
    pub fn switch_to(self, kind: ViewKind, today: NaiveDate) -> Self {
        let selected_date = self.selected_date();
        let view = match self.view.switch_to(kind, today) {
            CalendarView::Month(state) => CalendarView::Month(state.with_selected(selected_date)),
            other => other,
        };
        Self {
            view,
            selected_date,
        }
    }

    pub fn navigate(self, navigation: Navigation) -> Self {
        Self {
            view: self.view.navigate(navigation),
            selected_date: self.selected_date,
        }
    }

    pub fn click_row(self, day_index: Option<DayIndex>, row: SlotRow) -> Self {
        Self {
            view: self.view.click_row(day_index, row),
            selected_date: self.selected_date,
        }
    }

    pub fn click_date(self, date: NaiveDate) -> Self {
        Self {
            view: self.view.click_date(date),
            selected_date: self.selected_date,
        }
    }
}

pub fn month_title(date: NaiveDate, style: LabelStyle) -> String {
    match style {
        LabelStyle::English => date.format("%B %Y").to_string(),
        LabelStyle::Korean => format!("{}년 {}월", date.year(), date.month()),
    }
}

pub fn date_title(date: NaiveDate, style: LabelStyle) -> String {
    match style {
        LabelStyle::English => date.format("%B %-d, %Y").to_string(),
        LabelStyle::Korean => format!("{}년 {}월 {}일", date.year(), date.month(), date.day()),
    }
}

/// Week heading: full start date, then only the day number of the end
pub fn week_title(date: NaiveDate, style: LabelStyle) -> String {
    let start = week_start(date);
    let end = week_end(date);
    match style {
        LabelStyle::English => format!("{} - {}", date_title(start, style), end.day()),
        LabelStyle::Korean => format!("{} - {}일", date_title(start, style), end.day()),
    }
}

/// Week column heading: the date and its short weekday name
pub fn column_label(date: NaiveDate, style: LabelStyle) -> (String, String) {
    let weekday = weekday_short(date.weekday(), style);
    match style {
        LabelStyle::English => (format!("{}/{}", date.month(), date.day()), weekday.to_string()),
        LabelStyle::Korean => (
            format!("{}. {}.", date.month(), date.day()),
            format!("({weekday})"),
        ),
    }
}
