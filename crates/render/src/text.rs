//! Fixed-width text rendering of a [`Layout`].
//!
//! Cells are padded by terminal display width, so double-width Hangul
//! labels line up with ASCII ones.

use std::fmt;

use unicode_width::UnicodeWidthStr;

use crate::layout::{GridLayout, Layout, MonthCellLayout, MonthLayout, OverlayLayout, RowLayout};

const LABEL_WIDTH: usize = 10;
const CELL_WIDTH: usize = 14;
const WEEKDAY_WIDTH: usize = 4;

pub fn render_text(layout: &Layout) -> String {
    match layout {
        Layout::Month(month) => month.to_string(),
        Layout::Week(grid) | Layout::Day(grid) => grid.to_string(),
    }
}

#[derive(Debug, Clone, Copy)]
enum Align {
    Left,
    Center,
    Right,
}

/// Pads `text` with spaces to `width` terminal columns
fn pad(text: &str, width: usize, align: Align) -> String {
    let fill = width.saturating_sub(text.width());
    let (before, after) = match align {
        Align::Left => (0, fill),
        Align::Center => (fill / 2, fill - fill / 2),
        Align::Right => (fill, 0),
    };
    format!("{}{text}{}", " ".repeat(before), " ".repeat(after))
}

fn covers(overlay: &OverlayLayout, column: usize, row: &RowLayout) -> bool {
    overlay.column == column && overlay.slot_index == row.slot_index
}

impl fmt::Display for GridLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        if let Some(subtitle) = &self.subtitle {
            writeln!(f, "{subtitle}")?;
        }

        f.write_str(&pad("", LABEL_WIDTH, Align::Left))?;
        for column in &self.columns {
            let marker = if column.is_today { "*" } else { "" };
            let heading = format!("{} {}{}", column.label, column.weekday, marker);
            write!(f, "|{}", pad(&heading, CELL_WIDTH, Align::Center))?;
        }
        f.write_str("|\n")?;

        for row in &self.rows {
            f.write_str(&pad(&row.label, LABEL_WIDTH, Align::Left))?;
            for column in 0..self.columns.len() {
                let selected = self
                    .overlay
                    .as_ref()
                    .is_some_and(|overlay| covers(overlay, column, row));
                let fill = if selected { "#" } else { " " };
                write!(f, "|{}", fill.repeat(CELL_WIDTH))?;
            }
            f.write_str("|\n")?;
        }

        match &self.overlay {
            Some(overlay) => writeln!(
                f,
                "Selected: {} (column {}, top {}px, height {}px)",
                overlay.label, overlay.column, overlay.top, overlay.height
            ),
            None => f.write_str("Selected: none\n"),
        }
    }
}

fn month_cell(cell: &MonthCellLayout) -> String {
    let prefix = if cell.in_current_month { ' ' } else { '~' };
    let marker = if cell.is_selected {
        '<'
    } else if cell.is_today {
        '*'
    } else {
        ' '
    };
    format!("{prefix}{:>2}{marker} ", cell.day)
}

impl fmt::Display for MonthLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        for weekday in &self.weekdays {
            write!(f, "{} ", pad(weekday, WEEKDAY_WIDTH, Align::Right))?;
        }
        f.write_str("\n")?;

        for week in &self.weeks {
            for cell in week {
                f.write_str(&month_cell(cell))?;
            }
            f.write_str("\n")?;
        }
        f.write_str("* today  < selected  ~ other month\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn cell(
        day: u32,
        in_current_month: bool,
        is_today: bool,
        is_selected: bool,
    ) -> MonthCellLayout {
        MonthCellLayout {
            day,
            date: NaiveDate::from_ymd_opt(2026, 10, day).unwrap(),
            in_current_month,
            is_today,
            is_selected,
        }
    }

    #[test]
    fn test_month_cell_markers() {
        assert_eq!(month_cell(&cell(5, true, false, false)), "  5  ");
        assert_eq!(month_cell(&cell(19, true, true, false)), " 19* ");
        assert_eq!(month_cell(&cell(19, true, true, true)), " 19< ");
        assert_eq!(month_cell(&cell(28, false, false, false)), "~28  ");
    }

    #[test]
    fn test_pad_counts_wide_characters_twice() {
        assert_eq!(pad("일", WEEKDAY_WIDTH, Align::Right), "  일");
        assert_eq!(pad("Sun", WEEKDAY_WIDTH, Align::Right), " Sun");
        assert_eq!(pad("종일", 6, Align::Left), "종일  ");
        assert_eq!(pad("(월)", 6, Align::Center), " (월) ");
        assert_eq!(pad("too wide", 3, Align::Center), "too wide");
    }
}
