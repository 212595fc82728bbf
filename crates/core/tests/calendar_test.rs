use chrono::{Datelike, NaiveDate, Weekday};
use pretty_assertions::assert_eq;
use rstest::rstest;
use timegrid_core::{
    calendar::{
        Calendar, CalendarView, MonthViewState, ViewKind, column_label, month_bounds, month_grid,
        week_days, week_end, week_start, week_title,
    },
    grid::Navigation,
    labels::LabelStyle,
    models::{
        day::DayIndex,
        time_slot::{SlotIndex, SlotRow},
    },
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn slot_row(index: u8) -> SlotRow {
    SlotRow::Slot(SlotIndex::new(index).expect("slot index in range"))
}

#[rstest]
#[case(date(2026, 10, 18), date(2026, 10, 18))]
#[case(date(2026, 10, 19), date(2026, 10, 18))]
#[case(date(2026, 10, 24), date(2026, 10, 18))]
#[case(date(2026, 11, 1), date(2026, 11, 1))]
#[case(date(2027, 1, 2), date(2026, 12, 27))]
fn test_week_start_is_sunday(#[case] input: NaiveDate, #[case] expected: NaiveDate) {
    assert_eq!(week_start(input), expected);
    assert_eq!(week_start(input).weekday(), Weekday::Sun);
    assert_eq!(week_end(input).weekday(), Weekday::Sat);
}

#[test]
fn test_week_days_are_consecutive() {
    let days = week_days(date(2026, 12, 30));

    assert_eq!(
        days,
        vec![
            date(2026, 12, 27),
            date(2026, 12, 28),
            date(2026, 12, 29),
            date(2026, 12, 30),
            date(2026, 12, 31),
            date(2027, 1, 1),
            date(2027, 1, 2),
        ]
    );
}

#[test]
fn test_month_bounds() {
    assert_eq!(month_bounds(date(2024, 2, 14)), (date(2024, 2, 1), date(2024, 2, 29)));
    assert_eq!(month_bounds(date(2026, 12, 31)), (date(2026, 12, 1), date(2026, 12, 31)));
}

#[test]
fn test_month_grid_covers_whole_weeks() {
    let today = date(2026, 10, 19);
    let cells = month_grid(date(2026, 10, 5), today, Some(date(2026, 10, 2)));

    assert_eq!(cells.len(), 35);
    assert_eq!(cells[0].date, date(2026, 9, 27));
    assert!(!cells[0].in_current_month);
    assert_eq!(cells[34].date, date(2026, 10, 31));
    assert!(cells[34].in_current_month);

    let today_cells: Vec<_> = cells.iter().filter(|c| c.is_today).collect();
    assert_eq!(today_cells.len(), 1);
    assert_eq!(today_cells[0].date, today);

    let selected: Vec<_> = cells.iter().filter(|c| c.is_selected).map(|c| c.date).collect();
    assert_eq!(selected, vec![date(2026, 10, 2)]);
}

#[rstest]
#[case(date(2026, 2, 10), 28)]
#[case(date(2026, 10, 1), 35)]
#[case(date(2026, 8, 1), 42)]
fn test_month_grid_lengths(#[case] anchor: NaiveDate, #[case] expected: usize) {
    let cells = month_grid(anchor, anchor, None);

    assert_eq!(cells.len(), expected);
    assert_eq!(cells.len() % 7, 0);
    assert_eq!(cells.iter().filter(|c| c.in_current_month).count(), {
        let (first, last) = month_bounds(anchor);
        (last - first).num_days() as usize + 1
    });
}

#[test]
fn test_month_date_click_toggles() {
    let state = MonthViewState::new(date(2026, 10, 19), LabelStyle::English)
        .with_date_clicked(date(2026, 10, 3));
    assert_eq!(state.selected(), Some(date(2026, 10, 3)));

    let state = state.with_date_clicked(date(2026, 10, 4));
    assert_eq!(state.selected(), Some(date(2026, 10, 4)));

    let state = state.with_date_clicked(date(2026, 10, 4));
    assert_eq!(state.selected(), None);
}

#[rstest]
#[case(date(2026, 1, 31), Navigation::Next, date(2026, 2, 28))]
#[case(date(2024, 1, 31), Navigation::Next, date(2024, 2, 29))]
#[case(date(2026, 3, 31), Navigation::Previous, date(2026, 2, 28))]
#[case(date(2026, 12, 15), Navigation::Next, date(2027, 1, 15))]
fn test_month_navigation_clamps_day(
    #[case] anchor: NaiveDate,
    #[case] navigation: Navigation,
    #[case] expected: NaiveDate,
) {
    let state = MonthViewState::new(anchor, LabelStyle::English).with_date_advanced(navigation);
    assert_eq!(state.anchor(), expected);
}

#[test]
fn test_month_navigation_keeps_selected_date() {
    let state = MonthViewState::new(date(2026, 10, 19), LabelStyle::English)
        .with_date_clicked(date(2026, 10, 3))
        .with_date_advanced(Navigation::Next);

    assert_eq!(state.selected(), Some(date(2026, 10, 3)));
}

#[test]
fn test_view_kind_parsing() {
    assert_eq!("Week".parse::<ViewKind>().unwrap(), ViewKind::Week);
    assert_eq!(ViewKind::Day.to_string(), "day");
    assert!("year".parse::<ViewKind>().is_err());
}

#[test]
fn test_switch_view_resets_to_today() {
    let today = date(2026, 10, 19);
    let view = CalendarView::new(ViewKind::Week, date(2026, 3, 1), LabelStyle::Korean)
        .click_row(DayIndex::new(3), slot_row(8))
        .switch_to(ViewKind::Day, today);

    assert_eq!(view.kind(), ViewKind::Day);
    assert_eq!(view.anchor(), today);
    assert_eq!(view.style(), LabelStyle::Korean);
    match view {
        CalendarView::Day(state) => assert!(state.selection().is_none()),
        other => panic!("expected day view, got {other:?}"),
    }
}

#[test]
fn test_month_selection_survives_view_round_trip() {
    let today = date(2026, 10, 19);
    let calendar = Calendar::new(ViewKind::Month, date(2026, 9, 1), LabelStyle::English)
        .click_date(date(2026, 9, 14))
        .switch_to(ViewKind::Week, today);

    assert_eq!(calendar.kind(), ViewKind::Week);
    assert_eq!(calendar.selected_date(), Some(date(2026, 9, 14)));

    let calendar = calendar
        .click_row(DayIndex::new(2), slot_row(6))
        .navigate(Navigation::Next)
        .switch_to(ViewKind::Month, today);

    assert_eq!(calendar.anchor(), today);
    match calendar.into_view() {
        CalendarView::Month(state) => assert_eq!(state.selected(), Some(date(2026, 9, 14))),
        other => panic!("expected month view, got {other:?}"),
    }
}

#[test]
fn test_grid_selection_dropped_on_view_switch() {
    let today = date(2026, 10, 19);
    let calendar = Calendar::new(ViewKind::Day, today, LabelStyle::English)
        .click_row(None, slot_row(20))
        .switch_to(ViewKind::Week, today)
        .switch_to(ViewKind::Day, today);

    assert_eq!(calendar.selected_date(), None);
    match calendar.view() {
        CalendarView::Day(state) => assert!(state.selection().is_none()),
        other => panic!("expected day view, got {other:?}"),
    }
}

#[test]
fn test_navigate_today_clears_week_selection() {
    let today = date(2026, 10, 19);
    let view = CalendarView::new(ViewKind::Week, date(2026, 10, 5), LabelStyle::English)
        .click_row(DayIndex::new(1), slot_row(12))
        .navigate(Navigation::Today(today));

    match view {
        CalendarView::Week(state) => {
            assert_eq!(state.anchor(), today);
            assert!(state.selection().is_none());
        }
        other => panic!("expected week view, got {other:?}"),
    }
}

#[test]
fn test_clicks_for_other_views_are_ignored() {
    let month = CalendarView::new(ViewKind::Month, date(2026, 10, 19), LabelStyle::English);
    assert_eq!(month.clone().click_row(None, slot_row(4)), month);

    let day = CalendarView::new(ViewKind::Day, date(2026, 10, 19), LabelStyle::English);
    assert_eq!(day.clone().click_date(date(2026, 10, 20)), day);
}

#[rstest]
#[case(ViewKind::Month, LabelStyle::English, "October 2026", None)]
#[case(ViewKind::Month, LabelStyle::Korean, "2026년 10월", None)]
#[case(ViewKind::Week, LabelStyle::English, "October 18, 2026 - 24", None)]
#[case(ViewKind::Week, LabelStyle::Korean, "2026년 10월 18일 - 24일", None)]
#[case(ViewKind::Day, LabelStyle::English, "October 19, 2026", Some("Monday"))]
#[case(ViewKind::Day, LabelStyle::Korean, "2026년 10월 19일", Some("월요일"))]
fn test_view_titles(
    #[case] kind: ViewKind,
    #[case] style: LabelStyle,
    #[case] title: &str,
    #[case] subtitle: Option<&str>,
) {
    let view = CalendarView::new(kind, date(2026, 10, 19), style);

    assert_eq!(view.title(), title);
    assert_eq!(view.subtitle().as_deref(), subtitle);
}

#[test]
fn test_week_title_across_month_end() {
    assert_eq!(
        week_title(date(2026, 12, 30), LabelStyle::Korean),
        "2026년 12월 27일 - 2일"
    );
}

#[test]
fn test_column_labels() {
    assert_eq!(
        column_label(date(2026, 10, 18), LabelStyle::Korean),
        ("10. 18.".to_string(), "(일)".to_string())
    );
    assert_eq!(
        column_label(date(2026, 10, 19), LabelStyle::English),
        ("10/19".to_string(), "Mon".to_string())
    );
}
