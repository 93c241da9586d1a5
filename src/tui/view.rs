/// Screen composition
///
/// ```text
///   calendar              Ranges
///                         ► range1 ...
///
///                         Shortcuts
///                         1 Last Hour
///
///                         Days
///                            - days up to today
/// ─────────────────────────────────────
///  status
/// ```
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
};

use super::state::AppState;
use super::widgets::calendar::{CALENDAR_HEIGHT, CALENDAR_WIDTH};
use super::widgets::{CalendarGrid, InputList, RangeList, RenderableWidget, ShortcutList, StatusBar};
use crate::types::Preview;

const SIDE_MARGIN: u16 = 2;
const SECTION_GAP: u16 = 1;

/// Render the whole picker screen for `state`
pub fn render(state: &AppState, preview: Option<&Preview>, area: Rect, buf: &mut Buffer) {
    let theme = &state.system.config.theme;
    let range_colors = &state.system.config.picker.range_colors;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(CALENDAR_HEIGHT), Constraint::Length(2)])
        .split(area);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SIDE_MARGIN),
            Constraint::Length(CALENDAR_WIDTH),
            Constraint::Length(SIDE_MARGIN * 2),
            Constraint::Min(0),
        ])
        .split(rows[0]);

    let calendar = CalendarGrid {
        month: state.calendar.visible_month,
        cursor: state.calendar.cursor,
        today: state.calendar.today,
        ranges: &state.ranges,
        range_colors,
        preview,
    };
    calendar.render(columns[1], buf, theme);

    let range_list = RangeList {
        ranges: &state.ranges,
        focus: state.focus,
        range_colors,
    };
    let candidate = state.ranges.get(state.focus.range_index);
    let shortcut_list = ShortcutList {
        shortcuts: &state.shortcuts,
        candidate,
        now: state.system.now,
    };
    let input_list = InputList {
        inputs: &state.input_ranges,
        candidate,
        now: state.system.now,
    };
    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(range_list.preferred_height().unwrap_or(0)),
            Constraint::Length(SECTION_GAP),
            Constraint::Length(1),
            Constraint::Length(shortcut_list.preferred_height().unwrap_or(0)),
            Constraint::Length(SECTION_GAP),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(columns[3]);

    render_heading("Ranges", side[0], buf);
    range_list.render(side[1], buf, theme);
    render_heading("Shortcuts", side[3], buf);
    shortcut_list.render(side[4], buf, theme);
    if !state.input_ranges.is_empty() {
        render_heading("Days", side[6], buf);
        input_list.render(side[7], buf, theme);
    }

    let status = StatusBar {
        message: state.system.status_message(),
        is_error: state.system.status_is_error,
    };
    status.render(rows[1], buf, theme);
}

fn render_heading(text: &str, area: Rect, buf: &mut Buffer) {
    if area.height == 0 {
        return;
    }
    let style = Style::default().add_modifier(Modifier::BOLD);
    buf.set_stringn(area.x, area.y, text, area.width as usize, style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::tui::testing::buffer_lines;
    use crate::types::Range;
    use chrono::NaiveDate;

    fn state() -> AppState {
        let now = NaiveDate::from_ymd_opt(2024, 3, 13).unwrap().and_hms_opt(15, 30, 0).unwrap();
        let mut state = AppState::new(vec![Range::empty().with_key("trip")], now, Config::default());
        state.system.set_status_message("ready".to_string());
        state
    }

    #[test]
    fn test_render_places_every_section() {
        let area = Rect::new(0, 0, 70, 19);
        let mut buf = Buffer::empty(area);

        render(&state(), None, area, &mut buf);
        let lines = buffer_lines(&buf);

        assert!(lines[0].starts_with("       March 2024"));
        assert!(lines[0].contains("Ranges"));
        assert!(lines[1].contains("► ■ trip"));
        assert!(lines[3].contains("Shortcuts"));
        assert!(lines[4].contains("1 Last Hour"));
        assert!(lines[8].contains("5 Today"));
        assert!(lines[14].contains("Days"));
        assert!(lines[15].contains("   - days up to today"));
        assert_eq!(lines[18].trim_end(), " ready");
    }

    #[test]
    fn test_render_survives_tiny_area() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);

        render(&state(), None, area, &mut buf);
    }
}
