//! General test utilities for TUI tests.
//!
//! For widget-specific rendering helpers, see `crate::tui::widgets::testing`.

use ratatui::buffer::Buffer;

use crate::types::DateValue;
use chrono::NaiveDate;

/// Constant for general rendering width
pub const RENDER_WIDTH: u16 = 80;

/// Fixed reference time used across TUI tests: Wednesday 2024-03-13 15:30
pub fn test_now() -> DateValue {
    NaiveDate::from_ymd_opt(2024, 3, 13)
        .and_then(|date| date.and_hms_opt(15, 30, 0))
        .expect("valid test date")
}

/// Helper to extract lines from buffer
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area();
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// Helper for buffer assertions
pub fn assert_buffer(buf: &Buffer, expected: &[&str]) {
    let actual = buffer_lines(buf);

    assert_eq!(
        actual.len(),
        expected.len(),
        "Buffer height mismatch: expected {} lines, got {}",
        expected.len(),
        actual.len()
    );
    for (i, expected_line) in expected.iter().enumerate() {
        assert_eq!(
            actual[i].trim_end(),
            expected_line.trim_end(),
            "Line {} mismatch:\nExpected: '{}'\nActual:   '{}'",
            i,
            expected_line,
            actual[i]
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::tui::state::AppState;
    use crate::tui::view;
    use crate::types::Range;
    use ratatui::layout::Rect;

    #[test]
    fn test_full_screen_snapshot() {
        let mut state = AppState::new(vec![Range::empty()], test_now(), Config::default());
        state.system.set_status_message("ready".to_string());
        let area = Rect::new(0, 0, RENDER_WIDTH, 19);
        let mut buf = Buffer::empty(area);

        view::render(&state, None, area, &mut buf);

        assert_buffer(
            &buf,
            &[
                "       March 2024         Ranges",
                "  Su Mo Tu We Th Fr Sa    ► ■ range1     — .. —  [start]",
                "                  1  2",
                "   3  4  5  6  7  8  9    Shortcuts",
                "  10 11 12 13 14 15 16    1 Last Hour",
                "  17 18 19 20 21 22 23    2 Last 4 Hours",
                "  24 25 26 27 28 29 30    3 Last 8 Hours",
                "  31                      4 Last 24 Hours",
                "                          5 Today",
                "                          6 Yesterday",
                "                          7 This Week",
                "                          8 Last Week",
                "                          9 This Month",
                "",
                "                          Days",
                "                             - days up to today",
                "",
                &"─".repeat(RENDER_WIDTH as usize),
                " ready",
            ],
        );
    }
}
