/// Testing utilities for widget rendering
///
/// This module provides helper functions for testing widgets in isolation.

use ratatui::{buffer::Buffer, layout::Rect, style::Color};
use crate::config::ThemeConfig;
use super::RenderableWidget;

/// Theme with a fixed selection color so style assertions are stable
pub fn test_theme() -> ThemeConfig {
    ThemeConfig {
        selection_fg: Color::Rgb(255, 200, 0), // Gold
        unfocused_selection_fg: None,
    }
}

/// Render a widget to a buffer and return it for testing
pub fn render_widget(widget: &impl RenderableWidget, width: u16, height: u16) -> Buffer {
    let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
    let theme = test_theme();
    widget.render(buf.area, &mut buf, &theme);
    buf
}

/// Get the text content of a specific line in the buffer
pub fn buffer_line(buf: &Buffer, line: u16) -> String {
    let area = buf.area();
    (0..area.width)
        .map(|x| buf[(x, line)].symbol())
        .collect()
}

/// Get a single cell from the buffer
pub fn get_cell(buf: &Buffer, x: u16, y: u16) -> &ratatui::buffer::Cell {
    &buf[(x, y)]
}

/// Assert that a buffer line matches the expected string, ignoring trailing spaces
pub fn assert_buffer_line(buf: &Buffer, line: u16, expected: &str) {
    let actual = buffer_line(buf, line);
    assert_eq!(
        actual.trim_end(),
        expected.trim_end(),
        "\nLine {} mismatch:\nExpected: '{}'\nActual:   '{}'",
        line,
        expected,
        actual
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Style;

    struct TestWidget {
        text: String,
    }

    impl RenderableWidget for TestWidget {
        fn render(&self, area: Rect, buf: &mut Buffer, _theme: &ThemeConfig) {
            buf.set_string(area.x, area.y, &self.text, Style::default());
        }
    }

    #[test]
    fn test_render_widget() {
        let widget = TestWidget {
            text: "Hello".to_string(),
        };

        let buf = render_widget(&widget, 10, 2);

        assert_eq!(get_cell(&buf, 0, 0).symbol(), "H");
        assert_eq!(buffer_line(&buf, 0), "Hello     ");
        assert_buffer_line(&buf, 1, "");
    }
}
