/// StatusBar widget - separator line above a single status message
///
/// Error messages are prefixed and drawn in red.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
};
use unicode_width::UnicodeWidthStr;

use super::RenderableWidget;
use crate::config::ThemeConfig;

#[derive(Debug)]
pub struct StatusBar<'a> {
    pub message: &'a str,
    pub is_error: bool,
}

impl<'a> StatusBar<'a> {
    fn text(&self) -> String {
        if self.is_error {
            format!("ERROR: {}", self.message)
        } else {
            self.message.to_string()
        }
    }
}

impl<'a> RenderableWidget for StatusBar<'a> {
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &ThemeConfig) {
        if area.height < 2 {
            return;
        }
        let separator = "─".repeat(area.width as usize);
        buf.set_string(area.x, area.y, &separator, Style::default().fg(theme.unfocused_selection_fg()));

        let text = self.text();
        let style = if self.is_error {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
        };
        let width = (area.width as usize).saturating_sub(1);
        if text.width() > width {
            tracing::trace!("STATUS: Truncating {} wide message to {}", text.width(), width);
        }
        buf.set_stringn(area.x + 1, area.y + 1, &text, width, style);
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::testing::*;

    #[test]
    fn test_status_message() {
        let widget = StatusBar {
            message: "range1: 2024-03-04 .. —",
            is_error: false,
        };

        let buf = render_widget(&widget, 30, 2);

        assert_buffer_line(&buf, 0, &"─".repeat(30));
        assert_buffer_line(&buf, 1, " range1: 2024-03-04 .. —");
    }

    #[test]
    fn test_error_message_is_red() {
        let widget = StatusBar {
            message: "oops",
            is_error: true,
        };

        let buf = render_widget(&widget, 30, 2);

        assert_buffer_line(&buf, 1, " ERROR: oops");
        assert_eq!(get_cell(&buf, 1, 1).fg, Color::Red);
    }

    #[test]
    fn test_long_message_is_truncated() {
        let widget = StatusBar {
            message: "abcdefghijklmnop",
            is_error: false,
        };

        let buf = render_widget(&widget, 8, 2);

        assert_buffer_line(&buf, 1, " abcdefg");
    }
}
