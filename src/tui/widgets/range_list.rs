/// RangeList widget - one line per range, marking the focused boundary
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
};

use super::RenderableWidget;
use crate::config::ThemeConfig;
use crate::formatting::format_range;
use crate::selection::range_color;
use crate::types::{FocusPointer, Range};

/// Marker drawn before the focused range
pub const FOCUS_MARKER: &str = "►";
const SWATCH: &str = "■";

#[derive(Debug)]
pub struct RangeList<'a> {
    pub ranges: &'a [Range],
    pub focus: FocusPointer,
    pub range_colors: &'a [Color],
}

impl<'a> RenderableWidget for RangeList<'a> {
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &ThemeConfig) {
        for (index, range) in self.ranges.iter().enumerate() {
            let y = area.y + index as u16;
            if y >= area.bottom() {
                break;
            }
            let focused = index == self.focus.range_index;

            let marker = if focused { FOCUS_MARKER } else { " " };
            buf.set_string(area.x, y, marker, Style::default().fg(theme.selection_fg));

            let color = range_color(Some(range), index, self.range_colors);
            buf.set_string(area.x + 2, y, SWATCH, Style::default().fg(color));

            let mut line = format_range(range, index);
            if focused {
                line.push_str(&format!("  [{}]", self.focus.boundary));
            }
            let style = if focused {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let width = area.width.saturating_sub(4) as usize;
            buf.set_stringn(area.x + 4, y, &line, width, style);
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(self.ranges.len() as u16)
    }
}
