/// ShortcutList widget - numbered static ranges
///
/// The number is the key that applies the shortcut. Shortcuts whose days
/// match the focused range are highlighted.
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use super::RenderableWidget;
use crate::config::ThemeConfig;
use crate::shortcuts::StaticRange;
use crate::types::{DateValue, Range};

#[derive(Debug)]
pub struct ShortcutList<'a> {
    pub shortcuts: &'a [StaticRange],
    /// Range compared against every shortcut
    pub candidate: Option<&'a Range>,
    pub now: DateValue,
}

impl<'a> RenderableWidget for ShortcutList<'a> {
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &ThemeConfig) {
        // Only 1-9 have a key
        for (index, shortcut) in self.shortcuts.iter().take(9).enumerate() {
            let y = area.y + index as u16;
            if y >= area.bottom() {
                break;
            }
            let selected = self
                .candidate
                .is_some_and(|candidate| shortcut.is_selected(candidate, self.now));
            let style = if selected {
                Style::default()
                    .fg(theme.selection_fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let line = format!("{} {}", index + 1, shortcut.label);
            buf.set_stringn(area.x, y, &line, area.width as usize, style);
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(self.shortcuts.len().min(9) as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shortcuts::{default_static_ranges, start_of_day};
    use crate::tui::widgets::testing::*;
    use chrono::NaiveDate;

    fn now() -> DateValue {
        NaiveDate::from_ymd_opt(2024, 3, 13).unwrap().and_hms_opt(15, 30, 0).unwrap()
    }

    #[test]
    fn test_lists_numbered_labels() {
        let shortcuts = default_static_ranges();
        let widget = ShortcutList {
            shortcuts: &shortcuts,
            candidate: None,
            now: now(),
        };

        let buf = render_widget(&widget, 20, 9);

        assert_buffer_line(&buf, 0, &format!("1 {}", shortcuts[0].label));
        assert_buffer_line(&buf, 8, &format!("9 {}", shortcuts[8].label));
    }

    #[test]
    fn test_highlights_matching_shortcut() {
        let shortcuts = default_static_ranges();
        let today = NaiveDate::from_ymd_opt(2024, 3, 13).unwrap();
        let candidate = Range::new(start_of_day(today), start_of_day(today));
        let selected_index = shortcuts
            .iter()
            .position(|shortcut| shortcut.is_selected(&candidate, now()))
            .unwrap();
        let widget = ShortcutList {
            shortcuts: &shortcuts,
            candidate: Some(&candidate),
            now: now(),
        };

        let buf = render_widget(&widget, 20, 9);

        let cell = get_cell(&buf, 0, selected_index as u16);
        assert!(cell.modifier.contains(Modifier::BOLD));
        assert_eq!(cell.fg, test_theme().selection_fg);
    }
}
