/// CalendarGrid widget - one month of days, Sunday first
///
/// Layout (20 columns wide):
/// - line 0: month title, centered
/// - line 1: weekday header
/// - lines 2..8: up to six weeks, each day right-aligned in a 2-column cell
///
/// Days inside a committed range take that range's color. Days covered by
/// the hover preview are underlined in the preview color. The cursor day is
/// reversed in the theme's selection color and today is bold.

use chrono::{Datelike, NaiveDate};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
};
use unicode_width::UnicodeWidthStr;

use super::RenderableWidget;
use crate::config::ThemeConfig;
use crate::selection::range_color;
use crate::shortcuts::{end_of_month, start_of_month};
use crate::types::{Preview, Range};

pub const CALENDAR_WIDTH: u16 = 20;
pub const CALENDAR_HEIGHT: u16 = 8;

const WEEKDAY_HEADER: &str = "Su Mo Tu We Th Fr Sa";
const CELL_WIDTH: u16 = 3;
const HEADER_LINES: u16 = 2;

#[derive(Debug)]
pub struct CalendarGrid<'a> {
    /// Any day of the month to show
    pub month: NaiveDate,
    pub cursor: NaiveDate,
    pub today: NaiveDate,
    pub ranges: &'a [Range],
    pub range_colors: &'a [Color],
    pub preview: Option<&'a Preview>,
}

impl<'a> CalendarGrid<'a> {
    /// Grid position (week row, weekday column) of a day of the shown month
    fn cell_position(&self, day: NaiveDate) -> (u16, u16) {
        let offset = start_of_month(self.month).weekday().num_days_from_sunday();
        let slot = offset + day.day0();
        ((slot / 7) as u16, (slot % 7) as u16)
    }

    fn day_style(&self, day: NaiveDate, theme: &ThemeConfig) -> Style {
        let mut style = Style::default();

        let covering = self
            .ranges
            .iter()
            .enumerate()
            .find(|(_, range)| range.contains_day(day));
        if let Some((index, range)) = covering {
            style = style.fg(range_color(Some(range), index, self.range_colors));
        }

        if let Some(preview) = self.preview.filter(|preview| preview.contains_day(day)) {
            style = style.add_modifier(Modifier::UNDERLINED);
            if covering.is_none() {
                style = style.fg(preview.color);
            }
        }

        if day == self.today {
            style = style.add_modifier(Modifier::BOLD);
        }
        if day == self.cursor {
            style = style.fg(theme.selection_fg).add_modifier(Modifier::REVERSED);
        }
        style
    }
}

impl<'a> RenderableWidget for CalendarGrid<'a> {
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &ThemeConfig) {
        if area.height == 0 || area.width < CALENDAR_WIDTH {
            return;
        }

        let title = self.month.format("%B %Y").to_string();
        let padding = (CALENDAR_WIDTH as usize).saturating_sub(title.width()) / 2;
        buf.set_string(
            area.x + padding as u16,
            area.y,
            &title,
            Style::default().add_modifier(Modifier::BOLD),
        );
        if area.height > 1 {
            buf.set_string(area.x, area.y + 1, WEEKDAY_HEADER, Style::default().fg(Color::DarkGray));
        }

        let first = start_of_month(self.month);
        let last = end_of_month(self.month);
        for day in first.iter_days().take_while(|day| *day <= last) {
            let (row, col) = self.cell_position(day);
            let y = area.y + HEADER_LINES + row;
            if y >= area.bottom() {
                break;
            }
            let x = area.x + col * CELL_WIDTH;
            buf.set_string(x, y, format!("{:>2}", day.day()), self.day_style(day, theme));
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(CALENDAR_HEIGHT)
    }

    fn preferred_width(&self) -> Option<u16> {
        Some(CALENDAR_WIDTH)
    }
}
