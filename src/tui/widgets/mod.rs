/// Widget-based rendering infrastructure for the picker
///
/// Widgets are small, focused components that render themselves directly
/// into a ratatui Buffer. They borrow what they show from the state and
/// never change it.

#[cfg(test)]
pub mod testing;

pub mod calendar;
pub use calendar::CalendarGrid;

pub mod input_list;
pub use input_list::InputList;

pub mod range_list;
pub use range_list::RangeList;

pub mod shortcut_list;
pub use shortcut_list::ShortcutList;

pub mod status_bar;
pub use status_bar::StatusBar;

use ratatui::{buffer::Buffer, layout::Rect};
use crate::config::ThemeConfig;

/// Core trait for renderable widgets
///
/// This trait is object-safe, so different widgets can be stored together.
pub trait RenderableWidget {
    /// Render this widget into the provided buffer
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &ThemeConfig);

    /// Get the preferred height of this widget
    ///
    /// Returns None if the widget can adapt to any height.
    fn preferred_height(&self) -> Option<u16> {
        None
    }

    /// Get the preferred width of this widget
    ///
    /// Returns None if the widget can adapt to any width.
    fn preferred_width(&self) -> Option<u16> {
        None
    }
}
