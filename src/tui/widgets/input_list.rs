/// InputList widget - input ranges with the value the focused range implies
///
/// Read-only: the value column shows what the number would be for the
/// current selection, or `-` when the selection has another shape.
use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use super::RenderableWidget;
use crate::config::ThemeConfig;
use crate::shortcuts::{InputRange, InputValue};
use crate::types::{DateValue, Range};

#[derive(Debug)]
pub struct InputList<'a> {
    pub inputs: &'a [InputRange],
    pub candidate: Option<&'a Range>,
    pub now: DateValue,
}

impl<'a> RenderableWidget for InputList<'a> {
    fn render(&self, area: Rect, buf: &mut Buffer, _theme: &ThemeConfig) {
        for (index, input) in self.inputs.iter().enumerate() {
            let y = area.y + index as u16;
            if y >= area.bottom() {
                break;
            }
            let value = self
                .candidate
                .map(|candidate| input.current_value(candidate, self.now))
                .unwrap_or(InputValue::NotApplicable);
            let line = format!("{:>4} {}", value.to_string(), input.label);
            buf.set_stringn(area.x, y, &line, area.width as usize, Style::default());
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(self.inputs.len() as u16)
    }
}
