//! Range selection engine
//!
//! Decides which boundary of which range a picked day updates, keeps every
//! committed range ordered, advances focus to the next range still waiting
//! for input, and computes hover previews without committing them.
//!
//! The caller owns the range list and passes it to every operation. The
//! engine never mutates it; committed changes are reported through the
//! change handler as [`RangeChange`] records.

pub mod focus;
pub mod normalize;

use ratatui::style::Color;
use tracing::{debug, trace};

use crate::config::{PickerConfig, DEFAULT_RANGE_COLOR, DEFAULT_RANGE_COLORS};
use crate::types::{
    DateValue, FocusPointer, Preview, Range, RangeChange, RangeValue, SelectionInput,
    SelectionResult,
};

pub use focus::{find_next_range_index, FALLBACK_RANGE_INDEX};
pub use normalize::compute_selection;

/// Receives the change record for every committed selection
pub type ChangeHandler = Box<dyn FnMut(&RangeChange) + Send>;

/// Receives the new focus pointer on every focus change
pub type FocusHandler = Box<dyn FnMut(FocusPointer) + Send>;

/// Options recognized by the engine
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionOptions {
    /// When re-picking a start date, shift the end to keep the range length
    pub move_range_on_first_selection: bool,
    /// Ceiling applied to the end date computed by a start pick
    pub max_date: Option<DateValue>,
    /// Palette indexed by range position, used when a range has no color
    pub range_colors: Vec<Color>,
    /// Focus used at construction instead of the first incomplete range
    pub initial_focused_range: Option<FocusPointer>,
}

impl Default for SelectionOptions {
    fn default() -> Self {
        Self {
            move_range_on_first_selection: false,
            max_date: None,
            range_colors: DEFAULT_RANGE_COLORS.to_vec(),
            initial_focused_range: None,
        }
    }
}

impl From<&PickerConfig> for SelectionOptions {
    fn from(config: &PickerConfig) -> Self {
        Self {
            move_range_on_first_selection: config.move_range_on_first_selection,
            max_date: config.max_date.and_then(|date| date.and_hms_opt(0, 0, 0)),
            range_colors: config.range_colors.clone(),
            initial_focused_range: config.initial_focused_range,
        }
    }
}

/// Display color of the range at `index`
///
/// The range's own color wins, then the palette entry for its position,
/// then [`DEFAULT_RANGE_COLOR`].
pub fn range_color(range: Option<&Range>, index: usize, palette: &[Color]) -> Color {
    range
        .and_then(|range| range.color)
        .or_else(|| palette.get(index).copied())
        .unwrap_or(DEFAULT_RANGE_COLOR)
}

/// Who owns the focus pointer
///
/// Fixed at construction. In controlled mode the caller is the source of
/// truth and pushes updates through [`RangeSelection::set_controlled_focus`];
/// the engine still reports the focus it would move to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusMode {
    Uncontrolled,
    Controlled(FocusPointer),
}

/// The range selection engine
pub struct RangeSelection {
    options: SelectionOptions,
    focus_mode: FocusMode,
    /// Engine-local focus, authoritative in uncontrolled mode
    focused_range: FocusPointer,
    preview: Option<Preview>,
    on_change: Option<ChangeHandler>,
    on_range_focus_change: Option<FocusHandler>,
}

impl std::fmt::Debug for RangeSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RangeSelection")
            .field("options", &self.options)
            .field("focus_mode", &self.focus_mode)
            .field("focused_range", &self.focused_range)
            .field("preview", &self.preview)
            .field("on_change", &self.on_change.is_some())
            .field("on_range_focus_change", &self.on_range_focus_change.is_some())
            .finish()
    }
}

impl RangeSelection {
    /// Create an engine that owns its focus pointer
    ///
    /// Initial focus is `options.initial_focused_range`, or the start of the
    /// first incomplete range in `ranges`.
    pub fn new(ranges: &[Range], options: SelectionOptions) -> Self {
        let focused_range = options
            .initial_focused_range
            .unwrap_or_else(|| FocusPointer::start(find_next_range_index(ranges, None)));
        debug!("FOCUS: Initial focus {}", focused_range);
        Self {
            options,
            focus_mode: FocusMode::Uncontrolled,
            focused_range,
            preview: None,
            on_change: None,
            on_range_focus_change: None,
        }
    }

    /// Create an engine whose focus pointer is owned by the caller
    pub fn controlled(options: SelectionOptions, focus: FocusPointer) -> Self {
        Self {
            options,
            focus_mode: FocusMode::Controlled(focus),
            focused_range: focus,
            preview: None,
            on_change: None,
            on_range_focus_change: None,
        }
    }

    pub fn with_on_change(mut self, handler: impl FnMut(&RangeChange) + Send + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    pub fn with_on_range_focus_change(
        mut self,
        handler: impl FnMut(FocusPointer) + Send + 'static,
    ) -> Self {
        self.on_range_focus_change = Some(Box::new(handler));
        self
    }

    pub fn set_on_change(&mut self, handler: Option<ChangeHandler>) {
        self.on_change = handler;
    }

    pub fn set_on_range_focus_change(&mut self, handler: Option<FocusHandler>) {
        self.on_range_focus_change = handler;
    }

    pub fn options(&self) -> &SelectionOptions {
        &self.options
    }

    pub fn focus_mode(&self) -> FocusMode {
        self.focus_mode
    }

    /// The focus the next pick applies to
    pub fn focused_range(&self) -> FocusPointer {
        match self.focus_mode {
            FocusMode::Controlled(focus) => focus,
            FocusMode::Uncontrolled => self.focused_range,
        }
    }

    /// Update the caller-owned focus; ignored in uncontrolled mode
    pub fn set_controlled_focus(&mut self, focus: FocusPointer) {
        match &mut self.focus_mode {
            FocusMode::Controlled(current) => *current = focus,
            FocusMode::Uncontrolled => {
                trace!("FOCUS: Ignoring controlled focus {} in uncontrolled mode", focus);
            }
        }
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    /// Normalize `input` against the focused range without committing
    ///
    /// Returns `None` when no change handler is registered or the focused
    /// index does not address a range.
    pub fn calc_new_selection(
        &self,
        ranges: &[Range],
        input: SelectionInput,
    ) -> Option<SelectionResult> {
        if self.on_change.is_none() {
            trace!("SELECTION: No change handler registered, skipping");
            return None;
        }
        compute_selection(ranges, self.focused_range(), input, &self.options)
    }

    /// Commit `input` to the focused range
    ///
    /// Emits one change record, moves focus, clears the preview and notifies
    /// the focus handler. A no-op returning `None` when the focused range or
    /// the change handler is missing.
    pub fn set_selection(
        &mut self,
        ranges: &[Range],
        input: SelectionInput,
    ) -> Option<SelectionResult> {
        let index = self.focused_range().range_index;
        let Some(selected) = ranges.get(index) else {
            trace!("SELECTION: No range at focused index {}", index);
            return None;
        };
        let result = self.calc_new_selection(ranges, input)?;

        let change = RangeChange {
            key: selected.key_or_default(index).into_owned(),
            range: Range {
                start_date: Some(result.range.start_date),
                end_date: Some(result.range.end_date),
                ..selected.clone()
            },
        };
        debug!(
            "SELECTION: Committing {} = {} .. {}, next focus {}",
            change.key, result.range.start_date, result.range.end_date, result.next_focus_range
        );
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(&change);
        }

        self.focused_range = result.next_focus_range;
        self.preview = None;
        if let Some(on_focus) = self.on_range_focus_change.as_mut() {
            on_focus(result.next_focus_range);
        }

        Some(result)
    }

    /// Accept a focus change driven from outside the engine
    pub fn handle_range_focus_change(&mut self, focus: FocusPointer) {
        debug!("FOCUS: External focus change to {}", focus);
        self.focused_range = focus;
        if let Some(on_focus) = self.on_range_focus_change.as_mut() {
            on_focus(focus);
        }
    }

    /// Replace the preview, or clear it with `None`
    ///
    /// `value` is expected to be normalized already; see [`Self::preview_day`].
    pub fn update_preview(&mut self, ranges: &[Range], value: Option<RangeValue>) {
        let Some(value) = value else {
            trace!("PREVIEW: Cleared");
            self.preview = None;
            return;
        };

        let index = self.focused_range().range_index;
        let color = range_color(ranges.get(index), index, &self.options.range_colors);

        trace!("PREVIEW: {} .. {}", value.start_date, value.end_date);
        self.preview = Some(Preview {
            start_date: value.start_date,
            end_date: value.end_date,
            color,
        });
    }

    /// Preview what picking `day` would commit; `None` clears the preview
    pub fn preview_day(&mut self, ranges: &[Range], day: Option<DateValue>) {
        let value = day
            .and_then(|day| self.calc_new_selection(ranges, SelectionInput::Single(day)))
            .map(|result| result.range);
        self.update_preview(ranges, value);
    }
}
