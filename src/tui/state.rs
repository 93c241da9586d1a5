use chrono::NaiveDate;

use crate::config::Config;
use crate::shortcuts::{
    default_input_ranges, default_static_ranges, start_of_month, InputRange, StaticRange,
};
use crate::types::{DateValue, FocusPointer, Range};

/// Root application state - single source of truth
///
/// All state changes happen through the reducer.
/// The selection engine lives next to it in the runtime and only
/// reports changes back as actions.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Ranges being edited; owned here, replaced through `RangesChanged`
    pub ranges: Vec<Range>,
    /// Last focus reported by the engine
    pub focus: FocusPointer,
    pub calendar: CalendarState,
    pub shortcuts: Vec<StaticRange>,
    /// Shown with their current value, not editable
    pub input_ranges: Vec<InputRange>,
    pub system: SystemState,
}

impl AppState {
    pub fn new(ranges: Vec<Range>, now: DateValue, config: Config) -> Self {
        let cursor = ranges
            .iter()
            .find_map(|range| range.start_date)
            .map(|start| start.date())
            .unwrap_or_else(|| now.date());
        Self {
            ranges,
            focus: FocusPointer::default(),
            calendar: CalendarState::new(cursor, now.date()),
            shortcuts: default_static_ranges(),
            input_ranges: default_input_ranges(),
            system: SystemState {
                config,
                now,
                ..Default::default()
            },
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CalendarState {
    /// Day under the keyboard cursor, previewed as the next pick
    pub cursor: NaiveDate,
    /// First day of the month on screen
    pub visible_month: NaiveDate,
    pub today: NaiveDate,
}

impl CalendarState {
    pub fn new(cursor: NaiveDate, today: NaiveDate) -> Self {
        Self {
            cursor,
            visible_month: start_of_month(cursor),
            today,
        }
    }

    /// Move the cursor and keep its month on screen
    pub fn set_cursor(&mut self, cursor: NaiveDate) {
        self.cursor = cursor;
        self.visible_month = start_of_month(cursor);
    }
}

/// Default help message shown in the status bar
pub const DEFAULT_STATUS_MESSAGE: &str =
    "←→↑↓ move | Enter pick | Tab next range | b boundary | PgUp/PgDn month | 1-9 shortcut | Esc clear | q quit";

#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub config: Config,
    /// Reference time for shortcut ranges
    pub now: DateValue,
    pub status_message: Option<String>,
    pub status_is_error: bool,
}

impl SystemState {
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = false;
    }

    pub fn set_status_error_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = true;
    }

    pub fn reset_status_message(&mut self) {
        self.status_message = Some(DEFAULT_STATUS_MESSAGE.to_string());
        self.status_is_error = false;
    }

    pub fn status_message(&self) -> &str {
        self.status_message.as_deref().unwrap_or(DEFAULT_STATUS_MESSAGE)
    }
}
