use chrono::{Months, TimeDelta};
use tracing::{debug, trace};

use super::action::Action;
use super::state::AppState;
use crate::formatting::format_optional_date;
use crate::selection::RangeSelection;
use crate::shortcuts::{start_of_day, start_of_month};
use crate::types::{FocusPointer, SelectionInput};

/// State reducer - like Redux reducer
///
/// Takes current state, the selection engine and an action, returns new state.
/// The engine never touches `state` directly: commits and focus moves come
/// back later as `RangesChanged` / `RangeFocusChanged` actions through the
/// handlers the runtime registered on it.
pub fn reduce(state: AppState, action: Action, engine: &mut RangeSelection) -> AppState {
    match action {
        Action::PickDay(day) => pick_day(state, day, engine),
        Action::MoveCursor(days) => move_cursor(state, days, engine),
        Action::ChangeMonth(months) => change_month(state, months, engine),
        Action::ClearPreview => {
            engine.preview_day(&state.ranges, None);
            state
        }
        Action::FocusRange(focus) => focus_range(state, focus, engine),
        Action::CycleRangeFocus => {
            if state.ranges.is_empty() {
                return state;
            }
            let next = (engine.focused_range().range_index + 1) % state.ranges.len();
            focus_range(state, FocusPointer::start(next), engine)
        }
        Action::ToggleBoundary => {
            let current = engine.focused_range();
            let toggled = FocusPointer::new(current.range_index, current.boundary.toggled());
            focus_range(state, toggled, engine)
        }
        Action::ApplyShortcut(index) => apply_shortcut(state, index, engine),
        Action::RangesChanged(change) => {
            let mut new_state = state;
            if change.apply(&mut new_state.ranges) {
                new_state.system.set_status_message(format!(
                    "{}: {} .. {}",
                    change.key,
                    format_optional_date(change.range.start_date),
                    format_optional_date(change.range.end_date)
                ));
            } else {
                debug!("ACTION: No range with key {}", change.key);
            }
            new_state
        }
        Action::RangeFocusChanged(focus) => {
            let mut new_state = state;
            new_state.focus = focus;
            new_state
        }
        Action::Quit => state,
    }
}

fn pick_day(state: AppState, day: chrono::NaiveDate, engine: &mut RangeSelection) -> AppState {
    let mut new_state = state;
    new_state.calendar.set_cursor(day);
    if engine
        .set_selection(&new_state.ranges, SelectionInput::Single(start_of_day(day)))
        .is_none()
    {
        new_state
            .system
            .set_status_error_message("Nothing to pick into: no range has focus".to_string());
    }
    new_state
}

fn move_cursor(state: AppState, days: i64, engine: &mut RangeSelection) -> AppState {
    let mut new_state = state;
    let Some(cursor) = new_state
        .calendar
        .cursor
        .checked_add_signed(TimeDelta::days(days))
    else {
        return new_state;
    };
    trace!("CURSOR: {} -> {}", new_state.calendar.cursor, cursor);
    new_state.calendar.set_cursor(cursor);
    engine.preview_day(&new_state.ranges, Some(start_of_day(cursor)));
    new_state
}

fn change_month(state: AppState, months: i32, engine: &mut RangeSelection) -> AppState {
    let mut new_state = state;
    let month = new_state.calendar.visible_month;
    let shifted = if months >= 0 {
        month.checked_add_months(Months::new(months.unsigned_abs()))
    } else {
        month.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    let Some(shifted) = shifted else {
        return new_state;
    };
    new_state.calendar.set_cursor(start_of_month(shifted));
    engine.preview_day(&new_state.ranges, Some(start_of_day(new_state.calendar.cursor)));
    new_state
}

fn focus_range(state: AppState, focus: FocusPointer, engine: &mut RangeSelection) -> AppState {
    if focus.range_index >= state.ranges.len() {
        trace!("FOCUS: Ignoring focus {} outside {} ranges", focus, state.ranges.len());
        return state;
    }
    engine.handle_range_focus_change(focus);
    if engine.preview().is_some() {
        engine.preview_day(&state.ranges, Some(start_of_day(state.calendar.cursor)));
    }
    state
}

fn apply_shortcut(state: AppState, index: usize, engine: &mut RangeSelection) -> AppState {
    let mut new_state = state;
    let Some(shortcut) = new_state.shortcuts.get(index) else {
        trace!("SHORTCUT: No shortcut at {}", index);
        return new_state;
    };
    let range = shortcut.range(new_state.system.now);
    debug!("SHORTCUT: Applying '{}'", shortcut.label);

    let input = SelectionInput::Pair {
        range,
        focus_change: false,
    };
    if engine.set_selection(&new_state.ranges, input).is_some() {
        new_state.calendar.set_cursor(range.start_date.date());
    }
    new_state
}
