/// Keyboard event to action mapping
///
/// This module handles converting crossterm KeyEvents into picker Actions.
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use tracing::trace;

use super::action::Action;
use super::state::AppState;

/// Days the cursor moves for a vertical arrow key
const DAYS_PER_WEEK: i64 = 7;

/// Handle global keys that work regardless of state
fn handle_global_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Esc => Some(Action::ClearPreview),
        _ => None,
    }
}

/// Handle cursor movement within and across months
fn handle_grid_navigation(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Left => Some(Action::MoveCursor(-1)),
        KeyCode::Right => Some(Action::MoveCursor(1)),
        KeyCode::Up => Some(Action::MoveCursor(-DAYS_PER_WEEK)),
        KeyCode::Down => Some(Action::MoveCursor(DAYS_PER_WEEK)),
        KeyCode::PageUp => Some(Action::ChangeMonth(-1)),
        KeyCode::PageDown => Some(Action::ChangeMonth(1)),
        _ => None,
    }
}

/// Handle shortcut selection via number keys (1-9)
fn handle_number_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Char(c @ '1'..='9') => {
            let index = c.to_digit(10).map(|digit| digit as usize - 1)?;
            Some(Action::ApplyShortcut(index))
        }
        _ => None,
    }
}

fn handle_selection_keys(key_code: KeyCode, state: &AppState) -> Option<Action> {
    match key_code {
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PickDay(state.calendar.cursor)),
        KeyCode::Tab => Some(Action::CycleRangeFocus),
        KeyCode::Char('b') | KeyCode::Char('B') => Some(Action::ToggleBoundary),
        _ => None,
    }
}

/// Convert a key event into an action, if it maps to one
pub fn key_to_action(key: KeyEvent, state: &AppState) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    trace!("KEY: {:?}", key.code);

    handle_global_keys(key.code)
        .or_else(|| handle_grid_navigation(key.code))
        .or_else(|| handle_number_keys(key.code))
        .or_else(|| handle_selection_keys(key.code, state))
}
