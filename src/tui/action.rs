use chrono::NaiveDate;

use crate::types::{FocusPointer, RangeChange};

/// Global actions - like Redux actions
///
/// All state changes in the picker happen through actions.
/// Actions are dispatched from:
/// - User input (key events)
/// - The selection engine's change and focus handlers
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Grid interaction
    PickDay(NaiveDate),
    MoveCursor(i64),
    ChangeMonth(i32),
    ClearPreview,

    // Focus
    FocusRange(FocusPointer),
    CycleRangeFocus,
    ToggleBoundary,

    /// Apply the static shortcut at this position
    ApplyShortcut(usize),

    // Reported by the selection engine
    RangesChanged(RangeChange),
    RangeFocusChanged(FocusPointer),

    // System actions
    Quit,
}
