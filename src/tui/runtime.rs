use std::sync::mpsc;
use tracing::{debug, trace};

use super::action::Action;
use super::reducer::reduce;
use super::state::AppState;
use crate::selection::{RangeSelection, SelectionOptions};

/// Picker runtime - owns the state and the selection engine
///
/// The Runtime is responsible for:
/// - Managing the application state
/// - Wiring the engine's change and focus handlers to the action queue
/// - Dispatching actions through the reducer, one at a time, in order
pub struct Runtime {
    /// Current application state
    state: AppState,

    engine: RangeSelection,

    /// Queue fed by the engine's handlers
    action_tx: mpsc::Sender<Action>,
    action_rx: mpsc::Receiver<Action>,
}

impl Runtime {
    /// Create a runtime whose engine reports back through the action queue
    pub fn new(initial_state: AppState, options: SelectionOptions) -> Self {
        let (action_tx, action_rx) = mpsc::channel();

        let change_tx = action_tx.clone();
        let focus_tx = action_tx.clone();
        let engine = RangeSelection::new(&initial_state.ranges, options)
            .with_on_change(move |change| {
                let _ = change_tx.send(Action::RangesChanged(change.clone()));
            })
            .with_on_range_focus_change(move |focus| {
                let _ = focus_tx.send(Action::RangeFocusChanged(focus));
            });

        let mut state = initial_state;
        state.focus = engine.focused_range();
        state.system.reset_status_message();

        Self {
            state,
            engine,
            action_tx,
            action_rx,
        }
    }

    /// Get a reference to the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn engine(&self) -> &RangeSelection {
        &self.engine
    }

    /// Queue an action to be handled by the next `process_actions`
    pub fn queue(&self, action: Action) {
        let _ = self.action_tx.send(action);
    }

    /// Dispatch an action to be processed by the reducer
    ///
    /// Uses mem::take to avoid cloning AppState.
    pub fn dispatch(&mut self, action: Action) {
        trace!("ACTION: Dispatching {:?}", action);
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action, &mut self.engine);
    }

    /// Process all queued actions
    ///
    /// Returns the number of actions processed.
    pub fn process_actions(&mut self) -> usize {
        let mut count = 0;
        while let Ok(action) = self.action_rx.try_recv() {
            self.dispatch(action);
            count += 1;
        }
        if count > 0 {
            debug!("ACTION: Processed {} queued actions", count);
        }
        count
    }
}
