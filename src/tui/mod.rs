pub mod action;
pub mod keys;
pub mod reducer;
pub mod runtime;
pub mod state;
pub mod view;
pub mod widgets;

#[cfg(test)]
pub mod testing;

pub use action::Action;
pub use keys::key_to_action;
pub use reducer::reduce;
pub use runtime::Runtime;
pub use state::AppState;

use std::io;
use std::time::Duration;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::config::Config;
use crate::selection::SelectionOptions;
use crate::types::{DateValue, Range};

/// Main entry point for TUI mode
///
/// Returns the ranges as they were when the user quit.
pub fn run(config: Config, ranges: Vec<Range>, now: DateValue) -> Result<Vec<Range>, io::Error> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let options = SelectionOptions::from(&config.picker);
    let initial_state = AppState::new(ranges, now, config);
    let mut runtime = Runtime::new(initial_state, options);

    let result = event_loop(&mut terminal, &mut runtime);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result.map(|()| runtime.state().ranges.clone())
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    runtime: &mut Runtime,
) -> Result<(), io::Error> {
    loop {
        // Apply whatever the engine reported before drawing
        let actions_processed = runtime.process_actions();
        if actions_processed > 0 {
            tracing::debug!("LOOP: Processed {} actions", actions_processed);
        }

        terminal.draw(|f| {
            let area = f.area();
            view::render(runtime.state(), runtime.engine().preview(), area, f.buffer_mut());
        })?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        let Some(action) = key_to_action(key, runtime.state()) else {
            continue;
        };
        if action == Action::Quit {
            tracing::debug!("ACTION: Quitting picker");
            return Ok(());
        }
        runtime.dispatch(action);
    }
}
