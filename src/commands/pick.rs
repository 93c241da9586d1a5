use std::sync::mpsc;

use anyhow::{anyhow, Context, Result};
use tracing::debug;

use crate::commands::{parse_date, validate_range_keys};
use crate::error::ParseError;
use crate::formatting::{format_date, format_optional_date, format_ranges};
use crate::selection::{RangeSelection, SelectionOptions};
use crate::shortcuts::{
    default_input_ranges, default_static_ranges, find_input_range, find_static_range,
};
use crate::types::{DateValue, FocusPointer, Range, RangeChange, SelectionInput};

/// Prefix marking a step as a shortcut rather than a date
pub const SHORTCUT_PREFIX: char = '@';

/// One replayed user interaction
#[derive(Debug, Clone, PartialEq)]
pub enum PickStep {
    /// A click on a day
    Day(DateValue),
    /// A static shortcut, by label
    Shortcut(String),
    /// An input range, by label, with the typed number
    Input { label: String, value: u32 },
}

impl PickStep {
    /// Parse a step: a date, `@Label` or `@label=N`
    pub fn parse(value: &str) -> Result<Self, ParseError> {
        let Some(shortcut) = value.strip_prefix(SHORTCUT_PREFIX) else {
            return parse_date(value).map(PickStep::Day);
        };
        match shortcut.split_once('=') {
            Some((label, number)) => {
                let value = number
                    .trim()
                    .parse::<u32>()
                    .map_err(|_| ParseError::InvalidInputRange(shortcut.to_string()))?;
                Ok(PickStep::Input {
                    label: label.trim().to_string(),
                    value,
                })
            }
            None => Ok(PickStep::Shortcut(shortcut.trim().to_string())),
        }
    }

    fn describe(&self) -> String {
        match self {
            PickStep::Day(day) => format!("pick {}", format_date(*day)),
            PickStep::Shortcut(label) => format!("shortcut '{}'", label),
            PickStep::Input { label, value } => format!("input '{}' = {}", label, value),
        }
    }

    /// Resolve the step into engine input
    ///
    /// Shortcuts are committed as a pair without moving focus.
    fn to_input(&self, now: DateValue) -> Result<SelectionInput> {
        match self {
            PickStep::Day(day) => Ok(SelectionInput::Single(*day)),
            PickStep::Shortcut(label) => {
                let ranges = default_static_ranges();
                let shortcut = find_static_range(&ranges, label)
                    .ok_or_else(|| anyhow!("Unknown shortcut '{}'", label))?;
                Ok(SelectionInput::Pair {
                    range: shortcut.range(now),
                    focus_change: false,
                })
            }
            PickStep::Input { label, value } => {
                let inputs = default_input_ranges();
                let input = find_input_range(&inputs, label)
                    .ok_or_else(|| anyhow!("Unknown input range '{}'", label))?;
                let range = input
                    .range(*value, now)
                    .ok_or_else(|| anyhow!("'{}' = {} reaches outside the calendar", label, value))?;
                Ok(SelectionInput::Pair {
                    range,
                    focus_change: false,
                })
            }
        }
    }
}

/// Outcome of a single replayed step
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    pub step: PickStep,
    /// Change committed by the step, `None` when the engine ignored it
    pub change: Option<RangeChange>,
    pub focus: FocusPointer,
}

/// Final state after replaying every step
#[derive(Debug, Clone, PartialEq)]
pub struct PickOutcome {
    pub steps: Vec<StepOutcome>,
    pub ranges: Vec<Range>,
    pub focus: FocusPointer,
}

/// Replay `steps` against `ranges` and collect what the engine reported
///
/// Changes reach this function through the engine's change handler, the same
/// way an interactive caller receives them.
pub fn replay(
    mut ranges: Vec<Range>,
    options: SelectionOptions,
    steps: &[PickStep],
    now: DateValue,
) -> Result<PickOutcome> {
    validate_range_keys(&ranges)?;

    let (change_tx, change_rx) = mpsc::channel::<RangeChange>();
    let (focus_tx, focus_rx) = mpsc::channel::<FocusPointer>();

    let mut engine = RangeSelection::new(&ranges, options)
        .with_on_change(move |change| {
            let _ = change_tx.send(change.clone());
        })
        .with_on_range_focus_change(move |focus| {
            let _ = focus_tx.send(focus);
        });

    let mut outcomes = Vec::with_capacity(steps.len());
    for step in steps {
        let input = step
            .to_input(now)
            .with_context(|| format!("Failed to resolve step {}", step.describe()))?;
        engine.set_selection(&ranges, input);

        let mut committed = None;
        for change in change_rx.try_iter() {
            debug!("PICK: Applying change to {}", change.key);
            change.apply(&mut ranges);
            committed = Some(change);
        }
        let focus = focus_rx.try_iter().last().unwrap_or_else(|| engine.focused_range());
        outcomes.push(StepOutcome {
            step: step.clone(),
            change: committed,
            focus,
        });
    }

    Ok(PickOutcome {
        steps: outcomes,
        focus: engine.focused_range(),
        ranges,
    })
}

pub fn format_outcome(outcome: &PickOutcome) -> String {
    let mut output = String::new();

    if !outcome.steps.is_empty() {
        output.push_str("Steps:\n");
        for (i, step) in outcome.steps.iter().enumerate() {
            let result = match &step.change {
                Some(change) => format!(
                    "{} -> {} .. {}",
                    change.key,
                    format_optional_date(change.range.start_date),
                    format_optional_date(change.range.end_date)
                ),
                None => "ignored".to_string(),
            };
            output.push_str(&format!(
                "{:>3}. {:<28} {}  focus {}\n",
                i + 1,
                step.step.describe(),
                result,
                step.focus
            ));
        }
        output.push('\n');
    }

    output.push_str("Ranges:\n");
    output.push_str(&format_ranges(&outcome.ranges, outcome.focus, "►"));
    output
}

pub fn run(ranges: Vec<Range>, options: SelectionOptions, steps: Vec<String>) -> Result<()> {
    let steps = steps
        .iter()
        .map(|step| PickStep::parse(step))
        .collect::<Result<Vec<_>, _>>()?;
    let ranges = if ranges.is_empty() { vec![Range::empty()] } else { ranges };

    let outcome = replay(ranges, options, &steps, crate::commands::now())?;
    print!("{}", format_outcome(&outcome));
    Ok(())
}
