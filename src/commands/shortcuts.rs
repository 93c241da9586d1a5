use anyhow::Result;

use crate::formatting::format_date;
use crate::shortcuts::{default_input_ranges, default_static_ranges, InputRange, StaticRange};
use crate::types::{DateValue, Range};

/// Render the shortcut tables as text
///
/// Static entries matching `candidate` by day are marked with `*`; input
/// ranges show their current value for `candidate`.
pub fn format_shortcuts(
    static_ranges: &[StaticRange],
    input_ranges: &[InputRange],
    candidate: Option<&Range>,
    now: DateValue,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("\nShortcuts (as of {})\n", format_date(now)));
    output.push_str(&format!("{}\n", "═".repeat(64)));

    for (i, shortcut) in static_ranges.iter().enumerate() {
        let range = shortcut.range(now);
        let selected = candidate.is_some_and(|candidate| shortcut.is_selected(candidate, now));
        output.push_str(&format!(
            "{} {:>2}. {:<14} {} .. {}\n",
            if selected { "*" } else { " " },
            i + 1,
            shortcut.label,
            format_date(range.start_date),
            format_date(range.end_date)
        ));
    }

    if !input_ranges.is_empty() {
        output.push_str(&format!("\n{}\n", "─".repeat(64)));
        for input in input_ranges {
            let current = candidate
                .map(|candidate| input.current_value(candidate, now).to_string())
                .unwrap_or_else(|| "-".to_string());
            output.push_str(&format!("  {:>4} {}\n", current, input.label));
        }
    }

    output
}

pub fn run(candidate: Option<Range>, now: DateValue) -> Result<()> {
    let static_ranges = default_static_ranges();
    let input_ranges = default_input_ranges();
    print!(
        "{}",
        format_shortcuts(&static_ranges, &input_ranges, candidate.as_ref(), now)
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> DateValue {
        NaiveDate::from_ymd_opt(2024, 3, 13).unwrap().and_hms_opt(15, 30, 0).unwrap()
    }

    fn day(d: u32) -> DateValue {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap().and_hms_opt(0, 0, 0).unwrap()
    }

    #[test]
    fn test_format_shortcuts_lists_every_entry() {
        let output = format_shortcuts(
            &default_static_ranges(),
            &default_input_ranges(),
            None,
            now(),
        );

        assert!(output.contains("Shortcuts (as of 2024-03-13 15:30:00)"));
        assert!(output.contains("   5. Today          2024-03-13 .. 2024-03-13 23:59:59"));
        assert!(output.contains("   9. This Month     2024-03-01 .. 2024-03-31 23:59:59"));
        assert!(output.contains("     - days up to today"));
        assert!(!output.contains('*'));
    }

    #[test]
    fn test_format_shortcuts_marks_selection() {
        let candidate = Range::new(day(10), day(16));
        let output = format_shortcuts(
            &default_static_ranges(),
            &default_input_ranges(),
            Some(&candidate),
            now(),
        );

        assert!(output.contains("*  7. This Week"));
        assert!(output.contains("  6. Yesterday"));
        assert!(!output.contains("*  6. Yesterday"));
    }

    #[test]
    fn test_format_shortcuts_input_value() {
        let candidate = Range::new(day(11), day(13));
        let output = format_shortcuts(&[], &default_input_ranges(), Some(&candidate), now());

        assert!(output.contains("     3 days up to today"));
    }
}
