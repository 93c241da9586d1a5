use chrono::NaiveTime;

use crate::types::{DateValue, FocusPointer, Range};

/// Placeholder shown for an unset boundary
pub const UNSET_DATE: &str = "—";

/// Format a date, adding the time only when it is not midnight
pub fn format_date(value: DateValue) -> String {
    if value.time() == NaiveTime::MIN {
        value.format("%Y-%m-%d").to_string()
    } else {
        value.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

pub fn format_optional_date(value: Option<DateValue>) -> String {
    value.map(format_date).unwrap_or_else(|| UNSET_DATE.to_string())
}

/// One-line summary of a range: `key  start .. end`
pub fn format_range(range: &Range, index: usize) -> String {
    format!(
        "{:<10} {} .. {}",
        range.key_or_default(index),
        format_optional_date(range.start_date),
        format_optional_date(range.end_date)
    )
}

/// Format every range, marking the one that has focus
pub fn format_ranges(ranges: &[Range], focus: FocusPointer, selector: &str) -> String {
    let mut output = String::new();
    for (index, range) in ranges.iter().enumerate() {
        let marker = if index == focus.range_index {
            format!("{} ", selector)
        } else {
            " ".repeat(selector.chars().count() + 1)
        };
        let boundary = if index == focus.range_index {
            format!("  [{}]", focus.boundary)
        } else {
            String::new()
        };
        output.push_str(&format!("{}{}{}\n", marker, format_range(range, index), boundary));
    }
    output
}
