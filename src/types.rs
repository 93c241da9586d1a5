/// Shared types used across the application
///
/// This module contains the range model that is shared between
/// the selection engine, the commands and the terminal picker.
use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;

use chrono::NaiveDateTime;
use ratatui::style::Color;
use serde::Deserialize;

/// A calendar date with a preserved (but otherwise ignored) time of day
pub type DateValue = NaiveDateTime;

/// Prefix used to build positional keys for ranges without an explicit key
pub const RANGE_KEY_PREFIX: &str = "range";

/// Which side of a range the next single-date pick updates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Boundary {
    #[default]
    Start,
    End,
}

impl Boundary {
    pub fn toggled(self) -> Self {
        match self {
            Boundary::Start => Boundary::End,
            Boundary::End => Boundary::Start,
        }
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Boundary::Start => write!(f, "start"),
            Boundary::End => write!(f, "end"),
        }
    }
}

/// Which range, and which of its boundaries, currently has input focus
///
/// Deserializes from a `[index, "start" | "end"]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "(usize, Boundary)")]
pub struct FocusPointer {
    pub range_index: usize,
    pub boundary: Boundary,
}

impl FocusPointer {
    pub fn new(range_index: usize, boundary: Boundary) -> Self {
        Self { range_index, boundary }
    }

    pub fn start(range_index: usize) -> Self {
        Self::new(range_index, Boundary::Start)
    }

    pub fn end(range_index: usize) -> Self {
        Self::new(range_index, Boundary::End)
    }
}

impl From<(usize, Boundary)> for FocusPointer {
    fn from((range_index, boundary): (usize, Boundary)) -> Self {
        Self::new(range_index, boundary)
    }
}

impl fmt::Display for FocusPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.range_index, self.boundary)
    }
}

/// A named date range as owned by the caller
///
/// Either boundary may be unset. An unset end is treated as equal to the
/// start when computing a new selection.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Range {
    pub key: Option<String>,
    pub start_date: Option<DateValue>,
    pub end_date: Option<DateValue>,
    /// Display hint, overrides the palette color for this range
    pub color: Option<Color>,
}

impl Range {
    pub fn new(start_date: DateValue, end_date: DateValue) -> Self {
        Self {
            start_date: Some(start_date),
            end_date: Some(end_date),
            ..Default::default()
        }
    }

    /// A range with neither boundary set
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// True when either boundary is still unset
    pub fn is_incomplete(&self) -> bool {
        self.start_date.is_none() || self.end_date.is_none()
    }

    /// The range's own key, or `range{index + 1}` when it has none
    pub fn key_or_default(&self, index: usize) -> Cow<'_, str> {
        match &self.key {
            Some(key) => Cow::Borrowed(key.as_str()),
            None => Cow::Owned(format!("{}{}", RANGE_KEY_PREFIX, index + 1)),
        }
    }

    /// Whether `day` falls within this range, compared by calendar day
    pub fn contains_day(&self, day: chrono::NaiveDate) -> bool {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => start.date() <= day && day <= end.date(),
            (Some(start), None) => start.date() == day,
            (None, Some(end)) => end.date() == day,
            (None, None) => false,
        }
    }
}

/// First key shared by two ranges, counting positional keys
///
/// Changes are addressed by key, so every range needs a distinct one.
pub fn find_duplicate_key(ranges: &[Range]) -> Option<String> {
    let mut seen = HashSet::new();
    ranges
        .iter()
        .enumerate()
        .map(|(index, range)| range.key_or_default(index))
        .find(|key| !seen.insert(key.clone()))
        .map(|key| key.into_owned())
}

/// A fully specified start/end pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeValue {
    pub start_date: DateValue,
    pub end_date: DateValue,
}

impl RangeValue {
    pub fn new(start_date: DateValue, end_date: DateValue) -> Self {
        Self { start_date, end_date }
    }
}

/// Raw input to the selection engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionInput {
    /// A single picked day, updating the focused boundary
    Single(DateValue),
    /// Both boundaries supplied directly (drag select, shortcut ranges)
    ///
    /// Focus only advances when `focus_change` is set.
    Pair { range: RangeValue, focus_change: bool },
}

/// Result of normalizing a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionResult {
    pub range: RangeValue,
    pub next_focus_range: FocusPointer,
}

/// Change record emitted when a selection is committed
///
/// Carries the whole updated range under its key, with every field other
/// than the dates preserved from the range it replaces.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeChange {
    pub key: String,
    pub range: Range,
}

impl RangeChange {
    /// Replace the range addressed by this change in `ranges`
    ///
    /// Returns false when no range matches the key.
    pub fn apply(&self, ranges: &mut [Range]) -> bool {
        let position = ranges
            .iter()
            .enumerate()
            .position(|(index, range)| range.key_or_default(index) == self.key);
        match position {
            Some(index) => {
                ranges[index] = self.range.clone();
                true
            }
            None => false,
        }
    }
}

/// Transient, uncommitted candidate range shown while hovering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preview {
    pub start_date: DateValue,
    pub end_date: DateValue,
    pub color: Color,
}

impl Preview {
    pub fn contains_day(&self, day: chrono::NaiveDate) -> bool {
        self.start_date.date() <= day && day <= self.end_date.date()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> DateValue {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(0, 0, 0).unwrap()
    }

    #[test]
    fn test_find_duplicate_key_with_positional_collision() {
        let ranges = vec![Range::empty().with_key("range2"), Range::empty()];
        assert_eq!(find_duplicate_key(&ranges), Some("range2".to_string()));
    }

    #[test]
    fn test_find_duplicate_key_distinct() {
        let ranges = vec![Range::empty().with_key("trip"), Range::empty(), Range::empty()];
        assert_eq!(find_duplicate_key(&ranges), None);
        assert_eq!(find_duplicate_key(&[]), None);
    }

    #[test]
    fn test_key_or_default_uses_one_based_position() {
        let range = Range::empty();
        assert_eq!(range.key_or_default(0), "range1");
        assert_eq!(range.key_or_default(2), "range3");
    }

    #[test]
    fn test_key_or_default_prefers_explicit_key() {
        let range = Range::empty().with_key("selection");
        assert_eq!(range.key_or_default(4), "selection");
    }

    #[test]
    fn test_is_incomplete() {
        assert!(Range::empty().is_incomplete());
        let mut open = Range::new(day(2024, 1, 1), day(2024, 1, 2));
        assert!(!open.is_incomplete());
        open.end_date = None;
        assert!(open.is_incomplete());
    }

    #[test]
    fn test_contains_day_open_range_is_single_day() {
        let range = Range {
            start_date: Some(day(2024, 3, 10)),
            ..Default::default()
        };
        assert!(range.contains_day(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()));
        assert!(!range.contains_day(NaiveDate::from_ymd_opt(2024, 3, 11).unwrap()));
    }

    #[test]
    fn test_contains_day_ignores_time_of_day() {
        let start = day(2024, 3, 10).date().and_hms_opt(18, 30, 0).unwrap();
        let range = Range::new(start, day(2024, 3, 12));
        assert!(range.contains_day(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()));
        assert!(range.contains_day(NaiveDate::from_ymd_opt(2024, 3, 12).unwrap()));
    }

    #[test]
    fn test_range_change_apply_by_positional_key() {
        let mut ranges = vec![Range::empty().with_key("a"), Range::empty()];
        let change = RangeChange {
            key: "range2".to_string(),
            range: Range::new(day(2024, 1, 1), day(2024, 1, 5)),
        };

        assert!(change.apply(&mut ranges));
        assert_eq!(ranges[1].start_date, Some(day(2024, 1, 1)));
        assert_eq!(ranges[0], Range::empty().with_key("a"));
    }

    #[test]
    fn test_range_change_apply_unknown_key() {
        let mut ranges = vec![Range::empty()];
        let change = RangeChange {
            key: "missing".to_string(),
            range: Range::empty(),
        };
        assert!(!change.apply(&mut ranges));
    }

    #[test]
    fn test_focus_pointer_deserializes_from_pair() {
        #[derive(Deserialize)]
        struct Wrapper {
            focus: FocusPointer,
        }
        let parsed: Wrapper = toml::from_str(r#"focus = [1, "end"]"#).unwrap();
        assert_eq!(parsed.focus, FocusPointer::end(1));
    }

    #[test]
    fn test_boundary_toggled() {
        assert_eq!(Boundary::Start.toggled(), Boundary::End);
        assert_eq!(Boundary::End.toggled(), Boundary::Start);
    }
}
