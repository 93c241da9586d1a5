use chrono::TimeDelta;
use tracing::trace;

use super::focus::find_next_range_index;
use super::SelectionOptions;
use crate::types::{
    Boundary, DateValue, FocusPointer, Range, RangeValue, SelectionInput, SelectionResult,
};

/// Whole calendar days between the boundaries of `range`
///
/// An unset end counts as the start, so open ranges have an offset of zero.
fn day_offset(range: &Range) -> i64 {
    match range.start_date {
        Some(start) => {
            let end = range.end_date.unwrap_or(start);
            (end.date() - start.date()).num_days()
        }
        None => 0,
    }
}

fn add_days(value: DateValue, days: i64) -> DateValue {
    // Out-of-range results collapse onto the picked day.
    value.checked_add_signed(TimeDelta::days(days)).unwrap_or(value)
}

/// Normalize a raw pick against the focused range
///
/// Pure function of its inputs. Returns `None` when `focus` does not address
/// a range in `ranges`.
pub fn compute_selection(
    ranges: &[Range],
    focus: FocusPointer,
    input: SelectionInput,
    options: &SelectionOptions,
) -> Option<SelectionResult> {
    let selected = ranges.get(focus.range_index)?;

    let (mut start_date, mut end_date, fixed_focus) = match input {
        SelectionInput::Pair { range, focus_change } => {
            let held = if focus_change { None } else { Some(focus) };
            (range.start_date, range.end_date, held)
        }
        SelectionInput::Single(value) => match focus.boundary {
            Boundary::Start => {
                let offset = day_offset(selected);
                let mut end_date = if options.move_range_on_first_selection {
                    add_days(value, offset)
                } else {
                    value
                };
                if let Some(max_date) = options.max_date {
                    end_date = end_date.min(max_date);
                }
                (value, end_date, Some(FocusPointer::end(focus.range_index)))
            }
            Boundary::End => {
                let start_date = selected.start_date.or(selected.end_date).unwrap_or(value);
                (start_date, value, None)
            }
        },
    };

    if end_date < start_date {
        trace!("SELECTION: Swapping inverted boundaries {} > {}", start_date, end_date);
        std::mem::swap(&mut start_date, &mut end_date);
    }

    let next_focus_range = fixed_focus.unwrap_or_else(|| {
        FocusPointer::start(find_next_range_index(ranges, Some(focus.range_index)))
    });

    Some(SelectionResult {
        range: RangeValue::new(start_date, end_date),
        next_focus_range,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> DateValue {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(0, 0, 0).unwrap()
    }

    fn single(value: DateValue) -> SelectionInput {
        SelectionInput::Single(value)
    }

    #[test]
    fn test_start_pick_collapses_and_focuses_end() {
        let ranges = vec![Range::new(day(2024, 1, 1), day(2024, 1, 10))];
        let result = compute_selection(
            &ranges,
            FocusPointer::start(0),
            single(day(2024, 2, 5)),
            &SelectionOptions::default(),
        )
        .unwrap();

        assert_eq!(result.range, RangeValue::new(day(2024, 2, 5), day(2024, 2, 5)));
        assert_eq!(result.next_focus_range, FocusPointer::end(0));
    }

    #[test]
    fn test_start_pick_preserves_offset_when_moving_range() {
        let ranges = vec![Range::new(day(2024, 1, 1), day(2024, 1, 8))];
        let options = SelectionOptions {
            move_range_on_first_selection: true,
            ..Default::default()
        };
        let result =
            compute_selection(&ranges, FocusPointer::start(0), single(day(2024, 3, 30)), &options)
                .unwrap();

        assert_eq!(result.range.start_date, day(2024, 3, 30));
        assert_eq!(result.range.end_date, day(2024, 4, 6));
        assert_eq!(
            (result.range.end_date.date() - result.range.start_date.date()).num_days(),
            7
        );
    }

    #[test]
    fn test_offset_counts_calendar_days_not_hours() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(23, 0, 0).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap().and_hms_opt(1, 0, 0).unwrap();
        let ranges = vec![Range::new(start, end)];
        let options = SelectionOptions {
            move_range_on_first_selection: true,
            ..Default::default()
        };
        let result =
            compute_selection(&ranges, FocusPointer::start(0), single(day(2024, 6, 1)), &options)
                .unwrap();

        assert_eq!(result.range.end_date, day(2024, 6, 2));
    }

    #[test]
    fn test_start_pick_clamps_end_to_max_date() {
        let ranges = vec![Range::new(day(2024, 1, 1), day(2024, 1, 20))];
        let options = SelectionOptions {
            move_range_on_first_selection: true,
            max_date: Some(day(2024, 1, 25)),
            ..Default::default()
        };
        let result =
            compute_selection(&ranges, FocusPointer::start(0), single(day(2024, 1, 15)), &options)
                .unwrap();

        assert_eq!(result.range, RangeValue::new(day(2024, 1, 15), day(2024, 1, 25)));
    }

    #[test]
    fn test_clamp_below_pick_is_swapped() {
        let ranges = vec![Range::new(day(2024, 1, 1), day(2024, 1, 1))];
        let options = SelectionOptions {
            max_date: Some(day(2024, 1, 10)),
            ..Default::default()
        };
        let result =
            compute_selection(&ranges, FocusPointer::start(0), single(day(2024, 1, 12)), &options)
                .unwrap();

        assert_eq!(result.range, RangeValue::new(day(2024, 1, 10), day(2024, 1, 12)));
    }

    #[test]
    fn test_end_pick_before_start_swaps() {
        let ranges = vec![Range::new(day(2024, 1, 10), day(2024, 1, 10))];
        let result = compute_selection(
            &ranges,
            FocusPointer::end(0),
            single(day(2024, 1, 3)),
            &SelectionOptions::default(),
        )
        .unwrap();

        assert_eq!(result.range, RangeValue::new(day(2024, 1, 3), day(2024, 1, 10)));
        assert!(result.range.start_date <= result.range.end_date);
    }

    #[test]
    fn test_end_pick_advances_to_next_incomplete_range() {
        let ranges = vec![
            Range::new(day(2024, 1, 1), day(2024, 1, 5)),
            Range::empty(),
        ];
        let result = compute_selection(
            &ranges,
            FocusPointer::end(0),
            single(day(2024, 1, 7)),
            &SelectionOptions::default(),
        )
        .unwrap();

        assert_eq!(result.range, RangeValue::new(day(2024, 1, 1), day(2024, 1, 7)));
        assert_eq!(result.next_focus_range, FocusPointer::start(1));
    }

    #[test]
    fn test_end_pick_on_last_range_falls_back_to_first() {
        let ranges = vec![
            Range::new(day(2024, 1, 1), day(2024, 1, 5)),
            Range::new(day(2024, 2, 1), day(2024, 2, 5)),
        ];
        let result = compute_selection(
            &ranges,
            FocusPointer::end(1),
            single(day(2024, 2, 9)),
            &SelectionOptions::default(),
        )
        .unwrap();

        assert_eq!(result.next_focus_range, FocusPointer::start(0));
    }

    #[test]
    fn test_end_pick_on_empty_range_anchors_on_value() {
        let ranges = vec![Range::empty()];
        let result = compute_selection(
            &ranges,
            FocusPointer::end(0),
            single(day(2024, 4, 4)),
            &SelectionOptions::default(),
        )
        .unwrap();

        assert_eq!(result.range, RangeValue::new(day(2024, 4, 4), day(2024, 4, 4)));
    }

    #[test]
    fn test_pair_holds_focus_without_focus_change() {
        let ranges = vec![Range::empty(), Range::empty()];
        let input = SelectionInput::Pair {
            range: RangeValue::new(day(2024, 1, 9), day(2024, 1, 2)),
            focus_change: false,
        };
        let result =
            compute_selection(&ranges, FocusPointer::end(0), input, &SelectionOptions::default())
                .unwrap();

        assert_eq!(result.range, RangeValue::new(day(2024, 1, 2), day(2024, 1, 9)));
        assert_eq!(result.next_focus_range, FocusPointer::end(0));
    }

    #[test]
    fn test_pair_with_focus_change_advances() {
        let ranges = vec![Range::empty(), Range::empty()];
        let input = SelectionInput::Pair {
            range: RangeValue::new(day(2024, 1, 2), day(2024, 1, 9)),
            focus_change: true,
        };
        let result =
            compute_selection(&ranges, FocusPointer::start(0), input, &SelectionOptions::default())
                .unwrap();

        assert_eq!(result.next_focus_range, FocusPointer::start(1));
    }

    #[test]
    fn test_pair_ignores_max_date() {
        let ranges = vec![Range::empty()];
        let options = SelectionOptions {
            max_date: Some(day(2024, 1, 1)),
            ..Default::default()
        };
        let input = SelectionInput::Pair {
            range: RangeValue::new(day(2024, 1, 2), day(2024, 1, 9)),
            focus_change: false,
        };
        let result = compute_selection(&ranges, FocusPointer::start(0), input, &options).unwrap();

        assert_eq!(result.range.end_date, day(2024, 1, 9));
    }

    #[test]
    fn test_missing_range_yields_none() {
        let ranges = vec![Range::empty()];
        let result = compute_selection(
            &ranges,
            FocusPointer::start(3),
            single(day(2024, 1, 1)),
            &SelectionOptions::default(),
        );
        assert!(result.is_none());
        assert!(compute_selection(
            &[],
            FocusPointer::start(0),
            single(day(2024, 1, 1)),
            &SelectionOptions::default()
        )
        .is_none());
    }

    #[test]
    fn test_time_of_day_is_preserved() {
        let picked = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(14, 30, 0).unwrap();
        let ranges = vec![Range::empty()];
        let result = compute_selection(
            &ranges,
            FocusPointer::start(0),
            single(picked),
            &SelectionOptions::default(),
        )
        .unwrap();

        assert_eq!(result.range.start_date, picked);
    }
}
