use crate::types::Range;

/// Index used when every range is already fully specified
pub const FALLBACK_RANGE_INDEX: usize = 0;

/// Find the next range that still needs a boundary picked
///
/// Searches forward from just after `current` (or from the first range when
/// `current` is `None`) for a range with an unset start or end. The search
/// does not wrap; when nothing qualifies the result is [`FALLBACK_RANGE_INDEX`].
pub fn find_next_range_index(ranges: &[Range], current: Option<usize>) -> usize {
    let from = current.map_or(0, |index| index.saturating_add(1));
    ranges
        .iter()
        .enumerate()
        .skip(from)
        .find(|(_, range)| range.is_incomplete())
        .map(|(index, _)| index)
        .unwrap_or(FALLBACK_RANGE_INDEX)
}
