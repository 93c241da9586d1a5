pub mod pick;
pub mod shortcuts;

use chrono::{Local, NaiveDate, NaiveDateTime};

use crate::error::{ParseError, ParseResult};
use crate::types::{find_duplicate_key, Boundary, DateValue, FocusPointer, Range};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Separator between the start and end of a range argument
pub const RANGE_SEPARATOR: &str = "..";

/// Current local time without timezone, the reference for shortcut ranges
pub fn now() -> DateValue {
    Local::now().naive_local()
}

/// Parse a date, with or without a time of day
///
/// Plain dates are taken at midnight.
pub fn parse_date(value: &str) -> ParseResult<DateValue> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
        return Ok(date.and_time(chrono::NaiveTime::MIN));
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .ok_or_else(|| ParseError::InvalidDate(value.to_string()))
}

fn parse_optional_date(value: &str) -> ParseResult<Option<DateValue>> {
    if value.trim().is_empty() {
        Ok(None)
    } else {
        parse_date(value).map(Some)
    }
}

/// Parse a `[KEY=]START..END` range argument
///
/// Either side may be empty to leave that boundary unset.
pub fn parse_range(value: &str) -> ParseResult<Range> {
    let (key, dates) = match value.split_once('=') {
        Some((key, dates)) if !key.trim().is_empty() => (Some(key.trim().to_string()), dates),
        Some(_) => return Err(ParseError::InvalidRange(value.to_string())),
        None => (None, value),
    };
    let (start, end) = dates
        .split_once(RANGE_SEPARATOR)
        .ok_or_else(|| ParseError::InvalidRange(value.to_string()))?;

    Ok(Range {
        key,
        start_date: parse_optional_date(start)?,
        end_date: parse_optional_date(end)?,
        color: None,
    })
}

/// Reject range lists where two ranges answer to the same key
pub fn validate_range_keys(ranges: &[Range]) -> ParseResult<()> {
    match find_duplicate_key(ranges) {
        Some(key) => Err(ParseError::DuplicateKey(key)),
        None => Ok(()),
    }
}

pub fn parse_boundary(value: &str) -> ParseResult<Boundary> {
    match value.trim().to_lowercase().as_str() {
        "start" | "s" | "0" => Ok(Boundary::Start),
        "end" | "e" | "1" => Ok(Boundary::End),
        other => Err(ParseError::InvalidBoundary(other.to_string())),
    }
}

/// Parse an `INDEX,BOUNDARY` focus argument
pub fn parse_focus(value: &str) -> ParseResult<FocusPointer> {
    let (index, boundary) = value
        .split_once(',')
        .ok_or_else(|| ParseError::InvalidFocus(value.to_string()))?;
    let range_index = index
        .trim()
        .parse::<usize>()
        .map_err(|_| ParseError::InvalidFocus(value.to_string()))?;
    Ok(FocusPointer::new(range_index, parse_boundary(boundary)?))
}
