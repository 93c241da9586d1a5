/// Shortcut ranges offered next to the calendar
///
/// Static ranges are fixed periods relative to "now" (today, last week, ...).
/// Input ranges are built from a number the user types ("7 days up to today").
/// Both only produce ranges; committing them goes through the selection engine
/// like any other pair of dates.
///
/// Every function takes `now` explicitly so the tables are deterministic.
use std::fmt;

use chrono::{Datelike, Months, NaiveDate, NaiveTime, TimeDelta};

use crate::types::{DateValue, Range, RangeValue};

/// Produces a range relative to `now`
pub type RangeFn = fn(DateValue) -> RangeValue;

/// A labelled, fixed range relative to the current time
#[derive(Debug, Clone)]
pub struct StaticRange {
    pub label: String,
    range: RangeFn,
}

impl StaticRange {
    pub fn new(label: impl Into<String>, range: RangeFn) -> Self {
        Self {
            label: label.into(),
            range,
        }
    }

    pub fn range(&self, now: DateValue) -> RangeValue {
        (self.range)(now)
    }

    /// Whether `candidate` covers exactly the same days as this shortcut
    pub fn is_selected(&self, candidate: &Range, now: DateValue) -> bool {
        let defined = self.range(now);
        match (candidate.start_date, candidate.end_date) {
            (Some(start), Some(end)) => {
                is_same_day(start, defined.start_date) && is_same_day(end, defined.end_date)
            }
            _ => false,
        }
    }
}

/// Build a static range table from label/function pairs
pub fn create_static_ranges(definitions: &[(&str, RangeFn)]) -> Vec<StaticRange> {
    definitions
        .iter()
        .map(|(label, range)| StaticRange::new(*label, *range))
        .collect()
}

/// Value shown next to an input range for the current selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputValue {
    /// The selection does not have the shape this input produces
    NotApplicable,
    /// The selection has no start
    Unbounded,
    Days(i64),
}

impl fmt::Display for InputValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputValue::NotApplicable => write!(f, "-"),
            InputValue::Unbounded => write!(f, "∞"),
            InputValue::Days(days) => write!(f, "{}", days),
        }
    }
}

/// A range built from a user-entered number
#[derive(Debug, Clone)]
pub struct InputRange {
    pub label: String,
    range: fn(u32, DateValue) -> Option<RangeValue>,
    current_value: fn(&Range, DateValue) -> InputValue,
}

impl InputRange {
    /// The range for `value`, or `None` when it reaches outside the calendar
    pub fn range(&self, value: u32, now: DateValue) -> Option<RangeValue> {
        (self.range)(value, now)
    }

    pub fn current_value(&self, range: &Range, now: DateValue) -> InputValue {
        (self.current_value)(range, now)
    }
}

pub fn is_same_day(a: DateValue, b: DateValue) -> bool {
    a.date() == b.date()
}

pub fn start_of_day(date: NaiveDate) -> DateValue {
    date.and_time(NaiveTime::MIN)
}

pub fn end_of_day(date: NaiveDate) -> DateValue {
    date.and_hms_milli_opt(23, 59, 59, 999)
        .unwrap_or_else(|| start_of_day(date))
}

/// Sunday of the week containing `date`
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    let back = TimeDelta::days(date.weekday().num_days_from_sunday() as i64);
    date.checked_sub_signed(back).unwrap_or(date)
}

/// Saturday of the week containing `date`
pub fn end_of_week(date: NaiveDate) -> NaiveDate {
    let start = start_of_week(date);
    start.checked_add_signed(TimeDelta::days(6)).unwrap_or(start)
}

pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    start_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}

fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(TimeDelta::days(days)).unwrap_or(date)
}

fn hours_before(now: DateValue, hours: i64) -> DateValue {
    now.checked_sub_signed(TimeDelta::hours(hours)).unwrap_or(now)
}

fn last_hour(now: DateValue) -> RangeValue {
    RangeValue::new(hours_before(now, 1), end_of_day(now.date()))
}

fn last_four_hours(now: DateValue) -> RangeValue {
    RangeValue::new(hours_before(now, 4), end_of_day(now.date()))
}

fn last_eight_hours(now: DateValue) -> RangeValue {
    RangeValue::new(hours_before(now, 8), end_of_day(now.date()))
}

fn last_twenty_four_hours(now: DateValue) -> RangeValue {
    RangeValue::new(hours_before(now, 24), end_of_day(now.date()))
}

fn today(now: DateValue) -> RangeValue {
    RangeValue::new(start_of_day(now.date()), end_of_day(now.date()))
}

fn yesterday(now: DateValue) -> RangeValue {
    let date = add_days(now.date(), -1);
    RangeValue::new(start_of_day(date), end_of_day(date))
}

fn this_week(now: DateValue) -> RangeValue {
    RangeValue::new(
        start_of_day(start_of_week(now.date())),
        end_of_day(end_of_week(now.date())),
    )
}

fn last_week(now: DateValue) -> RangeValue {
    let date = add_days(now.date(), -7);
    RangeValue::new(
        start_of_day(start_of_week(date)),
        end_of_day(end_of_week(date)),
    )
}

fn this_month(now: DateValue) -> RangeValue {
    RangeValue::new(
        start_of_day(start_of_month(now.date())),
        end_of_day(end_of_month(now.date())),
    )
}

/// The stock shortcut table, in display order
pub fn default_static_ranges() -> Vec<StaticRange> {
    vec![
        StaticRange::new("Last Hour", last_hour),
        StaticRange::new("Last 4 Hours", last_four_hours),
        StaticRange::new("Last 8 Hours", last_eight_hours),
        StaticRange::new("Last 24 Hours", last_twenty_four_hours),
        StaticRange::new("Today", today),
        StaticRange::new("Yesterday", yesterday),
        StaticRange::new("This Week", this_week),
        StaticRange::new("Last Week", last_week),
        StaticRange::new("This Month", this_month),
    ]
}

fn days_up_to_today(value: u32, now: DateValue) -> Option<RangeValue> {
    let back = TimeDelta::try_days(value.max(1) as i64 - 1)?;
    let start = now.date().checked_sub_signed(back)?;
    Some(RangeValue::new(start_of_day(start), end_of_day(now.date())))
}

fn days_up_to_today_value(range: &Range, now: DateValue) -> InputValue {
    let today_end = end_of_day(now.date());
    match (range.start_date, range.end_date) {
        (_, Some(end)) if !is_same_day(end, today_end) => InputValue::NotApplicable,
        (_, None) => InputValue::NotApplicable,
        (None, Some(_)) => InputValue::Unbounded,
        (Some(start), Some(_)) => InputValue::Days((today_end.date() - start.date()).num_days() + 1),
    }
}

/// The stock input ranges, in display order
pub fn default_input_ranges() -> Vec<InputRange> {
    vec![InputRange {
        label: "days up to today".to_string(),
        range: days_up_to_today,
        current_value: days_up_to_today_value,
    }]
}

/// Look up a static range by label, ignoring case
pub fn find_static_range<'a>(ranges: &'a [StaticRange], label: &str) -> Option<&'a StaticRange> {
    ranges.iter().find(|range| range.label.eq_ignore_ascii_case(label))
}

/// Look up an input range by label, ignoring case
pub fn find_input_range<'a>(ranges: &'a [InputRange], label: &str) -> Option<&'a InputRange> {
    ranges.iter().find(|range| range.label.eq_ignore_ascii_case(label))
}
