//! Calendar aggregation over mood entries.
//!
//! This module builds a dense per-day view from a sparse entry list: one
//! [`CalendarDay`] per date in the requested range, whether or not any entry
//! exists for that date. Same-day entries are merged with a last-in-input-order
//! wins rule for the displayed glyph/value, while `entry_count` keeps the true
//! total.
//!
//! Everything here is a pure function over in-memory snapshots. The "today"
//! marker is an explicit argument rather than a clock read, so repeated calls
//! with the same inputs always produce identical output.

use crate::entry::MoodEntry;
use chrono::{Datelike, Duration, Months, NaiveDate};
use std::collections::BTreeMap;
use tracing::debug;

/// One day in the aggregated calendar view.
///
/// `glyph` and `value` are `None` when no entry fell on this day; that is the
/// "no data" state, not an error. When several entries share the day, the last
/// one in input order supplies the displayed glyph/value and `entry_count`
/// records how many were folded in.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarDay {
    /// The calendar date this slot represents.
    pub date: NaiveDate,
    /// Display glyph of the day's (last) entry, if any.
    pub glyph: Option<String>,
    /// Mood value of the day's (last) entry, if any.
    pub value: Option<f64>,
    /// Day of week, 0 = Sunday through 6 = Saturday.
    pub day_of_week: u32,
    /// Whether this day is a Saturday or Sunday.
    pub is_weekend: bool,
    /// Whether this day equals the supplied "today" marker.
    pub is_today: bool,
    /// Number of raw entries folded into this day.
    pub entry_count: usize,
}

impl CalendarDay {
    fn empty(date: NaiveDate, today: NaiveDate) -> Self {
        let day_of_week = date.weekday().num_days_from_sunday();
        CalendarDay {
            date,
            glyph: None,
            value: None,
            day_of_week,
            is_weekend: day_of_week == 0 || day_of_week == 6,
            is_today: date == today,
            entry_count: 0,
        }
    }
}

/// Builds a dense day-indexed calendar from a sparse entry list.
///
/// Initializes one `CalendarDay` per date in `[range_start, range_end]`
/// inclusive, then folds the entries in: each entry whose date falls inside
/// the range overwrites that day's glyph/value and increments its
/// `entry_count`. Entries outside the range are silently dropped; callers are
/// responsible for requesting a range that covers what they care about.
///
/// # Arguments
///
/// * `entries` - The entries to fold in, in caller-chosen order
/// * `range_start` - First day of the range; defaults to the earliest entry
///   date when `None`
/// * `range_end` - Last day of the range (always caller-supplied)
/// * `today` - The date to flag with `is_today`
///
/// # Edge cases
///
/// An empty entry list produces a calendar of all "no data" days. A range
/// with `range_end < range_start` (including the case where `range_start`
/// cannot be defaulted because there are no entries) produces an empty map.
/// Neither is an error.
///
/// # Examples
///
/// ```
/// use moodlog::calendar::build_calendar;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
/// let calendar = build_calendar(&[], Some(start), end, end);
/// assert_eq!(calendar.len(), 31);
/// assert!(calendar.values().all(|day| day.entry_count == 0));
/// ```
pub fn build_calendar(
    entries: &[MoodEntry],
    range_start: Option<NaiveDate>,
    range_end: NaiveDate,
    today: NaiveDate,
) -> BTreeMap<NaiveDate, CalendarDay> {
    let mut calendar = BTreeMap::new();

    let start = match range_start.or_else(|| earliest_entry_date(entries)) {
        Some(start) => start,
        // No explicit start and nothing to derive one from.
        None => return calendar,
    };

    if range_end < start {
        debug!("Degenerate calendar range {}..{}", start, range_end);
        return calendar;
    }

    let mut current = start;
    while current <= range_end {
        calendar.insert(current, CalendarDay::empty(current, today));
        current = current + Duration::days(1);
    }

    for entry in entries {
        if let Some(day) = calendar.get_mut(&entry.day()) {
            day.glyph = Some(entry.category.glyph.clone());
            day.value = Some(entry.value);
            day.entry_count += 1;
        }
    }

    debug!(
        "Built calendar with {} days over {}..{}",
        calendar.len(),
        start,
        range_end
    );
    calendar
}

/// Slices one calendar month out of a full calendar, re-keyed by day of month.
///
/// Days are matched on their actual year and month, then keyed by their
/// 1-based day-of-month number. Days from other months are excluded.
pub fn slice_month(
    calendar: &BTreeMap<NaiveDate, CalendarDay>,
    year: i32,
    month: u32,
) -> BTreeMap<u32, CalendarDay> {
    calendar
        .values()
        .filter(|day| day.date.year() == year && day.date.month() == month)
        .map(|day| (day.date.day(), day.clone()))
        .collect()
}

/// Returns the month-start dates between two dates.
///
/// The sequence begins with the first of `start`'s month and advances one
/// month at a time while the month start is strictly before `end` (half-open
/// on months). An `end` on or before the first of `start`'s month yields an
/// empty sequence.
pub fn months_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut months = Vec::new();
    // with_day(1) cannot fail for day 1 of an existing month
    let mut current = match start.with_day(1) {
        Some(first) => first,
        None => return months,
    };

    while current < end {
        months.push(current);
        current = match current.checked_add_months(Months::new(1)) {
            Some(next) => next,
            None => break,
        };
    }
    months
}

fn earliest_entry_date(entries: &[MoodEntry]) -> Option<NaiveDate> {
    entries.iter().map(MoodEntry::day).min()
}
