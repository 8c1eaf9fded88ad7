//! Predicate composition over mood entries.
//!
//! A [`MoodFilter`] holds three independent axes — a date-range mode, an
//! inclusive mood-value range, and a set of allowed category keys — and
//! applies them ANDed together, preserving the input's relative order. The
//! default configuration is the identity filter.
//!
//! The date predicates are evaluated against a `now` passed at apply time,
//! not cached at construction: repeated calls across a day boundary yield
//! different results, which is the intended "live" behavior.

use crate::constants::{FILTER_WEEK_DAYS, MOOD_VALUE_MAX, MOOD_VALUE_MIN};
use crate::entry::MoodEntry;
use chrono::{Datelike, Duration, NaiveDateTime};
use std::collections::BTreeSet;
use tracing::debug;

/// Date-range modes for filtering entries relative to "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateRange {
    /// No date restriction.
    #[default]
    All,
    /// Same calendar day as now.
    Day,
    /// Within the last 7 days of now (inclusive lower bound).
    Week,
    /// Same calendar month and year as now.
    Month,
    /// Same calendar year as now.
    Year,
}

/// A composable filter configuration over mood entries.
///
/// # Examples
///
/// ```
/// use moodlog::filter::{DateRange, MoodFilter};
///
/// let mut filter = MoodFilter::default();
/// filter.set_date_range(DateRange::Week);
/// filter.set_value_range(5.0, 10.0);
/// ```
#[derive(Debug, Clone)]
pub struct MoodFilter {
    date_range: DateRange,
    value_min: f64,
    value_max: f64,
    categories: BTreeSet<String>,
}

impl Default for MoodFilter {
    /// The identity filter: all dates, the full value scale, no category
    /// restriction.
    fn default() -> Self {
        MoodFilter {
            date_range: DateRange::All,
            value_min: MOOD_VALUE_MIN,
            value_max: MOOD_VALUE_MAX,
            categories: BTreeSet::new(),
        }
    }
}

impl MoodFilter {
    /// Sets the date-range mode.
    pub fn set_date_range(&mut self, range: DateRange) {
        self.date_range = range;
    }

    /// Sets the inclusive mood-value range.
    pub fn set_value_range(&mut self, min: f64, max: f64) {
        self.value_min = min;
        self.value_max = max;
    }

    /// Sets the allowed category keys. An empty set means no restriction.
    pub fn set_categories(&mut self, categories: impl IntoIterator<Item = String>) {
        self.categories = categories.into_iter().collect();
    }

    /// Applies the filter, returning matching entries in their original
    /// relative order.
    ///
    /// The three predicates (date, value, category) are combined with
    /// logical AND. `now` anchors the relative date predicates and is
    /// supplied per call.
    pub fn apply(&self, entries: &[MoodEntry], now: NaiveDateTime) -> Vec<MoodEntry> {
        let filtered: Vec<MoodEntry> = entries
            .iter()
            .filter(|entry| {
                self.matches_date(entry, now)
                    && self.matches_value(entry)
                    && self.matches_category(entry)
            })
            .cloned()
            .collect();

        debug!(
            "Filter kept {} of {} entries ({:?})",
            filtered.len(),
            entries.len(),
            self.date_range
        );
        filtered
    }

    fn matches_date(&self, entry: &MoodEntry, now: NaiveDateTime) -> bool {
        match self.date_range {
            DateRange::All => true,
            DateRange::Day => entry.day() == now.date(),
            DateRange::Week => entry.date >= now - Duration::days(FILTER_WEEK_DAYS),
            DateRange::Month => {
                entry.day().month() == now.month() && entry.day().year() == now.year()
            }
            DateRange::Year => entry.day().year() == now.year(),
        }
    }

    fn matches_value(&self, entry: &MoodEntry) -> bool {
        entry.value >= self.value_min && entry.value <= self.value_max
    }

    fn matches_category(&self, entry: &MoodEntry) -> bool {
        self.categories.is_empty() || self.categories.contains(&entry.category.key)
    }
}
