//! High-level operations wiring the CLI to storage and the aggregation core.
//!
//! Each function here loads a read snapshot from the store, runs the pure
//! aggregation code over it, and prints a plain-text summary. Rendering
//! beyond that (markup, charts) is deliberately out of scope.

use crate::analytics::MoodAnalytics;
use crate::calendar::{build_calendar, slice_month};
use crate::cli::{PeriodArg, RangeArg};
use crate::constants::{DATETIME_FORMAT_CANONICAL, YEAR_MONTH_FORMAT};
use crate::entry::{MoodCategory, MoodEntry};
use crate::errors::{AppError, AppResult, StorageError};
use crate::filter::{DateRange, MoodFilter};
use crate::storage::EntryStore;
use crate::testdata::generate_test_entries;
use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime};
use rand::Rng;
use tracing::info;

/// Creates and stores a new mood entry, returning its id.
///
/// The entry date defaults to `now`; an explicit `date` argument must use the
/// canonical `YYYY-MM-DDTHH:MM:SS` format.
pub fn add_entry(
    store: &dyn EntryStore,
    mood: &str,
    glyph: &str,
    value: f64,
    note: Option<String>,
    date: Option<String>,
    now: NaiveDateTime,
) -> AppResult<String> {
    let date = match date {
        Some(text) => parse_datetime(&text)?,
        None => now,
    };

    let entry = MoodEntry::new(
        MoodCategory::new(mood, glyph),
        value,
        note.unwrap_or_default(),
        date,
    )?;
    store.put(&entry)?;

    info!("Added entry {} ({} {})", entry.id, mood, value);
    println!("Added entry {}", entry.id);
    Ok(entry.id)
}

/// Replaces the fields of an existing entry.
///
/// The original entry date is preserved; edits change what was felt, not
/// when it was felt.
pub fn edit_entry(
    store: &dyn EntryStore,
    id: &str,
    mood: &str,
    glyph: &str,
    value: f64,
    note: Option<String>,
) -> AppResult<()> {
    let mut entry = find_entry(store, id)?;
    let original_date = entry.date;

    entry.replace(
        MoodCategory::new(mood, glyph),
        value,
        note.unwrap_or_default(),
        original_date,
    )?;
    store.put(&entry)?;

    info!("Edited entry {}", id);
    println!("Updated entry {}", id);
    Ok(())
}

/// Deletes an entry by id.
pub fn delete_entry(store: &dyn EntryStore, id: &str) -> AppResult<()> {
    store.delete(id)?;
    info!("Deleted entry {}", id);
    println!("Deleted entry {}", id);
    Ok(())
}

/// Lists entries matching the given filter axes, most recent first.
pub fn list_entries(
    store: &dyn EntryStore,
    range: RangeArg,
    min: f64,
    max: f64,
    moods: Vec<String>,
    now: NaiveDateTime,
) -> AppResult<()> {
    let entries = store.get_all()?;

    let mut filter = MoodFilter::default();
    filter.set_date_range(date_range_from(range));
    filter.set_value_range(min, max);
    filter.set_categories(moods);

    let mut filtered = filter.apply(&entries, now);
    if filtered.is_empty() {
        println!("No mood entries found matching your filters.");
        return Ok(());
    }

    filtered.sort_by(|a, b| b.date.cmp(&a.date));
    for entry in &filtered {
        let note = if entry.notes.is_empty() {
            "No note"
        } else {
            entry.notes.as_str()
        };
        println!(
            "{}  {}  {:.1}  {}  [{}]",
            entry.date.format(DATETIME_FORMAT_CANONICAL),
            entry.category.glyph,
            entry.value,
            note,
            entry.id,
        );
    }
    Ok(())
}

/// Prints summary statistics and streaks over the whole journal.
pub fn show_stats(store: &dyn EntryStore, today: NaiveDate) -> AppResult<()> {
    let entries = store.get_all()?;
    let analytics = MoodAnalytics::new(&entries);

    match analytics.statistics(today) {
        Some(stats) => {
            println!("Entries:            {}", stats.total_entries);
            println!("Average mood:       {:.2}", stats.average);
            println!("Median mood:        {:.2}", stats.median);
            println!("Most frequent mood: {:.1}", stats.mode);
            println!("Std deviation:      {:.2}", stats.standard_deviation);
            println!(
                "Streak:             {} current / {} longest",
                stats.streaks.current, stats.streaks.longest
            );
        }
        None => println!("No mood entries yet."),
    }

    let patterns = analytics.time_of_day_patterns();
    println!();
    println!("By time of day:");
    for (name, slot) in [
        ("morning", &patterns.morning),
        ("afternoon", &patterns.afternoon),
        ("evening", &patterns.evening),
        ("night", &patterns.night),
    ] {
        println!("  {:<10} {:.2} ({} entries)", name, slot.average, slot.count);
    }
    Ok(())
}

/// Prints the calendar view for one month (`YYYY-MM`, default current).
pub fn show_calendar(
    store: &dyn EntryStore,
    month: Option<String>,
    today: NaiveDate,
) -> AppResult<()> {
    let month_start = match month {
        Some(text) => parse_year_month(&text)?,
        None => today.with_day(1).unwrap_or(today),
    };
    let month_end = last_day_of_month(month_start)?;

    let entries = store.get_all()?;
    let calendar = build_calendar(&entries, Some(month_start), month_end, today);
    let days = slice_month(&calendar, month_start.year(), month_start.month());

    println!("{}", month_start.format("%B %Y"));
    for (day_of_month, day) in &days {
        let mood = match (&day.glyph, day.value) {
            (Some(glyph), Some(value)) => format!("{} {:.1}", glyph, value),
            _ => "-".to_string(),
        };
        let mut markers = String::new();
        if day.is_today {
            markers.push_str(" (today)");
        }
        if day.entry_count > 1 {
            markers.push_str(&format!(" (+{})", day.entry_count - 1));
        }
        println!("  {:2}  {}{}", day_of_month, mood, markers);
    }
    Ok(())
}

/// Prints the average mood trend series at the requested granularity.
pub fn show_trends(store: &dyn EntryStore, period: PeriodArg) -> AppResult<()> {
    let entries = store.get_all()?;
    let trends = MoodAnalytics::new(&entries).average_mood_trends();

    let series = match period {
        PeriodArg::Daily => &trends.daily,
        PeriodArg::Weekly => &trends.weekly,
        PeriodArg::Monthly => &trends.monthly,
    };

    if series.is_empty() {
        println!("No mood entries yet.");
        return Ok(());
    }
    for bucket in series {
        println!(
            "{:<16} {:.2} ({} entries)",
            bucket.label, bucket.average, bucket.count
        );
    }
    Ok(())
}

/// Fills the store with generated demo entries.
pub fn seed_entries(
    store: &dyn EntryStore,
    days: u32,
    today: NaiveDate,
    rng: &mut impl Rng,
) -> AppResult<usize> {
    let entries = generate_test_entries(days, today, rng)?;
    for entry in &entries {
        store.put(entry)?;
    }
    info!("Seeded {} entries over {} days", entries.len(), days);
    println!("Seeded {} entries.", entries.len());
    Ok(entries.len())
}

fn find_entry(store: &dyn EntryStore, id: &str) -> AppResult<MoodEntry> {
    store
        .get_all()?
        .into_iter()
        .find(|entry| entry.id == id)
        .ok_or_else(|| StorageError::NotFound(format!("Entry with id {} not found", id)).into())
}

fn date_range_from(range: RangeArg) -> DateRange {
    match range {
        RangeArg::All => DateRange::All,
        RangeArg::Day => DateRange::Day,
        RangeArg::Week => DateRange::Week,
        RangeArg::Month => DateRange::Month,
        RangeArg::Year => DateRange::Year,
    }
}

fn parse_datetime(text: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, DATETIME_FORMAT_CANONICAL)
        .map_err(|e| AppError::Journal(format!("Invalid date format '{}': {}", text, e)))
}

fn parse_year_month(text: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", text), "%Y-%m-%d").map_err(|e| {
        AppError::Journal(format!(
            "Invalid month '{}' (expected {}): {}",
            text, YEAR_MONTH_FORMAT, e
        ))
    })
}

fn last_day_of_month(month_start: NaiveDate) -> AppResult<NaiveDate> {
    month_start
        .checked_add_months(Months::new(1))
        .map(|next| next - Duration::days(1))
        .ok_or_else(|| AppError::Journal(format!("Month out of range: {}", month_start)))
}
