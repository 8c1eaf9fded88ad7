//! Synthetic mood entry generation for development and demos.
//!
//! This is a collaborator, not part of the aggregation core: it produces
//! entry lists with realistic shape (hour-of-day mood bias, weekend lift,
//! occasional second entry per day, mood-appropriate notes) that the
//! analytics engine and calendar aggregator accept unmodified.

use crate::entry::{MoodCategory, MoodEntry};
use crate::errors::AppResult;
use chrono::{Datelike, Duration, NaiveDate};
use rand::Rng;
use tracing::debug;

const HIGH_NOTES: &[&str] = &[
    "Had a great workout today! Feeling energized",
    "Finished a big project at work, very satisfied",
    "Wonderful dinner with friends, feeling connected",
    "Beautiful sunny day, went for a long walk",
    "Got praised by my boss for recent work",
    "Family gathering was perfect, feeling loved",
    "Meditation session really helped clear my mind",
    "Accomplished all my tasks for the day",
];

const MEDIUM_NOTES: &[&str] = &[
    "Regular day at work, nothing special",
    "Bit tired but managing okay",
    "Weather is cloudy but peaceful",
    "Grocery shopping done, feeling productive",
    "Had an okay lunch, working through afternoon",
    "Netflix and chill kind of evening",
    "Doing some house chores, staying busy",
    "Just another normal day",
];

const LOW_NOTES: &[&str] = &[
    "Didn't sleep well last night, feeling exhausted",
    "Stressful meeting at work today",
    "Missing my family, feeling a bit down",
    "Rainy day, feeling unmotivated",
    "Had an argument with a friend",
    "Too much work, feeling overwhelmed",
    "Not feeling my best today",
    "Worried about upcoming deadlines",
];

/// Generates synthetic mood entries for the `days` days ending at `today`.
///
/// Roughly one entry per day with a 20% chance of a second; mood values are
/// biased by time of day (mornings better, nights more volatile), lifted by
/// one on weekends, clamped to [1, 10], and rounded to half steps. Notes are
/// drawn from mood-appropriate pools with an 80% chance of being present.
/// The result is sorted by date ascending.
///
/// # Errors
///
/// Propagates entry validation errors; generated values always satisfy the
/// model invariants, so failures indicate a bug in the generator itself.
pub fn generate_test_entries(
    days: u32,
    today: NaiveDate,
    rng: &mut impl Rng,
) -> AppResult<Vec<MoodEntry>> {
    let mut entries = Vec::new();
    let start = today - Duration::days(i64::from(days));

    for offset in 0..days {
        let date = start + Duration::days(i64::from(offset));
        let entries_today = if rng.gen_bool(0.2) { 2 } else { 1 };

        for _ in 0..entries_today {
            let hour: u32 = rng.gen_range(0..24);
            let minute: u32 = rng.gen_range(0..60);

            let mut base: f64 = match hour {
                6..=11 => 6.0 + rng.gen_range(0.0..4.0),
                12..=16 => 5.0 + rng.gen_range(0.0..5.0),
                17..=21 => 4.0 + rng.gen_range(0.0..5.0),
                _ => 3.0 + rng.gen_range(0.0..7.0),
            };

            let weekday = date.weekday().num_days_from_sunday();
            if weekday == 0 || weekday == 6 {
                base = (base + 1.0).min(10.0);
            }

            // Half steps within [1, 10].
            let value = ((base * 2.0).round() / 2.0).clamp(1.0, 10.0);

            let category = category_for(value);
            let notes = if rng.gen_bool(0.8) {
                let pool = if value >= 7.0 {
                    HIGH_NOTES
                } else if value >= 4.0 {
                    MEDIUM_NOTES
                } else {
                    LOW_NOTES
                };
                pool[rng.gen_range(0..pool.len())]
            } else {
                ""
            };

            // Generated hour/minute are always within range.
            let datetime = match date.and_hms_opt(hour, minute, 0) {
                Some(datetime) => datetime,
                None => continue,
            };

            entries.push(MoodEntry::new(category, value, notes, datetime)?);
        }
    }

    entries.sort_by(|a, b| a.date.cmp(&b.date));
    debug!("Generated {} test entries over {} days", entries.len(), days);
    Ok(entries)
}

fn category_for(value: f64) -> MoodCategory {
    if value >= 8.0 {
        MoodCategory::new("confident", "😎")
    } else if value >= 6.0 {
        MoodCategory::new("happy", "😊")
    } else if value >= 4.0 {
        MoodCategory::new("sleepy", "😴")
    } else if value >= 3.0 {
        MoodCategory::new("sad", "😢")
    } else {
        MoodCategory::new("angry", "😡")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_generates_at_least_one_entry_per_day() {
        let mut rng = StdRng::seed_from_u64(7);
        let entries = generate_test_entries(30, today(), &mut rng).unwrap();
        assert!(entries.len() >= 30);
        assert!(entries.len() <= 60);
    }

    #[test]
    fn test_entries_sorted_and_within_window() {
        let mut rng = StdRng::seed_from_u64(7);
        let entries = generate_test_entries(14, today(), &mut rng).unwrap();

        let start = today() - Duration::days(14);
        assert!(entries.windows(2).all(|pair| pair[0].date <= pair[1].date));
        assert!(entries
            .iter()
            .all(|e| e.day() >= start && e.day() < today()));
    }

    #[test]
    fn test_values_are_half_steps_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let entries = generate_test_entries(60, today(), &mut rng).unwrap();

        for entry in &entries {
            assert!((1.0..=10.0).contains(&entry.value));
            let doubled = entry.value * 2.0;
            assert_eq!(doubled, doubled.round());
        }
    }

    #[test]
    fn test_glyph_matches_value_band() {
        let mut rng = StdRng::seed_from_u64(1);
        let entries = generate_test_entries(60, today(), &mut rng).unwrap();

        for entry in &entries {
            let expected = category_for(entry.value);
            assert_eq!(entry.category, expected);
        }
    }

    #[test]
    fn test_zero_days_is_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        let entries = generate_test_entries(0, today(), &mut rng).unwrap();
        assert!(entries.is_empty());
    }
}
