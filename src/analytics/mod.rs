//! Trend, distribution, and statistics computation over mood entries.
//!
//! This module is the aggregation core of the application. [`MoodAnalytics`]
//! borrows an immutable snapshot of entries (filtered or not) and derives:
//!
//! - Trend series: per-day, per-week, and per-month average mood
//! - Distribution: a fixed-size mood value histogram plus glyph frequency
//! - Time-of-day patterns: averages across four fixed hour slots
//! - Notes analysis: word frequency and word/mood correlation mining
//! - Summary statistics: mean, median, mode, standard deviation, streaks
//!
//! Every operation is a bounded synchronous pass over the input (O(n) or
//! O(n log n) for the sort-based ones), never mutates it, and returns
//! empty/zeroed structures for empty input rather than failing. The only
//! exception is [`MoodAnalytics::statistics`], which reports "no data" as
//! `None` so callers cannot mistake an empty journal for a zero-mood one.

use crate::constants::{
    AFTERNOON_START_HOUR, DATE_FORMAT_ISO, DISTRIBUTION_BUCKETS, EVENING_START_HOUR,
    MIN_WORD_LENGTH, MONTH_LABEL_FORMAT, MORNING_START_HOUR, NOTE_PUNCTUATION,
};
use crate::entry::MoodEntry;
use chrono::{Datelike, NaiveDate, Timelike};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::debug;

/// One aggregation bucket in a trend series.
///
/// A bucket only appears in output once at least one entry contributed to it,
/// so `count >= 1` always holds.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPeriod {
    /// Human-readable bucket label (a day, week, or month string).
    pub label: String,
    /// Mean mood value across the bucket, rounded to 2 decimal places.
    pub average: f64,
    /// Number of entries folding into the bucket.
    pub count: usize,
}

/// Trend series at the three supported granularities.
#[derive(Debug, Clone, Default)]
pub struct MoodTrends {
    /// Per-day averages, keyed `YYYY-MM-DD`, sorted lexicographically
    /// (chronological for zero-padded ISO keys).
    pub daily: Vec<TrendPeriod>,
    /// Per-week averages, keyed `Week NN, YYYY` with a zero-padded week
    /// number so lexicographic order is chronological within a year.
    pub weekly: Vec<TrendPeriod>,
    /// Per-month averages, keyed `Mon YYYY`, sorted chronologically.
    pub monthly: Vec<TrendPeriod>,
}

/// Mood value histogram plus glyph frequency.
#[derive(Debug, Clone)]
pub struct MoodDistribution {
    /// Counts bucketed by `floor(value) - 1`, clamped into the bucket range
    /// so a value of exactly 10 lands in the top bucket instead of indexing
    /// out of bounds.
    pub values: [usize; DISTRIBUTION_BUCKETS],
    /// Occurrence count per display glyph.
    pub glyphs: HashMap<String, usize>,
}

/// Average and count for one time-of-day slot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SlotStats {
    /// Mean mood value in the slot, rounded to 2 decimal places; 0 when the
    /// slot has no entries.
    pub average: f64,
    /// Number of entries in the slot.
    pub count: usize,
}

/// Mood averages across the four fixed time-of-day slots.
///
/// Slot boundaries: morning [6, 12), afternoon [12, 18), evening [18, 24),
/// night [0, 6).
#[derive(Debug, Clone, Default)]
pub struct TimeOfDayPatterns {
    pub morning: SlotStats,
    pub afternoon: SlotStats,
    pub evening: SlotStats,
    pub night: SlotStats,
}

/// A note word and the mood values it co-occurred with.
#[derive(Debug, Clone, PartialEq)]
pub struct WordCorrelation {
    /// The (lowercased, punctuation-stripped) word.
    pub word: String,
    /// Mean mood value of the entries mentioning the word.
    pub average: f64,
    /// Number of occurrences across all notes.
    pub count: usize,
}

/// Output of the notes/word correlation mining.
#[derive(Debug, Clone, Default)]
pub struct NotesAnalysis {
    /// Raw frequency of every qualifying word.
    pub common_words: HashMap<String, usize>,
    /// Words appearing more than once, sorted descending by average mood
    /// value (ties broken by word, ascending, for determinism).
    pub correlations: Vec<WordCorrelation>,
}

/// Consecutive-day journaling streaks.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StreakData {
    /// Length of the streak ending today or yesterday; 0 if the most recent
    /// entry is older than that.
    pub current: usize,
    /// Longest consecutive-day run ever seen.
    pub longest: usize,
}

/// Summary statistics over a snapshot of entries.
#[derive(Debug, Clone, PartialEq)]
pub struct MoodStatistics {
    /// Mean mood value, rounded to 2 decimal places.
    pub average: f64,
    /// Median mood value (standard even/odd averaging).
    pub median: f64,
    /// The first value in input order whose frequency is strictly highest.
    pub mode: f64,
    /// Population standard deviation, rounded to 2 decimal places.
    pub standard_deviation: f64,
    /// Total number of entries in the snapshot.
    pub total_entries: usize,
    /// Streak data as of the supplied reference date.
    pub streaks: StreakData,
}

/// Analytics engine over an immutable snapshot of mood entries.
///
/// # Examples
///
/// ```
/// use moodlog::analytics::MoodAnalytics;
///
/// let analytics = MoodAnalytics::new(&[]);
/// assert!(analytics.average_mood_trends().daily.is_empty());
/// ```
pub struct MoodAnalytics<'a> {
    entries: &'a [MoodEntry],
}

impl<'a> MoodAnalytics<'a> {
    /// Creates an engine over the given snapshot. The snapshot is borrowed
    /// and never mutated.
    pub fn new(entries: &'a [MoodEntry]) -> Self {
        MoodAnalytics { entries }
    }

    /// Computes average mood per day, week, and month in a single pass.
    ///
    /// For each entry, three bucket keys are derived simultaneously: the ISO
    /// day, the week-of-year label, and the month label. Buckets are created
    /// lazily on the first contributing entry, so every emitted period has
    /// `count >= 1`. Averages are rounded to 2 decimal places.
    pub fn average_mood_trends(&self) -> MoodTrends {
        let mut daily: BTreeMap<String, (f64, usize)> = BTreeMap::new();
        let mut weekly: BTreeMap<String, (f64, usize)> = BTreeMap::new();
        // Month labels don't sort lexicographically, so key months by their
        // first day and carry the label alongside.
        let mut monthly: BTreeMap<NaiveDate, (String, f64, usize)> = BTreeMap::new();

        for entry in self.entries {
            let day = entry.day();
            let day_key = day.format(DATE_FORMAT_ISO).to_string();
            let week_key = week_label(day);
            let month_start = day.with_day(1).unwrap_or(day);

            let bucket = daily.entry(day_key).or_insert((0.0, 0));
            bucket.0 += entry.value;
            bucket.1 += 1;

            let bucket = weekly.entry(week_key).or_insert((0.0, 0));
            bucket.0 += entry.value;
            bucket.1 += 1;

            let bucket = monthly.entry(month_start).or_insert_with(|| {
                (day.format(MONTH_LABEL_FORMAT).to_string(), 0.0, 0)
            });
            bucket.1 += entry.value;
            bucket.2 += 1;
        }

        debug!(
            "Computed trends over {} entries: {} days, {} weeks, {} months",
            self.entries.len(),
            daily.len(),
            weekly.len(),
            monthly.len()
        );

        MoodTrends {
            daily: to_periods(daily),
            weekly: to_periods(weekly),
            monthly: monthly
                .into_values()
                .map(|(label, sum, count)| TrendPeriod {
                    label,
                    average: round2(sum / count as f64),
                    count,
                })
                .collect(),
        }
    }

    /// Computes the mood value histogram and glyph frequency map.
    ///
    /// Bucket index is `floor(value) - 1`, clamped into the valid bucket
    /// range: a value of exactly 10 counts toward the top bucket and
    /// sub-1 values toward the bottom one. Bucket counts therefore sum to
    /// the input entry count exactly.
    pub fn mood_distribution(&self) -> MoodDistribution {
        let mut distribution = MoodDistribution {
            values: [0; DISTRIBUTION_BUCKETS],
            glyphs: HashMap::new(),
        };

        for entry in self.entries {
            let index =
                (entry.value.floor() as i64 - 1).clamp(0, DISTRIBUTION_BUCKETS as i64 - 1);
            distribution.values[index as usize] += 1;

            *distribution
                .glyphs
                .entry(entry.category.glyph.clone())
                .or_insert(0) += 1;
        }

        distribution
    }

    /// Partitions entries into the four time-of-day slots and averages each.
    ///
    /// A slot with no entries reports an average of 0 and a count of 0.
    pub fn time_of_day_patterns(&self) -> TimeOfDayPatterns {
        let mut sums = [0.0f64; 4];
        let mut counts = [0usize; 4];

        for entry in self.entries {
            let hour = entry.date.hour();
            let slot = if hour < MORNING_START_HOUR {
                3 // night
            } else if hour < AFTERNOON_START_HOUR {
                0 // morning
            } else if hour < EVENING_START_HOUR {
                1 // afternoon
            } else {
                2 // evening
            };
            sums[slot] += entry.value;
            counts[slot] += 1;
        }

        let slot = |i: usize| SlotStats {
            average: if counts[i] > 0 {
                round2(sums[i] / counts[i] as f64)
            } else {
                0.0
            },
            count: counts[i],
        };

        TimeOfDayPatterns {
            morning: slot(0),
            afternoon: slot(1),
            evening: slot(2),
            night: slot(3),
        }
    }

    /// Mines note text for word frequency and word/mood correlations.
    ///
    /// Notes are lowercased, stripped of a fixed punctuation set, and split
    /// on whitespace; tokens shorter than 3 characters are discarded. The
    /// correlation output keeps only words seen more than once, sorted
    /// descending by the average mood of the entries they appeared in.
    pub fn notes_analysis(&self) -> NotesAnalysis {
        let mut common_words: HashMap<String, usize> = HashMap::new();
        let mut by_word: HashMap<String, (f64, usize)> = HashMap::new();

        for entry in self.entries {
            if entry.notes.is_empty() {
                continue;
            }

            for word in tokenize(&entry.notes) {
                *common_words.entry(word.clone()).or_insert(0) += 1;
                let stats = by_word.entry(word).or_insert((0.0, 0));
                stats.0 += entry.value;
                stats.1 += 1;
            }
        }

        let mut correlations: Vec<WordCorrelation> = by_word
            .into_iter()
            .filter(|(_, (_, count))| *count > 1)
            .map(|(word, (sum, count))| WordCorrelation {
                word,
                average: round2(sum / count as f64),
                count,
            })
            .collect();
        correlations.sort_by(|a, b| {
            b.average
                .total_cmp(&a.average)
                .then_with(|| a.word.cmp(&b.word))
        });

        NotesAnalysis {
            common_words,
            correlations,
        }
    }

    /// Computes summary statistics as of `today`.
    ///
    /// Returns `None` for an empty snapshot: "no data" is an explicit result
    /// here, never a division by zero.
    pub fn statistics(&self, today: NaiveDate) -> Option<MoodStatistics> {
        if self.entries.is_empty() {
            debug!("No entries, statistics report no data");
            return None;
        }

        let values: Vec<f64> = self.entries.iter().map(|e| e.value).collect();
        let mean = values.iter().sum::<f64>() / values.len() as f64;

        Some(MoodStatistics {
            average: round2(mean),
            median: median(&values),
            mode: mode(&values),
            standard_deviation: round2(population_std_dev(&values, mean)),
            total_entries: self.entries.len(),
            streaks: self.streak_data(today),
        })
    }

    /// Computes current and longest consecutive-day streaks as of `today`.
    ///
    /// Entry dates are reduced to calendar days and deduplicated, so several
    /// entries on one day extend a streak by at most one. The current streak
    /// is the terminal run only if the most recent entry day is today or
    /// yesterday; otherwise it is 0.
    pub fn streak_data(&self, today: NaiveDate) -> StreakData {
        let days: BTreeSet<NaiveDate> = self.entries.iter().map(MoodEntry::day).collect();

        let mut iter = days.iter();
        let mut previous = match iter.next() {
            Some(first) => *first,
            None => return StreakData::default(),
        };

        let mut run = 1;
        let mut longest = 1;
        for &day in iter {
            if (day - previous).num_days() == 1 {
                run += 1;
                longest = longest.max(run);
            } else {
                run = 1;
            }
            previous = day;
        }

        // `previous` now holds the most recent entry day.
        let current = if (today - previous).num_days() <= 1 {
            run
        } else {
            0
        };

        StreakData { current, longest }
    }
}

/// Week-of-year label for a date: `Week NN, YYYY`.
///
/// The week number is `ceil((days_since_jan1 + jan1_weekday) / 7)`, with the
/// weekday counted from Sunday. The number is zero-padded so "Week 02" sorts
/// before "Week 10".
fn week_label(date: NaiveDate) -> String {
    // Jan 1 of the same year always exists.
    let jan1 = NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date);
    let days_since_jan1 = (date - jan1).num_days();
    let offset = days_since_jan1 + i64::from(jan1.weekday().num_days_from_sunday());
    let week = (offset + 6) / 7;
    format!("Week {:02}, {}", week, date.year())
}

fn to_periods(buckets: BTreeMap<String, (f64, usize)>) -> Vec<TrendPeriod> {
    buckets
        .into_iter()
        .map(|(label, (sum, count))| TrendPeriod {
            label,
            average: round2(sum / count as f64),
            count,
        })
        .collect()
}

fn tokenize(notes: &str) -> impl Iterator<Item = String> + '_ {
    notes
        .to_lowercase()
        .split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| !NOTE_PUNCTUATION.contains(c))
                .collect::<String>()
        })
        .filter(|word| word.chars().count() >= MIN_WORD_LENGTH)
        .collect::<Vec<_>>()
        .into_iter()
}

fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let middle = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[middle - 1] + sorted[middle]) / 2.0
    } else {
        sorted[middle]
    }
}

/// First value in input order whose frequency is strictly highest.
fn mode(values: &[f64]) -> f64 {
    let mut frequencies: HashMap<u64, usize> = HashMap::new();
    for value in values {
        *frequencies.entry(value.to_bits()).or_insert(0) += 1;
    }

    let mut best = values[0];
    let mut best_frequency = 0;
    for value in values {
        let frequency = frequencies[&value.to_bits()];
        if frequency > best_frequency {
            best = *value;
            best_frequency = frequency;
        }
    }
    best
}

fn population_std_dev(values: &[f64], mean: f64) -> f64 {
    let variance = values
        .iter()
        .map(|value| {
            let diff = value - mean;
            diff * diff
        })
        .sum::<f64>()
        / values.len() as f64;
    variance.sqrt()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::MoodCategory;
    use chrono::NaiveDateTime;

    fn entry_at(date: &str, value: f64, notes: &str) -> MoodEntry {
        let date = NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S").unwrap();
        MoodEntry::new(MoodCategory::new("test", "😊"), value, notes, date).unwrap()
    }

    fn entry_with_glyph(date: &str, value: f64, glyph: &str) -> MoodEntry {
        let date = NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S").unwrap();
        MoodEntry::new(MoodCategory::new("test", glyph), value, "", date).unwrap()
    }

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_trends_single_entry_day_average_is_exact() {
        let entries = vec![entry_at("2024-01-15T09:00:00", 7.5, "")];
        let trends = MoodAnalytics::new(&entries).average_mood_trends();

        assert_eq!(trends.daily.len(), 1);
        assert_eq!(trends.daily[0].label, "2024-01-15");
        assert_eq!(trends.daily[0].average, 7.5);
        assert_eq!(trends.daily[0].count, 1);
    }

    #[test]
    fn test_trends_accumulate_across_granularities() {
        let entries = vec![
            entry_at("2024-01-01T09:00:00", 4.0, ""),
            entry_at("2024-01-01T21:00:00", 8.0, ""),
            entry_at("2024-02-01T12:00:00", 6.0, ""),
        ];
        let trends = MoodAnalytics::new(&entries).average_mood_trends();

        assert_eq!(trends.daily.len(), 2);
        assert_eq!(trends.daily[0].average, 6.0);
        assert_eq!(trends.daily[0].count, 2);

        assert_eq!(trends.monthly.len(), 2);
        assert_eq!(trends.monthly[0].label, "Jan 2024");
        assert_eq!(trends.monthly[1].label, "Feb 2024");

        // Every emitted bucket has at least one contributing entry.
        for period in trends
            .daily
            .iter()
            .chain(&trends.weekly)
            .chain(&trends.monthly)
        {
            assert!(period.count >= 1);
        }
    }

    #[test]
    fn test_trends_monthly_sorted_chronologically_not_lexically() {
        // "Apr 2024" < "Jan 2024" lexically, so a lexical sort would flip these.
        let entries = vec![
            entry_at("2024-04-10T09:00:00", 5.0, ""),
            entry_at("2024-01-10T09:00:00", 7.0, ""),
        ];
        let trends = MoodAnalytics::new(&entries).average_mood_trends();
        assert_eq!(trends.monthly[0].label, "Jan 2024");
        assert_eq!(trends.monthly[1].label, "Apr 2024");
    }

    #[test]
    fn test_week_labels_zero_padded_and_sorted() {
        // Early March lands past week 9 in 2024; late January is week 4-5.
        let entries = vec![
            entry_at("2024-03-05T09:00:00", 5.0, ""),
            entry_at("2024-01-25T09:00:00", 7.0, ""),
        ];
        let trends = MoodAnalytics::new(&entries).average_mood_trends();

        assert_eq!(trends.weekly.len(), 2);
        // Zero padding keeps single-digit weeks ahead of double-digit ones.
        assert!(trends.weekly[0].label < trends.weekly[1].label);
        assert!(trends.weekly[0].label.starts_with("Week 0"));
    }

    #[test]
    fn test_week_label_formula() {
        // 2024-01-01 is a Monday (jan1 weekday = 1): ceil((0 + 1) / 7) = 1.
        assert_eq!(week_label(day("2024-01-01")), "Week 01, 2024");
        // 2024-01-07: ceil((6 + 1) / 7) = 1; 2024-01-08 rolls to week 2.
        assert_eq!(week_label(day("2024-01-07")), "Week 01, 2024");
        assert_eq!(week_label(day("2024-01-08")), "Week 02, 2024");
    }

    #[test]
    fn test_distribution_counts_sum_to_entry_count() {
        let entries: Vec<MoodEntry> = [1.0, 2.5, 5.0, 7.5, 9.0, 10.0, 0.5]
            .iter()
            .map(|&v| entry_at("2024-01-01T09:00:00", v, ""))
            .collect();
        let distribution = MoodAnalytics::new(&entries).mood_distribution();

        let total: usize = distribution.values.iter().sum();
        assert_eq!(total, entries.len());
    }

    #[test]
    fn test_distribution_clamps_edge_values() {
        let entries = vec![
            entry_at("2024-01-01T09:00:00", 10.0, ""),
            entry_at("2024-01-01T10:00:00", 0.0, ""),
        ];
        let distribution = MoodAnalytics::new(&entries).mood_distribution();

        // A value of exactly 10 goes in the top bucket, sub-1 in the bottom.
        assert_eq!(distribution.values[DISTRIBUTION_BUCKETS - 1], 1);
        assert_eq!(distribution.values[0], 1);
    }

    #[test]
    fn test_distribution_glyph_frequency() {
        let entries = vec![
            entry_with_glyph("2024-01-01T09:00:00", 8.0, "😊"),
            entry_with_glyph("2024-01-02T09:00:00", 8.0, "😊"),
            entry_with_glyph("2024-01-03T09:00:00", 3.0, "😢"),
        ];
        let distribution = MoodAnalytics::new(&entries).mood_distribution();
        assert_eq!(distribution.glyphs["😊"], 2);
        assert_eq!(distribution.glyphs["😢"], 1);
    }

    #[test]
    fn test_time_of_day_slot_boundaries() {
        let entries = vec![
            entry_at("2024-01-01T06:00:00", 8.0, ""), // morning lower bound
            entry_at("2024-01-01T11:59:00", 6.0, ""), // still morning
            entry_at("2024-01-01T12:00:00", 5.0, ""), // afternoon lower bound
            entry_at("2024-01-01T18:00:00", 4.0, ""), // evening lower bound
            entry_at("2024-01-01T23:59:00", 2.0, ""), // still evening
            entry_at("2024-01-01T00:00:00", 3.0, ""), // night
            entry_at("2024-01-01T05:59:00", 5.0, ""), // still night
        ];
        let patterns = MoodAnalytics::new(&entries).time_of_day_patterns();

        assert_eq!(patterns.morning, SlotStats { average: 7.0, count: 2 });
        assert_eq!(patterns.afternoon, SlotStats { average: 5.0, count: 1 });
        assert_eq!(patterns.evening, SlotStats { average: 3.0, count: 2 });
        assert_eq!(patterns.night, SlotStats { average: 4.0, count: 2 });
    }

    #[test]
    fn test_time_of_day_empty_slot_reports_zero() {
        let entries = vec![entry_at("2024-01-01T09:00:00", 8.0, "")];
        let patterns = MoodAnalytics::new(&entries).time_of_day_patterns();
        assert_eq!(patterns.night, SlotStats { average: 0.0, count: 0 });
    }

    #[test]
    fn test_notes_analysis_tokenization() {
        let entries = vec![
            entry_at("2024-01-01T09:00:00", 8.0, "Great workout today!"),
            entry_at("2024-01-02T09:00:00", 9.0, "workout; felt great."),
            entry_at("2024-01-03T09:00:00", 2.0, "so so bad"),
        ];
        let analysis = MoodAnalytics::new(&entries).notes_analysis();

        // Short tokens ("so") are discarded, punctuation stripped.
        assert!(!analysis.common_words.contains_key("so"));
        assert_eq!(analysis.common_words["workout"], 2);
        assert_eq!(analysis.common_words["great"], 2);
        assert_eq!(analysis.common_words["bad"], 1);

        // Only words with count > 1 survive, sorted by average descending.
        let words: Vec<&str> = analysis
            .correlations
            .iter()
            .map(|c| c.word.as_str())
            .collect();
        assert_eq!(words, vec!["great", "workout"]);
        assert_eq!(analysis.correlations[0].average, 8.5);
    }

    #[test]
    fn test_notes_analysis_skips_empty_notes() {
        let entries = vec![entry_at("2024-01-01T09:00:00", 8.0, "")];
        let analysis = MoodAnalytics::new(&entries).notes_analysis();
        assert!(analysis.common_words.is_empty());
        assert!(analysis.correlations.is_empty());
    }

    #[test]
    fn test_statistics_reference_fixture() {
        // Values [1,1,1,2,2,3,3,3,3,5]: mode 3, median 2.5, mean 2.4.
        let values = [1.0, 1.0, 1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 3.0, 5.0];
        let entries: Vec<MoodEntry> = values
            .iter()
            .enumerate()
            .map(|(i, &v)| entry_at(&format!("2024-01-{:02}T09:00:00", i + 1), v, ""))
            .collect();

        let stats = MoodAnalytics::new(&entries)
            .statistics(day("2024-01-10"))
            .unwrap();

        assert_eq!(stats.average, 2.4);
        assert_eq!(stats.median, 2.5);
        assert_eq!(stats.mode, 3.0);
        assert_eq!(stats.total_entries, 10);
        // Population variance of the fixture is 1.44.
        assert_eq!(stats.standard_deviation, 1.2);
    }

    #[test]
    fn test_statistics_empty_input_is_no_data() {
        let analytics = MoodAnalytics::new(&[]);
        assert!(analytics.statistics(day("2024-01-01")).is_none());
    }

    #[test]
    fn test_mode_tie_break_is_first_in_input_order() {
        let entries = vec![
            entry_at("2024-01-01T09:00:00", 7.0, ""),
            entry_at("2024-01-02T09:00:00", 4.0, ""),
            entry_at("2024-01-03T09:00:00", 4.0, ""),
            entry_at("2024-01-04T09:00:00", 7.0, ""),
        ];
        let stats = MoodAnalytics::new(&entries)
            .statistics(day("2024-01-04"))
            .unwrap();
        // 7.0 and 4.0 both appear twice; 7.0 was seen first.
        assert_eq!(stats.mode, 7.0);
    }

    #[test]
    fn test_streaks_consecutive_run_then_gap() {
        let entries = vec![
            entry_at("2024-01-01T09:00:00", 5.0, ""),
            entry_at("2024-01-02T09:00:00", 5.0, ""),
            entry_at("2024-01-03T09:00:00", 5.0, ""),
            entry_at("2024-01-10T09:00:00", 5.0, ""),
        ];
        let streaks = MoodAnalytics::new(&entries).streak_data(day("2024-02-01"));
        assert_eq!(streaks.longest, 3);
        assert_eq!(streaks.current, 0); // last entry long past
    }

    #[test]
    fn test_streaks_current_when_last_entry_is_today() {
        let entries = vec![
            entry_at("2024-01-08T09:00:00", 5.0, ""),
            entry_at("2024-01-09T09:00:00", 5.0, ""),
            entry_at("2024-01-10T09:00:00", 5.0, ""),
        ];
        let streaks = MoodAnalytics::new(&entries).streak_data(day("2024-01-10"));
        assert_eq!(streaks.longest, 3);
        assert_eq!(streaks.current, 3);
    }

    #[test]
    fn test_streaks_current_allows_yesterday() {
        let entries = vec![
            entry_at("2024-01-09T09:00:00", 5.0, ""),
            entry_at("2024-01-10T09:00:00", 5.0, ""),
        ];
        let streaks = MoodAnalytics::new(&entries).streak_data(day("2024-01-11"));
        assert_eq!(streaks.current, 2);
    }

    #[test]
    fn test_streaks_dedupe_same_day_entries() {
        let entries = vec![
            entry_at("2024-01-01T09:00:00", 5.0, ""),
            entry_at("2024-01-01T21:00:00", 7.0, ""),
            entry_at("2024-01-02T09:00:00", 5.0, ""),
        ];
        let streaks = MoodAnalytics::new(&entries).streak_data(day("2024-01-02"));
        assert_eq!(streaks.longest, 2);
        assert_eq!(streaks.current, 2);
    }

    #[test]
    fn test_streaks_empty_input() {
        let streaks = MoodAnalytics::new(&[]).streak_data(day("2024-01-01"));
        assert_eq!(streaks, StreakData::default());
    }
}
