//! The mood entry model.
//!
//! This module defines the canonical mood entry record and its validation
//! invariants. An entry pairs a timestamp with a mood category, a numeric
//! rating on the 0-10 scale, and an optional free-text note. Everything else
//! in the crate (calendar aggregation, analytics, filtering) consumes these
//! records read-only.
//!
//! Entries serialize to a plain storage record ([`StoredEntry`]) with the
//! date normalized to one canonical, locale-free format
//! (`%Y-%m-%dT%H:%M:%S`). The same format is re-parsed on read, so the round
//! trip is lossless and there is no ambiguity between "date-only" and
//! "date-time" records.

use crate::constants::{DATETIME_FORMAT_CANONICAL, MOOD_VALUE_MAX, MOOD_VALUE_MIN};
use crate::errors::EntryError;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// A mood category: a stable key paired with its display glyph.
///
/// The key identifies the mood class (e.g. `"happy"`) and the glyph is the
/// character shown for it (e.g. `"😊"`). The two always travel together;
/// construction with either part empty is rejected at the entry level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodCategory {
    /// Stable identifier for the mood class.
    pub key: String,
    /// Display glyph associated with the key.
    pub glyph: String,
}

impl MoodCategory {
    /// Creates a category from a key and glyph pair.
    pub fn new(key: impl Into<String>, glyph: impl Into<String>) -> Self {
        MoodCategory {
            key: key.into(),
            glyph: glyph.into(),
        }
    }
}

/// One user-submitted mood record.
///
/// The `id` is generated once at construction and is immutable afterwards.
/// Edits replace every other field wholesale via [`MoodEntry::replace`];
/// there is no partial in-place field patching.
#[derive(Debug, Clone, PartialEq)]
pub struct MoodEntry {
    /// Unique identifier, assigned at construction.
    pub id: String,
    /// When the mood was felt (date plus time of day).
    pub date: NaiveDateTime,
    /// The mood category key/glyph pair.
    pub category: MoodCategory,
    /// Numeric rating in [0.0, 10.0], fractional values allowed.
    pub value: f64,
    /// Optional free text, may be empty.
    pub notes: String,
}

/// The plain record shape exchanged with the storage collaborator.
///
/// Field names match what is persisted; the date is the canonical
/// timestamp string from [`DATETIME_FORMAT_CANONICAL`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredEntry {
    /// Canonical timestamp string.
    pub date: String,
    /// The category key/glyph pair.
    pub category: MoodCategory,
    /// Numeric mood rating.
    pub value: f64,
    /// Free-text note, possibly empty.
    pub notes: String,
}

impl MoodEntry {
    /// Constructs a new entry with a generated unique id.
    ///
    /// # Arguments
    ///
    /// * `category` - The mood category key/glyph pair
    /// * `value` - Mood rating in [0.0, 10.0]
    /// * `notes` - Free-text note, may be empty
    /// * `date` - Timestamp of when the mood was felt
    ///
    /// # Errors
    ///
    /// Returns `EntryError::MissingCategory` if either half of the category
    /// pair is empty, or `EntryError::ValueOutOfRange` if the value is not a
    /// finite number within the inclusive 0-10 scale. Out-of-range values
    /// are rejected, never clamped.
    ///
    /// # Examples
    ///
    /// ```
    /// use moodlog::entry::{MoodCategory, MoodEntry};
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 1, 15)
    ///     .unwrap()
    ///     .and_hms_opt(9, 30, 0)
    ///     .unwrap();
    /// let entry = MoodEntry::new(MoodCategory::new("happy", "😊"), 7.5, "good morning", date)
    ///     .unwrap();
    /// assert_eq!(entry.category.key, "happy");
    /// assert_eq!(entry.value, 7.5);
    /// ```
    pub fn new(
        category: MoodCategory,
        value: f64,
        notes: impl Into<String>,
        date: NaiveDateTime,
    ) -> Result<Self, EntryError> {
        Self::validate(&category, value)?;

        let id = Uuid::new_v4().to_string();
        debug!("Created mood entry {} for {}", id, date);

        Ok(MoodEntry {
            id,
            date,
            category,
            value,
            notes: notes.into(),
        })
    }

    /// Replaces every mutable field of this entry, keeping the id.
    ///
    /// This is the only mutation path: edits are full-field replacement, not
    /// partial patches. The caller supplies the date explicitly, so an edit
    /// preserves the original timestamp unless it deliberately passes a new
    /// one.
    ///
    /// # Errors
    ///
    /// The replacement fields are validated exactly like construction.
    pub fn replace(
        &mut self,
        category: MoodCategory,
        value: f64,
        notes: impl Into<String>,
        date: NaiveDateTime,
    ) -> Result<(), EntryError> {
        Self::validate(&category, value)?;

        self.category = category;
        self.value = value;
        self.notes = notes.into();
        self.date = date;
        Ok(())
    }

    /// The calendar day this entry falls on.
    pub fn day(&self) -> NaiveDate {
        self.date.date()
    }

    /// Converts this entry into the plain record shape used by storage.
    ///
    /// The date is written with the canonical format; everything else is
    /// carried through unchanged.
    pub fn to_record(&self) -> StoredEntry {
        StoredEntry {
            date: self.date.format(DATETIME_FORMAT_CANONICAL).to_string(),
            category: self.category.clone(),
            value: self.value,
            notes: self.notes.clone(),
        }
    }

    /// Reconstructs an entry from a stored record and its id.
    ///
    /// # Errors
    ///
    /// Returns `EntryError::InvalidDate` if the stored date string does not
    /// parse with the canonical format, and the usual validation errors if
    /// the record holds an invalid category or value.
    pub fn from_record(id: impl Into<String>, record: StoredEntry) -> Result<Self, EntryError> {
        let date = NaiveDateTime::parse_from_str(&record.date, DATETIME_FORMAT_CANONICAL)
            .map_err(|source| EntryError::InvalidDate {
                text: record.date.clone(),
                source,
            })?;

        Self::validate(&record.category, record.value)?;

        Ok(MoodEntry {
            id: id.into(),
            date,
            category: record.category,
            value: record.value,
            notes: record.notes,
        })
    }

    fn validate(category: &MoodCategory, value: f64) -> Result<(), EntryError> {
        if category.key.is_empty() || category.glyph.is_empty() {
            return Err(EntryError::MissingCategory);
        }
        if !value.is_finite() || !(MOOD_VALUE_MIN..=MOOD_VALUE_MAX).contains(&value) {
            return Err(EntryError::ValueOutOfRange { value });
        }
        Ok(())
    }
}
