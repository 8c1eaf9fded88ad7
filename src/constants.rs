//! Constants used throughout the application.
//!
//! This module contains all constants used in the moodlog application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "moodlog";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A local mood-journaling tool with trend analytics";

// CLI Arguments & Defaults
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Configuration Keys & Environment Variables
/// Environment variable for specifying the moodlog data directory.
pub const ENV_VAR_MOODLOG_DIR: &str = "MOODLOG_DIR";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default sub-directory name for mood logs within the user's home directory.
pub const DEFAULT_DATA_SUBDIR: &str = "Documents/moodlogs";
/// File name of the SQLite database holding mood entries.
pub const DATABASE_FILE_NAME: &str = "moodlog.db";

// Mood Value Domain
/// Lower bound of the mood value scale (inclusive).
pub const MOOD_VALUE_MIN: f64 = 0.0;
/// Upper bound of the mood value scale (inclusive).
pub const MOOD_VALUE_MAX: f64 = 10.0;

// Date/Time Logic
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Canonical locale-free timestamp format used for every stored entry date.
///
/// Exactly one representation is used on write and re-parsed on read; there
/// is no separate "date-only" form.
pub const DATETIME_FORMAT_CANONICAL: &str = "%Y-%m-%dT%H:%M:%S";
/// Format string for monthly trend bucket labels (e.g. "Jan 2024").
pub const MONTH_LABEL_FORMAT: &str = "%b %Y";
/// Year-month format accepted by the `calendar` subcommand.
pub const YEAR_MONTH_FORMAT: &str = "%Y-%m";

// Analytics Parameters
/// Number of histogram buckets in the mood value distribution.
pub const DISTRIBUTION_BUCKETS: usize = 9;
/// Minimum token length considered by the notes analysis.
pub const MIN_WORD_LENGTH: usize = 3;
/// Punctuation characters stripped from notes before tokenization.
pub const NOTE_PUNCTUATION: &[char] = &[
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_', '`', '~',
    '(', ')',
];
/// First hour (inclusive) of the morning time slot.
pub const MORNING_START_HOUR: u32 = 6;
/// First hour (inclusive) of the afternoon time slot.
pub const AFTERNOON_START_HOUR: u32 = 12;
/// First hour (inclusive) of the evening time slot.
pub const EVENING_START_HOUR: u32 = 18;

// Filtering
/// Number of days covered by the "week" date-range filter.
pub const FILTER_WEEK_DAYS: i64 = 7;

// Logging Configuration
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "moodlog";
