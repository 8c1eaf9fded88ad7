/*!
# Moodlog

Moodlog is a personal mood-journaling tool. Users log mood entries (an emoji
category, a 0-10 rating, an optional note, and a timestamp) into a local
store and review them through a filterable list, a calendar view, and trend
statistics.

## Core Features

- Log, edit, and delete mood entries with validated category/value pairs
- Dense per-day calendar aggregation over arbitrary date ranges
- Trend series (daily, weekly, monthly averages), value distribution,
  time-of-day patterns, note-word/mood correlations, and streaks
- Composable filtering by date range, value range, and category set
- Synthetic demo data generation

## Architecture

The codebase follows a modular architecture with clear separation of concerns:

- `entry`: the canonical mood entry model and validation
- `calendar`: dense day-indexed aggregation
- `analytics`: trend, distribution, and statistics computation
- `filter`: predicate composition over entry snapshots
- `storage`: the persistence collaborator behind the `EntryStore` trait
- `testdata`: synthetic entry generation
- `ops`: high-level operations wiring CLI, storage, and the core
- `cli`, `config`, `errors`, `constants`: the usual application plumbing

The aggregation core (`entry`, `calendar`, `analytics`, `filter`) is pure:
no I/O, no clock reads, no shared mutable state. Storage is injected and
only ever produces read snapshots for it.

## Usage Example

```no_run
use moodlog::analytics::MoodAnalytics;
use moodlog::storage::{EntryStore, SqliteStore};
use moodlog::Config;
use chrono::Local;

fn main() -> moodlog::AppResult<()> {
    let config = Config::load()?;
    config.ensure_data_dir()?;

    let store = SqliteStore::open(&config.database_path())?;
    let entries = store.get_all()?;

    let today = Local::now().naive_local().date();
    if let Some(stats) = MoodAnalytics::new(&entries).statistics(today) {
        println!("average mood: {}", stats.average);
    }
    Ok(())
}
```
*/

/// Trend, distribution, and statistics computation
pub mod analytics;
/// Dense day-indexed calendar aggregation
pub mod calendar;
/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Constants used throughout the application
pub mod constants;
/// The canonical mood entry model and its validation
pub mod entry;
/// Error types and utilities for error handling
pub mod errors;
/// Predicate composition over entry snapshots
pub mod filter;
/// High-level operations wiring CLI, storage, and the core
pub mod ops;
/// Persistence for mood entries
pub mod storage;
/// Synthetic mood entry generation
pub mod testdata;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use entry::{MoodCategory, MoodEntry};
pub use errors::{AppError, AppResult};
