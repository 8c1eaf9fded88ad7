/*!
# Moodlog - A Local Mood-Journaling Tool

Command-line front end for the moodlog library. This file contains the main
application flow: logging setup, argument parsing, configuration loading,
and dispatch of the subcommands to the operations layer.

## Usage

```text
moodlog add --mood happy --glyph 😊 --value 7.5 --note "good day"
moodlog list --range week --min 5
moodlog stats
moodlog calendar --month 2024-05
moodlog trends --period monthly
moodlog seed --days 60
```

## Configuration

- `MOODLOG_DIR`: Directory for the entry database (defaults to
  `~/Documents/moodlogs`)
- `RUST_LOG`: Overrides the log filter
*/

use chrono::Local;
use clap::Parser;
use moodlog::cli::{CliArgs, Command};
use moodlog::constants::{DEFAULT_LOG_LEVEL, LOG_FORMAT_JSON};
use moodlog::errors::AppResult;
use moodlog::storage::SqliteStore;
use moodlog::{ops, Config};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool, log_format: &str) {
    let default_level = if verbose { "debug" } else { DEFAULT_LOG_LEVEL };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if log_format == LOG_FORMAT_JSON {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

/// The main entry point for the moodlog application.
///
/// Coordinates the overall application flow:
/// 1. Parses command-line arguments
/// 2. Initializes structured logging
/// 3. Loads and validates configuration
/// 4. Opens the entry store
/// 5. Dispatches the requested operation
///
/// # Errors
///
/// Returns configuration errors, storage errors, entry validation errors,
/// or journal-logic errors (e.g. malformed date arguments).
fn main() -> AppResult<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose, &args.log_format);

    info!("Starting moodlog");

    // Obtain the current date/time once at the beginning.
    let now = Local::now().naive_local();
    let today = now.date();

    let config = Config::load()?;
    config.ensure_data_dir()?;
    let store = SqliteStore::open(&config.database_path())?;

    match args.command {
        Command::Add {
            mood,
            glyph,
            value,
            note,
            date,
        } => {
            ops::add_entry(&store, &mood, &glyph, value, note, date, now)?;
        }
        Command::Edit {
            id,
            mood,
            glyph,
            value,
            note,
        } => {
            ops::edit_entry(&store, &id, &mood, &glyph, value, note)?;
        }
        Command::Delete { id } => {
            ops::delete_entry(&store, &id)?;
        }
        Command::List {
            range,
            min,
            max,
            moods,
        } => {
            ops::list_entries(&store, range, min, max, moods, now)?;
        }
        Command::Stats => {
            ops::show_stats(&store, today)?;
        }
        Command::Calendar { month } => {
            ops::show_calendar(&store, month, today)?;
        }
        Command::Trends { period } => {
            ops::show_trends(&store, period)?;
        }
        Command::Seed { days } => {
            ops::seed_entries(&store, days, today, &mut rand::thread_rng())?;
        }
    }

    info!("Done");
    Ok(())
}
