//! Command-line interface definitions.

use clap::{Parser, Subcommand, ValueEnum};

/// A local mood-journaling tool with trend analytics
#[derive(Parser, Debug)]
#[clap(name = "moodlog", about = "A local mood-journaling tool with trend analytics")]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    #[clap(subcommand)]
    pub command: Command,

    /// Print verbose output
    #[clap(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Log output format: text or json
    #[clap(long, global = true, default_value = "text")]
    pub log_format: String,
}

/// Date-range filter modes accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RangeArg {
    All,
    Day,
    Week,
    Month,
    Year,
}

/// Trend granularities accepted by the `trends` subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PeriodArg {
    Daily,
    Weekly,
    Monthly,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log a new mood entry
    Add {
        /// Mood category key (e.g. happy)
        #[clap(long)]
        mood: String,
        /// Display glyph for the mood (e.g. an emoji)
        #[clap(long)]
        glyph: String,
        /// Mood rating from 0 to 10
        #[clap(long)]
        value: f64,
        /// Optional free-text note
        #[clap(long)]
        note: Option<String>,
        /// Entry timestamp (YYYY-MM-DDTHH:MM:SS); defaults to now
        #[clap(long)]
        date: Option<String>,
    },

    /// Replace the fields of an existing entry (the original date is kept)
    Edit {
        /// Id of the entry to edit
        id: String,
        /// New mood category key
        #[clap(long)]
        mood: String,
        /// New display glyph
        #[clap(long)]
        glyph: String,
        /// New mood rating from 0 to 10
        #[clap(long)]
        value: f64,
        /// New note (omitting clears it)
        #[clap(long)]
        note: Option<String>,
    },

    /// Delete an entry by id
    Delete {
        /// Id of the entry to delete
        id: String,
    },

    /// List entries, optionally filtered
    List {
        /// Restrict to a date range relative to now
        #[clap(long, value_enum, default_value = "all")]
        range: RangeArg,
        /// Minimum mood value (inclusive)
        #[clap(long, default_value_t = 0.0)]
        min: f64,
        /// Maximum mood value (inclusive)
        #[clap(long, default_value_t = 10.0)]
        max: f64,
        /// Restrict to these mood category keys (repeatable)
        #[clap(long = "mood")]
        moods: Vec<String>,
    },

    /// Show summary statistics and streaks
    Stats,

    /// Show the calendar view for a month
    Calendar {
        /// Month to show (YYYY-MM); defaults to the current month
        #[clap(long)]
        month: Option<String>,
    },

    /// Show average mood trends
    Trends {
        /// Trend granularity
        #[clap(long, value_enum, default_value = "weekly")]
        period: PeriodArg,
    },

    /// Populate the store with generated demo entries
    Seed {
        /// Number of days of history to generate
        #[clap(long, default_value_t = 60)]
        days: u32,
    },
}
