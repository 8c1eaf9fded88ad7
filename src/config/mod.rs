//! Configuration management for the moodlog application.
//!
//! This module handles loading and validating configuration settings from
//! environment variables, with sensible defaults.
//!
//! # Environment Variables
//!
//! - `MOODLOG_DIR`: Path to the data directory (defaults to ~/Documents/moodlogs)
//! - `HOME`: Used for expanding the default data directory path

use crate::constants::{
    DATABASE_FILE_NAME, DEFAULT_DATA_SUBDIR, ENV_VAR_HOME, ENV_VAR_MOODLOG_DIR,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Configuration for the moodlog application.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use moodlog::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     data_dir: PathBuf::from("/path/to/moodlogs"),
/// };
/// assert!(config.database_path().ends_with("moodlog.db"));
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory where the mood entry database is stored.
    ///
    /// Loaded from the `MOODLOG_DIR` environment variable with a fallback to
    /// ~/Documents/moodlogs if not specified.
    pub data_dir: PathBuf,
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// The data directory path is expanded with `shellexpand` so `~` and
    /// environment variable references work.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the directory path expansion fails or
    /// the resulting path is empty.
    pub fn load() -> AppResult<Self> {
        let data_dir_str = env::var(ENV_VAR_MOODLOG_DIR).unwrap_or_else(|_| {
            let home = env::var(ENV_VAR_HOME).unwrap_or_default();
            format!("{}/{}", home, DEFAULT_DATA_SUBDIR)
        });

        let expanded = shellexpand::full(&data_dir_str)
            .map_err(|e| AppError::Config(format!("Failed to expand data directory path: {}", e)))?;

        let config = Config {
            data_dir: PathBuf::from(expanded.as_ref()),
        };
        config.validate()?;

        debug!("Loaded configuration");
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the data directory path is empty.
    pub fn validate(&self) -> AppResult<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(AppError::Config(
                "Data directory cannot be empty. Set MOODLOG_DIR or HOME.".to_string(),
            ));
        }
        Ok(())
    }

    /// Full path of the SQLite database file inside the data directory.
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILE_NAME)
    }

    /// Creates the data directory if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Io` if the directory cannot be created.
    pub fn ensure_data_dir(&self) -> AppResult<()> {
        if !self.data_dir.exists() {
            debug!("Creating data directory {:?}", self.data_dir);
            fs::create_dir_all(&self.data_dir)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_empty_dir() {
        let config = Config {
            data_dir: PathBuf::new(),
        };
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_database_path_appends_file_name() {
        let config = Config {
            data_dir: PathBuf::from("/tmp/moods"),
        };
        assert_eq!(
            config.database_path(),
            PathBuf::from("/tmp/moods/moodlog.db")
        );
    }

    #[test]
    fn test_ensure_data_dir_creates_directory() {
        let temp = tempfile::TempDir::new().unwrap();
        let config = Config {
            data_dir: temp.path().join("nested/moodlogs"),
        };
        config.ensure_data_dir().unwrap();
        assert!(config.data_dir.is_dir());
    }
}
