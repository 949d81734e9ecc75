//! User settings for the ledger
//!
//! Settings live in an optional `ledger.json` next to the ledger file. Every
//! field has a default, so a partial file is fine and a missing one is the
//! same as `{}`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::display::table::COLUMN_WIDTH;
use crate::error::LedgerError;

/// User settings for the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Ledger file name, relative to the base directory unless absolute
    #[serde(default = "default_transactions_file")]
    pub transactions_file: PathBuf,

    /// Width of each table column in characters
    #[serde(default = "default_column_width")]
    pub column_width: usize,
}

fn default_transactions_file() -> PathBuf {
    PathBuf::from("transactions.csv")
}

fn default_column_width() -> usize {
    COLUMN_WIDTH
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            transactions_file: default_transactions_file(),
            column_width: default_column_width(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_default(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| LedgerError::Config(format!("Failed to parse settings file: {}", e)))?;

        if settings.column_width == 0 {
            return Err(LedgerError::Config(
                "column_width must be greater than zero".into(),
            ));
        }

        Ok(settings)
    }

    /// Full path of the ledger file
    pub fn transactions_path(&self, paths: &LedgerPaths) -> PathBuf {
        paths.resolve(&self.transactions_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn paths_in(temp_dir: &TempDir) -> LedgerPaths {
        LedgerPaths::with_base_dir(temp_dir.path().to_path_buf())
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(
            settings.transactions_file,
            PathBuf::from("transactions.csv")
        );
        assert_eq!(settings.column_width, 40);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings::load_or_default(&paths_in(&temp_dir)).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = paths_in(&temp_dir);
        let json = r#"{"column_width": 24}"#;
        std::fs::write(paths.settings_file(), json).unwrap();

        let settings = Settings::load_or_default(&paths).unwrap();
        assert_eq!(settings.column_width, 24);
        assert_eq!(
            settings.transactions_path(&paths),
            temp_dir.path().join("transactions.csv")
        );
    }

    #[test]
    fn test_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = paths_in(&temp_dir);
        let toml = "column_width = 24";
        std::fs::write(paths.settings_file(), toml).unwrap();

        let err = Settings::load_or_default(&paths).unwrap_err();
        assert!(matches!(err, LedgerError::Config(_)));
    }

    #[test]
    fn test_zero_width_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = paths_in(&temp_dir);
        let json = r#"{"column_width": 0}"#;
        std::fs::write(paths.settings_file(), json).unwrap();

        assert!(Settings::load_or_default(&paths).is_err());
    }
}
