//! Path management for the ledger
//!
//! ## Path Resolution Order
//!
//! 1. `LEDGER_HOME` environment variable (if set)
//! 2. The current working directory

use std::path::{Path, PathBuf};

use crate::error::LedgerError;

/// Environment variable overriding the base directory
pub const LEDGER_HOME_ENV: &str = "LEDGER_HOME";

/// Manages all paths used by the ledger
#[derive(Debug, Clone)]
pub struct LedgerPaths {
    /// Directory holding the settings file and, by default, the ledger file
    base_dir: PathBuf,
}

impl LedgerPaths {
    /// Create a new LedgerPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if `LEDGER_HOME` is unset and the current directory
    /// cannot be determined.
    pub fn new() -> Result<Self, LedgerError> {
        let base_dir = match std::env::var_os(LEDGER_HOME_ENV) {
            Some(custom) => PathBuf::from(custom),
            None => std::env::current_dir().map_err(|e| {
                LedgerError::Config(format!("Failed to resolve current directory: {}", e))
            })?,
        };

        Ok(Self { base_dir })
    }

    /// Create LedgerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("ledger.json")
    }

    /// Resolve a ledger file name against the base directory
    ///
    /// Absolute paths are returned unchanged.
    pub fn resolve(&self, file: impl AsRef<Path>) -> PathBuf {
        self.base_dir.join(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("ledger.json"));
    }

    #[test]
    fn test_resolve_relative_and_absolute() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(
            paths.resolve("transactions.csv"),
            temp_dir.path().join("transactions.csv")
        );

        let absolute = temp_dir.path().join("elsewhere").join("book.csv");
        assert_eq!(paths.resolve(&absolute), absolute);
    }
}
