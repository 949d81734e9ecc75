//! Configuration module for the ledger
//!
//! - Base directory resolution
//! - Optional settings file

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::Settings;
