//! Ledger - terminal transaction ledger
//!
//! Records deposits and payments in a pipe-delimited text file and prints
//! filtered views of them as fixed-width tables.
//!
//! # Architecture
//!
//! - `config`: Base directory and settings
//! - `error`: Custom error types
//! - `models`: The transaction record
//! - `storage`: Ledger file reading and appending
//! - `reports`: Filters and report periods
//! - `display`: Table rendering
//! - `cli`: Menu state machine and interactive session
//!
//! # Example
//!
//! ```rust,ignore
//! use ledger::config::{LedgerPaths, Settings};
//! use ledger::storage::TransactionStore;
//!
//! let paths = LedgerPaths::new()?;
//! let settings = Settings::load_or_default(&paths)?;
//! let store = TransactionStore::load(settings.transactions_path(&paths))?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
