//! Storage layer for the ledger
//!
//! Pipe-delimited text file storage with append-only writes.

pub mod file_io;
pub mod transactions;

pub use file_io::{append_transaction, read_ledger};
pub use transactions::TransactionStore;
