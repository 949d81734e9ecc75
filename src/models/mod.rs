//! Core data models for the ledger

pub mod transaction;

pub use transaction::{Transaction, TransactionKind};
