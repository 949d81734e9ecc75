//! Transaction store
//!
//! Owns the in-memory collection and the path of the ledger file it mirrors.
//! The collection is always sorted by date, newest first; entries on the same
//! date keep their file/insertion order.

use std::path::{Path, PathBuf};

use log::debug;

use crate::error::LedgerResult;
use crate::models::Transaction;

use super::file_io::{append_transaction, read_ledger};

/// Ledger file plus its loaded transactions
#[derive(Debug)]
pub struct TransactionStore {
    path: PathBuf,
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    /// Load the ledger at `path`, creating an empty file if needed
    pub fn load(path: impl Into<PathBuf>) -> LedgerResult<Self> {
        let path = path.into();
        let mut transactions = read_ledger(&path)?;
        sort_newest_first(&mut transactions);
        Ok(Self { path, transactions })
    }

    /// A store over `path` that starts with no transactions and doesn't touch the file
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            transactions: Vec::new(),
        }
    }

    /// Persist a transaction, then add it to the collection
    ///
    /// If the write fails the collection is left unchanged.
    pub fn append(&mut self, txn: Transaction) -> LedgerResult<()> {
        txn.validate()?;
        append_transaction(&self.path, &txn)?;
        debug!("appended {} to {}", txn, self.path.display());

        self.transactions.push(txn);
        sort_newest_first(&mut self.transactions);
        Ok(())
    }

    /// All transactions, newest first
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Path of the backing ledger file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Count transactions
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Check if the store holds no transactions
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

/// Stable sort, newest date first
fn sort_newest_first(transactions: &mut [Transaction]) {
    transactions.sort_by(|a, b| b.date.cmp(&a.date));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LedgerError;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, TransactionStore) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.csv");
        let store = TransactionStore::load(path).unwrap();
        (temp_dir, store)
    }

    fn txn(line: &str) -> Transaction {
        line.parse().unwrap()
    }

    fn assert_newest_first(store: &TransactionStore) {
        for pair in store.transactions().windows(2) {
            assert!(
                pair[0].date >= pair[1].date,
                "{} before {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_empty_load() {
        let (temp_dir, store) = create_test_store();
        assert!(store.is_empty());
        assert!(temp_dir.path().join("transactions.csv").exists());
    }

    #[test]
    fn test_load_sorts_newest_first_and_keeps_ties_in_file_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.csv");
        fs::write(
            &path,
            "2023-01-05|08:00:00|coffee|Cafe|-3.50\n\
             2023-03-01|12:00:00|first on march 1|A|10\n\
             2023-02-10|09:30:00|groceries|Market|-45.10\n\
             2023-03-01|07:00:00|second on march 1|B|20\n",
        )
        .unwrap();

        let store = TransactionStore::load(&path).unwrap();
        let descriptions: Vec<&str> = store
            .transactions()
            .iter()
            .map(|t| t.description.as_str())
            .collect();
        assert_eq!(
            descriptions,
            vec!["first on march 1", "second on march 1", "groceries", "coffee"]
        );
    }

    #[test]
    fn test_append_keeps_order() {
        let (_temp_dir, mut store) = create_test_store();

        for line in [
            "2023-04-15|10:13:25|keyboard|Amazon|-89.50",
            "2023-05-01|09:00:00|salary|Employer|3000.00",
            "2023-01-20|18:45:00|dinner|Bistro|-42",
            "2023-04-15|22:00:00|late order|Amazon|-12.99",
        ] {
            store.append(txn(line)).unwrap();
        }

        assert_eq!(store.len(), 4);
        assert_newest_first(&store);
        assert_eq!(store.transactions()[0].description, "salary");
        assert_eq!(store.transactions()[1].description, "keyboard");
        assert_eq!(store.transactions()[2].description, "late order");
        assert_eq!(store.transactions()[3].description, "dinner");
    }

    #[test]
    fn test_append_then_reload() {
        let (temp_dir, mut store) = create_test_store();
        let original = txn("2023-04-15|10:13:25|ergonomic keyboard|Amazon|-89.50");

        store.append(original.clone()).unwrap();

        let path = temp_dir.path().join("transactions.csv");
        let reloaded = TransactionStore::load(path).unwrap();
        assert_eq!(reloaded.transactions(), &[original]);
    }

    #[test]
    fn test_failed_append_leaves_collection_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("no-such-dir").join("t.csv");
        let mut store = TransactionStore::empty(path);

        let err = store
            .append(txn("2023-04-15|10:13:25|keyboard|Amazon|-89.50"))
            .unwrap_err();
        assert!(err.is_io());
        assert!(store.is_empty());
    }

    #[test]
    fn test_append_rejects_separator_in_fields() {
        let (temp_dir, mut store) = create_test_store();
        let mut bad = txn("2023-04-15|10:13:25|keyboard|Amazon|-89.50");
        bad.description = "a|b".into();

        let err = store.append(bad).unwrap_err();
        assert!(matches!(err, LedgerError::Validation(_)));
        assert!(store.is_empty());
        let path = temp_dir.path().join("transactions.csv");
        assert_eq!(fs::read_to_string(path).unwrap(), "");
    }

    #[test]
    fn test_empty_store_does_not_create_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.csv");
        let store = TransactionStore::empty(&path);

        assert!(store.is_empty());
        assert_eq!(store.path(), path.as_path());
        assert!(!path.exists());
    }
}
