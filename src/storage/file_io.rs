//! Ledger file I/O
//!
//! The ledger is a pipe-delimited text file with one transaction per line and
//! no header. Handles are opened, used and dropped within each call.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use log::{info, warn};

use crate::error::{LedgerError, LedgerResult};
use crate::models::transaction::{Transaction, FIELD_SEPARATOR};

/// Read every transaction from a ledger file, creating the file if it doesn't exist
///
/// Blank lines are skipped. The first malformed line aborts the whole read.
/// Transactions are returned in file order.
pub fn read_ledger<P: AsRef<Path>>(path: P) -> LedgerResult<Vec<Transaction>> {
    let path = path.as_ref();

    if !path.exists() {
        warn!("{} does not exist; creating a new file", path.display());
        create_empty(path)?;
        return Ok(Vec::new());
    }

    let contents = fs::read(path)
        .map_err(|e| LedgerError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

    let mut reader = ReaderBuilder::new()
        .delimiter(FIELD_SEPARATOR as u8)
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(contents.as_slice());

    let mut transactions = Vec::new();
    let mut record = StringRecord::new();
    while reader.read_record(&mut record)? {
        let offset = record.position().map(|p| p.byte()).unwrap_or_default();
        let line = line_at(&contents, offset);
        let fields: Vec<&str> = record.iter().collect();
        let txn = Transaction::from_fields(&fields)
            .map_err(|e| LedgerError::parse_at_line(line, strip_parse_prefix(e)))?;
        transactions.push(txn);
    }

    info!(
        "loaded {} transactions from {}",
        transactions.len(),
        path.display()
    );
    Ok(transactions)
}

/// Append a transaction as a new line, preceded by a newline separator
pub fn append_transaction<P: AsRef<Path>>(path: P, txn: &Transaction) -> LedgerResult<()> {
    let path = path.as_ref();

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LedgerError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    write!(file, "\n{}", txn)
        .map_err(|e| LedgerError::Io(format!("Failed to write {}: {}", path.display(), e)))?;

    file.flush()
        .map_err(|e| LedgerError::Io(format!("Failed to flush {}: {}", path.display(), e)))?;

    Ok(())
}

fn create_empty(path: &Path) -> LedgerResult<()> {
    File::create(path)
        .map(|_| ())
        .map_err(|e| LedgerError::Io(format!("Failed to create {}: {}", path.display(), e)))
}

/// 1-based physical line of the record starting at or after byte `offset`
///
/// The reader reports a record's offset before any blank lines it skipped,
/// so line breaks directly after `offset` belong to the count too.
fn line_at(contents: &[u8], offset: u64) -> u64 {
    let mut start = usize::try_from(offset)
        .unwrap_or(contents.len())
        .min(contents.len());
    while matches!(contents.get(start), Some(b'\n' | b'\r')) {
        start += 1;
    }
    let breaks = contents[..start].iter().filter(|&&b| b == b'\n').count();
    breaks as u64 + 1
}

fn strip_parse_prefix(err: LedgerError) -> String {
    match err {
        LedgerError::Parse(message) => message,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_created() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.csv");

        let txns = read_ledger(&path).unwrap();
        assert!(txns.is_empty());
        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_blank_lines_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.csv");
        let contents = "\n2023-04-15|10:13:25|ergonomic keyboard|Amazon|-89.50\n\n\
                        2023-04-16|09:00:00|refund|Amazon|89.50\n";
        fs::write(&path, contents).unwrap();

        let txns = read_ledger(&path).unwrap();
        assert_eq!(txns.len(), 2);
        assert_eq!(txns[0].description, "ergonomic keyboard");
        assert_eq!(txns[1].description, "refund");
    }

    #[test]
    fn test_quotes_are_literal() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.csv");
        let contents = "2023-04-15|10:13:25|\"big\" monitor|Best Buy|-300\n";
        fs::write(&path, contents).unwrap();

        let txns = read_ledger(&path).unwrap();
        assert_eq!(txns[0].description, "\"big\" monitor");
    }

    #[test]
    fn test_malformed_line_fails_whole_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.csv");
        fs::write(
            &path,
            "2023-04-15|10:13:25|keyboard|Amazon|-89.50\n2023-04-16|noon|lunch|Cafe|-12\n",
        )
        .unwrap();

        let err = read_ledger(&path).unwrap_err();
        assert!(err.is_parse());
        assert!(err.to_string().contains("line 2"), "{}", err);
        assert!(err.to_string().contains("invalid time 'noon'"), "{}", err);
    }

    #[test]
    fn test_error_line_counts_every_blank_line() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.csv");
        fs::write(
            &path,
            "\n\n2023-04-15|10:13:25|keyboard|Amazon|-89.50\n\n2023-04-16|bad|lunch|Cafe|-12\n",
        )
        .unwrap();

        let err = read_ledger(&path).unwrap_err();
        assert!(err.to_string().contains("line 5:"), "{}", err);
        assert!(err.to_string().contains("invalid time 'bad'"), "{}", err);
    }

    #[test]
    fn test_error_line_after_crlf_blank_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.csv");
        let contents = "2023-04-15|10:13:25|keyboard|Amazon|-89.50\r\n\r\n\r\n\
                        2023-04-16|09:00|lunch|Cafe|-12\r\n";
        fs::write(&path, contents).unwrap();

        let err = read_ledger(&path).unwrap_err();
        assert!(err.to_string().contains("line 4:"), "{}", err);
    }

    #[test]
    fn test_line_at() {
        let contents = b"a\n\n\nb\nc";
        assert_eq!(line_at(contents, 0), 1);
        assert_eq!(line_at(contents, 2), 4);
        assert_eq!(line_at(contents, 7), 5);
        assert_eq!(line_at(contents, 99), 5);
    }

    #[test]
    fn test_append_writes_leading_newline() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.csv");
        let txn: Transaction = "2023-04-15|10:13:25|ergonomic keyboard|Amazon|-89.50"
            .parse()
            .unwrap();

        append_transaction(&path, &txn).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "\n2023-04-15|10:13:25|ergonomic keyboard|Amazon|-89.50"
        );

        let reloaded = read_ledger(&path).unwrap();
        assert_eq!(reloaded, vec![txn]);
    }

    #[test]
    fn test_append_to_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("transactions.csv");
        let txn: Transaction = "2023-04-15|10:13:25|keyboard|Amazon|-89.50"
            .parse()
            .unwrap();

        let err = append_transaction(&path, &txn).unwrap_err();
        assert!(err.is_io());
    }
}
