//! Transaction model
//!
//! One ledger entry. A transaction is a deposit or a payment depending only on
//! the sign of its amount; the kind is never stored separately.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

use crate::error::{LedgerError, LedgerResult};

/// Date format used in the ledger file and in tables
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Time format used in the ledger file and in tables
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Field separator of the ledger file
pub const FIELD_SEPARATOR: char = '|';

/// Number of fields in one ledger line
pub const FIELD_COUNT: usize = 5;

/// Whether a transaction adds or removes money
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    /// Amount is zero or positive
    Deposit,
    /// Amount is negative
    Payment,
}

impl TransactionKind {
    /// Classify an amount
    pub fn of(amount: Decimal) -> Self {
        if amount < Decimal::ZERO {
            Self::Payment
        } else {
            Self::Deposit
        }
    }

    /// Force an amount to carry this kind's sign
    ///
    /// Zero is returned unchanged.
    pub fn normalize(&self, amount: Decimal) -> Decimal {
        match self {
            Self::Payment if amount > Decimal::ZERO => -amount,
            Self::Deposit if amount < Decimal::ZERO => amount.abs(),
            _ => amount,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deposit => write!(f, "deposit"),
            Self::Payment => write!(f, "payment"),
        }
    }
}

/// A single ledger entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub description: String,
    pub vendor: String,
    /// Positive for deposits, negative for payments
    pub amount: Decimal,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        date: NaiveDate,
        time: NaiveTime,
        description: impl Into<String>,
        vendor: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Self {
            date,
            time,
            description: description.into(),
            vendor: vendor.into(),
            amount,
        }
    }

    /// Build a transaction from the five fields of a ledger line
    pub fn from_fields(fields: &[&str]) -> LedgerResult<Self> {
        if fields.len() != FIELD_COUNT {
            return Err(LedgerError::Parse(format!(
                "expected {} fields, found {}",
                FIELD_COUNT,
                fields.len()
            )));
        }

        Ok(Self {
            date: parse_date(fields[0])?,
            time: parse_time(fields[1])?,
            description: fields[2].to_string(),
            vendor: fields[3].to_string(),
            amount: parse_amount(fields[4])?,
        })
    }

    /// Derived kind of this transaction
    pub fn kind(&self) -> TransactionKind {
        TransactionKind::of(self.amount)
    }

    /// Check if this is a payment (negative amount)
    pub fn is_payment(&self) -> bool {
        self.kind() == TransactionKind::Payment
    }

    /// Check if this is a deposit (zero or positive amount)
    pub fn is_deposit(&self) -> bool {
        self.kind() == TransactionKind::Deposit
    }

    /// Date in its canonical `YYYY-MM-DD` form
    pub fn date_text(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    /// Time in its canonical `HH:MM:SS` form
    pub fn time_text(&self) -> String {
        self.time.format(TIME_FORMAT).to_string()
    }

    /// Check that the free-text fields can be written to a ledger line
    pub fn validate(&self) -> LedgerResult<()> {
        check_field("description", &self.description)?;
        check_field("vendor", &self.vendor)
    }
}

/// Serializes as a ledger line, without a line terminator
impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}{sep}{}{sep}{}",
            self.date_text(),
            self.time_text(),
            self.description,
            self.vendor,
            self.amount,
            sep = FIELD_SEPARATOR
        )
    }
}

/// Parses a single ledger line
impl FromStr for Transaction {
    type Err = LedgerError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        Self::from_fields(&fields)
    }
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(s: &str) -> LedgerResult<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|e| LedgerError::Parse(format!("invalid date '{}': {}", s, e)))
}

/// Parse an `HH:MM:SS` time
pub fn parse_time(s: &str) -> LedgerResult<NaiveTime> {
    NaiveTime::parse_from_str(s, TIME_FORMAT)
        .map_err(|e| LedgerError::Parse(format!("invalid time '{}': {}", s, e)))
}

/// Parse an exact decimal amount, keeping its scale
///
/// Amounts with more digits than a `Decimal` holds are rejected, not rounded.
pub fn parse_amount(s: &str) -> LedgerResult<Decimal> {
    Decimal::from_str_exact(s)
        .map_err(|e| LedgerError::Parse(format!("invalid amount '{}': {}", s, e)))
}

fn check_field(name: &str, value: &str) -> LedgerResult<()> {
    if value.contains(FIELD_SEPARATOR) || value.contains(['\n', '\r']) {
        return Err(LedgerError::Validation(format!(
            "{} must not contain '{}' or line breaks",
            name, FIELD_SEPARATOR
        )));
    }
    Ok(())
}
