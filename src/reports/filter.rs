//! Transaction filters
//!
//! Read-only views over a loaded collection. Each filter is lazy and yields
//! entries in the collection's own order (newest first for a store).

use chrono::NaiveDate;

use crate::models::{Transaction, TransactionKind};

/// Entries of the given kind
pub fn by_kind(
    transactions: &[Transaction],
    kind: TransactionKind,
) -> impl Iterator<Item = &Transaction> + '_ {
    transactions.iter().filter(move |t| t.kind() == kind)
}

/// Entries dated from `start` to `end`, both inclusive
pub fn by_date_range(
    transactions: &[Transaction],
    start: NaiveDate,
    end: NaiveDate,
) -> impl Iterator<Item = &Transaction> + '_ {
    let range = DateRange::new(start, end);
    transactions.iter().filter(move |t| range.contains(t.date))
}

/// Entries whose vendor equals `name`, ignoring case
pub fn by_vendor<'a>(
    transactions: &'a [Transaction],
    name: &str,
) -> impl Iterator<Item = &'a Transaction> + 'a {
    let wanted = name.to_lowercase();
    transactions
        .iter()
        .filter(move |t| t.vendor.to_lowercase() == wanted)
}

/// Inclusive date window
///
/// Membership is tested against a one-day pad on each side
/// (`start - 1 < date < end + 1`), which is the same set as `start..=end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        let after_start = self.start.pred_opt().map_or(true, |before| date > before);
        let before_end = self.end.succ_opt().map_or(true, |after| date < after);
        after_start && before_end
    }
}
