//! Line-oriented input helpers
//!
//! Generic over `BufRead`/`Write` so the session can be driven by stdin or by
//! an in-memory buffer.

use std::io::{BufRead, Write};

use crate::error::{LedgerError, LedgerResult};
use crate::models::transaction::{parse_amount, parse_date, parse_time};
use crate::models::{Transaction, TransactionKind};

/// Read one line with surrounding whitespace removed; `None` at end of input
pub fn read_line<R: BufRead>(input: &mut R) -> LedgerResult<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Print a question and read the answer
pub fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> LedgerResult<String> {
    write!(output, "{}", question)?;
    output.flush()?;
    read_line(input)?
        .ok_or_else(|| LedgerError::Io("input closed before an answer was given".into()))
}

/// Ask for every field of a new deposit or payment
///
/// The amount is forced to the sign of `kind`. Stops at the first field that
/// fails to parse.
pub fn prompt_transaction<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    kind: TransactionKind,
) -> LedgerResult<Transaction> {
    let date = parse_date(&ask(input, output, "Enter the date (YYYY-MM-DD): ")?)?;
    let time = parse_time(&ask(input, output, "Enter the time (HH:MM:SS): ")?)?;
    let description = ask(input, output, "Enter the description: ")?;
    let vendor = ask(input, output, "Enter the vendor: ")?;
    let amount_question = format!("Enter the amount of the {}: ", kind);
    let amount = parse_amount(&ask(input, output, &amount_question)?)?;

    let txn = Transaction::new(date, time, description, vendor, kind.normalize(amount));
    txn.validate()?;
    Ok(txn)
}
