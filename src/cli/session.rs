//! Interactive session
//!
//! Drives the menu state machine against a transaction store. Errors from a
//! single command are printed and the session keeps going; only a failure to
//! write to the output ends it early.

use std::io::{BufRead, Write};

use chrono::NaiveDate;
use log::{debug, warn};

use super::menu::{Command, MenuState};
use super::prompt::{ask, prompt_transaction, read_line};
use crate::config::Settings;
use crate::display::TableLayout;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Transaction, TransactionKind};
use crate::reports::{by_date_range, by_kind, by_vendor, ReportPeriod};
use crate::storage::TransactionStore;

/// Printed instead of a table when a view matches nothing
pub const NO_RESULTS: &str = "There are no results.";

/// Whether the session should keep reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// A running menu session
pub struct Session<R, W> {
    store: TransactionStore,
    settings: Settings,
    layout: TableLayout,
    input: R,
    output: W,
    state: MenuState,
    today: NaiveDate,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session starting at the main menu, with today's local date
    pub fn new(store: TransactionStore, settings: Settings, input: R, output: W) -> Self {
        Self {
            store,
            layout: TableLayout::new(settings.column_width),
            settings,
            input,
            output,
            state: MenuState::Main,
            today: chrono::Local::now().date_naive(),
        }
    }

    /// Use a fixed date for the report periods
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// The store this session writes to
    pub fn store(&self) -> &TransactionStore {
        &self.store
    }

    /// Settings the session was started with
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Current menu screen
    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Consume the session, returning its output sink
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> LedgerResult<()> {
        writeln!(self.output, "Welcome to the transaction ledger")?;

        loop {
            write!(self.output, "{}Enter: ", self.state.render())?;
            self.output.flush()?;

            let Some(input) = read_line(&mut self.input)? else {
                debug!("input closed, leaving session");
                break;
            };

            match self.step(&input) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(e @ LedgerError::InvalidOption(_)) => {
                    writeln!(self.output, "{}", e)?;
                }
                Err(e) => {
                    warn!("command failed: {}", e);
                    writeln!(self.output, "Error: {}", e)?;
                }
            }
        }

        Ok(())
    }

    /// Apply one line of menu input
    fn step(&mut self, input: &str) -> LedgerResult<Flow> {
        let entry = self.state.transition(input)?;
        debug!("{:?} --{}--> {:?}", self.state, entry.token, entry.next);
        self.state = entry.next;

        match entry.command {
            Some(command) => self.execute(command),
            None => Ok(Flow::Continue),
        }
    }

    fn execute(&mut self, command: Command) -> LedgerResult<Flow> {
        match command {
            Command::AddDeposit => self.add(TransactionKind::Deposit)?,
            Command::AddPayment => self.add(TransactionKind::Payment)?,
            Command::ShowAll => {
                let table = self.view("Transaction Ledger", self.store.transactions());
                self.print(&table)?;
            }
            Command::ShowDeposits => {
                let rows = by_kind(self.store.transactions(), TransactionKind::Deposit);
                let table = self.view("Transaction Deposits", rows);
                self.print(&table)?;
            }
            Command::ShowPayments => {
                let rows = by_kind(self.store.transactions(), TransactionKind::Payment);
                let table = self.view("Transaction Payments", rows);
                self.print(&table)?;
            }
            Command::Report(period) => self.report(period)?,
            Command::SearchVendor => {
                let vendor = ask(&mut self.input, &mut self.output, "Enter a vendor: ")?;
                let rows = by_vendor(self.store.transactions(), &vendor);
                let table = self.view("Transactions Organized by Vendor", rows);
                self.print(&table)?;
            }
            Command::ReturnHome => writeln!(self.output, "Returning Home")?,
            Command::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    fn add(&mut self, kind: TransactionKind) -> LedgerResult<()> {
        let txn = prompt_transaction(&mut self.input, &mut self.output, kind)?;
        self.store.append(txn)?;

        let noun = match kind {
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Payment => "Payment",
        };
        writeln!(self.output, "{} recorded.", noun)?;
        Ok(())
    }

    fn report(&mut self, period: ReportPeriod) -> LedgerResult<()> {
        let range = period.range(self.today)?;
        let rows = by_date_range(self.store.transactions(), range.start, range.end);
        let table = self.view(period.title(), rows);
        self.print(&table)
    }

    /// A table of `rows`, or the no-results line when there are none
    fn view<'a, I>(&self, title: &str, rows: I) -> String
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let rows: Vec<&Transaction> = rows.into_iter().collect();
        if rows.is_empty() {
            format!("{}\n", NO_RESULTS)
        } else {
            self.layout.render(title, rows)
        }
    }

    fn print(&mut self, text: &str) -> LedgerResult<()> {
        writeln!(self.output)?;
        write!(self.output, "{}", text)?;
        Ok(())
    }
}
