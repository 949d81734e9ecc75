//! Menu state machine
//!
//! Every menu screen is a state. A static table maps `(state, token)` to the
//! next state and, optionally, a command for the session to run.

use crate::error::{LedgerError, LedgerResult};
use crate::reports::ReportPeriod;

/// Which menu screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Main,
    Ledger,
    Reports,
}

/// Work triggered by a menu choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    AddDeposit,
    AddPayment,
    ShowAll,
    ShowDeposits,
    ShowPayments,
    Report(ReportPeriod),
    SearchVendor,
    ReturnHome,
    Exit,
}

/// One row of the transition table
#[derive(Debug, Clone)]
pub struct MenuEntry {
    /// Screen this entry belongs to
    pub state: MenuState,
    /// Input that selects it (case-insensitive)
    pub token: &'static str,
    /// Text shown next to the token
    pub label: &'static str,
    /// Screen to show afterwards
    pub next: MenuState,
    /// Command to run, if any
    pub command: Option<Command>,
}

const fn entry(
    state: MenuState,
    token: &'static str,
    label: &'static str,
    next: MenuState,
    command: Option<Command>,
) -> MenuEntry {
    MenuEntry {
        state,
        token,
        label,
        next,
        command,
    }
}

use Command::*;
use MenuState::{Ledger, Main, Reports};

/// All menu transitions, in display order per screen
#[rustfmt::skip]
pub static MENU: &[MenuEntry] = &[
    // Main
    entry(Main, "D", "Add Deposit", Main, Some(AddDeposit)),
    entry(Main, "P", "Make Payment (Debit)", Main, Some(AddPayment)),
    entry(Main, "L", "Ledger", Ledger, None),
    entry(Main, "X", "Exit", Main, Some(Exit)),
    // Ledger
    entry(Ledger, "A", "All", Ledger, Some(ShowAll)),
    entry(Ledger, "D", "Deposits", Ledger, Some(ShowDeposits)),
    entry(Ledger, "P", "Payments", Ledger, Some(ShowPayments)),
    entry(Ledger, "R", "Reports", Reports, None),
    entry(Ledger, "H", "Home", Main, Some(ReturnHome)),
    // Reports
    entry(Reports, "1", "Month To Date", Reports, Some(Report(ReportPeriod::MonthToDate))),
    entry(Reports, "2", "Previous Month", Reports, Some(Report(ReportPeriod::PreviousMonth))),
    entry(Reports, "3", "Year To Date", Reports, Some(Report(ReportPeriod::YearToDate))),
    entry(Reports, "4", "Previous Year", Reports, Some(Report(ReportPeriod::PreviousYear))),
    entry(Reports, "5", "Search by Vendor", Reports, Some(SearchVendor)),
    entry(Reports, "0", "Back", Ledger, None),
];

impl MenuState {
    /// Heading printed above the options (the main menu has none)
    pub fn title(&self) -> Option<&'static str> {
        match self {
            Self::Main => None,
            Self::Ledger => Some("Ledger"),
            Self::Reports => Some("Reports"),
        }
    }

    /// Entries available on this screen
    pub fn entries(self) -> impl Iterator<Item = &'static MenuEntry> {
        MENU.iter().filter(move |e| e.state == self)
    }

    /// The menu text for this screen
    pub fn render(&self) -> String {
        let mut output = String::from("\n");
        if let Some(title) = self.title() {
            output.push_str(title);
            output.push('\n');
        }
        output.push_str("Choose an option:\n");
        for entry in self.entries() {
            output.push_str(&format!("{}) {}\n", entry.token, entry.label));
        }
        output
    }

    /// Look up the entry selected by `input`
    pub fn transition(self, input: &str) -> LedgerResult<&'static MenuEntry> {
        let token = input.trim();
        self.entries()
            .find(|e| e.token.eq_ignore_ascii_case(token))
            .ok_or_else(|| LedgerError::InvalidOption(token.to_string()))
    }
}
