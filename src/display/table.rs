//! Bordered transaction table
//!
//! Renders a title bar over a five-column grid:
//!
//! ```text
//! ┌──────────────────────┐
//! │        title         │
//! ├────┬────┬────┬────┬──┤
//! │DATE│TIME│DESC│VEND│AM│
//! ├────┼────┼────┼────┼──┤
//! │ .. │ .. │ .. │ .. │..│
//! └────┴────┴────┴────┴──┘
//! ```
//!
//! Cells never truncate: text wider than its column pushes the rest of the
//! row to the right.

use crate::models::Transaction;

/// Default width of each column in characters
pub const COLUMN_WIDTH: usize = 40;

/// Column headings, left to right
pub const COLUMN_HEADERS: [&str; 5] = ["DATE", "TIME", "DESCRIPTION", "VENDOR", "AMOUNT"];

const VERTICAL: char = '│';
const HORIZONTAL: char = '─';

/// Which horizontal rule to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Border {
    /// Above the title, no column joints
    Top,
    /// Between the title and the column headings
    HeaderSeparator,
    /// Between rows
    RowSeparator,
    /// Below the last row
    Bottom,
}

impl Border {
    /// (left, joint, right) glyphs
    fn glyphs(&self) -> (char, char, char) {
        match self {
            Self::Top => ('┌', HORIZONTAL, '┐'),
            Self::HeaderSeparator => ('├', '┬', '┤'),
            Self::RowSeparator => ('├', '┼', '┤'),
            Self::Bottom => ('└', '┴', '┘'),
        }
    }
}

/// Fixed column layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLayout {
    column_width: usize,
}

impl Default for TableLayout {
    fn default() -> Self {
        Self::new(COLUMN_WIDTH)
    }
}

impl TableLayout {
    pub fn new(column_width: usize) -> Self {
        Self { column_width }
    }

    pub fn column_width(&self) -> usize {
        self.column_width
    }

    /// Width between the outer borders: the columns plus the separators between them
    pub fn interior_width(&self) -> usize {
        let columns = COLUMN_HEADERS.len();
        columns * self.column_width + (columns - 1)
    }

    /// A horizontal rule, including its line terminator
    pub fn border(&self, border: Border) -> String {
        let (left, joint, right) = border.glyphs();
        let mut line = String::new();
        line.push(left);
        for i in 0..self.interior_width() {
            if (i + 1) % (self.column_width + 1) == 0 {
                line.push(joint);
            } else {
                line.push(HORIZONTAL);
            }
        }
        line.push(right);
        line.push('\n');
        line
    }

    /// The title bar spanning all columns
    pub fn title_row(&self, title: &str) -> String {
        format!(
            "{v}{}{v}\n",
            center_text(title, self.interior_width()),
            v = VERTICAL
        )
    }

    /// One row of five cells
    pub fn row(&self, cells: [&str; 5]) -> String {
        let mut line = String::new();
        line.push(VERTICAL);
        for cell in cells {
            line.push_str(&center_text(cell, self.column_width));
            line.push(VERTICAL);
        }
        line.push('\n');
        line
    }

    /// Top border, title, column headings and the rule below them
    pub fn header(&self, title: &str) -> String {
        let mut output = self.border(Border::Top);
        output.push_str(&self.title_row(title));
        output.push_str(&self.border(Border::HeaderSeparator));
        output.push_str(&self.row(COLUMN_HEADERS));
        output.push_str(&self.border(Border::RowSeparator));
        output
    }

    /// A transaction row
    pub fn transaction_row(&self, txn: &Transaction) -> String {
        let date = txn.date_text();
        let time = txn.time_text();
        let amount = txn.amount.to_string();
        self.row([
            date.as_str(),
            time.as_str(),
            txn.description.as_str(),
            txn.vendor.as_str(),
            amount.as_str(),
        ])
    }

    /// The whole table
    ///
    /// Every row is followed by a row separator except the last, which gets
    /// the bottom border. With no rows the output ends after the header, so
    /// there is no bottom border at all.
    pub fn render<'a, I>(&self, title: &str, transactions: I) -> String
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut output = self.header(title);
        let mut rows = transactions.into_iter().peekable();
        while let Some(txn) = rows.next() {
            output.push_str(&self.transaction_row(txn));
            let border = if rows.peek().is_some() {
                Border::RowSeparator
            } else {
                Border::Bottom
            };
            output.push_str(&self.border(border));
        }
        output
    }
}

/// Render a table with the default layout
pub fn format_table<'a, I>(title: &str, transactions: I) -> String
where
    I: IntoIterator<Item = &'a Transaction>,
{
    TableLayout::default().render(title, transactions)
}

/// Pad `text` with spaces so it sits in the middle of `width` columns
///
/// Left padding is `width / 2 - len / 2`, so odd leftovers fall on the left
/// for odd-length text in an even width. Text at least `width` long is
/// returned untouched.
pub fn center_text(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }

    let left = width / 2 - len / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}
