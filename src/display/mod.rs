//! Display formatting for terminal output

pub mod table;

pub use table::{center_text, format_table, Border, TableLayout};
