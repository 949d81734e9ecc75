//! Interactive menu
//!
//! The menu is a state machine over three screens. The session feeds it lines
//! of input and runs the commands it yields against the transaction store.

pub mod menu;
pub mod prompt;
pub mod session;

pub use menu::{Command, MenuState};
pub use session::Session;
