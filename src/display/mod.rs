//! Display formatting for terminal output
//!
//! Pure functions that render ledger data to strings; nothing here touches
//! the store or the session.

pub mod movements;
pub mod roster;
pub mod summary;

pub use movements::{format_movement_register, format_movement_row};
pub use roster::format_account_list;
pub use summary::{format_balance, format_summary, format_welcome};
