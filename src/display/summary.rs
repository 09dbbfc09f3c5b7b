//! Balance and summary formatting

use chrono::{DateTime, Utc};

use crate::ledger::LedgerSummary;
use crate::models::Money;

/// The banner shown after a successful login
pub fn format_welcome(first_name: &str) -> String {
    format!("Welcome back, {}", first_name)
}

/// The balance line, stamped with the time it was computed
pub fn format_balance(balance: Money, as_of: DateTime<Utc>) -> String {
    format!(
        "Balance: {} (as of {})",
        balance,
        as_of.format("%Y-%m-%d %H:%M")
    )
}

/// The in/out/interest summary line
pub fn format_summary(summary: &LedgerSummary) -> String {
    format!(
        "In: {}  Out: {}  Interest: {}",
        summary.total_in, summary.total_out, summary.interest
    )
}
