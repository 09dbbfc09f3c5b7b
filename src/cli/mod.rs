//! CLI command handlers
//!
//! This module bridges the clap argument parsing in the binary with the
//! service layer: a roster overview command and the interactive session loop.

pub mod accounts;
pub mod session;

pub use accounts::handle_accounts_command;
pub use session::{run_session, SessionCommand};
