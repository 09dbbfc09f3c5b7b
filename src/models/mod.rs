//! Core data models for minibank
//!
//! This module contains the data structures that represent the banking
//! domain: currency amounts, account identity, and accounts themselves.

pub mod account;
pub mod ids;
pub mod money;

pub use account::{derive_username, Account, AccountValidationError};
pub use ids::AccountId;
pub use money::Money;
