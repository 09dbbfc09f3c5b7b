//! Minibank - terminal banking demo backed by an in-memory ledger
//!
//! This library provides the core functionality for the minibank demo: a
//! small fleet of accounts, a login session, and the validation rules that
//! govern transfers, loans, and account closure. Balances are never stored;
//! they are always derived from an account's movement history.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `models`: Core data models (money, account identity, accounts)
//! - `store`: The in-memory account collection
//! - `ledger`: Pure computations over an account's movements
//! - `auth`: Authentication and the session state machine
//! - `services`: Business logic layer (transfer, loan, closure)
//! - `roster`: Account seed loading and the built-in demo roster
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the binary
//!
//! # Example
//!
//! ```rust
//! use minibank::auth::Authenticator;
//! use minibank::store::AccountStore;
//! use minibank::{ledger, roster};
//!
//! let store = AccountStore::new(roster::demo_accounts()?)?;
//! let session = Authenticator::new(&store).login("as", 1111)?;
//! let account = session.account(&store).ok_or(minibank::BankError::NoSession)?;
//! println!("{}", ledger::balance(account));
//! # Ok::<(), minibank::BankError>(())
//! ```

pub mod auth;
pub mod cli;
pub mod display;
pub mod error;
pub mod ledger;
pub mod models;
pub mod roster;
pub mod services;
pub mod store;

pub use error::{BankError, BankResult};
