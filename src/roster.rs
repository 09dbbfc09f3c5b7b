//! Account roster loading
//!
//! A roster is the JSON seed list the store is built from at startup: owner,
//! movement history in cents, interest rate, and PIN per account. Usernames
//! are not part of the format; they are derived when accounts are created.
//! The built-in demo roster ships four accounts.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::BankResult;
use crate::models::{Account, Money};

/// One roster entry, as stored in the JSON seed file
#[derive(Debug, Clone, Deserialize)]
pub struct AccountSeed {
    /// Full display name of the owner
    pub owner: String,
    /// Movement amounts in cents, oldest first
    pub movements: Vec<Money>,
    /// Interest percentage applied to qualifying deposits
    pub interest_rate: f64,
    /// Numeric login credential
    pub pin: u32,
}

impl AccountSeed {
    /// Build the account this seed describes
    pub fn into_account(self) -> Account {
        Account::new(self.owner, self.movements, self.interest_rate, self.pin)
    }
}

static DEMO_ROSTER: &str = include_str!("demo_accounts.json");

/// Parse a roster from its JSON text
pub fn parse_roster(json: &str) -> BankResult<Vec<Account>> {
    let seeds: Vec<AccountSeed> = serde_json::from_str(json)?;
    Ok(seeds.into_iter().map(AccountSeed::into_account).collect())
}

/// Read a roster file from disk
pub fn load_roster(path: &Path) -> BankResult<Vec<Account>> {
    let json = fs::read_to_string(path)?;
    parse_roster(&json)
}

/// The built-in demo accounts
pub fn demo_accounts() -> BankResult<Vec<Account>> {
    parse_roster(DEMO_ROSTER)
}
