//! The in-memory account collection
//!
//! AccountStore owns every account for the lifetime of the process. It is the
//! single writer: services borrow it mutably one at a time, so each
//! validate-then-mutate step runs without interleaving.

use crate::error::{BankError, BankResult};
use crate::models::{Account, AccountId};

/// Owns the collection of accounts and answers lookups
#[derive(Debug)]
pub struct AccountStore {
    accounts: Vec<Account>,
}

impl AccountStore {
    /// Build a store from a roster of accounts
    ///
    /// Validates every account and rejects duplicate usernames: the roster is
    /// wiring-time data entry, so a collision is surfaced here rather than
    /// silently renamed.
    pub fn new(accounts: Vec<Account>) -> BankResult<Self> {
        for account in &accounts {
            account
                .validate()
                .map_err(|e| BankError::Validation(e.to_string()))?;
        }

        for (i, account) in accounts.iter().enumerate() {
            let taken = accounts[..i]
                .iter()
                .any(|other| other.username() == account.username());
            if taken {
                return Err(BankError::duplicate_username(account.username()));
            }
        }

        Ok(Self { accounts })
    }

    /// Find an account by its login username (exact match)
    ///
    /// Linear scan; the fleet is small.
    pub fn find_by_username(&self, username: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.username() == username)
    }

    /// Get an account by id
    pub fn get(&self, id: AccountId) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id() == id)
    }

    /// Get a mutable account by id
    pub(crate) fn get_mut(&mut self, id: AccountId) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|a| a.id() == id)
    }

    /// Remove an account from the store. Idempotent: removing an id that is
    /// not present is a no-op.
    pub fn remove(&mut self, id: AccountId) {
        self.accounts.retain(|a| a.id() != id);
    }

    /// All accounts, in roster order
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Number of accounts in the store
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Check whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
