//! Account model
//!
//! An account holds its owner's identity, the login username derived from it,
//! the credential, the interest rate, and the movement history. The movement
//! history is append-only: the entity exposes read and append operations but
//! never raw write access, so the balance invariant (balance == sum of
//! movements) cannot be broken from outside.

use std::fmt;

use super::ids::AccountId;
use super::money::Money;

/// A bank account with its movement history
#[derive(Debug, Clone)]
pub struct Account {
    /// Unique identifier
    id: AccountId,

    /// Full display name of the owner (e.g., "Alexandru Stanescu")
    owner: String,

    /// Login handle derived from the owner's initials
    username: String,

    /// Signed ledger entries, oldest first
    movements: Vec<Money>,

    /// Interest percentage applied to qualifying deposits
    interest_rate: f64,

    /// Numeric credential compared by exact equality
    pin: u32,
}

/// Derive a login username from an owner's display name: lowercase, split on
/// whitespace, first character of each word ("Groza Maria" -> "gm").
pub fn derive_username(owner: &str) -> String {
    owner
        .to_lowercase()
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

impl Account {
    /// Create a new account with an initial movement history
    pub fn new(owner: impl Into<String>, movements: Vec<Money>, interest_rate: f64, pin: u32) -> Self {
        let owner = owner.into();
        let username = derive_username(&owner);
        Self {
            id: AccountId::new(),
            owner,
            username,
            movements,
            interest_rate,
            pin,
        }
    }

    /// Unique identifier
    pub fn id(&self) -> AccountId {
        self.id
    }

    /// Full display name of the owner
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// The owner's first name (for the welcome banner)
    pub fn first_name(&self) -> &str {
        self.owner.split_whitespace().next().unwrap_or(&self.owner)
    }

    /// Login handle derived from the owner's initials
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Signed ledger entries, oldest first
    pub fn movements(&self) -> &[Money] {
        &self.movements
    }

    /// Interest percentage applied to qualifying deposits
    pub fn interest_rate(&self) -> f64 {
        self.interest_rate
    }

    /// Check the supplied PIN against the account credential
    pub fn verify_pin(&self, pin: u32) -> bool {
        self.pin == pin
    }

    /// Append a movement to the history. Services call this only after all
    /// preconditions passed; there is no way to rewrite past entries.
    pub(crate) fn record(&mut self, amount: Money) {
        self.movements.push(amount);
    }

    /// Validate the account
    pub fn validate(&self) -> Result<(), AccountValidationError> {
        if self.owner.trim().is_empty() {
            return Err(AccountValidationError::EmptyOwner);
        }

        if !self.interest_rate.is_finite() || self.interest_rate < 0.0 {
            return Err(AccountValidationError::InvalidInterestRate(
                self.interest_rate,
            ));
        }

        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.owner, self.username)
    }
}

/// Validation errors for accounts
#[derive(Debug, Clone, PartialEq)]
pub enum AccountValidationError {
    EmptyOwner,
    InvalidInterestRate(f64),
}

impl fmt::Display for AccountValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyOwner => write!(f, "Account owner cannot be empty"),
            Self::InvalidInterestRate(rate) => {
                write!(f, "Interest rate must be a non-negative percentage, got {}", rate)
            }
        }
    }
}

impl std::error::Error for AccountValidationError {}
