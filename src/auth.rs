//! Authentication and the session state machine
//!
//! A Session is either logged out (initial and terminal state) or logged in
//! to exactly one account. Successful login is the only way in; explicit
//! logout or closure of the account is the way out. Services resolve the
//! session against the store on every call, so a session whose account has
//! been removed behaves as logged out.

use chrono::{DateTime, Utc};

use crate::error::{BankError, BankResult};
use crate::models::{Account, AccountId};
use crate::store::AccountStore;

/// The single authenticated-account context gating mutating operations
#[derive(Debug, Clone)]
pub struct Session {
    current: Option<AccountId>,
    logged_in_at: Option<DateTime<Utc>>,
}

impl Session {
    /// A session with no authenticated account
    pub fn logged_out() -> Self {
        Self {
            current: None,
            logged_in_at: None,
        }
    }

    fn logged_in(id: AccountId) -> Self {
        Self {
            current: Some(id),
            logged_in_at: Some(Utc::now()),
        }
    }

    /// The id of the authenticated account, if any
    pub fn current(&self) -> Option<AccountId> {
        self.current
    }

    /// Resolve the authenticated account against the store
    ///
    /// Returns None when logged out, and also when the account has since
    /// been removed from the store (a stale session).
    pub fn account<'s>(&self, store: &'s AccountStore) -> Option<&'s Account> {
        self.current.and_then(|id| store.get(id))
    }

    /// Whether the session holds an account reference
    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// When the session was authenticated, if it is
    pub fn logged_in_at(&self) -> Option<DateTime<Utc>> {
        self.logged_in_at
    }

    /// Drop the account reference, returning to the logged-out state
    pub fn log_out(&mut self) {
        self.current = None;
        self.logged_in_at = None;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::logged_out()
    }
}

/// Validates credentials against the store and opens sessions
pub struct Authenticator<'a> {
    store: &'a AccountStore,
}

impl<'a> Authenticator<'a> {
    /// Create a new authenticator over the store
    pub fn new(store: &'a AccountStore) -> Self {
        Self { store }
    }

    /// Open a session for the given username and PIN
    ///
    /// Fails with [`BankError::Auth`] on an unknown username or a wrong PIN;
    /// the two cases are indistinguishable to the caller. A failed login
    /// changes no state.
    pub fn login(&self, username: &str, pin: u32) -> BankResult<Session> {
        let account = self
            .store
            .find_by_username(username)
            .ok_or(BankError::Auth)?;

        if !account.verify_pin(pin) {
            return Err(BankError::Auth);
        }

        Ok(Session::logged_in(account.id()))
    }
}
