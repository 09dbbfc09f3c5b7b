//! Loan service
//!
//! Grants a loan when the account shows evidence of at least one movement
//! worth 10% of the requested amount. A granted loan is a single positive
//! movement on the requesting account; no other account is debited.

use crate::auth::Session;
use crate::error::{BankError, BankResult};
use crate::models::Money;
use crate::store::AccountStore;

/// Service for loan requests against the active session
pub struct LoanService<'a> {
    store: &'a mut AccountStore,
}

impl<'a> LoanService<'a> {
    /// Create a new loan service
    pub fn new(store: &'a mut AccountStore) -> Self {
        Self { store }
    }

    /// Request a loan of `amount` for the session's account
    ///
    /// Approved iff the amount is positive and some existing movement is at
    /// least 10% of it. Returns the granted amount; on rejection nothing is
    /// mutated.
    pub fn request_loan(&mut self, session: &Session, amount: Money) -> BankResult<Money> {
        if !amount.is_positive() {
            return Err(BankError::Validation("Loan amount must be positive".into()));
        }

        let account = session.account(self.store).ok_or(BankError::NoSession)?;

        // 10% rule in exact cents: m >= amount / 10  <=>  10 * m >= amount
        let qualifies = account
            .movements()
            .iter()
            .any(|m| m.cents() * 10 >= amount.cents());
        if !qualifies {
            return Err(BankError::Validation(
                "Loan requires a previous deposit of at least 10% of the requested amount".into(),
            ));
        }

        let id = account.id();
        self.store
            .get_mut(id)
            .ok_or(BankError::NoSession)?
            .record(amount);

        Ok(amount)
    }
}
