//! Transfer service
//!
//! Moves money between two accounts as a paired outflow/inflow: the sender's
//! history gains `-amount`, the receiver's gains `+amount`, and the sum
//! across both accounts is conserved exactly.

use crate::auth::Session;
use crate::error::{BankError, BankResult};
use crate::ledger;
use crate::models::Money;
use crate::store::AccountStore;

/// Service for transfers between accounts
pub struct TransferService<'a> {
    store: &'a mut AccountStore,
}

/// Result of a committed transfer
#[derive(Debug, Clone)]
pub struct TransferReceipt {
    /// Username of the sending account
    pub from_username: String,
    /// Username of the receiving account
    pub to_username: String,
    /// Amount moved
    pub amount: Money,
    /// Sender balance after the transfer
    pub from_balance: Money,
    /// Receiver balance after the transfer
    pub to_balance: Money,
}

impl<'a> TransferService<'a> {
    /// Create a new transfer service
    pub fn new(store: &'a mut AccountStore) -> Self {
        Self { store }
    }

    /// Transfer `amount` from the session's account to `to_username`
    ///
    /// Preconditions, all required jointly: the amount is positive, the
    /// session resolves to a live account, the receiver exists and is not
    /// the sender, and the sender's balance covers the amount. On any
    /// failure nothing is mutated.
    pub fn transfer(
        &mut self,
        session: &Session,
        to_username: &str,
        amount: Money,
    ) -> BankResult<TransferReceipt> {
        if !amount.is_positive() {
            return Err(BankError::Validation(
                "Transfer amount must be positive".into(),
            ));
        }

        let sender = session.account(self.store).ok_or(BankError::NoSession)?;
        let sender_id = sender.id();
        let sender_username = sender.username().to_string();
        let sender_balance = ledger::balance(sender);

        let receiver = self
            .store
            .find_by_username(to_username)
            .ok_or_else(|| BankError::account_not_found(to_username))?;
        let receiver_id = receiver.id();

        if receiver_id == sender_id {
            return Err(BankError::Validation(
                "Cannot transfer to your own account".into(),
            ));
        }

        if sender_balance < amount {
            return Err(BankError::InsufficientFunds {
                needed: amount,
                available: sender_balance,
            });
        }

        let receiver_balance = ledger::balance(receiver);

        // Every precondition passed; the paired appends commit as one step.
        self.store
            .get_mut(sender_id)
            .ok_or(BankError::NoSession)?
            .record(-amount);
        self.store
            .get_mut(receiver_id)
            .ok_or_else(|| BankError::account_not_found(to_username))?
            .record(amount);

        Ok(TransferReceipt {
            from_username: sender_username,
            to_username: to_username.to_string(),
            amount,
            from_balance: sender_balance - amount,
            to_balance: receiver_balance + amount,
        })
    }
}
