//! Account closure service
//!
//! Closing an account requires re-authentication (username and PIN typed
//! again), not merely possession of the session. On success the account is
//! removed from the store and the session returns to the logged-out state.

use crate::auth::Session;
use crate::error::{BankError, BankResult};
use crate::store::AccountStore;

/// Service for closing the active session's account
pub struct AccountClosureService<'a> {
    store: &'a mut AccountStore,
}

impl<'a> AccountClosureService<'a> {
    /// Create a new closure service
    pub fn new(store: &'a mut AccountStore) -> Self {
        Self { store }
    }

    /// Close the session's account after confirming its credentials
    ///
    /// `confirm_username` and `confirm_pin` must both match the active
    /// account. On success the account is removed and the session is logged
    /// out; on failure nothing changes and the session stays active.
    pub fn close(
        &mut self,
        session: &mut Session,
        confirm_username: &str,
        confirm_pin: u32,
    ) -> BankResult<()> {
        let account = session.account(self.store).ok_or(BankError::NoSession)?;

        if account.username() != confirm_username || !account.verify_pin(confirm_pin) {
            return Err(BankError::Validation(
                "Confirmation does not match the active account".into(),
            ));
        }

        let id = account.id();
        self.store.remove(id);
        session.log_out();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Authenticator;
    use crate::models::{Account, Money};

    fn sample_store() -> AccountStore {
        AccountStore::new(vec![
            Account::new(
                "Alexandru Stanescu",
                vec![Money::from_units(200)],
                1.2,
                1111,
            ),
            Account::new("Groza Maria", vec![Money::from_units(100)], 1.5, 2222),
        ])
        .unwrap()
    }

    fn login(store: &AccountStore) -> Session {
        Authenticator::new(store).login("as", 1111).unwrap()
    }

    #[test]
    fn test_close_success() {
        let mut store = sample_store();
        let mut session = login(&store);

        AccountClosureService::new(&mut store)
            .close(&mut session, "as", 1111)
            .unwrap();

        assert!(store.find_by_username("as").is_none());
        assert!(!session.is_active());
        // The other account is untouched
        assert!(store.find_by_username("gm").is_some());
    }

    #[test]
    fn test_close_rejects_wrong_username() {
        let mut store = sample_store();
        let mut session = login(&store);

        let err = AccountClosureService::new(&mut store)
            .close(&mut session, "gm", 1111)
            .unwrap_err();

        assert!(err.is_validation());
        assert!(store.find_by_username("as").is_some());
        assert!(session.is_active());
    }

    #[test]
    fn test_close_rejects_wrong_pin() {
        let mut store = sample_store();
        let mut session = login(&store);

        let err = AccountClosureService::new(&mut store)
            .close(&mut session, "as", 9999)
            .unwrap_err();

        assert!(err.is_validation());
        assert!(store.find_by_username("as").is_some());
        assert!(session.is_active());
    }

    #[test]
    fn test_close_requires_active_session() {
        let mut store = sample_store();
        let mut session = Session::logged_out();

        let err = AccountClosureService::new(&mut store)
            .close(&mut session, "as", 1111)
            .unwrap_err();

        assert!(matches!(err, BankError::NoSession));
    }

    #[test]
    fn test_operations_after_close_are_rejected() {
        let mut store = sample_store();
        let mut session = login(&store);

        AccountClosureService::new(&mut store)
            .close(&mut session, "as", 1111)
            .unwrap();

        let err = AccountClosureService::new(&mut store)
            .close(&mut session, "as", 1111)
            .unwrap_err();
        assert!(matches!(err, BankError::NoSession));
    }
}
