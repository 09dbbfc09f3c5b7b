//! Roster overview command

use crate::display::format_account_list;
use crate::error::BankResult;
use crate::store::AccountStore;

/// Print the account roster
pub fn handle_accounts_command(store: &AccountStore) -> BankResult<()> {
    print!("{}", format_account_list(store.accounts()));
    Ok(())
}
