//! Roster overview formatting

use crate::models::Account;

/// Format the account roster as a table (PINs are never shown)
pub fn format_account_list(accounts: &[Account]) -> String {
    if accounts.is_empty() {
        return "No accounts.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:25} {:10} {:>10}\n",
        "Owner", "Username", "Movements"
    ));
    output.push_str(&"-".repeat(46));
    output.push('\n');

    for account in accounts {
        output.push_str(&format!(
            "{:25} {:10} {:>10}\n",
            account.owner(),
            account.username(),
            account.movements().len()
        ));
    }

    output
}
