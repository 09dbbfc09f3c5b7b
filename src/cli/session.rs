//! Interactive banking session
//!
//! Prompts for a username and PIN, then runs a command loop against the
//! authenticated session until the user logs out, closes the account, or
//! quits. Every service rejection is printed and the loop continues.

use std::io::{self, BufRead, IsTerminal, Write};

use chrono::Utc;

use crate::auth::Authenticator;
use crate::display::{format_balance, format_movement_register, format_summary, format_welcome};
use crate::error::{BankError, BankResult};
use crate::ledger;
use crate::models::Money;
use crate::services::{AccountClosureService, LoanService, TransferService};
use crate::store::AccountStore;

/// A parsed session-loop command
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    /// Show the movement register, optionally sorted ascending by amount
    Movements { sorted: bool },
    /// Show the current balance
    Balance,
    /// Show in/out/interest totals
    Summary,
    /// Transfer to another account
    Transfer { to: String, amount: Money },
    /// Request a loan
    Loan { amount: Money },
    /// Close the account (prompts for confirmation)
    Close,
    /// End the session
    Logout,
    /// Show the command list
    Help,
    /// Leave the program
    Quit,
}

impl SessionCommand {
    /// Parse a command line as typed at the prompt
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            return Err("Type 'help' for the command list".to_string());
        };
        let rest: Vec<&str> = parts.collect();

        match (command, rest.as_slice()) {
            ("movements", []) => Ok(Self::Movements { sorted: false }),
            ("movements", ["sorted"]) => Ok(Self::Movements { sorted: true }),
            ("balance", []) => Ok(Self::Balance),
            ("summary", []) => Ok(Self::Summary),
            ("transfer", [to, amount]) => {
                let amount = Money::parse(amount).map_err(|e| e.to_string())?;
                Ok(Self::Transfer {
                    to: (*to).to_string(),
                    amount,
                })
            }
            ("loan", [amount]) => {
                let amount = Money::parse(amount).map_err(|e| e.to_string())?;
                Ok(Self::Loan { amount })
            }
            ("close", []) => Ok(Self::Close),
            ("logout", []) => Ok(Self::Logout),
            ("help", []) => Ok(Self::Help),
            ("quit", []) | ("exit", []) => Ok(Self::Quit),
            _ => Err(format!(
                "Unknown command: '{}'. Type 'help' for the command list",
                line.trim()
            )),
        }
    }
}

const HELP: &str = "\
Commands:
  movements [sorted]      Show the movement register
  balance                 Show the current balance
  summary                 Show in/out/interest totals
  transfer <to> <amount>  Transfer to another account
  loan <amount>           Request a loan
  close                   Close the account (asks for confirmation)
  logout                  End the session
  quit                    Leave minibank";

type InputLines<'a> = io::Lines<io::StdinLock<'a>>;

fn prompt_line(lines: &mut InputLines<'_>, prompt: &str) -> BankResult<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;
    Ok(lines.next().transpose()?)
}

/// Read a PIN: masked via the terminal when stdin is one, a plain line
/// otherwise (piped input).
fn prompt_pin(lines: &mut InputLines<'_>, prompt: &str) -> BankResult<Option<u32>> {
    let raw = if io::stdin().is_terminal() {
        Some(rpassword::prompt_password(prompt)?)
    } else {
        prompt_line(lines, prompt)?
    };

    let Some(raw) = raw else { return Ok(None) };
    let pin = raw
        .trim()
        .parse()
        .map_err(|_| BankError::Validation("PIN must be a number".into()))?;
    Ok(Some(pin))
}

/// Run an interactive session against the store
pub fn run_session(store: &mut AccountStore) -> BankResult<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let Some(username) = prompt_line(&mut lines, "Username: ")? else {
        return Ok(());
    };
    let Some(pin) = prompt_pin(&mut lines, "PIN: ")? else {
        return Ok(());
    };

    let mut session = match Authenticator::new(store).login(username.trim(), pin) {
        Ok(session) => session,
        Err(err) => {
            println!("{err}");
            return Ok(());
        }
    };

    if let Some(account) = session.account(store) {
        println!("{}", format_welcome(account.first_name()));
    }

    loop {
        print!("minibank> ");
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            break; // EOF
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match SessionCommand::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };

        match command {
            SessionCommand::Quit => break,
            SessionCommand::Logout => {
                session.log_out();
                println!("Logged out.");
                break;
            }
            SessionCommand::Help => println!("{HELP}"),
            SessionCommand::Movements { sorted } => match session.account(store) {
                Some(account) => print!(
                    "{}",
                    format_movement_register(&ledger::ordered_movements(account, sorted))
                ),
                None => println!("{}", BankError::NoSession),
            },
            SessionCommand::Balance => match session.account(store) {
                Some(account) => {
                    println!("{}", format_balance(ledger::balance(account), Utc::now()))
                }
                None => println!("{}", BankError::NoSession),
            },
            SessionCommand::Summary => match session.account(store) {
                Some(account) => println!("{}", format_summary(&ledger::summary(account))),
                None => println!("{}", BankError::NoSession),
            },
            SessionCommand::Transfer { to, amount } => {
                match TransferService::new(store).transfer(&session, &to, amount) {
                    Ok(receipt) => println!(
                        "Transferred {} to {}. Your balance: {}",
                        receipt.amount, receipt.to_username, receipt.from_balance
                    ),
                    Err(err) => println!("{err}"),
                }
            }
            SessionCommand::Loan { amount } => {
                match LoanService::new(store).request_loan(&session, amount) {
                    Ok(granted) => println!("Loan approved: +{granted}"),
                    Err(err) => println!("{err}"),
                }
            }
            SessionCommand::Close => {
                let Some(confirm_username) = prompt_line(&mut lines, "Confirm username: ")? else {
                    break;
                };
                let Some(confirm_pin) = prompt_pin(&mut lines, "Confirm PIN: ")? else {
                    break;
                };

                let result = AccountClosureService::new(store).close(
                    &mut session,
                    confirm_username.trim(),
                    confirm_pin,
                );
                match result {
                    Ok(()) => {
                        println!("Account closed. Goodbye.");
                        break;
                    }
                    Err(err) => println!("{err}"),
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_movements() {
        assert_eq!(
            SessionCommand::parse("movements").unwrap(),
            SessionCommand::Movements { sorted: false }
        );
        assert_eq!(
            SessionCommand::parse("movements sorted").unwrap(),
            SessionCommand::Movements { sorted: true }
        );
    }

    #[test]
    fn test_parse_transfer() {
        assert_eq!(
            SessionCommand::parse("transfer gm 250.50").unwrap(),
            SessionCommand::Transfer {
                to: "gm".to_string(),
                amount: Money::from_cents(25050)
            }
        );
    }

    #[test]
    fn test_parse_loan() {
        assert_eq!(
            SessionCommand::parse("loan 250").unwrap(),
            SessionCommand::Loan {
                amount: Money::from_units(250)
            }
        );
    }

    #[test]
    fn test_parse_rejects_bad_amount() {
        assert!(SessionCommand::parse("transfer gm abc").is_err());
        assert!(SessionCommand::parse("loan").is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_command() {
        assert!(SessionCommand::parse("withdraw 100").is_err());
        assert!(SessionCommand::parse("").is_err());
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(
            SessionCommand::parse("balance").unwrap(),
            SessionCommand::Balance
        );
        assert_eq!(
            SessionCommand::parse("quit").unwrap(),
            SessionCommand::Quit
        );
        assert_eq!(
            SessionCommand::parse("exit").unwrap(),
            SessionCommand::Quit
        );
    }
}
