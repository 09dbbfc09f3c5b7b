use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use minibank::cli::{handle_accounts_command, run_session};
use minibank::roster;
use minibank::store::AccountStore;

#[derive(Parser)]
#[command(
    name = "minibank",
    version,
    about = "Terminal banking demo backed by an in-memory ledger",
    long_about = "Minibank keeps a small fleet of accounts in memory, lets one \
                  user at a time log in, and supports transfers, loans, and \
                  account closure. Nothing is persisted: every run starts from \
                  the roster."
)]
struct Cli {
    /// Path to a roster JSON file (defaults to the built-in demo roster)
    #[arg(long, env = "MINIBANK_ROSTER", global = true)]
    roster: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and run an interactive banking session
    Session,

    /// List the accounts in the roster
    Accounts,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let accounts = match &cli.roster {
        Some(path) => roster::load_roster(path)?,
        None => roster::demo_accounts()?,
    };
    let mut store = AccountStore::new(accounts)?;

    match cli.command {
        Some(Commands::Session) => run_session(&mut store)?,
        Some(Commands::Accounts) => handle_accounts_command(&store)?,
        None => {
            println!("minibank - terminal banking demo");
            println!();
            println!("Run 'minibank --help' for usage information.");
            println!("Run 'minibank accounts' to see the roster.");
            println!("Run 'minibank session' to log in.");
        }
    }

    Ok(())
}
