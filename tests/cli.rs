//! End-to-end tests driving the minibank binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn minibank() -> Command {
    Command::cargo_bin("minibank").unwrap()
}

#[test]
fn accounts_lists_demo_roster() {
    minibank()
        .arg("accounts")
        .assert()
        .success()
        .stdout(predicate::str::contains("Alexandru Stanescu"))
        .stdout(predicate::str::contains("Groza Maria"))
        .stdout(predicate::str::contains("gm"));
}

#[test]
fn accounts_never_prints_pins() {
    minibank()
        .arg("accounts")
        .assert()
        .success()
        .stdout(predicate::str::contains("1111").not());
}

#[test]
fn session_login_balance_and_summary() {
    minibank()
        .arg("session")
        .write_stdin("as\n1111\nbalance\nsummary\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome back, Alexandru"))
        .stdout(predicate::str::contains("3840.00€"))
        .stdout(predicate::str::contains("In: 5020.00€  Out: 1180.00€  Interest: 59.40€"));
}

#[test]
fn session_rejects_bad_credentials() {
    minibank()
        .arg("session")
        .write_stdin("as\n9999\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid username or PIN"))
        .stdout(predicate::str::contains("Welcome back").not());
}

#[test]
fn session_transfer_reports_new_balance() {
    minibank()
        .arg("session")
        .write_stdin("as\n1111\ntransfer gm 200\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Transferred 200.00€ to gm. Your balance: 3640.00€",
        ));
}

#[test]
fn session_surfaces_transfer_rejection() {
    minibank()
        .arg("session")
        .write_stdin("as\n1111\ntransfer zz 200\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Account not found: zz"));
}

#[test]
fn session_close_requires_confirmation() {
    minibank()
        .arg("session")
        .write_stdin("as\n1111\nclose\nas\n1111\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Account closed. Goodbye."));
}

#[test]
fn roster_flag_loads_custom_roster() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"owner": "Bobo Popi", "movements": [5000], "interest_rate": 0.7, "pin": 3333}}]"#
    )
    .unwrap();

    minibank()
        .arg("accounts")
        .arg("--roster")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Bobo Popi"))
        .stdout(predicate::str::contains("Alexandru Stanescu").not());
}
