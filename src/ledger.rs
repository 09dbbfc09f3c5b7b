//! Pure computations over an account's movement history
//!
//! Balances and summary figures are never stored; every function here derives
//! its result from the movements on each call. All functions are
//! deterministic and side-effect-free.

use crate::models::{Account, Money};

/// Aggregate figures for the summary line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerSummary {
    /// Sum of all movements
    pub balance: Money,
    /// Sum of all deposits
    pub total_in: Money,
    /// Absolute sum of all withdrawals
    pub total_out: Money,
    /// Interest earned on qualifying deposits
    pub interest: Money,
}

/// Current balance: the sum of all movements
pub fn balance(account: &Account) -> Money {
    account.movements().iter().copied().sum()
}

/// Total of all incoming movements
pub fn total_in(account: &Account) -> Money {
    account
        .movements()
        .iter()
        .filter(|m| m.is_positive())
        .copied()
        .sum()
}

/// Total of all outgoing movements, as a positive amount
pub fn total_out(account: &Account) -> Money {
    let out: Money = account
        .movements()
        .iter()
        .filter(|m| m.is_negative())
        .copied()
        .sum();
    out.abs()
}

/// Interest earned across the account's deposits
///
/// Each deposit earns `deposit * interest_rate / 100`. Per-deposit interest
/// below one whole currency unit is discarded before summing — a noise
/// filter on small deposits, not a floor on the total.
pub fn interest_earned(account: &Account) -> Money {
    let total_cents: f64 = account
        .movements()
        .iter()
        .filter(|m| m.is_positive())
        .map(|m| m.cents() as f64 * account.interest_rate() / 100.0)
        .filter(|cents| *cents >= 100.0)
        .sum();

    Money::from_cents(total_cents.round() as i64)
}

/// The account's movements as an owned sequence
///
/// Chronological (oldest first) when `sorted` is false; ascending by amount
/// when true. The account's own history is never reordered by this call.
pub fn ordered_movements(account: &Account, sorted: bool) -> Vec<Money> {
    let mut movements = account.movements().to_vec();
    if sorted {
        movements.sort();
    }
    movements
}

/// All summary figures in one pass over the account
pub fn summary(account: &Account) -> LedgerSummary {
    LedgerSummary {
        balance: balance(account),
        total_in: total_in(account),
        total_out: total_out(account),
        interest: interest_earned(account),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Movement history of the first demo account, in whole units
    fn demo_movements() -> Vec<Money> {
        [200, 450, -400, 3000, -650, -130, 70, 1300]
            .iter()
            .map(|units| Money::from_units(*units))
            .collect()
    }

    fn demo_account() -> Account {
        Account::new("Alexandru Stanescu", demo_movements(), 1.2, 1111)
    }

    #[test]
    fn test_balance_is_sum_of_movements() {
        let account = demo_account();
        assert_eq!(balance(&account), Money::from_units(3840));

        let expected: Money = account.movements().iter().copied().sum();
        assert_eq!(balance(&account), expected);
    }

    #[test]
    fn test_balance_of_empty_history() {
        let account = Account::new("Groza Maria", vec![], 1.5, 2222);
        assert_eq!(balance(&account), Money::zero());
    }

    #[test]
    fn test_total_in_and_out() {
        let account = demo_account();
        assert_eq!(total_in(&account), Money::from_units(5020));
        assert_eq!(total_out(&account), Money::from_units(1180));
    }

    #[test]
    fn test_interest_earned() {
        // Deposits 200, 450, 3000, 70, 1300 at 1.2%: the 70 deposit earns
        // 0.84, below one unit, and is discarded. 2.40 + 5.40 + 36 + 15.60.
        let account = demo_account();
        assert_eq!(interest_earned(&account), Money::from_cents(5940));
    }

    #[test]
    fn test_interest_discards_sub_unit_deposits() {
        // A single 50.00 deposit at 1.0% computes 0.50 interest: excluded,
        // total stays zero.
        let account = Account::new("Bobo Popi", vec![Money::from_units(50)], 1.0, 3333);
        assert_eq!(interest_earned(&account), Money::zero());
    }

    #[test]
    fn test_interest_threshold_is_per_deposit_not_total() {
        // Three 50.00 deposits at 1.0% each compute 0.50: every one is
        // excluded even though together they would clear the threshold.
        let movements = vec![Money::from_units(50); 3];
        let account = Account::new("Bobo Popi", movements, 1.0, 3333);
        assert_eq!(interest_earned(&account), Money::zero());
    }

    #[test]
    fn test_interest_ignores_withdrawals() {
        let account = Account::new(
            "Andoni Roxi",
            vec![Money::from_units(-1000), Money::from_units(1000)],
            1.0,
            4444,
        );
        assert_eq!(interest_earned(&account), Money::from_units(10));
    }

    #[test]
    fn test_ordered_movements_chronological() {
        let account = demo_account();
        assert_eq!(ordered_movements(&account, false), demo_movements());
    }

    #[test]
    fn test_ordered_movements_sorted_is_non_destructive() {
        let account = demo_account();

        let sorted = ordered_movements(&account, true);
        let mut expected = demo_movements();
        expected.sort();
        assert_eq!(sorted, expected);

        // The account's own history keeps insertion order
        assert_eq!(account.movements(), demo_movements().as_slice());

        // Calling twice yields the same result
        assert_eq!(ordered_movements(&account, true), sorted);
    }

    #[test]
    fn test_summary() {
        let account = demo_account();
        let s = summary(&account);
        assert_eq!(s.balance, Money::from_units(3840));
        assert_eq!(s.total_in, Money::from_units(5020));
        assert_eq!(s.total_out, Money::from_units(1180));
        assert_eq!(s.interest, Money::from_cents(5940));
    }
}
