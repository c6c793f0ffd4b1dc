//! The apply/spend operation.
//!
//! [`apply_operation`] is pure: it computes the candidate wallet and leaves
//! the decision to commit it with the caller (see [`Applied::commit`]).

use std::fmt;

use crate::error::{WalletError, WalletResult};
use crate::money::{Money, to_money, to_total};
use crate::settings::Settings;

/// Direction of a wallet operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Put money into the wallet.
    Add,
    /// Take money out of the wallet.
    #[default]
    Spend,
}

impl Mode {
    /// Parse a mode name (`add`/`spend`, also `+`/`-`).
    pub fn parse(s: &str) -> Option<Mode> {
        match s.trim().to_lowercase().as_str() {
            "add" | "+" | "income" => Some(Mode::Add),
            "spend" | "-" | "pay" => Some(Mode::Spend),
            _ => None,
        }
    }

    /// The other mode.
    pub fn toggled(self) -> Mode {
        match self {
            Mode::Add => Mode::Spend,
            Mode::Spend => Mode::Add,
        }
    }

    /// Past-tense verb for result messages.
    pub fn past_tense(self) -> &'static str {
        match self {
            Mode::Add => "Added",
            Mode::Spend => "Spent",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Add => write!(f, "add"),
            Mode::Spend => write!(f, "spend"),
        }
    }
}

/// A successful, not yet committed, wallet operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Applied {
    /// Direction of the operation.
    pub mode: Mode,
    /// The wallet before, normalized.
    pub before: Money,
    /// The candidate wallet after, normalized.
    pub after: Money,
    /// The change, normalized.
    pub change: Money,
}

impl Applied {
    /// The wallet to write back, or `None` when auto-apply is off.
    pub fn commit(&self, settings: &Settings) -> Option<Money> {
        settings.auto_apply.then_some(self.after)
    }
}

/// Add `change` to or spend it from `wallet`.
///
/// Fails with [`WalletError::NoOp`] when the change is worth nothing and
/// with [`WalletError::InsufficientFunds`] when spending would go below
/// zero. Both inputs may be unnormalized.
pub fn apply_operation(wallet: &Money, change: &Money, mode: Mode) -> WalletResult<Applied> {
    let before = to_total(&wallet.normalized());
    let change_total = to_total(change);

    if change_total == 0 {
        return Err(WalletError::NoOp);
    }

    let delta = match mode {
        Mode::Add => i128::from(change_total),
        Mode::Spend => -i128::from(change_total),
    };
    let after = i128::from(before) + delta;

    if after < 0 {
        return Err(WalletError::InsufficientFunds {
            available: to_money(before),
            required: to_money(change_total),
        });
    }

    // Adding past u64::MAX pennies saturates.
    let after = u64::try_from(after).unwrap_or(u64::MAX);

    Ok(Applied {
        mode,
        before: to_money(before),
        after: to_money(after),
        change: to_money(change_total),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spend_crown_from_starter_purse() {
        let wallet = Money::new(15, 32, 10);
        let applied = apply_operation(&wallet, &Money::new(0, 0, 1), Mode::Spend).unwrap();
        assert_eq!(applied.before.total(), 2799);
        assert_eq!(applied.after.total(), 2559);
        assert_eq!(applied.after, Money::new(3, 13, 10));
        assert_eq!(applied.change, Money::new(0, 0, 1));
    }

    #[test]
    fn add_normalizes_change() {
        let applied = apply_operation(&Money::ZERO, &Money::new(30, 25, 0), Mode::Add).unwrap();
        assert_eq!(applied.change, Money::new(6, 7, 1));
        assert_eq!(applied.after, applied.change);
    }

    #[test]
    fn zero_change_is_no_op() {
        for wallet in [Money::ZERO, Money::new(1, 2, 3), Money::new(0, 0, 999)] {
            for mode in [Mode::Add, Mode::Spend] {
                assert_eq!(
                    apply_operation(&wallet, &Money::ZERO, mode),
                    Err(WalletError::NoOp)
                );
            }
        }
    }

    #[test]
    fn overdraft_rejected() {
        let wallet = crate::money::to_money(100);
        let err = apply_operation(&wallet, &Money::new(0, 9, 0), Mode::Spend).unwrap_err();
        assert_eq!(
            err,
            WalletError::InsufficientFunds {
                available: Money::new(4, 8, 0),
                required: Money::new(0, 9, 0),
            }
        );
    }

    #[test]
    fn spend_everything() {
        let applied = apply_operation(&Money::new(0, 20, 0), &Money::new(0, 0, 1), Mode::Spend)
            .unwrap();
        assert_eq!(applied.after, Money::ZERO);
    }

    #[test]
    fn add_saturates() {
        let applied =
            apply_operation(&Money::new(u64::MAX, 0, 0), &Money::new(5, 0, 0), Mode::Add).unwrap();
        assert_eq!(applied.after.total(), u64::MAX);
    }

    #[test]
    fn commit_follows_auto_apply() {
        let applied = apply_operation(&Money::ZERO, &Money::new(1, 0, 0), Mode::Add).unwrap();
        assert_eq!(applied.commit(&Settings::default()), Some(Money::new(1, 0, 0)));
        assert_eq!(
            applied.commit(&Settings::default().with_auto_apply(false)),
            None
        );
    }

    #[test]
    fn mode_parse_and_toggle() {
        assert_eq!(Mode::parse("ADD"), Some(Mode::Add));
        assert_eq!(Mode::parse("spend"), Some(Mode::Spend));
        assert_eq!(Mode::parse("steal"), None);
        assert_eq!(Mode::Add.toggled(), Mode::Spend);
        assert_eq!(Mode::default(), Mode::Spend);
        assert_eq!(Mode::Spend.past_tense(), "Spent");
    }
}
