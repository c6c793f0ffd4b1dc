//! Denominations and the normalizer.
//!
//! All arithmetic happens on a [`Total`] counted in pennies. [`Money`] is the
//! three-field projection used for input and display: brass pennies, silver
//! shillings and gold crowns, where 1 S = 12 P and 1 GC = 20 S = 240 P.
//!
//! Raw input never fails to convert. Anything that is not a usable number
//! (missing, negative, non-finite, garbage text) counts as zero, and
//! fractions are truncated toward zero.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// An amount counted in the smallest denomination (pennies).
pub type Total = u64;

/// Pennies in one shilling.
pub const PENNIES_PER_SHILLING: Total = 12;

/// Shillings in one gold crown.
pub const SHILLINGS_PER_CROWN: Total = 20;

/// Pennies in one gold crown.
pub const PENNIES_PER_CROWN: Total = SHILLINGS_PER_CROWN * PENNIES_PER_SHILLING;

/// A three-denomination amount.
///
/// May be unnormalized (e.g. 32 shillings); [`Money::normalized`] folds it
/// into `pennies < 12`, `shillings < 20`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Money {
    /// Brass pennies.
    pub pennies: u64,
    /// Silver shillings.
    pub shillings: u64,
    /// Gold crowns.
    pub crowns: u64,
}

impl Money {
    /// The empty purse.
    pub const ZERO: Money = Money {
        pennies: 0,
        shillings: 0,
        crowns: 0,
    };

    /// Create an amount from its three fields, as given.
    pub const fn new(pennies: u64, shillings: u64, crowns: u64) -> Self {
        Self {
            pennies,
            shillings,
            crowns,
        }
    }

    /// Coerce a loosely typed JSON record into an amount.
    ///
    /// Reads `pennies`, `shillings` and `crowns`, falling back to the short
    /// keys `p`, `s` and `zk` of older saves. Non-objects yield zero.
    pub fn coerce(value: &Value) -> Self {
        Self {
            pennies: coerce_amount(field(value, "pennies", "p")),
            shillings: coerce_amount(field(value, "shillings", "s")),
            crowns: coerce_amount(field(value, "crowns", "zk")),
        }
    }

    /// Coerce three text fields (as typed by a user) into an amount.
    pub fn from_fields(pennies: &str, shillings: &str, crowns: &str) -> Self {
        Self {
            pennies: coerce_str(pennies),
            shillings: coerce_str(shillings),
            crowns: coerce_str(crowns),
        }
    }

    /// Total value in pennies.
    pub fn total(&self) -> Total {
        to_total(self)
    }

    /// The same value in canonical denominations.
    pub fn normalized(&self) -> Self {
        to_money(to_total(self))
    }

    /// Whether `pennies < 12` and `shillings < 20`.
    pub fn is_normalized(&self) -> bool {
        self.pennies < PENNIES_PER_SHILLING && self.shillings < SHILLINGS_PER_CROWN
    }

    /// Whether the amount is worth nothing.
    pub fn is_zero(&self) -> bool {
        to_total(self) == 0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} P \u{2022} {} S \u{2022} {} GC",
            self.pennies, self.shillings, self.crowns
        )
    }
}

/// Collapse an amount to pennies.
///
/// Saturates at [`Total::MAX`] instead of wrapping.
pub fn to_total(money: &Money) -> Total {
    money
        .pennies
        .saturating_add(money.shillings.saturating_mul(PENNIES_PER_SHILLING))
        .saturating_add(money.crowns.saturating_mul(PENNIES_PER_CROWN))
}

/// Split a penny total into canonical denominations.
pub fn to_money(total: Total) -> Money {
    let crowns = total / PENNIES_PER_CROWN;
    let rest = total - crowns * PENNIES_PER_CROWN;
    let shillings = rest / PENNIES_PER_SHILLING;
    let pennies = rest - shillings * PENNIES_PER_SHILLING;
    Money {
        pennies,
        shillings,
        crowns,
    }
}

/// Turn a signed or fractional raw total into a [`Total`].
///
/// Truncates toward zero; negative and non-finite values become 0.
pub fn clamp_total(raw: f64) -> Total {
    if !raw.is_finite() {
        return 0;
    }
    let truncated = raw.trunc();
    if truncated <= 0.0 {
        0
    } else {
        // `as` saturates at u64::MAX
        truncated as Total
    }
}

/// Coerce one raw denomination value.
///
/// Numbers are truncated, numeric strings are parsed, booleans count as
/// 1 or 0, everything else (including a missing value) is 0.
pub fn coerce_amount(value: Option<&Value>) -> u64 {
    match value {
        Some(Value::Number(n)) => match n.as_u64() {
            Some(exact) => exact,
            None => n.as_f64().map(clamp_total).unwrap_or(0),
        },
        Some(Value::String(s)) => coerce_str(s),
        Some(Value::Bool(b)) => u64::from(*b),
        _ => 0,
    }
}

/// Coerce a text field. Blank text is 0.
pub fn coerce_str(raw: &str) -> u64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0;
    }
    if let Ok(exact) = trimmed.parse::<u64>() {
        return exact;
    }
    trimmed.parse::<f64>().map(clamp_total).unwrap_or(0)
}

fn field<'a>(value: &'a Value, long: &str, short: &str) -> Option<&'a Value> {
    value.get(long).or_else(|| value.get(short))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn rates() {
        assert_eq!(PENNIES_PER_SHILLING, 12);
        assert_eq!(PENNIES_PER_CROWN, 240);
    }

    #[test]
    fn total_of_mixed_purse() {
        assert_eq!(Money::new(15, 32, 10).total(), 2799);
        assert_eq!(Money::new(0, 0, 1).total(), 240);
        assert_eq!(Money::ZERO.total(), 0);
    }

    #[test]
    fn split_total() {
        assert_eq!(to_money(2559), Money::new(3, 13, 10));
        assert_eq!(to_money(2799), Money::new(3, 13, 11));
        assert_eq!(to_money(11), Money::new(11, 0, 0));
        assert_eq!(to_money(12), Money::new(0, 1, 0));
        assert_eq!(to_money(239), Money::new(11, 19, 0));
    }

    #[test]
    fn clamps_invalid_fields() {
        let m = Money::coerce(&json!({"pennies": -5, "shillings": "x", "crowns": 3}));
        assert_eq!(m, Money::new(0, 0, 3));
        assert_eq!(m.total(), 720);
    }

    #[test]
    fn coerces_loose_values() {
        assert_eq!(coerce_amount(None), 0);
        assert_eq!(coerce_amount(Some(&json!(null))), 0);
        assert_eq!(coerce_amount(Some(&json!(7.9))), 7);
        assert_eq!(coerce_amount(Some(&json!(-0.5))), 0);
        assert_eq!(coerce_amount(Some(&json!(" 12 "))), 12);
        assert_eq!(coerce_amount(Some(&json!("4.7"))), 4);
        assert_eq!(coerce_amount(Some(&json!(""))), 0);
        assert_eq!(coerce_amount(Some(&json!(true))), 1);
        assert_eq!(coerce_amount(Some(&json!([5]))), 0);
        assert_eq!(coerce_amount(Some(&json!({"n": 5}))), 0);
    }

    #[test]
    fn non_finite_text_is_zero() {
        assert_eq!(coerce_str("inf"), 0);
        assert_eq!(coerce_str("NaN"), 0);
        assert_eq!(coerce_str("-12"), 0);
    }

    #[test]
    fn legacy_short_keys() {
        let m = Money::coerce(&json!({"p": 1, "s": 2, "zk": 3}));
        assert_eq!(m, Money::new(1, 2, 3));
    }

    #[test]
    fn long_keys_win_over_short() {
        let m = Money::coerce(&json!({"pennies": 4, "p": 9}));
        assert_eq!(m.pennies, 4);
    }

    #[test]
    fn non_object_is_zero() {
        assert_eq!(Money::coerce(&json!(42)), Money::ZERO);
        assert_eq!(Money::coerce(&json!("purse")), Money::ZERO);
    }

    #[test]
    fn from_text_fields() {
        assert_eq!(Money::from_fields("3", "", "abc"), Money::new(3, 0, 0));
    }

    #[test]
    fn clamp_total_edges() {
        assert_eq!(clamp_total(-3.0), 0);
        assert_eq!(clamp_total(2.99), 2);
        assert_eq!(clamp_total(f64::NAN), 0);
        assert_eq!(clamp_total(f64::INFINITY), 0);
        assert_eq!(clamp_total(1e30), u64::MAX);
    }

    #[test]
    fn saturates_instead_of_wrapping() {
        assert_eq!(Money::new(0, 0, u64::MAX).total(), u64::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(Money::new(3, 13, 10).to_string(), "3 P • 13 S • 10 GC");
    }

    proptest! {
        #[test]
        fn round_trip(t in any::<u64>()) {
            prop_assert_eq!(to_total(&to_money(t)), t);
        }

        #[test]
        fn normalization_is_idempotent(
            p in 0u64..1_000_000_000,
            s in 0u64..1_000_000_000,
            c in 0u64..1_000_000_000,
        ) {
            let once = Money::new(p, s, c).normalized();
            prop_assert!(once.is_normalized());
            prop_assert_eq!(once.normalized(), once);
            prop_assert_eq!(once.total(), Money::new(p, s, c).total());
        }

        #[test]
        fn clamp_matches_floor_of_positive(x in -1.0e12f64..1.0e12) {
            let expected = if x <= 0.0 { 0 } else { x.trunc() as u64 };
            prop_assert_eq!(to_money(clamp_total(x)).total(), expected);
        }
    }
}
