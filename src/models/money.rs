//! Money amounts
//!
//! Amounts are whole cents in an `i64`. Totals and comparisons stay exact;
//! floating point only appears when a percentage or chart value is asked for.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

/// An amount of money in cents
///
/// Serializes as the bare cent count, so `$10.50` is stored as `1050`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Largest amount a single transaction or budget may carry ($1,000,000,000.00)
    pub const MAX_AMOUNT: Money = Money(100_000_000_000);

    /// ```
    /// use finance_tracker::models::Money;
    /// assert_eq!(Money::from_cents(1050).to_string(), "$10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whole currency units, truncated toward zero
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// The 0-99 cents after the decimal point, without sign
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// This amount as a percentage of `total`; 0.0 when `total` is zero
    pub fn percent_of(&self, total: Money) -> f64 {
        if total.is_zero() {
            return 0.0;
        }
        // Multiply first: 8000 of 10000 must give exactly 80.0
        self.0 as f64 * 100.0 / total.0 as f64
    }

    /// Currency units as a float, for chart scaling only
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Parse an amount typed by a user
    ///
    /// Accepts "10", "10.5", "10.50", "$1,250.00" and a leading "-".
    /// More than two decimal places is an error rather than being rounded.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let input = s.trim();
        let (negative, rest) = match input.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, input),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest).replace(',', "");

        let (whole, fraction) = rest.split_once('.').unwrap_or((&rest, ""));
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());

        if whole.is_empty() && fraction.is_empty() {
            return Err(MoneyParseError::InvalidFormat(input.to_string()));
        }
        if !all_digits(whole) || !all_digits(fraction) {
            return Err(MoneyParseError::InvalidFormat(input.to_string()));
        }
        if fraction.len() > 2 {
            return Err(MoneyParseError::TooPrecise(input.to_string()));
        }

        let dollars: i64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| MoneyParseError::InvalidFormat(input.to_string()))?
        };
        let cents: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().unwrap_or(0) * 10,
            _ => fraction.parse().unwrap_or(0),
        };

        let total = dollars
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .ok_or_else(|| MoneyParseError::InvalidFormat(input.to_string()))?;

        Ok(Self(if negative { -total } else { total }))
    }

    /// "-$12.34" style text with the given symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0.saturating_sub(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |total, m| total + m)
    }
}

/// Why a typed amount was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoneyParseError {
    #[error("Invalid money format: {0}")]
    InvalidFormat(String),
    #[error("At most two decimal places allowed: {0}")]
    TooPrecise(String),
}
