//! Prices and cart totals.
//!
//! Amounts are held in the currency's minor unit (cents for USD) so that
//! totals never accumulate floating-point error. Catalog feeds publish
//! decimal prices; they are converted once, on the way in.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Mul;

/// Currencies a catalog can be priced in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    JPY,
}

impl Currency {
    /// ISO code, as written in config files.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
        }
    }

    /// Digits after the decimal point.
    pub fn minor_digits(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    fn minor_per_major(&self) -> i64 {
        10_i64.pow(self.minor_digits())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// An amount in one currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the smallest currency unit.
    pub amount_cents: i64,
    pub currency: Currency,
}

impl Money {
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Convert a feed's decimal price, rounding to the nearest minor unit.
    ///
    /// ```
    /// use storefront_core::money::{Currency, Money};
    /// let price = Money::from_decimal(9.99, Currency::USD);
    /// assert_eq!(price.amount_cents, 999);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let scaled = amount * currency.minor_per_major() as f64;
        Self::new(scaled.round() as i64, currency)
    }

    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Symbol and fixed decimals, e.g. `$49.99`.
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Fixed decimals without the symbol, e.g. `49.99`.
    pub fn display_amount(&self) -> String {
        let per_major = self.currency.minor_per_major();
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let abs = self.amount_cents.unsigned_abs();
        let major = abs / per_major as u64;

        match self.currency.minor_digits() {
            0 => format!("{}{}", sign, major),
            digits => format!(
                "{}{}.{:0width$}",
                sign,
                major,
                abs % per_major as u64,
                width = digits as usize
            ),
        }
    }

    /// Price of `quantity` units, saturating at the numeric bounds.
    pub fn times(&self, quantity: u32) -> Money {
        Money::new(
            self.amount_cents.saturating_mul(i64::from(quantity)),
            self.currency,
        )
    }

    /// Total of the amounts in `currency`; amounts in any other currency are
    /// skipped.
    pub fn sum(values: impl IntoIterator<Item = Money>, currency: Currency) -> Money {
        let cents = values
            .into_iter()
            .filter(|m| m.currency == currency)
            .fold(0_i64, |acc, m| acc.saturating_add(m.amount_cents));
        Money::new(cents, currency)
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, quantity: u32) -> Money {
        self.times(quantity)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_decimal_rounds() {
        assert_eq!(Money::from_decimal(9.99, Currency::USD).amount_cents, 999);
        assert_eq!(Money::from_decimal(0.1 + 0.2, Currency::USD).amount_cents, 30);
        assert_eq!(Money::from_decimal(1299.0, Currency::JPY).amount_cents, 1299);
    }

    #[test]
    fn test_display_pads_minor_units() {
        assert_eq!(Money::new(1000, Currency::USD).display(), "$10.00");
        assert_eq!(Money::new(5, Currency::USD).display(), "$0.05");
        assert_eq!(Money::new(-250, Currency::GBP).display(), "\u{00a3}-2.50");
        assert_eq!(Money::new(100, Currency::JPY).display(), "\u{00a5}100");
    }

    #[test]
    fn test_times() {
        let m = Money::new(1999, Currency::USD);
        assert_eq!((m * 3).amount_cents, 5997);
        assert_eq!(m.times(0), Money::zero(Currency::USD));
    }

    #[test]
    fn test_times_saturates() {
        let m = Money::new(i64::MAX / 2, Currency::USD);
        assert_eq!(m.times(4).amount_cents, i64::MAX);
    }

    #[test]
    fn test_sum_skips_other_currency() {
        let values = [
            Money::new(100, Currency::USD),
            Money::new(999, Currency::EUR),
            Money::new(250, Currency::USD),
        ];
        assert_eq!(Money::sum(values, Currency::USD).amount_cents, 350);
    }

    #[test]
    fn test_currency_serde_uses_code() {
        let json = serde_json::to_string(&Currency::EUR).unwrap();
        assert_eq!(json, "\"EUR\"");
        assert_eq!(json.trim_matches('"'), Currency::EUR.code());
    }
}
