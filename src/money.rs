//! Monetary amounts and their pt-BR text renderings.
//!
//! Amounts are held as an integer count of minor units (cents) so that every
//! value typed into an amount field, and every value rendered from one, is
//! exact to the cent. The floating point major-unit value only exists at the
//! boundary with callers and charts.

use std::fmt::Display;

use crate::Error;

/// The separator placed between groups of three integer digits.
pub const GROUPING_SEPARATOR: char = '.';

/// The separator placed between the integer and fractional digits.
pub const DECIMAL_SEPARATOR: char = ',';

/// The currency symbol used in summary strings, e.g. "R$ 1.234,56".
pub const CURRENCY_SYMBOL: &str = "R$";

/// The largest amount, in minor units, that can be represented.
///
/// Fifteen digits keeps every amount below 2^53, so the major-unit value of
/// any amount is exact as an `f64`.
pub const MAX_MINOR_UNITS: u64 = 999_999_999_999_999;

/// A non-negative amount of money with exactly two fractional digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonetaryAmount(u64);

impl MonetaryAmount {
    /// The zero amount.
    pub const ZERO: MonetaryAmount = MonetaryAmount(0);

    /// Create an amount from a count of minor units (cents).
    ///
    /// Counts above [MAX_MINOR_UNITS] saturate to the maximum.
    pub fn from_minor_units(minor_units: u64) -> Self {
        Self(minor_units.min(MAX_MINOR_UNITS))
    }

    /// Create an amount from a major-unit value, rounding to the nearest cent.
    ///
    /// # Errors
    ///
    /// Returns an [Error::InvalidAmount] if `major_units` is negative, not
    /// finite, or larger than the maximum representable amount.
    pub fn from_major_units(major_units: f64) -> Result<Self, Error> {
        if !major_units.is_finite() || major_units < 0.0 {
            return Err(Error::InvalidAmount(format!(
                "{major_units} is not a non-negative, finite amount"
            )));
        }

        let minor_units = (major_units * 100.0).round();

        if minor_units > MAX_MINOR_UNITS as f64 {
            return Err(Error::InvalidAmount(format!(
                "{major_units} is larger than the maximum amount"
            )));
        }

        Ok(Self(minor_units as u64))
    }

    /// The amount as a count of minor units (cents).
    pub fn minor_units(self) -> u64 {
        self.0
    }

    /// The amount in major units, e.g. 12.34 for 1234 cents.
    pub fn major_units(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Whether the amount is zero.
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

/// Renders the canonical decimal form, e.g. "1234.56".
///
/// This is the form used to carry an amount through HTML forms.
impl Display for MonetaryAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Render `amount` for display in an amount field, e.g. "1.234,56".
///
/// Zero renders as the empty string so that a fresh or reset field appears
/// blank rather than showing "0,00".
pub fn format_amount(amount: MonetaryAmount) -> String {
    if amount.is_zero() {
        return String::new();
    }

    format_minor_units(amount)
}

/// Render `amount` with grouped integer digits and two decimal digits.
///
/// Unlike [format_amount], zero is rendered as "0,00".
pub fn format_minor_units(amount: MonetaryAmount) -> String {
    let minor_units = amount.minor_units();

    format!(
        "{}{DECIMAL_SEPARATOR}{:02}",
        group_thousands(minor_units / 100),
        minor_units % 100
    )
}

/// Render `amount` as a summary string, e.g. "R$ 1.234,56".
pub fn format_currency(amount: MonetaryAmount) -> String {
    format!("{CURRENCY_SYMBOL} {}", format_minor_units(amount))
}

fn group_thousands(integer: u64) -> String {
    let digits = integer.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(GROUPING_SEPARATOR);
        }

        grouped.push(digit);
    }

    grouped
}


#[cfg(test)]
mod format_tests {
    use crate::money::{
        MonetaryAmount, format_amount, format_currency, format_minor_units,
    };

    #[test]
    fn format_amount_renders_zero_as_blank() {
        assert_eq!(format_amount(MonetaryAmount::ZERO), "");
    }

    #[test]
    fn format_amount_uses_two_decimal_digits() {
        assert_eq!(format_amount(MonetaryAmount::from_minor_units(1)), "0,01");
        assert_eq!(format_amount(MonetaryAmount::from_minor_units(100)), "1,00");
        assert_eq!(format_amount(MonetaryAmount::from_minor_units(12345)), "123,45");
    }

    #[test]
    fn format_amount_groups_thousands() {
        let cases = [
            (100_000, "1.000,00"),
            (123_456, "1.234,56"),
            (99_999_999, "999.999,99"),
            (100_000_000, "1.000.000,00"),
            (123_456_789_012, "1.234.567.890,12"),
        ];

        for (minor_units, want) in cases {
            let got = format_amount(MonetaryAmount::from_minor_units(minor_units));

            assert_eq!(got, want, "formatting {minor_units} cents");
        }
    }

    #[test]
    fn format_minor_units_renders_zero() {
        assert_eq!(format_minor_units(MonetaryAmount::ZERO), "0,00");
    }

    #[test]
    fn format_currency_prefixes_symbol() {
        assert_eq!(
            format_currency(MonetaryAmount::from_minor_units(123_456)),
            "R$ 1.234,56"
        );
        assert_eq!(format_currency(MonetaryAmount::ZERO), "R$ 0,00");
    }
}
