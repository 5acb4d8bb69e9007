//! Money type
//!
//! Amounts are stored as integer minor units (cents/sen) plus a currency
//! code. Display formatting goes through `Decimal` at the presentation
//! boundary; a formatted string is never the stored value.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Supported settlement currencies
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Currency {
    /// Malaysian Ringgit
    #[default]
    Myr,
    /// Singapore Dollar
    Sgd,
    /// US Dollar
    Usd,
}

impl Currency {
    /// ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Myr => "MYR",
            Currency::Sgd => "SGD",
            Currency::Usd => "USD",
        }
    }

    /// Display symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Myr => "RM",
            Currency::Sgd => "S$",
            Currency::Usd => "$",
        }
    }

    /// Minor-unit exponent (all supported currencies use 2)
    pub fn exponent(&self) -> u32 {
        2
    }
}

/// Monetary amount: integer minor units + currency
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Money {
    /// Amount in minor units (e.g. 35000 = RM350.00)
    pub minor: i64,
    pub currency: Currency,
}

impl Money {
    pub fn new(minor: i64, currency: Currency) -> Self {
        Self { minor, currency }
    }

    /// Construct from whole major units (e.g. `Money::from_major(350, Myr)` = RM350.00)
    pub fn from_major(major: i64, currency: Currency) -> Self {
        Self {
            minor: major * 10_i64.pow(currency.exponent()),
            currency,
        }
    }

    pub fn is_negative(&self) -> bool {
        self.minor < 0
    }

    pub fn is_zero(&self) -> bool {
        self.minor == 0
    }

    /// Major-unit decimal value, for display and export only
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.minor, self.currency.exponent())
    }

    /// Canonical decimal string ("350.00"), without currency marker
    pub fn amount_string(&self) -> String {
        self.to_decimal().to_string()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.currency.symbol(), self.to_decimal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_major() {
        let m = Money::from_major(350, Currency::Myr);
        assert_eq!(m.minor, 35000);
        assert_eq!(m.amount_string(), "350.00");
    }

    #[test]
    fn test_display_uses_symbol() {
        let m = Money::new(129950, Currency::Myr);
        assert_eq!(m.to_string(), "RM1299.50");
    }

    #[test]
    fn test_zero_and_negative() {
        assert!(Money::new(0, Currency::Myr).is_zero());
        assert!(Money::new(-1, Currency::Usd).is_negative());
    }

    #[test]
    fn test_serde_shape() {
        let m = Money::from_major(88, Currency::Sgd);
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["minor"], 8800);
        assert_eq!(json["currency"], "SGD");
    }
}
