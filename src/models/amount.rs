//! Defines the monetary amount type.
//!
//! Amounts are fixed-point cents rather than floats so that values like
//! "20.0" and "20.00" compare equal and never drift. The sign of a
//! transaction is carried by its transaction type, so amounts are always
//! non-negative.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::Error;

/// A non-negative monetary value, stored as cents.
///
/// The canonical wire representation always has exactly two fractional
/// digits, e.g. `"20.00"`, regardless of how the amount was written in the
/// request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(i64);

impl Amount {
    /// The amount as a whole number of cents.
    pub fn cents(&self) -> i64 {
        self.0
    }

    /// Parse a decimal string such as `"10"`, `"10.5"` or `"10.50"`.
    ///
    /// # Errors
    /// Returns [Error::InvalidAmount] if the text is empty, signed, has more
    /// than two fractional digits or contains anything other than ASCII
    /// digits and a single decimal point.
    pub fn parse(text: &str) -> Result<Self, Error> {
        let text = text.trim();
        let invalid = || Error::InvalidAmount(text.to_string());

        let (dollars_text, cents_text) = match text.split_once('.') {
            Some((dollars, cents)) => (dollars, cents),
            None => (text, ""),
        };

        if dollars_text.is_empty() || !dollars_text.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(invalid());
        }

        if cents_text.len() > 2 || !cents_text.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(invalid());
        }

        // "10." is rejected: a decimal point implies fractional digits.
        if text.ends_with('.') {
            return Err(invalid());
        }

        let dollars: i64 = dollars_text.parse().map_err(|_| invalid())?;
        let cents: i64 = match cents_text.len() {
            0 => 0,
            1 => {
                let tens: i64 = cents_text.parse().map_err(|_| invalid())?;
                tens * 10
            }
            _ => cents_text.parse().map_err(|_| invalid())?,
        };

        dollars
            .checked_mul(100)
            .and_then(|total| total.checked_add(cents))
            .map(Self)
            .ok_or_else(invalid)
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for Amount {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;

        Self::parse(&text).map_err(de::Error::custom)
    }
}
