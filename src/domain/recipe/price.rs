//! Fixed-point recipe price with two decimal places

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Digits allowed after the decimal point
pub const DECIMAL_PLACES: usize = 2;
/// Total significant digits allowed
pub const MAX_DIGITS: usize = 5;

const WHOLE_DIGITS: usize = MAX_DIGITS - DECIMAL_PLACES;

/// Errors produced when parsing a price
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PriceError {
    #[error("A valid number is required.")]
    Invalid,

    #[error("Ensure that there are no more than {0} decimal places.")]
    TooManyDecimalPlaces(usize),

    #[error("Ensure that there are no more than {0} digits before the decimal point.")]
    TooManyWholeDigits(usize),
}

/// Monetary amount stored as a whole number of cents.
///
/// Serialized as a string with exactly two decimals (`"5.00"`); accepted as a
/// string or a JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price {
    cents: i64,
}

impl Price {
    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    pub fn cents(&self) -> i64 {
        self.cents
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let (negative, unsigned) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let (whole, fraction) = match unsigned.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (unsigned, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(PriceError::Invalid);
        }

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());

        if !all_digits(whole) || !all_digits(fraction) {
            return Err(PriceError::Invalid);
        }

        let fraction = fraction.trim_end_matches('0');

        if fraction.len() > DECIMAL_PLACES {
            return Err(PriceError::TooManyDecimalPlaces(DECIMAL_PLACES));
        }

        let whole = whole.trim_start_matches('0');

        if whole.len() > WHOLE_DIGITS {
            return Err(PriceError::TooManyWholeDigits(WHOLE_DIGITS));
        }

        let whole_value: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| PriceError::Invalid)?
        };

        let fraction_value: i64 = if fraction.is_empty() {
            0
        } else {
            format!("{:0<width$}", fraction, width = DECIMAL_PLACES)
                .parse()
                .map_err(|_| PriceError::Invalid)?
        };

        let cents = whole_value * 100 + fraction_value;

        Ok(Self::from_cents(if negative { -cents } else { cents }))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct PriceVisitor;

impl Visitor<'_> for PriceVisitor {
    type Value = Price;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal number or numeric string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Price, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Price, E> {
        self.visit_str(&v.to_string())
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Price, E> {
        self.visit_str(&v.to_string())
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Price, E> {
        if !v.is_finite() {
            return Err(E::custom(PriceError::Invalid));
        }
        self.visit_str(&v.to_string())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PriceVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        assert_eq!("5.00".parse::<Price>().unwrap().to_string(), "5.00");
        assert_eq!("5".parse::<Price>().unwrap().to_string(), "5.00");
        assert_eq!("5.5".parse::<Price>().unwrap().cents(), 550);
        assert_eq!(".25".parse::<Price>().unwrap().cents(), 25);
        assert_eq!("999.99".parse::<Price>().unwrap().cents(), 99_999);
        assert_eq!("-1.05".parse::<Price>().unwrap().to_string(), "-1.05");
    }

    #[test]
    fn test_trailing_zeros_do_not_count_as_places() {
        assert_eq!("2.500".parse::<Price>().unwrap().cents(), 250);
    }

    #[test]
    fn test_rejects_extra_decimal_places() {
        assert_eq!(
            "1.234".parse::<Price>(),
            Err(PriceError::TooManyDecimalPlaces(2))
        );
    }

    #[test]
    fn test_rejects_too_many_whole_digits() {
        assert_eq!(
            "1000".parse::<Price>(),
            Err(PriceError::TooManyWholeDigits(3))
        );
        assert!("0999.00".parse::<Price>().is_ok());
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!("".parse::<Price>(), Err(PriceError::Invalid));
        assert_eq!(".".parse::<Price>(), Err(PriceError::Invalid));
        assert_eq!("abc".parse::<Price>(), Err(PriceError::Invalid));
        assert_eq!("1.2.3".parse::<Price>(), Err(PriceError::Invalid));
        assert_eq!("1e3".parse::<Price>(), Err(PriceError::Invalid));
    }

    #[test]
    fn test_serializes_as_string() {
        let price = Price::from_cents(500);
        assert_eq!(serde_json::to_string(&price).unwrap(), "\"5.00\"");
    }

    #[test]
    fn test_deserializes_from_number_or_string() {
        let from_str: Price = serde_json::from_str("\"5.50\"").unwrap();
        let from_float: Price = serde_json::from_str("5.5").unwrap();
        let from_int: Price = serde_json::from_str("5").unwrap();

        assert_eq!(from_str.cents(), 550);
        assert_eq!(from_float.cents(), 550);
        assert_eq!(from_int.cents(), 500);
        assert!(serde_json::from_str::<Price>("\"1.999\"").is_err());
    }
}
