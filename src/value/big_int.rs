use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Integer of arbitrary magnitude, held in canonical base-10 form.
///
/// The value is stored as validated decimal text: digits with no leading
/// zeros, a `-` prefix only for negative values, never a `+`. Canonical form
/// is all the encoder needs, since bencode integers are written as their
/// decimal digits; values that fit in an `i64` should use the fast path
/// instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    repr: Box<str>,
}

/// Errors produced while parsing a [`BigInt`] from a decimal literal.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseBigIntError {
    /// No digits in the literal.
    #[error("empty integer literal")]
    Empty,

    /// A character outside `0-9` (a leading `+` included).
    #[error("invalid digit {0:?} in integer literal")]
    InvalidDigit(char),

    /// Zero-padded literals have no canonical meaning.
    #[error("integer literal has leading zeros")]
    LeadingZeros,

    /// `-0` is not a canonical integer.
    #[error("integer literal is negative zero")]
    NegativeZero,
}

impl BigInt {
    /// The canonical decimal representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.repr
    }
}

impl FromStr for BigInt {
    type Err = ParseBigIntError;

    fn from_str(literal: &str) -> Result<BigInt, ParseBigIntError> {
        let digits = literal.strip_prefix('-').unwrap_or(literal);

        if digits.is_empty() {
            return Err(ParseBigIntError::Empty);
        }

        if let Some(invalid) = digits.chars().find(|c| !c.is_ascii_digit()) {
            return Err(ParseBigIntError::InvalidDigit(invalid));
        }

        if digits.len() > 1 && digits.starts_with('0') {
            return Err(ParseBigIntError::LeadingZeros);
        }

        if digits == "0" && literal.starts_with('-') {
            return Err(ParseBigIntError::NegativeZero);
        }

        Ok(BigInt { repr: literal.into() })
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr)
    }
}

impl From<i64> for BigInt {
    fn from(value: i64) -> BigInt {
        BigInt {
            repr: value.to_string().into_boxed_str(),
        }
    }
}

impl From<u64> for BigInt {
    fn from(value: u64) -> BigInt {
        BigInt {
            repr: value.to_string().into_boxed_str(),
        }
    }
}

impl From<i128> for BigInt {
    fn from(value: i128) -> BigInt {
        BigInt {
            repr: value.to_string().into_boxed_str(),
        }
    }
}

impl From<u128> for BigInt {
    fn from(value: u128) -> BigInt {
        BigInt {
            repr: value.to_string().into_boxed_str(),
        }
    }
}
