//! Sequential salesperson codes.
//!
//! The number comes from an atomic counter; this module only owns the display
//! format. `SalesCode(1)` renders as `SL000001`. Past 999999 the digits keep
//! growing (`SL1000000`) instead of wrapping, so distinct numbers always give
//! distinct codes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Fixed prefix of every sales code.
pub const SALES_CODE_PREFIX: &str = "SL";

/// Minimum number of digits after the prefix.
pub const SALES_CODE_WIDTH: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SalesCode(pub u64);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SalesCodeError {
    #[error("sales code must start with SL")]
    MissingPrefix,
    #[error("sales code must have at least 6 digits")]
    TooShort,
    #[error("sales code number is not a positive integer")]
    InvalidNumber,
}

impl SalesCode {
    pub fn number(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SalesCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{SALES_CODE_PREFIX}{:0width$}",
            self.0,
            width = SALES_CODE_WIDTH
        )
    }
}

impl FromStr for SalesCode {
    type Err = SalesCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix(SALES_CODE_PREFIX)
            .ok_or(SalesCodeError::MissingPrefix)?;
        if digits.len() < SALES_CODE_WIDTH {
            return Err(SalesCodeError::TooShort);
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SalesCodeError::InvalidNumber);
        }
        match digits.parse::<u64>() {
            Ok(0) | Err(_) => Err(SalesCodeError::InvalidNumber),
            Ok(n) => Ok(Self(n)),
        }
    }
}

impl Serialize for SalesCode {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SalesCode {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
