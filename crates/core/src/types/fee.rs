//! Non-negative fee amounts.

use core::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`FeeAmount`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FeeError {
    /// The input string is empty.
    #[error("amount cannot be empty")]
    Empty,
    /// The input is not a decimal number.
    #[error("amount is not a number")]
    NotANumber,
    /// The amount is below zero.
    #[error("amount cannot be negative")]
    Negative,
}

/// A deposit or pickup fee.
///
/// Backed by a decimal so `0.10 + 0.20` style inputs survive intact;
/// guaranteed non-negative by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeeAmount(Decimal);

impl FeeAmount {
    /// Zero fee.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Build from a decimal.
    ///
    /// # Errors
    ///
    /// Returns [`FeeError::Negative`] if the amount is below zero.
    pub fn new(amount: Decimal) -> Result<Self, FeeError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(FeeError::Negative);
        }
        Ok(Self(amount))
    }

    /// Parse from form input.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty after trimming, does not
    /// parse as a decimal, or is negative.
    pub fn parse(s: &str) -> Result<Self, FeeError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(FeeError::Empty);
        }
        let amount = Decimal::from_str(trimmed).map_err(|_| FeeError::NotANumber)?;
        Self::new(amount).map_err(|_| FeeError::Negative)
    }
}

impl fmt::Display for FeeAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
