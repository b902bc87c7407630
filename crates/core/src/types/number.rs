//! Human-facing document number.

use core::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Human-facing document identifier, printed next to the QR code.
///
/// Either supplied by the cashier or auto-generated from the issuance
/// timestamp. Uniqueness is NOT enforced by the store: two documents issued
/// in the same millisecond with auto-generated numbers collide, and an
/// explicit number can repeat an existing one. Pickup therefore resolves a
/// number to a single active document and transitions it by its unique ID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentNumber(String);

impl DocumentNumber {
    /// Prefix used for auto-generated numbers.
    pub const GENERATED_PREFIX: &'static str = "DOC-";

    /// Wrap an explicit, caller-supplied number.
    ///
    /// Returns `None` if the input is empty after trimming, meaning a
    /// number should be generated instead.
    #[must_use]
    pub fn from_input(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_owned()))
        }
    }

    /// Auto-generate a number from the issuance timestamp.
    ///
    /// Format: `DOC-<unix milliseconds>`, monotonic by creation time.
    #[must_use]
    pub fn generate(at: DateTime<Utc>) -> Self {
        Self(format!("{}{}", Self::GENERATED_PREFIX, at.timestamp_millis()))
    }

    /// Returns the number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
