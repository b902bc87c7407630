//! Opaque document identifier.

use core::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique, opaque identifier for a document.
///
/// Assigned once at issuance and never reused. All mutating lookups
/// (edit, delete, pickup transition) key on this ID; the human-facing
/// document number is a display and search field only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(Uuid);

impl DocumentId {
    /// Generate a fresh random ID.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for DocumentId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        let a = DocumentId::generate();
        let b = DocumentId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn round_trips_through_display_and_parse() {
        let id = DocumentId::generate();
        let parsed: DocumentId = id.to_string().parse().expect("valid uuid");
        assert_eq!(id, parsed);
    }
}
