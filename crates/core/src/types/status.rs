//! Document lifecycle status.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a document.
///
/// The only legal transition is `Issued -> PickedUp`, performed exactly
/// once. The store enforces this; there is no path back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    /// Item is in storage; the document is active.
    #[default]
    Issued,
    /// Item has been handed back; terminal state.
    PickedUp,
}

impl DocumentStatus {
    /// Whether the document is still active (the item is in storage).
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Issued)
    }
}

impl std::fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Issued => write!(f, "issued"),
            Self::PickedUp => write!(f, "picked_up"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&DocumentStatus::PickedUp).expect("serializable"),
            "\"picked_up\""
        );
    }

    #[test]
    fn only_issued_is_active() {
        assert!(DocumentStatus::Issued.is_active());
        assert!(!DocumentStatus::PickedUp.is_active());
    }
}
