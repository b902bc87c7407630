//! Session roles and the capability table.

use serde::{Deserialize, Serialize};

/// Access level of a logged-in session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Super-admin: full access including system settings.
    Creator,
    /// Staff admin: document management plus the archive.
    Admin,
    /// Front-desk staff: issue and pickup only.
    Cashier,
    /// Self-service customer: read-only view of their own documents.
    Customer,
}

/// An operation a session may attempt.
///
/// Every handler resolves its action once and asks [`Role::allows`] before
/// touching any state; there are no inline role comparisons elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Create a new document.
    Issue,
    /// Replace an existing document's fields in place.
    Edit,
    /// Remove a document from the store.
    Delete,
    /// Transition a document to picked-up.
    Pickup,
    /// List documents still in storage.
    ViewActive,
    /// List all documents regardless of status.
    ViewArchive,
    /// List the documents matching the session's own identifier.
    ViewOwn,
    /// Read or update system settings and statistics.
    ManageSettings,
    /// Send a customer notification for a document.
    Notify,
}

impl Role {
    /// The capability table: which roles may perform which actions.
    #[must_use]
    pub const fn allows(self, action: Action) -> bool {
        match action {
            Action::Issue | Action::Pickup | Action::ViewActive | Action::Notify => {
                matches!(self, Self::Cashier | Self::Admin | Self::Creator)
            }
            Action::Edit | Action::Delete | Action::ViewArchive => {
                matches!(self, Self::Admin | Self::Creator)
            }
            Action::ViewOwn => matches!(self, Self::Customer),
            Action::ManageSettings => matches!(self, Self::Creator),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Creator => write!(f, "creator"),
            Self::Admin => write!(f, "admin"),
            Self::Cashier => write!(f, "cashier"),
            Self::Customer => write!(f, "customer"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "creator" => Ok(Self::Creator),
            "admin" => Ok(Self::Admin),
            "cashier" => Ok(Self::Cashier),
            "customer" => Ok(Self::Customer),
            _ => Err(format!("invalid role: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cashier_cannot_edit_or_delete() {
        assert!(!Role::Cashier.allows(Action::Edit));
        assert!(!Role::Cashier.allows(Action::Delete));
        assert!(!Role::Cashier.allows(Action::ViewArchive));
        assert!(Role::Cashier.allows(Action::Issue));
        assert!(Role::Cashier.allows(Action::Pickup));
    }

    #[test]
    fn admin_and_creator_can_edit_and_delete() {
        for role in [Role::Admin, Role::Creator] {
            assert!(role.allows(Action::Edit));
            assert!(role.allows(Action::Delete));
            assert!(role.allows(Action::ViewArchive));
        }
    }

    #[test]
    fn only_creator_manages_settings() {
        assert!(Role::Creator.allows(Action::ManageSettings));
        for role in [Role::Admin, Role::Cashier, Role::Customer] {
            assert!(!role.allows(Action::ManageSettings));
        }
    }

    #[test]
    fn customer_is_view_only() {
        assert!(Role::Customer.allows(Action::ViewOwn));
        for action in [
            Action::Issue,
            Action::Edit,
            Action::Delete,
            Action::Pickup,
            Action::ViewActive,
            Action::ViewArchive,
            Action::Notify,
        ] {
            assert!(!Role::Customer.allows(action), "customer must not {action:?}");
        }
    }

    #[test]
    fn staff_cannot_use_the_customer_view() {
        for role in [Role::Cashier, Role::Admin, Role::Creator] {
            assert!(!role.allows(Action::ViewOwn));
        }
    }

    #[test]
    fn role_round_trips_through_str() {
        for role in [Role::Creator, Role::Admin, Role::Cashier, Role::Customer] {
            let parsed: Role = role.to_string().parse().expect("valid role");
            assert_eq!(role, parsed);
        }
        assert!("manager".parse::<Role>().is_err());
    }
}
