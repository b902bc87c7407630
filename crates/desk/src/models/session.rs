//! Session-related types for desk authentication.
//!
//! Types stored in the session to identify the logged-in user. Re-running
//! login at any time fully replaces the stored identity; there is no
//! multi-session and no token.

use serde::{Deserialize, Serialize};

use docustore_core::Role;

/// Session-stored identity.
///
/// For staff, `name` is the display name typed at login and recorded as
/// `issued_by` on new documents. For customers, `name` is the identifier
/// (phone or name fragment) their visible documents are matched against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Display name or customer identifier entered at login.
    pub name: String,
    /// Resolved access level.
    pub role: Role,
}

/// Session keys for authentication data.
pub mod keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";
}
