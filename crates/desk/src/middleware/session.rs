//! Session middleware configuration.
//!
//! Sessions back the login state and live in memory, like the documents
//! themselves: a restart logs everyone out and empties the desk, which is
//! the intended lifecycle for this service.

use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "docustore_session";

/// Session expiry time in seconds (12 hours, roughly one shift).
const SESSION_EXPIRY_SECONDS: i64 = 12 * 60 * 60;

/// Create the session layer with an in-memory store.
#[must_use]
pub fn create_session_layer() -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(false)
        .with_same_site(tower_sessions::cookie::SameSite::Strict)
        .with_http_only(true)
        .with_path("/")
}
