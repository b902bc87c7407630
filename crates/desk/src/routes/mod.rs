//! HTTP route handlers for the desk service.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                      - Health check
//!
//! # Session
//! POST   /api/session                 - Log in (password or customer lookup)
//! GET    /api/session                 - Current session identity
//! DELETE /api/session                 - Log out
//!
//! # Documents
//! POST   /api/documents               - Issue a document (cashier+)
//! GET    /api/documents               - Full archive (admin+)
//! GET    /api/documents/active        - Active documents (cashier+)
//! GET    /api/documents/mine          - Customer's own documents
//! PUT    /api/documents/{id}          - Edit a document (admin+)
//! DELETE /api/documents/{id}         - Delete a document (admin+)
//! POST   /api/documents/{id}/notify   - Telegram the customer (cashier+)
//! POST   /api/pickup                  - Hand back by scanned number (cashier+)
//!
//! # Settings (creator only)
//! GET    /api/settings                - Store settings
//! PUT    /api/settings                - Update store settings
//! GET    /api/stats                   - Document counts
//! ```

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

pub mod documents;
pub mod session;
pub mod settings;

/// Assemble all API routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Session
        .route(
            "/api/session",
            post(session::login)
                .get(session::current)
                .delete(session::logout),
        )
        // Documents
        .route(
            "/api/documents",
            post(documents::issue).get(documents::archive),
        )
        .route("/api/documents/active", get(documents::active))
        .route("/api/documents/mine", get(documents::mine))
        .route(
            "/api/documents/{id}",
            axum::routing::put(documents::edit).delete(documents::delete),
        )
        .route("/api/documents/{id}/notify", post(documents::notify))
        .route("/api/pickup", post(documents::pickup))
        // Settings
        .route(
            "/api/settings",
            get(settings::show).put(settings::update),
        )
        .route("/api/stats", get(settings::stats))
}
