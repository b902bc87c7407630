//! Authentication extractors.
//!
//! Handlers take [`RequireUser`] to demand a logged-in session; what the
//! resolved role may then do is decided by the capability table in the
//! services, not here.

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use crate::error::AppError;
use crate::models::{CurrentUser, session_keys};

/// Extractor that requires a logged-in user.
///
/// Rejects with a 401 JSON body when no session identity exists.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(RequireUser(user): RequireUser) -> impl IntoResponse {
///     format!("Hello, {}!", user.name)
/// }
/// ```
pub struct RequireUser(pub CurrentUser);

impl<S> FromRequestParts<S> for RequireUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // The session is placed in extensions by SessionManagerLayer.
        let session = parts
            .extensions
            .get::<Session>()
            .ok_or(AppError::Unauthorized)?;

        let user: CurrentUser = session
            .get(session_keys::CURRENT_USER)
            .await
            .ok()
            .flatten()
            .ok_or(AppError::Unauthorized)?;

        Ok(Self(user))
    }
}

/// Store the resolved identity in the session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_user(
    session: &Session,
    user: &CurrentUser,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CURRENT_USER, user).await
}

/// Clear the session identity (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_user(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session
        .remove::<CurrentUser>(session_keys::CURRENT_USER)
        .await?;
    Ok(())
}
