//! Session route handlers: login, identity, logout.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::AppError;
use crate::middleware::auth::{RequireUser, clear_current_user, set_current_user};
use crate::services::auth;
use crate::state::AppState;

/// Login form data.
///
/// `secret` is optional: customers authenticate by identifier alone.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub name: String,
    #[serde(default)]
    pub secret: String,
}

/// Log in with a name and an optional shared password.
///
/// Returns the resolved identity; the role is decided by the secret,
/// falling back to a customer lookup against the document store.
#[instrument(skip_all, fields(name = %form.name.trim()))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(form): Json<LoginForm>,
) -> Result<impl IntoResponse, AppError> {
    let user = {
        let docs = state.documents().read().await;
        auth::resolve(state.config(), &docs, &form.name, &form.secret)?
    };

    set_current_user(&session, &user)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(user))
}

/// The current session identity.
pub async fn current(RequireUser(user): RequireUser) -> impl IntoResponse {
    Json(user)
}

/// Log out, clearing the session identity.
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    clear_current_user(&session)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;
    Ok(StatusCode::NO_CONTENT)
}
