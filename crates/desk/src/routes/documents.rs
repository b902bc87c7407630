//! Document route handlers: lifecycle, views, pickup, notification.
//!
//! Handlers stay thin: extract, delegate to the service, shape the
//! response. View handlers filter under a read guard and never expose the
//! store's internals.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;

use docustore_core::{Action, DocumentId};

use crate::error::AppError;
use crate::middleware::auth::RequireUser;
use crate::models::{Document, DocumentDraft};
use crate::services::{self, documents, notify};
use crate::state::AppState;

/// Issue a new document.
pub async fn issue(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Json(draft): Json<DocumentDraft>,
) -> Result<impl IntoResponse, AppError> {
    let doc = documents::issue(&state, &user, draft).await?;
    Ok((StatusCode::CREATED, Json(doc)))
}

/// Edit a document.
pub async fn edit(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(id): Path<DocumentId>,
    Json(draft): Json<DocumentDraft>,
) -> Result<Json<Document>, AppError> {
    let doc = documents::edit(&state, &user, id, draft).await?;
    Ok(Json(doc))
}

/// Delete a document.
pub async fn delete(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(id): Path<DocumentId>,
) -> Result<impl IntoResponse, AppError> {
    documents::delete(&state, &user, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Pickup request: the scanned or typed document number.
#[derive(Debug, Deserialize)]
pub struct PickupForm {
    pub number: String,
}

/// Hand an item back by its document number.
pub async fn pickup(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Json(form): Json<PickupForm>,
) -> Result<Json<Document>, AppError> {
    let doc = documents::pickup(&state, &user, &form.number).await?;
    Ok(Json(doc))
}

/// Active (not yet picked up) documents, newest first.
#[instrument(skip_all, fields(actor = %user.name))]
pub async fn active(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
) -> Result<Json<Vec<Document>>, AppError> {
    services::ensure(&user, Action::ViewActive)?;
    let docs = state.documents().read().await;
    Ok(Json(docs.active().cloned().collect()))
}

/// The full archive, picked-up documents included, newest first.
#[instrument(skip_all, fields(actor = %user.name))]
pub async fn archive(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
) -> Result<Json<Vec<Document>>, AppError> {
    services::ensure(&user, Action::ViewArchive)?;
    let docs = state.documents().read().await;
    Ok(Json(docs.all().to_vec()))
}

/// Documents visible to the logged-in customer.
///
/// Matched with the same predicate the login used, so a customer always
/// sees the documents that let them in.
#[instrument(skip_all, fields(actor = %user.name))]
pub async fn mine(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
) -> Result<Json<Vec<Document>>, AppError> {
    services::ensure(&user, Action::ViewOwn)?;
    let docs = state.documents().read().await;
    Ok(Json(docs.matching_identifier(&user.name).cloned().collect()))
}

/// Notification request body.
#[derive(Debug, Deserialize)]
pub struct NotifyForm {
    pub kind: notify::NotificationKind,
    pub message: String,
}

/// Send a Telegram notification about a document.
pub async fn notify(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(id): Path<DocumentId>,
    Json(form): Json<NotifyForm>,
) -> Result<impl IntoResponse, AppError> {
    notify::send(&state, &user, id, form.kind, &form.message).await?;
    Ok(StatusCode::NO_CONTENT)
}
