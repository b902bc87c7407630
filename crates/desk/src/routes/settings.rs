//! Creator panel: store settings and statistics.

use axum::{Json, extract::State};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{info, instrument};

use docustore_core::Action;

use crate::error::AppError;
use crate::middleware::auth::RequireUser;
use crate::models::StoreSettings;
use crate::services::ensure;
use crate::state::AppState;
use crate::store::DocumentCounts;

/// Current store settings.
pub async fn show(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
) -> Result<Json<StoreSettings>, AppError> {
    ensure(&user, Action::ManageSettings)?;
    let settings = state.settings().read().await.clone();
    Ok(Json(settings))
}

/// Settings update form.
#[derive(Debug, Deserialize)]
pub struct SettingsForm {
    pub store_name: String,
    pub deposit_fee: Decimal,
    pub pickup_fee: Decimal,
}

/// Replace the store settings.
#[instrument(skip_all, fields(actor = %user.name))]
pub async fn update(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Json(form): Json<SettingsForm>,
) -> Result<Json<StoreSettings>, AppError> {
    ensure(&user, Action::ManageSettings)?;

    let store_name = form.store_name.trim();
    if store_name.is_empty() {
        return Err(AppError::Validation {
            field: "store_name",
        });
    }
    if form.deposit_fee.is_sign_negative() {
        return Err(AppError::Validation {
            field: "deposit_fee",
        });
    }
    if form.pickup_fee.is_sign_negative() {
        return Err(AppError::Validation {
            field: "pickup_fee",
        });
    }

    let updated = StoreSettings {
        store_name: store_name.to_owned(),
        deposit_fee: form.deposit_fee,
        pickup_fee: form.pickup_fee,
    };
    *state.settings().write().await = updated.clone();

    info!(store_name = %updated.store_name, "settings updated");
    Ok(Json(updated))
}

/// Document counts for the statistics panel.
pub async fn stats(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
) -> Result<Json<DocumentCounts>, AppError> {
    ensure(&user, Action::ManageSettings)?;
    let counts = state.documents().read().await.counts();
    Ok(Json(counts))
}
