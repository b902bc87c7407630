//! Document lifecycle operations: issue, edit, delete, pickup.
//!
//! Each operation checks the capability table, validates its input, and
//! only then touches the store - every failure path leaves the collection
//! exactly as it was. QR generation happens before the write lock is
//! taken: it is the only slow step, and a slow QR endpoint should delay
//! the response, not block other operations.

use chrono::Utc;
use tracing::{info, instrument};

use docustore_core::{Action, DocumentId, DocumentNumber, DocumentStatus};

use crate::error::AppError;
use crate::models::{CurrentUser, Document, DocumentDraft};
use crate::services::ensure;
use crate::state::AppState;

/// Issue a new document.
///
/// Resolves the number (explicit or `DOC-<millis>`), generates the QR
/// image (degrading to an empty one on failure), and prepends the new
/// record to the collection.
///
/// # Errors
///
/// Returns a permission error for roles without the issue capability and
/// a validation error naming the first offending field.
#[instrument(skip(state, draft), fields(actor = %actor.name))]
pub async fn issue(
    state: &AppState,
    actor: &CurrentUser,
    draft: DocumentDraft,
) -> Result<Document, AppError> {
    ensure(actor, Action::Issue)?;
    let validated = draft.validate(state.config().form_profile)?;

    let now = Utc::now();
    let number = validated
        .number
        .clone()
        .unwrap_or_else(|| DocumentNumber::generate(now));
    let qr_code = state.qr().generate(number.as_str()).await;

    let doc = Document {
        id: DocumentId::generate(),
        number,
        customer_name: validated.customer_name,
        customer_last_name: validated.customer_last_name,
        item_description: validated.item_description,
        pickup_date: validated.pickup_date,
        recipient_phone: validated.recipient_phone,
        recipient_email: validated.recipient_email,
        deposit_amount: validated.deposit_amount,
        pickup_amount: validated.pickup_amount,
        issued_by: actor.name.clone(),
        issued_at: now,
        picked_up_at: None,
        status: DocumentStatus::Issued,
        qr_code,
    };

    state.documents().write().await.insert(doc.clone());
    info!(id = %doc.id, number = %doc.number, "document issued");
    Ok(doc)
}

/// Edit an existing document in place.
///
/// Matched by `id`; preserves `id`, `issued_by`, `issued_at`, `status` and
/// `picked_up_at`, replaces everything else, and regenerates the QR image
/// from the (possibly changed) number.
///
/// # Errors
///
/// Permission error for non-admin roles, validation error for bad fields,
/// not-found for an unknown `id`.
#[instrument(skip(state, draft), fields(actor = %actor.name, %id))]
pub async fn edit(
    state: &AppState,
    actor: &CurrentUser,
    id: DocumentId,
    draft: DocumentDraft,
) -> Result<Document, AppError> {
    ensure(actor, Action::Edit)?;
    let validated = draft.validate(state.config().form_profile)?;

    let existing = state
        .documents()
        .read()
        .await
        .get(id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(id.to_string()))?;

    let number = validated
        .number
        .clone()
        .unwrap_or_else(|| DocumentNumber::generate(Utc::now()));
    let qr_code = state.qr().generate(number.as_str()).await;

    let updated = Document {
        id: existing.id,
        number,
        customer_name: validated.customer_name,
        customer_last_name: validated.customer_last_name,
        item_description: validated.item_description,
        pickup_date: validated.pickup_date,
        recipient_phone: validated.recipient_phone,
        recipient_email: validated.recipient_email,
        deposit_amount: validated.deposit_amount,
        pickup_amount: validated.pickup_amount,
        issued_by: existing.issued_by,
        issued_at: existing.issued_at,
        picked_up_at: existing.picked_up_at,
        status: existing.status,
        qr_code,
    };

    // The document may have been deleted while the QR image was being
    // regenerated; replace() re-checks under the write lock.
    if !state.documents().write().await.replace(updated.clone()) {
        return Err(AppError::NotFound(id.to_string()));
    }
    info!(%id, number = %updated.number, "document updated");
    Ok(updated)
}

/// Delete a document.
///
/// # Errors
///
/// Permission error for non-admin roles, not-found for an unknown `id`.
#[instrument(skip(state), fields(actor = %actor.name, %id))]
pub async fn delete(state: &AppState, actor: &CurrentUser, id: DocumentId) -> Result<(), AppError> {
    ensure(actor, Action::Delete)?;

    if !state.documents().write().await.remove(id) {
        return Err(AppError::NotFound(id.to_string()));
    }
    info!(%id, "document deleted");
    Ok(())
}

/// Hand an item back: transition the document for `number` to picked-up.
///
/// The scanned number is resolved to a single active document and the
/// transition is keyed by its unique `id`, so a duplicated number can
/// never flip more than one record. The number is then announced audibly.
///
/// # Errors
///
/// Permission error for customers, not-found when no active document
/// carries the number (wrong number, or already picked up).
#[instrument(skip(state), fields(actor = %actor.name, number = %number.trim()))]
pub async fn pickup(
    state: &AppState,
    actor: &CurrentUser,
    number: &str,
) -> Result<Document, AppError> {
    ensure(actor, Action::Pickup)?;
    let number = number.trim();

    let picked = {
        let mut docs = state.documents().write().await;
        let id = docs
            .find_active_by_number(number)
            .map(|d| d.id)
            .ok_or_else(|| AppError::NotFound(format!("{number} (or already picked up)")))?;
        docs.mark_picked_up(id, Utc::now())
            .cloned()
            .ok_or_else(|| AppError::NotFound(number.to_owned()))?
    };

    let announce = &state.config().announce;
    state
        .announcer()
        .speak(
            &format!("Номер документа: {number}"),
            &announce.language,
            announce.rate,
        )
        .await;

    info!(id = %picked.id, %number, "document picked up");
    Ok(picked)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::announce::testing::RecordingAnnouncer;
    use crate::qr::NullQrGenerator;
    use docustore_core::Role;

    fn state_with(announcer: Arc<RecordingAnnouncer>) -> AppState {
        let config = crate::config::DeskConfig::from_env().expect("defaults load");
        AppState::new(config, Arc::new(NullQrGenerator), announcer)
    }

    fn state() -> AppState {
        state_with(Arc::new(RecordingAnnouncer::default()))
    }

    fn staff(role: Role) -> CurrentUser {
        CurrentUser {
            name: "Olga".to_string(),
            role,
        }
    }

    fn draft() -> DocumentDraft {
        DocumentDraft {
            customer_name: "Anna".to_string(),
            customer_last_name: "Ivanova".to_string(),
            item_description: "Blue jacket".to_string(),
            pickup_date: "2026-09-01".to_string(),
            recipient_phone: "+70001112233".to_string(),
            deposit_amount: "100".to_string(),
            pickup_amount: "50".to_string(),
            ..DocumentDraft::default()
        }
    }

    #[tokio::test]
    async fn issue_adds_exactly_one_active_document() {
        let state = state();
        let cashier = staff(Role::Cashier);

        let doc = issue(&state, &cashier, draft()).await.expect("issued");

        assert_eq!(doc.status, DocumentStatus::Issued);
        assert!(doc.picked_up_at.is_none());
        assert!(doc.number.as_str().starts_with("DOC-"));
        assert_eq!(doc.issued_by, "Olga");

        let docs = state.documents().read().await;
        assert_eq!(docs.all().len(), 1);
        assert_eq!(docs.active().count(), 1);
    }

    #[tokio::test]
    async fn issue_rejects_customers_without_mutation() {
        let state = state();
        let customer = CurrentUser {
            name: "+70001112233".to_string(),
            role: Role::Customer,
        };

        let result = issue(&state, &customer, draft()).await;
        assert!(matches!(result, Err(AppError::Forbidden(_))));
        assert!(state.documents().read().await.all().is_empty());
    }

    #[tokio::test]
    async fn invalid_draft_leaves_the_store_untouched() {
        let state = state();
        let cashier = staff(Role::Cashier);

        let mut bad = draft();
        bad.deposit_amount = "lots".to_string();
        let result = issue(&state, &cashier, bad).await;

        assert!(matches!(
            result,
            Err(AppError::Validation {
                field: "deposit_amount"
            })
        ));
        assert!(state.documents().read().await.all().is_empty());
    }

    #[tokio::test]
    async fn edit_preserves_identity_fields_and_regenerates_qr() {
        let state = state();
        let admin = staff(Role::Admin);

        let issued = issue(&state, &admin, draft()).await.expect("issued");

        let mut changed = draft();
        changed.number = "B-9".to_string();
        changed.customer_name = "Maria".to_string();
        let updated = edit(&state, &admin, issued.id, changed).await.expect("edited");

        assert_eq!(updated.id, issued.id);
        assert_eq!(updated.issued_by, issued.issued_by);
        assert_eq!(updated.issued_at, issued.issued_at);
        assert_eq!(updated.status, issued.status);
        assert_eq!(updated.picked_up_at, issued.picked_up_at);
        assert_eq!(updated.customer_name, "Maria");
        assert_eq!(updated.number.as_str(), "B-9");

        let docs = state.documents().read().await;
        assert_eq!(docs.all().len(), 1);
    }

    #[tokio::test]
    async fn edit_and_delete_are_admin_only() {
        let state = state();
        let cashier = staff(Role::Cashier);
        let admin = staff(Role::Admin);

        let issued = issue(&state, &cashier, draft()).await.expect("issued");

        assert!(matches!(
            edit(&state, &cashier, issued.id, draft()).await,
            Err(AppError::Forbidden(_))
        ));
        assert!(matches!(
            delete(&state, &cashier, issued.id).await,
            Err(AppError::Forbidden(_))
        ));

        delete(&state, &admin, issued.id).await.expect("deleted");
        assert!(state.documents().read().await.all().is_empty());
    }

    #[tokio::test]
    async fn delete_of_unknown_id_is_not_found() {
        let state = state();
        let admin = staff(Role::Admin);
        let result = delete(&state, &admin, DocumentId::generate()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn pickup_transitions_and_announces_the_number() {
        let announcer = Arc::new(RecordingAnnouncer::default());
        let state = state_with(Arc::clone(&announcer));
        let cashier = staff(Role::Cashier);

        let issued = issue(&state, &cashier, draft()).await.expect("issued");
        let picked = pickup(&state, &cashier, issued.number.as_str())
            .await
            .expect("picked up");

        assert_eq!(picked.status, DocumentStatus::PickedUp);
        assert!(picked.picked_up_at.is_some());

        let spoken = announcer.spoken.lock().expect("announcer mutex");
        assert_eq!(spoken.len(), 1);
        assert!(spoken.first().expect("one entry").contains(issued.number.as_str()));

        let docs = state.documents().read().await;
        assert_eq!(docs.active().count(), 0);
        assert_eq!(docs.all().len(), 1);
    }

    #[tokio::test]
    async fn pickup_twice_is_not_found_and_keeps_the_timestamp() {
        let state = state();
        let cashier = staff(Role::Cashier);

        let issued = issue(&state, &cashier, draft()).await.expect("issued");
        let picked = pickup(&state, &cashier, issued.number.as_str())
            .await
            .expect("picked up");

        let again = pickup(&state, &cashier, issued.number.as_str()).await;
        assert!(matches!(again, Err(AppError::NotFound(_))));

        let docs = state.documents().read().await;
        assert_eq!(
            docs.get(issued.id).expect("present").picked_up_at,
            picked.picked_up_at
        );
    }

    #[tokio::test]
    async fn pickup_of_unknown_number_is_not_found() {
        let state = state();
        let cashier = staff(Role::Cashier);
        let result = pickup(&state, &cashier, "NO-SUCH").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
