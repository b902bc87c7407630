//! Business logic for the desk service.
//!
//! Handlers stay thin; everything that checks a capability or mutates the
//! document store lives here. Every service entry point resolves its
//! [`Action`] and consults the capability table exactly once, before any
//! state is read.

use docustore_core::Action;

use crate::error::AppError;
use crate::models::CurrentUser;

pub mod auth;
pub mod documents;
pub mod notify;

/// Check the capability table for `actor`, naming the action on refusal.
///
/// # Errors
///
/// Returns [`AppError::Forbidden`] when the actor's role lacks the action.
pub(crate) fn ensure(actor: &CurrentUser, action: Action) -> Result<(), AppError> {
    if actor.role.allows(action) {
        Ok(())
    } else {
        Err(AppError::Forbidden(action_name(action)))
    }
}

const fn action_name(action: Action) -> &'static str {
    match action {
        Action::Issue => "issue",
        Action::Edit => "edit",
        Action::Delete => "delete",
        Action::Pickup => "pickup",
        Action::ViewActive => "view active documents",
        Action::ViewArchive => "view archive",
        Action::ViewOwn => "view own documents",
        Action::ManageSettings => "manage settings",
        Action::Notify => "notify",
    }
}
