//! Domain models for the desk service.

pub mod document;
pub mod session;
pub mod settings;

pub use document::{Document, DocumentDraft, ValidatedDraft};
pub use session::{CurrentUser, keys as session_keys};
pub use settings::StoreSettings;
