//! In-memory state owned by the running service.
//!
//! Nothing here persists: a restart empties the desk. The store is an
//! explicit object with a narrow mutation API so the lifecycle
//! services (and their tests) never touch the underlying collection
//! directly.

pub mod documents;

pub use documents::{DocumentCounts, DocumentStore};
