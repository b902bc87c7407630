//! Core types for DocuStore.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod fee;
pub mod id;
pub mod number;
pub mod role;
pub mod status;

pub use fee::{FeeAmount, FeeError};
pub use id::DocumentId;
pub use number::DocumentNumber;
pub use role::{Action, Role};
pub use status::DocumentStatus;
