//! DocuStore Core - Shared domain types.
//!
//! This crate provides the common types used across DocuStore components:
//! - `desk` - The front-desk service (sessions, document lifecycle, HTTP surface)
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no session
//! state. This keeps it lightweight and allows the domain rules (role
//! capabilities, status transitions, fee constraints) to be tested without
//! any runtime environment.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for document IDs, numbers, fees, statuses,
//!   and the role/capability table

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
