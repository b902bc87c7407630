//! HTTP middleware stack for the desk service.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. `TraceLayer` (request tracing)
//! 2. Session layer (tower-sessions with in-memory store)
//!
//! Authentication happens per-handler through the extractors in
//! [`auth`]; fine-grained capability checks live in the services.

pub mod auth;
pub mod session;
