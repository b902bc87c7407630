//! Audible pickup announcements.
//!
//! On pickup the desk announces the document number so the customer in the
//! queue hears it. The server itself has no speaker; the default
//! implementation emits a structured event that a front-end or kiosk can
//! turn into actual speech. Fire-and-forget: nothing observes the outcome.

use async_trait::async_trait;
use tracing::info;

/// Speaks a short phrase to whoever is standing at the desk.
#[async_trait]
pub trait Announcer: Send + Sync {
    /// Announce `text` in `language` at the given speech `rate`.
    async fn speak(&self, text: &str, language: &str, rate: f32);
}

/// Announcer that emits a structured tracing event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAnnouncer;

#[async_trait]
impl Announcer for TracingAnnouncer {
    async fn speak(&self, text: &str, language: &str, rate: f32) {
        info!(target: "docustore_desk::announce", %text, %language, %rate, "announcement");
    }
}
