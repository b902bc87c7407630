//! Integration tests for DocuStore.
//!
//! Each test boots the real desk application in-process on an ephemeral
//! port and drives it over HTTP with a cookie-holding client, so the
//! session layer, extractors and JSON surface are all exercised exactly
//! as a browser would.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p docustore-integration-tests
//! ```

use std::sync::Arc;

use reqwest::Client;
use serde_json::{Value, json};
use tokio::task::JoinHandle;

use docustore_desk::announce::TracingAnnouncer;
use docustore_desk::config::DeskConfig;
use docustore_desk::qr::NullQrGenerator;
use docustore_desk::state::AppState;

/// A desk application running on an ephemeral local port.
///
/// The server task is aborted on drop; all state is in memory, so each
/// test starts from an empty desk.
pub struct TestServer {
    pub base_url: String,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Boot the application with default configuration and no outbound
    /// network access (QR generation degrades to an empty image).
    ///
    /// # Panics
    ///
    /// Panics when the configuration does not load or the listener cannot
    /// bind, which fails the test early with a clear message.
    pub async fn spawn() -> Self {
        let config = DeskConfig::from_env().expect("default configuration loads");
        let state = AppState::new(config, Arc::new(NullQrGenerator), Arc::new(TracingAnnouncer));
        let app = docustore_desk::app(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let addr = listener.local_addr().expect("listener has an address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("server runs");
        });

        Self {
            base_url: format!("http://{addr}"),
            handle,
        }
    }

    /// A client that keeps its session cookie between requests.
    ///
    /// # Panics
    ///
    /// Panics when the client cannot be constructed.
    #[must_use]
    pub fn client() -> Client {
        Client::builder()
            .cookie_store(true)
            .build()
            .expect("build HTTP client")
    }

    /// Log the client's session in; returns the resolved identity.
    ///
    /// # Panics
    ///
    /// Panics when the login request fails or is rejected.
    pub async fn login(&self, client: &Client, name: &str, secret: &str) -> Value {
        let resp = client
            .post(format!("{}/api/session", self.base_url))
            .json(&json!({ "name": name, "secret": secret }))
            .send()
            .await
            .expect("login request");
        assert!(resp.status().is_success(), "login failed: {}", resp.status());
        resp.json().await.expect("login response body")
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// A complete issue form for the full profile.
#[must_use]
pub fn full_draft(number: &str, name: &str, phone: &str) -> Value {
    json!({
        "number": number,
        "customer_name": name,
        "customer_last_name": "Ivanova",
        "item_description": "Blue jacket",
        "pickup_date": "2026-09-01",
        "recipient_phone": phone,
        "deposit_amount": "100",
        "pickup_amount": "50",
    })
}
