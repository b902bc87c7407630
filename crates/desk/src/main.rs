//! DocuStore desk service.
//!
//! This binary serves the deposit-desk API on port 3002.
//!
//! # Architecture
//!
//! - Axum web framework, JSON API only
//! - All state in memory: documents, settings and sessions vanish on
//!   restart, which is the intended lifecycle
//! - External calls: QR image generation and (optionally) Telegram
//!   customer notifications

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use docustore_desk::announce::TracingAnnouncer;
use docustore_desk::config::DeskConfig;
use docustore_desk::qr::HttpQrGenerator;
use docustore_desk::state::AppState;

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter.
    // Defaults to info level for our crate if RUST_LOG is not set.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "docustore_desk=info,tower_http=debug".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = DeskConfig::from_env().expect("Failed to load configuration");
    let addr = config.socket_addr();

    let qr = Arc::new(HttpQrGenerator::new(config.qr.clone()));
    let state = AppState::new(config, qr, Arc::new(TracingAnnouncer));

    let app = docustore_desk::app(state);

    tracing::info!("desk listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
