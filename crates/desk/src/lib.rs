//! DocuStore desk service library.
//!
//! Everything the binary wires together is exported here so the full
//! HTTP application can be built in-process for tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::{Router, routing::get};
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

pub mod announce;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod qr;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;

use middleware::session::create_session_layer;
use state::AppState;

/// Build the complete HTTP application.
///
/// Includes the health endpoint, all API routes, the session layer and
/// request tracing; the binary only binds and serves this.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .layer(create_session_layer())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record("latency_ms", u64::try_from(latency.as_millis()).unwrap_or(u64::MAX));
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. There are no external
/// dependencies to probe; the document store lives in this process.
async fn health() -> &'static str {
    "ok"
}
