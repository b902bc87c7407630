//! QR image generation.
//!
//! The QR encoder is an opaque external collaborator: the desk hands it the
//! document number and gets back an image data URL. Its failure modes are
//! not this service's concern beyond graceful degradation - a document is
//! still issued when the image could not be produced, it just carries an
//! empty `qr_code`.

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::Client;
use tracing::{error, instrument};

use crate::config::QrConfig;

/// Generates a QR image for a piece of text.
#[async_trait]
pub trait QrGenerator: Send + Sync {
    /// Produce an image data URL encoding `text`.
    ///
    /// Never fails: any error is logged and degraded to an empty string.
    async fn generate(&self, text: &str) -> String;
}

/// HTTP-backed generator using a QR image endpoint.
#[derive(Debug, Clone)]
pub struct HttpQrGenerator {
    client: Client,
    config: QrConfig,
}

impl HttpQrGenerator {
    /// Create a generator for the configured endpoint.
    #[must_use]
    pub fn new(config: QrConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    async fn fetch(&self, text: &str) -> Result<String, reqwest::Error> {
        let size = format!("{0}x{0}", self.config.size);
        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&[("size", size.as_str()), ("data", text)])
            .send()
            .await?
            .error_for_status()?;

        let bytes = response.bytes().await?;
        Ok(format!("data:image/png;base64,{}", BASE64.encode(&bytes)))
    }
}

#[async_trait]
impl QrGenerator for HttpQrGenerator {
    #[instrument(skip(self))]
    async fn generate(&self, text: &str) -> String {
        match self.fetch(text).await {
            Ok(data_url) => data_url,
            Err(e) => {
                error!(error = %e, "QR generation failed, issuing without image");
                String::new()
            }
        }
    }
}

/// Generator that always degrades to an empty image.
///
/// Used by tests and anywhere the desk should run without network access.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullQrGenerator;

#[async_trait]
impl QrGenerator for NullQrGenerator {
    async fn generate(&self, _text: &str) -> String {
        String::new()
    }
}
