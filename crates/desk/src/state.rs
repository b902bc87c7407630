//! Application state shared across handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::announce::Announcer;
use crate::config::DeskConfig;
use crate::models::StoreSettings;
use crate::qr::QrGenerator;
use crate::services::notify::TelegramNotifier;
use crate::store::DocumentStore;

/// Application state shared across all handlers.
///
/// Cheap to clone; everything lives behind one `Arc`. The document store
/// and settings sit behind `tokio::sync::RwLock`, which serialises writers:
/// each lifecycle operation runs read-then-mutate under a single write
/// guard, so no partial mutation is ever observable even with concurrent
/// clients.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: DeskConfig,
    documents: RwLock<DocumentStore>,
    settings: RwLock<StoreSettings>,
    qr: Arc<dyn QrGenerator>,
    announcer: Arc<dyn Announcer>,
    notifier: Option<TelegramNotifier>,
}

impl AppState {
    /// Build the application state.
    ///
    /// The QR generator and announcer are injected so tests can run the
    /// full service without network access or a speaker.
    #[must_use]
    pub fn new(config: DeskConfig, qr: Arc<dyn QrGenerator>, announcer: Arc<dyn Announcer>) -> Self {
        let settings = StoreSettings::from_config(&config);
        let notifier = config.telegram().map(TelegramNotifier::new);
        Self {
            inner: Arc::new(AppStateInner {
                config,
                documents: RwLock::new(DocumentStore::new()),
                settings: RwLock::new(settings),
                qr,
                announcer,
                notifier,
            }),
        }
    }

    /// The loaded configuration.
    #[must_use]
    pub fn config(&self) -> &DeskConfig {
        &self.inner.config
    }

    /// The document store.
    #[must_use]
    pub fn documents(&self) -> &RwLock<DocumentStore> {
        &self.inner.documents
    }

    /// The creator-managed settings.
    #[must_use]
    pub fn settings(&self) -> &RwLock<StoreSettings> {
        &self.inner.settings
    }

    /// The QR image generator.
    #[must_use]
    pub fn qr(&self) -> &dyn QrGenerator {
        self.inner.qr.as_ref()
    }

    /// The pickup announcer.
    #[must_use]
    pub fn announcer(&self) -> &dyn Announcer {
        self.inner.announcer.as_ref()
    }

    /// The Telegram notifier, if configured.
    #[must_use]
    pub fn notifier(&self) -> Option<&TelegramNotifier> {
        self.inner.notifier.as_ref()
    }
}
