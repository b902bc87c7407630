//! Creator-managed system settings.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::DeskConfig;

/// System settings shown on the creator panel.
///
/// Held in memory for the lifetime of the process, seeded from
/// configuration. Not persisted, like everything else here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Display name of the deposit desk.
    pub store_name: String,
    /// Default commission charged at deposit.
    pub deposit_fee: Decimal,
    /// Default commission charged at pickup.
    pub pickup_fee: Decimal,
}

impl StoreSettings {
    /// Seed settings from the loaded configuration.
    #[must_use]
    pub fn from_config(config: &DeskConfig) -> Self {
        Self {
            store_name: config.store_name.clone(),
            deposit_fee: config.deposit_fee,
            pickup_fee: config.pickup_fee,
        }
    }
}
