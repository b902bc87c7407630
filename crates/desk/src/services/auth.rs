//! Session/role resolution.
//!
//! One credential pair maps to one role. The shared passwords are checked
//! in privilege order, first match wins; anything else falls through to the
//! customer lookup against the document store. Login failures are surfaced
//! generically so the response never reveals whether a password was wrong
//! or a customer simply does not exist.

use secrecy::ExposeSecret;
use tracing::{info, instrument};

use docustore_core::Role;

use crate::config::DeskConfig;
use crate::error::AppError;
use crate::models::CurrentUser;
use crate::store::DocumentStore;

/// Resolve a name/secret pair to a session identity.
///
/// # Errors
///
/// Returns [`AppError::Validation`] when the name is blank, and
/// [`AppError::Unauthorized`] when no password and no customer record
/// matches.
#[instrument(skip_all, fields(name = %name.trim()))]
pub fn resolve(
    config: &DeskConfig,
    store: &DocumentStore,
    name: &str,
    secret: &str,
) -> Result<CurrentUser, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::Validation { field: "name" });
    }

    let passwords = &config.passwords;
    let role = if secret == passwords.creator.expose_secret() {
        Role::Creator
    } else if secret == passwords.admin.expose_secret() {
        Role::Admin
    } else if secret == passwords.cashier.expose_secret() {
        Role::Cashier
    } else if store.has_match(name) {
        Role::Customer
    } else {
        return Err(AppError::Unauthorized);
    };

    info!(%role, "login");
    Ok(CurrentUser {
        name: name.to_owned(),
        role,
    })
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use secrecy::SecretString;

    use docustore_core::{DocumentId, DocumentNumber, DocumentStatus, FeeAmount};

    use super::*;
    use crate::config::RolePasswords;
    use crate::models::Document;

    fn config() -> DeskConfig {
        let mut config = DeskConfig::from_env().expect("defaults load");
        config.passwords = RolePasswords {
            creator: SecretString::from("202505"),
            admin: SecretString::from("2025"),
            cashier: SecretString::from("25"),
        };
        config
    }

    fn store_with_customer() -> DocumentStore {
        let mut store = DocumentStore::new();
        store.insert(Document {
            id: DocumentId::generate(),
            number: DocumentNumber::from_input("A-1").expect("non-empty"),
            customer_name: "Ivan".to_string(),
            customer_last_name: Some("Petrov".to_string()),
            item_description: None,
            pickup_date: None,
            recipient_phone: "+70001112233".to_string(),
            recipient_email: None,
            deposit_amount: FeeAmount::ZERO,
            pickup_amount: FeeAmount::ZERO,
            issued_by: "Olga".to_string(),
            issued_at: Utc::now(),
            picked_up_at: None,
            status: DocumentStatus::Issued,
            qr_code: String::new(),
        });
        store
    }

    #[test]
    fn passwords_resolve_in_privilege_order() {
        let config = config();
        let store = DocumentStore::new();

        let user = resolve(&config, &store, "Olga", "202505").expect("creator");
        assert_eq!(user.role, Role::Creator);
        let user = resolve(&config, &store, "Olga", "2025").expect("admin");
        assert_eq!(user.role, Role::Admin);
        let user = resolve(&config, &store, "Olga", "25").expect("cashier");
        assert_eq!(user.role, Role::Cashier);
    }

    #[test]
    fn blank_name_is_a_validation_error() {
        let config = config();
        let store = DocumentStore::new();
        match resolve(&config, &store, "   ", "2025") {
            Err(AppError::Validation { field }) => assert_eq!(field, "name"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn matching_customer_logs_in_with_empty_secret() {
        let config = config();
        let store = store_with_customer();

        let by_phone = resolve(&config, &store, "+70001112233", "").expect("customer");
        assert_eq!(by_phone.role, Role::Customer);
        assert_eq!(by_phone.name, "+70001112233");

        let by_name = resolve(&config, &store, "ivan petrov", "").expect("customer");
        assert_eq!(by_name.role, Role::Customer);
    }

    #[test]
    fn wrong_password_and_unknown_customer_are_indistinguishable() {
        let config = config();
        let store = store_with_customer();

        let wrong_password = resolve(&config, &store, "Olga", "1234");
        let unknown_customer = resolve(&config, &store, "Nobody Here", "");

        assert!(matches!(wrong_password, Err(AppError::Unauthorized)));
        assert!(matches!(unknown_customer, Err(AppError::Unauthorized)));
    }
}
