//! The document record and its issue/edit form.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use docustore_core::{DocumentId, DocumentNumber, DocumentStatus, FeeAmount};

use crate::config::FormProfile;
use crate::error::AppError;

/// A record representing one item deposited for storage.
///
/// `item_description` and `pickup_date` belong to the full form profile;
/// the compact profile leaves them (and the last name and email) optional.
/// One schema, two validation profiles - there is no second code path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Unique opaque ID; all mutating lookups key on this.
    pub id: DocumentId,
    /// Human-facing number, printed under the QR code. Not unique.
    pub number: DocumentNumber,
    /// Customer's first name.
    pub customer_name: String,
    /// Customer's last name.
    pub customer_last_name: Option<String>,
    /// What was left in storage.
    pub item_description: Option<String>,
    /// Agreed pickup date.
    pub pickup_date: Option<NaiveDate>,
    /// Recipient's phone; doubles as the customer-login credential.
    pub recipient_phone: String,
    /// Recipient's email, if given.
    pub recipient_email: Option<String>,
    /// Fee charged at deposit.
    pub deposit_amount: FeeAmount,
    /// Fee charged at pickup.
    pub pickup_amount: FeeAmount,
    /// Display name of the staff member who issued the document.
    pub issued_by: String,
    /// Issuance timestamp; immutable after creation.
    pub issued_at: DateTime<Utc>,
    /// Pickup timestamp; present if and only if status is `picked_up`.
    pub picked_up_at: Option<DateTime<Utc>>,
    /// Lifecycle status.
    pub status: DocumentStatus,
    /// QR image data URL encoding `number`; empty when generation failed.
    pub qr_code: String,
}

impl Document {
    /// The login/visibility predicate shared by the session resolver and
    /// the customer view: an identifier matches a document when it equals
    /// the recipient phone exactly, or when the lowercased
    /// `customer_name + " " + customer_last_name` contains the lowercased
    /// identifier as a substring.
    #[must_use]
    pub fn matches_identifier(&self, identifier: &str) -> bool {
        if self.recipient_phone == identifier {
            return true;
        }
        let full_name = format!(
            "{} {}",
            self.customer_name.to_lowercase(),
            self.customer_last_name.as_deref().unwrap_or("").to_lowercase()
        );
        full_name.contains(&identifier.to_lowercase())
    }
}

/// Raw issue/edit form input.
///
/// Fields arrive as strings with form semantics: missing and blank are the
/// same thing, and the fee amounts are parsed during validation so a bad
/// value can be reported against its field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentDraft {
    /// Explicit document number; blank means auto-generate.
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_last_name: String,
    #[serde(default)]
    pub item_description: String,
    /// Calendar date, `YYYY-MM-DD`.
    #[serde(default)]
    pub pickup_date: String,
    #[serde(default)]
    pub recipient_phone: String,
    #[serde(default)]
    pub recipient_email: String,
    #[serde(default)]
    pub deposit_amount: String,
    #[serde(default)]
    pub pickup_amount: String,
}

/// A draft that passed validation for the active form profile.
#[derive(Debug, Clone)]
pub struct ValidatedDraft {
    /// Explicit number, or `None` to auto-generate at issuance.
    pub number: Option<DocumentNumber>,
    pub customer_name: String,
    pub customer_last_name: Option<String>,
    pub item_description: Option<String>,
    pub pickup_date: Option<NaiveDate>,
    pub recipient_phone: String,
    pub recipient_email: Option<String>,
    pub deposit_amount: FeeAmount,
    pub pickup_amount: FeeAmount,
}

impl DocumentDraft {
    /// Validate the draft for the given form profile.
    ///
    /// Checks run in form order and report the first offending field, so a
    /// cashier fixes one thing at a time exactly like the original form.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] naming the offending field; no
    /// state is touched on failure.
    pub fn validate(&self, profile: FormProfile) -> Result<ValidatedDraft, AppError> {
        let full = profile == FormProfile::Full;

        let customer_name = require_field(&self.customer_name, "customer_name")?;
        let customer_last_name = if full {
            Some(require_field(&self.customer_last_name, "customer_last_name")?)
        } else {
            optional_field(&self.customer_last_name)
        };
        let item_description = if full {
            Some(require_field(&self.item_description, "item_description")?)
        } else {
            optional_field(&self.item_description)
        };
        let pickup_date = if full {
            Some(parse_pickup_date(require_field(&self.pickup_date, "pickup_date")?.as_str())?)
        } else {
            optional_field(&self.pickup_date)
                .map(|s| parse_pickup_date(&s))
                .transpose()?
        };
        let recipient_phone = require_field(&self.recipient_phone, "recipient_phone")?;
        let recipient_email = optional_field(&self.recipient_email);
        let deposit_amount = FeeAmount::parse(&self.deposit_amount).map_err(|_| {
            AppError::Validation {
                field: "deposit_amount",
            }
        })?;
        let pickup_amount = FeeAmount::parse(&self.pickup_amount).map_err(|_| {
            AppError::Validation {
                field: "pickup_amount",
            }
        })?;

        Ok(ValidatedDraft {
            number: DocumentNumber::from_input(&self.number),
            customer_name,
            customer_last_name,
            item_description,
            pickup_date,
            recipient_phone,
            recipient_email,
            deposit_amount,
            pickup_amount,
        })
    }
}

fn require_field(value: &str, field: &'static str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(AppError::Validation { field })
    } else {
        Ok(trimmed.to_owned())
    }
}

fn optional_field(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

fn parse_pickup_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| AppError::Validation {
        field: "pickup_date",
    })
}
