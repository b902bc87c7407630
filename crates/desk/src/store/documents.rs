//! The owned document collection.

use chrono::{DateTime, Utc};

use docustore_core::{DocumentId, DocumentStatus};

use crate::models::Document;

/// Counts shown on the creator statistics panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct DocumentCounts {
    /// Documents still in storage.
    pub active: usize,
    /// Documents already handed back.
    pub picked_up: usize,
    /// Everything, any status.
    pub total: usize,
}

/// Ordered in-memory collection of documents, newest issuance first.
///
/// The order is display-only; every mutating operation keys on the unique
/// [`DocumentId`]. The human-facing number is not unique and is only ever
/// used to *find* a document, never to mutate by.
#[derive(Debug, Default)]
pub struct DocumentStore {
    docs: Vec<Document>,
}

impl DocumentStore {
    /// Create an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { docs: Vec::new() }
    }

    /// Insert a freshly issued document at the head of the collection.
    pub fn insert(&mut self, doc: Document) {
        self.docs.insert(0, doc);
    }

    /// Look up a document by ID.
    #[must_use]
    pub fn get(&self, id: DocumentId) -> Option<&Document> {
        self.docs.iter().find(|d| d.id == id)
    }

    /// Replace the document with the same ID in place, keeping its position.
    ///
    /// Returns `false` (and changes nothing) when the ID is unknown.
    pub fn replace(&mut self, updated: Document) -> bool {
        match self.docs.iter_mut().find(|d| d.id == updated.id) {
            Some(slot) => {
                *slot = updated;
                true
            }
            None => false,
        }
    }

    /// Remove a document by ID. Returns `false` when the ID is unknown.
    pub fn remove(&mut self, id: DocumentId) -> bool {
        let before = self.docs.len();
        self.docs.retain(|d| d.id != id);
        self.docs.len() < before
    }

    /// Find the first *active* document carrying the given number.
    ///
    /// Numbers are not unique; when several active documents share one,
    /// the most recently issued wins and the rest stay untouched.
    #[must_use]
    pub fn find_active_by_number(&self, number: &str) -> Option<&Document> {
        self.docs
            .iter()
            .find(|d| d.number.as_str() == number && d.status.is_active())
    }

    /// Transition a document to picked-up.
    ///
    /// The transition is one-way and happens at most once: a document that
    /// is already picked up is left untouched and `None` is returned, so
    /// `picked_up_at` can never be overwritten.
    pub fn mark_picked_up(&mut self, id: DocumentId, at: DateTime<Utc>) -> Option<&Document> {
        let doc = self
            .docs
            .iter_mut()
            .find(|d| d.id == id && d.status.is_active())?;
        doc.status = DocumentStatus::PickedUp;
        doc.picked_up_at = Some(at);
        Some(doc)
    }

    /// Active queue: documents still in storage, collection order.
    pub fn active(&self) -> impl Iterator<Item = &Document> {
        self.docs.iter().filter(|d| d.status.is_active())
    }

    /// Archive: every document, any status, collection order.
    #[must_use]
    pub fn all(&self) -> &[Document] {
        &self.docs
    }

    /// Customer view: documents matching the session identifier, using the
    /// same predicate as login matching.
    pub fn matching_identifier<'a>(
        &'a self,
        identifier: &'a str,
    ) -> impl Iterator<Item = &'a Document> {
        self.docs.iter().filter(move |d| d.matches_identifier(identifier))
    }

    /// Whether any document matches the identifier (login check).
    #[must_use]
    pub fn has_match(&self, identifier: &str) -> bool {
        self.matching_identifier(identifier).next().is_some()
    }

    /// Counts for the statistics panel.
    #[must_use]
    pub fn counts(&self) -> DocumentCounts {
        let active = self.active().count();
        let total = self.docs.len();
        DocumentCounts {
            active,
            picked_up: total - active,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docustore_core::{DocumentNumber, FeeAmount};

    fn doc(number: &str, phone: &str) -> Document {
        Document {
            id: DocumentId::generate(),
            number: DocumentNumber::from_input(number).expect("non-empty"),
            customer_name: "Anna".to_string(),
            customer_last_name: Some("Ivanova".to_string()),
            item_description: Some("Bag".to_string()),
            pickup_date: None,
            recipient_phone: phone.to_string(),
            recipient_email: None,
            deposit_amount: FeeAmount::ZERO,
            pickup_amount: FeeAmount::ZERO,
            issued_by: "Olga".to_string(),
            issued_at: Utc::now(),
            picked_up_at: None,
            status: DocumentStatus::Issued,
            qr_code: String::new(),
        }
    }

    #[test]
    fn insert_prepends_newest_first() {
        let mut store = DocumentStore::new();
        let first = doc("A-1", "+71");
        let second = doc("A-2", "+72");
        store.insert(first.clone());
        store.insert(second.clone());

        let numbers: Vec<_> = store.all().iter().map(|d| d.number.as_str()).collect();
        assert_eq!(numbers, ["A-2", "A-1"]);
    }

    #[test]
    fn pickup_transitions_once_and_only_once() {
        let mut store = DocumentStore::new();
        let d = doc("A-1", "+71");
        let id = d.id;
        store.insert(d);

        let at = Utc::now();
        let picked = store.mark_picked_up(id, at).expect("was active");
        assert_eq!(picked.status, DocumentStatus::PickedUp);
        assert_eq!(picked.picked_up_at, Some(at));

        // Second transition attempt fails and does not touch picked_up_at.
        assert!(store.mark_picked_up(id, Utc::now()).is_none());
        assert_eq!(store.get(id).expect("still there").picked_up_at, Some(at));
    }

    #[test]
    fn picked_up_documents_leave_the_active_queue_but_stay_in_the_archive() {
        let mut store = DocumentStore::new();
        let d = doc("A-1", "+71");
        let id = d.id;
        store.insert(d);
        store.insert(doc("A-2", "+72"));

        store.mark_picked_up(id, Utc::now());

        assert_eq!(store.active().count(), 1);
        assert_eq!(store.all().len(), 2);
        assert_eq!(
            store.counts(),
            DocumentCounts {
                active: 1,
                picked_up: 1,
                total: 2
            }
        );
    }

    #[test]
    fn duplicate_numbers_resolve_to_one_document() {
        let mut store = DocumentStore::new();
        let older = doc("DUP", "+71");
        let newer = doc("DUP", "+72");
        let newer_id = newer.id;
        store.insert(older.clone());
        store.insert(newer);

        // The most recently issued active document wins.
        let found = store.find_active_by_number("DUP").expect("found");
        assert_eq!(found.id, newer_id);

        // Transitioning it leaves the older duplicate active.
        store.mark_picked_up(newer_id, Utc::now());
        let remaining = store.find_active_by_number("DUP").expect("older still active");
        assert_eq!(remaining.id, older.id);
    }

    #[test]
    fn replace_keeps_position_and_rejects_unknown_ids() {
        let mut store = DocumentStore::new();
        let d = doc("A-1", "+71");
        let id = d.id;
        store.insert(d);
        store.insert(doc("A-2", "+72"));

        let mut updated = store.get(id).expect("present").clone();
        updated.customer_name = "Maria".to_string();
        assert!(store.replace(updated));
        let numbers: Vec<_> = store.all().iter().map(|d| d.number.as_str()).collect();
        assert_eq!(numbers, ["A-2", "A-1"]);
        assert_eq!(store.get(id).expect("present").customer_name, "Maria");

        let mut unknown = doc("X", "+79");
        unknown.id = DocumentId::generate();
        assert!(!store.replace(unknown));
    }

    #[test]
    fn remove_is_keyed_by_id() {
        let mut store = DocumentStore::new();
        let d = doc("A-1", "+71");
        let id = d.id;
        store.insert(d);

        assert!(store.remove(id));
        assert!(!store.remove(id));
        assert!(store.all().is_empty());
    }

    #[test]
    fn identifier_matching_feeds_login_and_the_customer_view() {
        let mut store = DocumentStore::new();
        store.insert(doc("A-1", "+70001112233"));

        assert!(store.has_match("+70001112233"));
        assert!(store.has_match("anna ivanova"));
        assert!(!store.has_match("Petr Sidorov"));
        assert_eq!(store.matching_identifier("+70001112233").count(), 1);
    }
}
