use crate::core::{
    ContactCandidate, ContactMessage, ContactReceipt, PersistenceOutcome, StoreHandle,
    StoredMessage,
};
use crate::utils::error::Result;
use chrono::Utc;

pub const MESSAGE_COLLECTION: &str = "message";

/// Validates contact submissions and forwards them to the store when one is ready.
#[derive(Debug, Clone)]
pub struct ContactIntake {
    store: StoreHandle,
}

impl ContactIntake {
    pub fn new(store: StoreHandle) -> Self {
        Self { store }
    }

    /// Fails only on validation. Store problems end up in the receipt's outcome.
    pub async fn submit_contact(&self, candidate: ContactCandidate) -> Result<ContactReceipt> {
        let contact = ContactMessage::try_from(candidate)?;
        tracing::info!("📨 Contact message accepted");

        let outcome = self.persist(contact).await;
        match &outcome {
            PersistenceOutcome::Stored(id) => tracing::info!("💾 Contact message stored: {}", id),
            PersistenceOutcome::Skipped => {
                tracing::debug!("No document store ready, contact message not stored")
            }
            PersistenceOutcome::Failed(reason) => {
                tracing::warn!("⚠️ Contact message not stored: {}", reason)
            }
        }

        Ok(ContactReceipt::accepted(outcome))
    }

    async fn persist(&self, contact: ContactMessage) -> PersistenceOutcome {
        let Some(store) = self.store.store() else {
            return PersistenceOutcome::Skipped;
        };

        let document = match StoredMessage::new(contact, Utc::now()).to_document() {
            Ok(doc) => doc,
            Err(e) => return PersistenceOutcome::Failed(e.to_string()),
        };

        match store.create_document(MESSAGE_COLLECTION, document).await {
            Ok(id) => PersistenceOutcome::Stored(id),
            Err(e) => PersistenceOutcome::Failed(e.to_string()),
        }
    }
}
