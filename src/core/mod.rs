pub mod catalog;
pub mod contact;
pub mod diagnostics;

pub use crate::domain::model::{
    ContactCandidate, ContactMessage, ContactReceipt, ExperienceItem, PersistenceOutcome, Project,
    StatusReport, StoredMessage,
};
pub use crate::domain::ports::{DocumentStore, StoreHandle};
pub use crate::utils::error::Result;
