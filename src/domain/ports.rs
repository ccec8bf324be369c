use crate::utils::error::Result;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// External document store that accepted contact messages are forwarded to.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Database name the store writes into.
    fn name(&self) -> &str;

    /// Inserts `document` into `collection` and returns the store's id for it.
    async fn create_document(&self, collection: &str, document: serde_json::Value)
        -> Result<String>;

    async fn list_collection_names(&self) -> Result<Vec<String>>;
}

/// The optional store, resolved once at startup.
#[derive(Clone)]
pub enum StoreHandle {
    /// No store is configured at all.
    Missing,
    /// A store is configured but could not be set up; holds the reason.
    Uninitialized(String),
    Ready(Arc<dyn DocumentStore>),
}

impl StoreHandle {
    pub fn ready(store: impl DocumentStore + 'static) -> Self {
        StoreHandle::Ready(Arc::new(store))
    }

    pub fn store(&self) -> Option<&Arc<dyn DocumentStore>> {
        match self {
            StoreHandle::Ready(store) => Some(store),
            _ => None,
        }
    }
}

impl fmt::Debug for StoreHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreHandle::Missing => f.write_str("Missing"),
            StoreHandle::Uninitialized(reason) => {
                f.debug_tuple("Uninitialized").field(reason).finish()
            }
            StoreHandle::Ready(store) => f.debug_tuple("Ready").field(&store.name()).finish(),
        }
    }
}
