use crate::config::Settings;
use crate::core::{DocumentStore, StoreHandle};
use crate::utils::error::{PortfolioError, Result};
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

#[derive(Debug, Deserialize)]
struct InsertResponse {
    #[serde(alias = "id", alias = "_id")]
    inserted_id: String,
}

#[derive(Debug, Deserialize)]
struct CollectionsResponse {
    collections: Vec<String>,
}

/// Document store reached over a small JSON HTTP API:
///
/// - `POST {base}/{database}/collections/{collection}/documents` returns `{"inserted_id": ".."}`
/// - `GET {base}/{database}/collections` returns `{"collections": [..]}`
#[derive(Debug, Clone)]
pub struct RestDocumentStore {
    base_url: Url,
    database: String,
    client: Client,
}

impl RestDocumentStore {
    pub fn new(base_url: Url, database: String) -> Self {
        Self {
            base_url,
            database,
            client: Client::new(),
        }
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| PortfolioError::StoreUnavailable {
                message: format!("{} cannot be used as a base URL", self.base_url),
            })?
            .pop_if_empty()
            .push(&self.database)
            .extend(segments);
        Ok(url)
    }
}

#[async_trait]
impl DocumentStore for RestDocumentStore {
    fn name(&self) -> &str {
        &self.database
    }

    async fn create_document(
        &self,
        collection: &str,
        document: serde_json::Value,
    ) -> Result<String> {
        let url = self.endpoint(&["collections", collection, "documents"])?;
        tracing::debug!("Inserting document into {}", url);

        let response = self
            .client
            .post(url)
            .json(&document)
            .send()
            .await?
            .error_for_status()?;

        let body: InsertResponse = response.json().await?;
        Ok(body.inserted_id)
    }

    async fn list_collection_names(&self) -> Result<Vec<String>> {
        let url = self.endpoint(&["collections"])?;
        tracing::debug!("Listing collections at {}", url);

        let response = self.client.get(url).send().await?.error_for_status()?;
        let body: CollectionsResponse = response.json().await?;
        Ok(body.collections)
    }
}

/// Decides once, at startup, whether contact messages can be stored.
pub fn resolve_store(settings: &Settings) -> StoreHandle {
    let Some(raw_url) = settings.database_url.as_deref() else {
        tracing::info!("DATABASE_URL not set, running without a document store");
        return StoreHandle::Missing;
    };

    let base_url = match validate_url("database_url", raw_url) {
        Ok(url) => url,
        Err(e) => {
            tracing::warn!("⚠️ Document store not initialized: {}", e);
            return StoreHandle::Uninitialized(e.to_string());
        }
    };

    let Some(database) = settings.database_name.clone() else {
        let reason = "DATABASE_NAME is not set".to_string();
        tracing::warn!("⚠️ Document store not initialized: {}", reason);
        return StoreHandle::Uninitialized(reason);
    };

    tracing::info!("🗄️ Using document store '{}' at {}", database, base_url);
    StoreHandle::ready(RestDocumentStore::new(base_url, database))
}
