use crate::core::{StatusReport, StoreHandle};

const MAX_COLLECTIONS: usize = 10;
const MAX_ERROR_CHARS: usize = 50;

const BACKEND_RUNNING: &str = "✅ Running";
const DB_NOT_AVAILABLE: &str = "❌ Not Available";
const DB_MODULE_NOT_FOUND: &str = "❌ Database module not found (run enable-database first)";
const DB_NOT_INITIALIZED: &str = "⚠️  Available but not initialized";
const DB_WORKING: &str = "✅ Connected & Working";
const FLAG_SET: &str = "✅ Set";
const FLAG_NOT_SET: &str = "❌ Not Set";

fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

fn flag(set: bool) -> String {
    let text = if set { FLAG_SET } else { FLAG_NOT_SET };
    text.to_string()
}

/// Builds the `/test` health snapshot. Never fails; every probe degrades to text.
#[derive(Debug, Clone)]
pub struct StatusReporter {
    store: StoreHandle,
    database_url_set: bool,
    database_name_set: bool,
}

impl StatusReporter {
    pub fn new(store: StoreHandle, database_url_set: bool, database_name_set: bool) -> Self {
        Self {
            store,
            database_url_set,
            database_name_set,
        }
    }

    pub async fn report_status(&self) -> StatusReport {
        let mut report = StatusReport {
            backend: BACKEND_RUNNING.to_string(),
            database: DB_NOT_AVAILABLE.to_string(),
            database_url: flag(self.database_url_set),
            database_name: flag(self.database_name_set),
            connection_status: "Not Connected".to_string(),
            collections: Vec::new(),
        };

        match &self.store {
            StoreHandle::Missing => {
                report.database = DB_MODULE_NOT_FOUND.to_string();
            }
            StoreHandle::Uninitialized(reason) => {
                tracing::debug!("Document store not initialized: {}", reason);
                report.database = DB_NOT_INITIALIZED.to_string();
            }
            StoreHandle::Ready(store) => {
                report.connection_status = "Connected".to_string();
                tracing::debug!("Probing document store '{}'", store.name());

                match store.list_collection_names().await {
                    Ok(mut collections) => {
                        collections.truncate(MAX_COLLECTIONS);
                        report.collections = collections;
                        report.database = DB_WORKING.to_string();
                    }
                    Err(e) => {
                        tracing::warn!("Document store probe failed: {}", e);
                        report.database = format!(
                            "⚠️  Connected but Error: {}",
                            truncate_chars(&e.detail(), MAX_ERROR_CHARS)
                        );
                    }
                }
            }
        }

        report
    }
}
