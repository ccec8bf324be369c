use crate::utils::error::PortfolioError;
use crate::utils::validation::{check_email, check_length, check_required};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 100;
pub const MESSAGE_MIN_LEN: usize = 10;
pub const MESSAGE_MAX_LEN: usize = 2000;

/// Raw contact-form body as it arrives over the wire.
///
/// Fields stay untyped JSON so that a missing or non-string field surfaces as
/// a validation error next to the other failing fields instead of a parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactCandidate {
    #[serde(default)]
    pub name: Option<serde_json::Value>,
    #[serde(default)]
    pub email: Option<serde_json::Value>,
    #[serde(default)]
    pub message: Option<serde_json::Value>,
}

impl ContactCandidate {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            message: Some(message.into()),
        }
    }
}

/// A contact submission that passed validation. Construct via `TryFrom`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl TryFrom<ContactCandidate> for ContactMessage {
    type Error = PortfolioError;

    /// Collects every failing field rather than stopping at the first.
    fn try_from(candidate: ContactCandidate) -> Result<Self, Self::Error> {
        let mut errors = Vec::new();

        let name = match check_required("name", &candidate.name) {
            Ok(v) => {
                errors.extend(check_length("name", v, NAME_MIN_LEN, NAME_MAX_LEN));
                Some(v)
            }
            Err(e) => {
                errors.push(e);
                None
            }
        };

        let email = match check_required("email", &candidate.email) {
            Ok(v) => {
                errors.extend(check_email("email", v));
                Some(v)
            }
            Err(e) => {
                errors.push(e);
                None
            }
        };

        let message = match check_required("message", &candidate.message) {
            Ok(v) => {
                errors.extend(check_length("message", v, MESSAGE_MIN_LEN, MESSAGE_MAX_LEN));
                Some(v)
            }
            Err(e) => {
                errors.push(e);
                None
            }
        };

        match (name, email, message) {
            (Some(name), Some(email), Some(message)) if errors.is_empty() => Ok(ContactMessage {
                name: name.to_string(),
                email: email.to_string(),
                message: message.to_string(),
            }),
            _ => Err(PortfolioError::Validation { errors }),
        }
    }
}

/// Document forwarded to the store for each accepted message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredMessage {
    #[serde(flatten)]
    pub contact: ContactMessage,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StoredMessage {
    pub fn new(contact: ContactMessage, now: DateTime<Utc>) -> Self {
        Self {
            contact,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn to_document(&self) -> crate::utils::error::Result<serde_json::Value> {
        let document = serde_json::to_value(self)?;
        Ok(document)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub stack: Vec<String>,
    pub github: Option<String>,
    pub api_docs: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceItem {
    pub title: String,
    pub organization: String,
    pub period: String,
    pub description: String,
    pub tags: Vec<String>,
}

/// What happened to an accepted message on its way to the store.
///
/// Only `Stored` is visible to callers (as `stored_id`); the other two
/// collapse to `null` on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceOutcome {
    Stored(String),
    Skipped,
    Failed(String),
}

impl PersistenceOutcome {
    pub fn stored_id(&self) -> Option<&str> {
        match self {
            PersistenceOutcome::Stored(id) => Some(id),
            PersistenceOutcome::Skipped | PersistenceOutcome::Failed(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactReceipt {
    pub status: &'static str,
    pub stored_id: Option<String>,
    #[serde(skip)]
    pub outcome: PersistenceOutcome,
}

impl ContactReceipt {
    pub fn accepted(outcome: PersistenceOutcome) -> Self {
        Self {
            status: "ok",
            stored_id: outcome.stored_id().map(str::to_string),
            outcome,
        }
    }
}

/// One entry of a 422 response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    pub fn new(loc: &[&str], msg: impl Into<String>, kind: &str) -> Self {
        Self {
            loc: loc.iter().map(|s| s.to_string()).collect(),
            msg: msg.into(),
            kind: kind.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}
