use crate::domain::model::FieldError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("Validation error: {} invalid field(s)", errors.len())]
    Validation { errors: Vec<FieldError> },

    #[error("Malformed request body: {message}")]
    MalformedBody { message: String },

    #[error("Document store unavailable: {message}")]
    StoreUnavailable { message: String },

    #[error("Document store error: {message}")]
    Store { message: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config file error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid value for '{field}': {reason} (got '{value}')")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl PortfolioError {
    /// Per-field detail for client errors, empty for everything else.
    pub fn field_errors(&self) -> Vec<FieldError> {
        match self {
            PortfolioError::Validation { errors } => errors.clone(),
            PortfolioError::MalformedBody { message } => {
                vec![FieldError::new(&["body"], message.clone(), "json_invalid")]
            }
            _ => Vec::new(),
        }
    }

    /// The underlying cause without the variant's prefix.
    pub fn detail(&self) -> String {
        match self {
            PortfolioError::MalformedBody { message }
            | PortfolioError::StoreUnavailable { message }
            | PortfolioError::Store { message } => message.clone(),
            PortfolioError::Http(e) => e.to_string(),
            PortfolioError::Io(e) => e.to_string(),
            PortfolioError::Serialization(e) => e.to_string(),
            PortfolioError::Toml(e) => e.to_string(),
            PortfolioError::Validation { .. } | PortfolioError::InvalidConfigValue { .. } => {
                self.to_string()
            }
        }
    }

    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            PortfolioError::Validation { .. } | PortfolioError::MalformedBody { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
