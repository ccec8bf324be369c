pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::http::{router, AppState};
pub use crate::adapters::rest_store::{resolve_store, RestDocumentStore};
pub use crate::config::{CliConfig, Settings};
pub use crate::core::{catalog::Catalog, contact::ContactIntake, diagnostics::StatusReporter};
pub use crate::utils::error::{PortfolioError, Result};
