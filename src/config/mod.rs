pub mod cli;
pub mod toml_config;

pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::utils::error::{PortfolioError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

/// Runtime settings, resolved once at startup.
///
/// Precedence: command-line flag, then environment, then settings file, then default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub database_url: Option<String>,
    pub database_name: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database_url: None,
            database_name: None,
        }
    }
}

// Blank values count as unset.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl Settings {
    pub fn load(cli: &CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => {
                tracing::debug!("Loading settings file {}", path.display());
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };
        Ok(Self::merge(cli, file))
    }

    pub fn merge(cli: &CliConfig, file: TomlConfig) -> Self {
        let host = present(cli.host.clone())
            .or(present(file.server.host))
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        Self {
            host,
            port: cli.port.or(file.server.port).unwrap_or(DEFAULT_PORT),
            database_url: present(cli.database_url.clone()).or(present(file.database.url)),
            database_name: present(cli.database_name.clone()).or(present(file.database.name)),
        }
    }

    /// `host:port`, resolved when the listener binds.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn database_url_set(&self) -> bool {
        self.database_url.is_some()
    }

    pub fn database_name_set(&self) -> bool {
        self.database_name.is_some()
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("host", &self.host)?;
        if self.host.chars().any(char::is_whitespace) {
            return Err(PortfolioError::InvalidConfigValue {
                field: "host".to_string(),
                value: self.host.clone(),
                reason: "Host cannot contain whitespace".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::{DatabaseSection, ServerSection};

    fn file(port: Option<u16>, url: Option<&str>, name: Option<&str>) -> TomlConfig {
        TomlConfig {
            server: ServerSection { host: None, port },
            database: DatabaseSection {
                url: url.map(str::to_string),
                name: name.map(str::to_string),
            },
        }
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::merge(&CliConfig::default(), TomlConfig::default());
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.port, 8000);
        assert!(!settings.database_url_set());
        assert!(!settings.database_name_set());
    }

    #[test]
    fn test_cli_overrides_file() {
        let cli = CliConfig {
            port: Some(9001),
            database_url: Some("http://cli:1".to_string()),
            ..Default::default()
        };
        let settings = Settings::merge(
            &cli,
            file(Some(7000), Some("http://file:1"), Some("portfolio")),
        );
        assert_eq!(settings.port, 9001);
        assert_eq!(settings.database_url.as_deref(), Some("http://cli:1"));
        assert_eq!(settings.database_name.as_deref(), Some("portfolio"));
    }

    #[test]
    fn test_blank_values_count_as_unset() {
        let cli = CliConfig {
            database_url: Some("".to_string()),
            database_name: Some("   ".to_string()),
            ..Default::default()
        };
        let settings = Settings::merge(&cli, TomlConfig::default());
        assert!(!settings.database_url_set());
        assert!(!settings.database_name_set());
    }

    #[test]
    fn test_validate() {
        assert!(Settings::default().validate().is_ok());

        let bad = Settings {
            host: "not a host".to_string(),
            ..Default::default()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_listen_addr() {
        let settings = Settings {
            host: "127.0.0.1".to_string(),
            port: 8080,
            ..Default::default()
        };
        assert_eq!(settings.listen_addr(), "127.0.0.1:8080");
    }
}
