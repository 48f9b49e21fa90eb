//! Client configuration management
//!
//! Configuration comes from a TOML file, from environment variables (with
//! dotenv support), or directly from code when the SDK is embedded. All
//! values are validated before a client is constructed so a misconfigured
//! integration fails fast instead of at the first API call.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default server URL template; `{ORGANIZATION}` is replaced by the tenant id.
const DEFAULT_BASE_URL_TEMPLATE: &str = "https://mc.adobe.io/{ORGANIZATION}/campaign/";

/// Default request timeout in seconds
const DEFAULT_REQUEST_TIMEOUT: u64 = 30;

/// Default logging level
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Deserialize)]
struct CredentialsConfig {
    tenant_id: String,
    api_key: String,
    access_token: String,
}

#[derive(Debug, Clone, Deserialize, Default)]
struct ServerConfig {
    #[serde(default)]
    base_url_template: Option<String>,
    #[serde(default)]
    log_level: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
struct RequestConfig {
    #[serde(default)]
    request_timeout: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
struct TomlConfig {
    credentials: CredentialsConfig,
    #[serde(default)]
    server: ServerConfig,
    #[serde(default)]
    request: RequestConfig,
}

/// Resolved configuration for a [`CampaignClient`](crate::CampaignClient).
#[derive(Debug, Clone)]
pub struct CampaignConfig {
    /// Tenant (organization) identifier
    pub tenant_id: String,

    /// Adobe I/O API key
    pub api_key: String,

    /// IMS bearer token
    pub access_token: String,

    /// Server URL template containing the `{ORGANIZATION}` variable
    pub base_url_template: String,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Logging level passed to [`init_logging`](crate::core::logging::init_logging)
    pub log_level: String,
}

impl CampaignConfig {
    /// Build a configuration directly from credentials, with default
    /// server template, timeout, and log level.
    pub fn new(tenant_id: String, api_key: String, access_token: String) -> Self {
        CampaignConfig {
            tenant_id,
            api_key,
            access_token,
            base_url_template: DEFAULT_BASE_URL_TEMPLATE.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// `[credentials]` section is missing required values.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read configuration file")?;

        let config: TomlConfig =
            toml::from_str(&content).context("Failed to parse TOML configuration")?;

        Ok(CampaignConfig {
            tenant_id: config.credentials.tenant_id,
            api_key: config.credentials.api_key,
            access_token: config.credentials.access_token,
            base_url_template: config
                .server
                .base_url_template
                .unwrap_or_else(|| DEFAULT_BASE_URL_TEMPLATE.to_string()),
            request_timeout: config
                .request
                .request_timeout
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT),
            log_level: config
                .server
                .log_level
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        })
    }

    /// Load configuration from the environment and an optional config file.
    ///
    /// Reads `.env` via dotenv, then the TOML file named by `CONFIG_PATH`
    /// (default `config.toml`) when it exists, then applies environment
    /// overrides: `CAMPAIGN_TENANT_ID`, `CAMPAIGN_API_KEY`,
    /// `CAMPAIGN_ACCESS_TOKEN`, `CAMPAIGN_LOG_LEVEL`.
    ///
    /// # Errors
    ///
    /// Returns an error if the resolved credentials are incomplete.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let config_path =
            std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());

        let mut config = if Path::new(&config_path).exists() {
            Self::from_file(&config_path)?
        } else {
            Self::new(String::new(), String::new(), String::new())
        };

        if let Ok(tenant_id) = std::env::var("CAMPAIGN_TENANT_ID") {
            config.tenant_id = tenant_id;
        }
        if let Ok(api_key) = std::env::var("CAMPAIGN_API_KEY") {
            config.api_key = api_key;
        }
        if let Ok(access_token) = std::env::var("CAMPAIGN_ACCESS_TOKEN") {
            config.access_token = access_token;
        }
        if let Ok(log_level) = std::env::var("CAMPAIGN_LOG_LEVEL") {
            config.log_level = log_level;
        }

        if !config.validate() {
            bail!(
                "Incomplete Campaign Standard credentials: tenant_id, api_key, \
                 and access_token are all required"
            );
        }

        Ok(config)
    }

    /// Check that all three credentials are present.
    ///
    /// Presence only — no format validation is performed; malformed
    /// credentials are rejected by the server, not here.
    pub fn validate(&self) -> bool {
        !self.tenant_id.is_empty() && !self.api_key.is_empty() && !self.access_token.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_config() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            [credentials]
            tenant_id = "testtenant"
            api_key = "test-api-key"
            access_token = "test-token"

            [server]
            log_level = "debug"

            [request]
            request_timeout = 60
        "#
        )
        .unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_config() {
        let file = create_test_config();
        let config = CampaignConfig::from_file(file.path()).unwrap();
        assert_eq!(config.tenant_id, "testtenant");
        assert_eq!(config.api_key, "test-api-key");
        assert_eq!(config.access_token, "test-token");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.request_timeout, 60);
        assert_eq!(config.base_url_template, DEFAULT_BASE_URL_TEMPLATE);
    }

    #[test]
    fn test_defaults_applied() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            [credentials]
            tenant_id = "t"
            api_key = "k"
            access_token = "a"
        "#
        )
        .unwrap();
        file.flush().unwrap();

        let config = CampaignConfig::from_file(file.path()).unwrap();
        assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_missing_credentials_section_fails() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[server]\nlog_level = \"info\"\n").unwrap();
        file.flush().unwrap();

        assert!(CampaignConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn test_validate() {
        let config = CampaignConfig::new("t".into(), "k".into(), "a".into());
        assert!(config.validate());

        let incomplete = CampaignConfig::new("t".into(), String::new(), "a".into());
        assert!(!incomplete.validate());
    }
}
