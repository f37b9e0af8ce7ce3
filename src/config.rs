//! Configuration file support for site-audit.
//!
//! Provides YAML-based configuration through `site-audit.config.yml` files,
//! environment overrides for credentials, and the resolved [`AppConfig`]
//! the binary wires its adapters from.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "site-audit.config.yml";

pub const DEFAULT_PAGESPEED_ENDPOINT: &str =
    "https://www.googleapis.com/pagespeedonline/v5/runPagespeed";
pub const DEFAULT_RESEND_ENDPOINT: &str = "https://api.resend.com/emails";
pub const DEFAULT_EMAIL_FROM: &str = "Site Audit <audit@resend.dev>";
pub const DEFAULT_DATA_DIR: &str = ".site-audit";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; SiteAuditBot/1.0)";

pub const ENV_PAGESPEED_API_KEY: &str = "GOOGLE_PAGESPEED_API_KEY";
pub const ENV_RESEND_API_KEY: &str = "RESEND_API_KEY";
pub const ENV_EMAIL_FROM: &str = "EMAIL_FROM";
pub const ENV_DATA_DIR: &str = "SITE_AUDIT_DATA_DIR";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub pagespeed_api_key: Option<String>,
    pub pagespeed_endpoint: Option<String>,
    pub email_from: Option<String>,
    pub resend_api_key: Option<String>,
    pub resend_endpoint: Option<String>,
    pub data_dir: Option<PathBuf>,
    pub request_timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.request_timeout_secs == Some(0) {
        bail!(
            "Invalid config: request_timeout_secs must be greater than 0.\n\n\
             💡 Hint: Remove the field to use the default of {} seconds.",
            DEFAULT_TIMEOUT_SECS
        );
    }

    for (field, value) in [
        ("pagespeed_endpoint", &config.pagespeed_endpoint),
        ("resend_endpoint", &config.resend_endpoint),
    ] {
        if let Some(endpoint) = value {
            if url::Url::parse(endpoint).is_err() {
                bail!(
                    "Invalid config: {} is not a valid URL: {}\n\n\
                     💡 Hint: Use an absolute URL such as https://example.com/path.",
                    field,
                    endpoint
                );
            }
        }
    }
    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        tracing::warn!(field = %key, "unknown config field will be ignored");
    }
}

/// Fully resolved settings: defaults, then the config file, then the
/// environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub pagespeed_api_key: Option<String>,
    pub pagespeed_endpoint: String,
    pub email_from: String,
    pub resend_api_key: Option<String>,
    pub resend_endpoint: String,
    pub data_dir: PathBuf,
    pub request_timeout: Duration,
    pub user_agent: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            pagespeed_api_key: None,
            pagespeed_endpoint: DEFAULT_PAGESPEED_ENDPOINT.to_string(),
            email_from: DEFAULT_EMAIL_FROM.to_string(),
            resend_api_key: None,
            resend_endpoint: DEFAULT_RESEND_ENDPOINT.to_string(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl AppConfig {
    /// Merges an optional config file with environment lookups.
    ///
    /// `env` is consulted instead of the process environment so callers
    /// (and tests) decide where variables come from. Blank values count as
    /// unset.
    pub fn resolve<F>(file: Option<&ConfigFile>, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(file) = file {
            config.pagespeed_api_key = non_blank(file.pagespeed_api_key.clone());
            if let Some(endpoint) = non_blank(file.pagespeed_endpoint.clone()) {
                config.pagespeed_endpoint = endpoint;
            }
            if let Some(from) = non_blank(file.email_from.clone()) {
                config.email_from = from;
            }
            config.resend_api_key = non_blank(file.resend_api_key.clone());
            if let Some(endpoint) = non_blank(file.resend_endpoint.clone()) {
                config.resend_endpoint = endpoint;
            }
            if let Some(dir) = &file.data_dir {
                config.data_dir = dir.clone();
            }
            if let Some(secs) = file.request_timeout_secs {
                config.request_timeout = Duration::from_secs(secs);
            }
            if let Some(agent) = non_blank(file.user_agent.clone()) {
                config.user_agent = agent;
            }
        }

        let env = |name: &str| non_blank(env(name));
        if let Some(key) = env(ENV_PAGESPEED_API_KEY) {
            config.pagespeed_api_key = Some(key);
        }
        if let Some(key) = env(ENV_RESEND_API_KEY) {
            config.resend_api_key = Some(key);
        }
        if let Some(from) = env(ENV_EMAIL_FROM) {
            config.email_from = from;
        }
        if let Some(dir) = env(ENV_DATA_DIR) {
            config.data_dir = PathBuf::from(dir);
        }

        config
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
