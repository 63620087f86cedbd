use crate::adapters::http::SiteOptions;
use crate::adapters::resend::DEFAULT_API_BASE;
use crate::core::message::DEFAULT_SENDER;
use crate::core::ConfigProvider;
use crate::utils::error::{Result, WaitlistError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

pub const DEFAULT_PORT: u16 = 3001;

static ENV_PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern compiles"));

/// Configuration of the long-running server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ListenConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub sender: SenderConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListenConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: String,
    pub serve_static: bool,
    pub cors: bool,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            static_dir: "dist".to_string(),
            serve_static: true,
            cors: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub api_base: String,
    pub api_key: Option<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            api_key: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SenderConfig {
    pub from: String,
}

impl Default for SenderConfig {
    fn default() -> Self {
        Self {
            from: DEFAULT_SENDER.to_string(),
        }
    }
}

impl ServerConfig {
    /// Loads a TOML file; a key missing from the file falls back to `RESEND_API_KEY`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(WaitlistError::IoError)?;
        let mut config = Self::from_toml_str(&content)?;
        config.fill_from_env(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Parses TOML after substituting `${VAR}` placeholders from the environment.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);

        toml::from_str(&processed).map_err(|e| WaitlistError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Defaults overridden by `RESEND_API_KEY`, `RESEND_API_BASE`, `WAITLIST_FROM` and `PORT`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(api_base) = lookup("RESEND_API_BASE") {
            config.provider.api_base = api_base;
        }
        if let Some(from) = lookup("WAITLIST_FROM") {
            config.sender.from = from;
        }
        if let Some(port) = lookup("PORT") {
            config.server.port = port.parse().map_err(|_| WaitlistError::InvalidConfigValueError {
                field: "PORT".to_string(),
                value: port.clone(),
                reason: "expected a port number".to_string(),
            })?;
        }
        config.fill_from_env(lookup);

        Ok(config)
    }

    fn fill_from_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if self.provider.api_key.is_none() {
            self.provider.api_key = lookup("RESEND_API_KEY");
        }
    }

    // Unset variables are left as `${VAR}` and rejected by validation.
    fn substitute_env_vars(content: &str) -> String {
        ENV_PLACEHOLDER_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn site_options(&self) -> SiteOptions {
        SiteOptions {
            static_dir: self
                .server
                .serve_static
                .then(|| PathBuf::from(&self.server.static_dir)),
            cors: self.server.cors,
        }
    }
}

impl ConfigProvider for ServerConfig {
    fn api_base(&self) -> &str {
        &self.provider.api_base
    }

    fn api_key(&self) -> Option<&str> {
        self.provider.api_key.as_deref()
    }

    fn sender(&self) -> &str {
        &self.sender.from
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("server.host", &self.server.host)?;
        validation::validate_range("server.port", self.server.port, 1, u16::MAX)?;
        if self.server.serve_static {
            validation::validate_path("server.static_dir", &self.server.static_dir)?;
        }

        validation::validate_url("provider.api_base", &self.provider.api_base)?;
        let api_key = validation::validate_required_field("provider.api_key", &self.provider.api_key)?;
        validation::validate_resolved("provider.api_key", api_key)?;
        validation::validate_non_empty_string("provider.api_key", api_key)?;

        validation::validate_mailbox("sender.from", &self.sender.from)?;

        tracing::debug!("server configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[server]
host = "127.0.0.1"
port = 8080
static_dir = "public"
cors = false

[provider]
api_base = "https://api.resend.com"
api_key = "re_from_file"

[sender]
from = "Waitlist <hello@example.com>"
"#;

        let config = ServerConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.address(), "127.0.0.1:8080");
        assert_eq!(config.api_key(), Some("re_from_file"));
        assert_eq!(config.sender(), "Waitlist <hello@example.com>");
        let site = config.site_options();
        assert_eq!(site.static_dir, Some(PathBuf::from("public")));
        assert!(!site.cors);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = ServerConfig::from_toml_str("").unwrap();

        assert_eq!(config.server.port, DEFAULT_PORT);
        assert_eq!(config.api_base(), "https://api.resend.com");
        assert_eq!(config.sender(), DEFAULT_SENDER);
        assert!(config.server.cors);
        assert_eq!(config.api_key(), None);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("WAITLIST_RELAY_TEST_SUBST_KEY", "re_substituted");

        let config = ServerConfig::from_toml_str(
            r#"
[provider]
api_key = "${WAITLIST_RELAY_TEST_SUBST_KEY}"
"#,
        )
        .unwrap();
        assert_eq!(config.api_key(), Some("re_substituted"));

        std::env::remove_var("WAITLIST_RELAY_TEST_SUBST_KEY");
    }

    #[test]
    fn test_unresolved_placeholder_fails_validation() {
        let config = ServerConfig::from_toml_str(
            r#"
[provider]
api_key = "${WAITLIST_RELAY_TEST_NEVER_SET}"
"#,
        )
        .unwrap();

        let err = config.validate().unwrap_err();
        assert!(matches!(err, WaitlistError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_missing_api_key_fails_validation() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, WaitlistError::MissingConfigError { ref field } if field == "provider.api_key"));
    }

    #[test]
    fn test_from_lookup_reads_environment() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("RESEND_API_KEY", "re_env"),
            ("RESEND_API_BASE", "http://127.0.0.1:9000"),
            ("WAITLIST_FROM", "hello@example.com"),
            ("PORT", "4000"),
        ]))
        .unwrap();

        assert_eq!(config.api_key(), Some("re_env"));
        assert_eq!(config.api_base(), "http://127.0.0.1:9000");
        assert_eq!(config.sender(), "hello@example.com");
        assert_eq!(config.server.port, 4000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_lookup_rejects_bad_port() {
        let err = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
        assert!(matches!(err, WaitlistError::InvalidConfigValueError { .. }));
    }

    #[test]
    fn test_invalid_sender_fails_validation() {
        let config = ServerConfig::from_toml_str(
            r#"
[provider]
api_key = "re_123"

[sender]
from = "Remote Contractor System"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(
                br#"
[server]
port = 3100
serve_static = false

[provider]
api_key = "re_file"
"#,
            )
            .unwrap();

        let config = ServerConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.server.port, 3100);
        assert_eq!(config.api_key(), Some("re_file"));
        assert_eq!(config.site_options().static_dir, None);
    }
}
