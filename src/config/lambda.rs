use crate::adapters::resend::DEFAULT_API_BASE;
use crate::core::message::DEFAULT_SENDER;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};

/// Configuration of the serverless function, read from the environment once per cold start.
#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub api_base: String,
    pub api_key: Option<String>,
    pub sender: String,
}

impl LambdaConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            api_base: lookup("RESEND_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            api_key: lookup("RESEND_API_KEY"),
            sender: lookup("WAITLIST_FROM").unwrap_or_else(|| DEFAULT_SENDER.to_string()),
        }
    }
}

impl ConfigProvider for LambdaConfig {
    fn api_base(&self) -> &str {
        &self.api_base
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    fn sender(&self) -> &str {
        &self.sender
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("RESEND_API_BASE", &self.api_base)?;

        let api_key = validation::validate_required_field("RESEND_API_KEY", &self.api_key)?;
        validation::validate_non_empty_string("RESEND_API_KEY", api_key)?;

        validation::validate_mailbox("WAITLIST_FROM", &self.sender)?;

        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}
