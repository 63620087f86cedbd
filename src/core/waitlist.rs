use crate::adapters::resend::ResendProvider;
use crate::core::message::compose_welcome;
use crate::core::{ConfigProvider, EmailProvider};
use crate::domain::model::{Acknowledgement, Delivery, SignupRequest};
use crate::utils::error::{ErrorCategory, Result, WaitlistError};
use std::sync::Arc;

/// The waitlist operation shared by every transport.
///
/// Holds the provider client built once at startup; each call is independent
/// and sends at most one email.
#[derive(Clone)]
pub struct WaitlistService {
    provider: Arc<dyn EmailProvider>,
    sender: String,
}

impl WaitlistService {
    pub fn new(provider: Arc<dyn EmailProvider>, sender: impl Into<String>) -> Self {
        Self {
            provider,
            sender: sender.into(),
        }
    }

    /// Builds a service talking to Resend. Fails when no API key is configured.
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let api_key = config
            .api_key()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| WaitlistError::MissingConfigError {
                field: "provider.api_key".to_string(),
            })?;

        let provider = ResendProvider::new(config.api_base(), api_key);
        Ok(Self::new(Arc::new(provider), config.sender()))
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Sends the welcome email for an already validated request.
    pub async fn submit(&self, request: &SignupRequest) -> Result<Delivery> {
        let email = compose_welcome(&self.sender, request);
        tracing::debug!(category = %request.category, subject = %email.subject, "sending welcome email");
        self.provider.send(&email).await
    }

    /// Decodes a raw request body, sends the welcome email and logs failures.
    pub async fn handle(&self, body: &[u8]) -> Result<Acknowledgement> {
        let result = match SignupRequest::from_body(body) {
            Ok(request) => self.submit(&request).await.map(Acknowledgement::sent),
            Err(e) => Err(e),
        };

        match &result {
            Ok(ack) => tracing::info!(id = %ack.data.id, "waitlist email sent"),
            Err(e) => match e.category() {
                ErrorCategory::Input => tracing::info!("rejected waitlist submission: {}", e),
                ErrorCategory::Provider => tracing::error!("Resend error: {}", e),
                _ => tracing::error!("Server error: {}", e),
            },
        }

        result
    }
}
