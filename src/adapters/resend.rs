use crate::core::{Delivery, EmailProvider, OutboundEmail};
use crate::utils::error::{Result, WaitlistError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

pub const DEFAULT_API_BASE: &str = "https://api.resend.com";

/// Error payload returned by Resend on a non-2xx reply.
#[derive(Debug, Deserialize)]
struct ResendErrorBody {
    message: Option<String>,
}

/// Resend REST client. One instance is shared by all requests.
#[derive(Debug, Clone)]
pub struct ResendProvider {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl ResendProvider {
    pub fn new(api_base: &str, api_key: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint: format!("{}/emails", api_base.trim_end_matches('/')),
            api_key: api_key.to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl EmailProvider for ResendProvider {
    async fn send(&self, email: &OutboundEmail) -> Result<Delivery> {
        tracing::debug!("Making email request to: {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(email)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Email provider response status: {}", status);

        if status.is_success() {
            return Ok(response.json::<Delivery>().await?);
        }

        let text = response.text().await?;
        let message = serde_json::from_str::<ResendErrorBody>(&text)
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Email provider error")
                    .to_string()
            });

        Err(WaitlistError::Provider { message })
    }
}
