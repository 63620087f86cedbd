use crate::domain::model::SignupBody;
use crate::utils::error::{Result, WaitlistError};
use reqwest::Client;

/// Posts signups to a waitlist endpoint, the way the site's form does.
#[derive(Debug, Clone)]
pub struct WaitlistClient {
    client: Client,
    endpoint: String,
}

impl WaitlistClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// One attempt, no retry. Any non-2xx status is a failure.
    pub async fn submit(&self, body: &SignupBody) -> Result<()> {
        tracing::debug!("Posting signup to: {}", self.endpoint);
        let response = self.client.post(&self.endpoint).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WaitlistError::Rejected {
                status: status.as_u16(),
            });
        }

        Ok(())
    }
}
