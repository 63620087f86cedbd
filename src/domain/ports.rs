use crate::domain::model::{Delivery, OutboundEmail};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Hosted transactional email service.
#[async_trait]
pub trait EmailProvider: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<Delivery>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base(&self) -> &str;
    /// `None` when no credential was configured.
    fn api_key(&self) -> Option<&str>;
    fn sender(&self) -> &str;
}
