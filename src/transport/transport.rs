use async_trait::async_trait;

use crate::transport::{error::TransportError, request::ApiRequest, response::Envelope};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<Envelope, TransportError>;
}
