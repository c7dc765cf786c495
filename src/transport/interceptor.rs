use crate::transport::{error::TransportError, request::ApiRequest};

// Runs on every outgoing descriptor before transmission. Identity today;
// the seam exists so auth headers can be injected without touching the
// send pipeline.
#[cfg_attr(test, mockall::automock)]
pub trait RequestInterceptor: Send + Sync {
    fn intercept(&self, request: ApiRequest) -> Result<ApiRequest, TransportError>;
}

#[derive(Clone, Default)]
pub struct IdentityInterceptor;

impl RequestInterceptor for IdentityInterceptor {
    fn intercept(&self, request: ApiRequest) -> Result<ApiRequest, TransportError> {
        Ok(request)
    }
}
