use crate::transport::response::Envelope;

pub const REQUEST_FAILED: &str = "request failed";
pub const ACCESS_DENIED: &str = "access denied";
pub const RESOURCE_NOT_FOUND: &str = "requested resource not found";
pub const INTERNAL_SERVER_ERROR: &str = "internal server error";
pub const NETWORK_UNREACHABLE: &str = "network connection failed, please check your network";

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum TransportError {
    // Backend reachable, envelope declared the operation unsuccessful.
    #[error("{message}")]
    Business { message: String, body: Envelope },

    // No interpretable backend response. `status` is absent on pure
    // network failures and timeouts.
    #[error("{message}")]
    Transport { status: Option<u16>, message: String },

    #[error("request cancelled")]
    Cancelled,
}

impl TransportError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, TransportError::Cancelled)
    }
}

pub fn classify_status(status: u16, body_message: Option<String>) -> String {
    match status {
        403 => ACCESS_DENIED.to_string(),
        404 => RESOURCE_NOT_FOUND.to_string(),
        500 => INTERNAL_SERVER_ERROR.to_string(),
        _ => body_message.unwrap_or_else(|| REQUEST_FAILED.to_string()),
    }
}
