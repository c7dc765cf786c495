use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use tracing::{debug, error};

use crate::notification::notifier::{Notification, Notifier};
use crate::transport::{
    error::{NETWORK_UNREACHABLE, REQUEST_FAILED, TransportError, classify_status},
    interceptor::{IdentityInterceptor, RequestInterceptor},
    request::ApiRequest,
    response::Envelope,
    transport::Transport,
};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

// Fixed at construction; no per-call overrides.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub with_credentials: bool,
}

impl TransportConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        TransportConfig {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
            with_credentials: true,
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_credentials(mut self, enabled: bool) -> Self {
        self.with_credentials = enabled;
        self
    }
}

#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
    interceptor: Arc<dyn RequestInterceptor>,
    notifier: Arc<dyn Notifier>,
}

impl ReqwestTransport {
    pub fn new(config: TransportConfig, notifier: Arc<dyn Notifier>) -> Self {
        Self::with_interceptor(config, notifier, Arc::new(IdentityInterceptor))
    }

    pub fn with_interceptor(
        config: TransportConfig,
        notifier: Arc<dyn Notifier>,
        interceptor: Arc<dyn RequestInterceptor>,
    ) -> Self {
        let mut builder = reqwest::Client::builder().timeout(config.timeout);

        if config.with_credentials {
            builder = builder.cookie_store(true);
        }

        Self {
            client: builder.build().expect("Failed to build reqwest client"),
            base_url: config.base_url,
            interceptor,
            notifier,
        }
    }

    fn emit_notification(&self, message: &str) {
        self.notifier.notify(Notification::error(message));
    }

    // Single exit for every failure without an interpretable backend
    // response. 401 stays silent: the caller is already being steered to
    // a login flow.
    fn transport_failure(&self, status: Option<u16>, message: String) -> TransportError {
        error!(?status, %message, "transport failure");

        if status != Some(401) {
            self.emit_notification(&message);
        }

        TransportError::Transport { status, message }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<Envelope, TransportError> {
        let request = self.interceptor.intercept(request)?;

        let ApiRequest {
            method,
            path,
            params,
            body,
            cancellation,
        } = request;

        if path.is_empty() {
            return Err(self.transport_failure(None, "request path is empty".to_string()));
        }

        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "sending request");

        let mut builder = self.client.request(method.into(), &url);

        if let Some(params) = &params {
            builder = builder.query(&params.0);
        }

        if let Some(body) = &body {
            builder = builder.json(body);
        }

        let sent = match &cancellation {
            Some(token) => tokio::select! {
                _ = token.cancelled() => return Err(TransportError::Cancelled),
                sent = builder.send() => sent,
            },
            None => builder.send().await,
        };

        let response = match sent {
            Ok(response) => response,
            Err(_) => {
                return Err(self.transport_failure(None, NETWORK_UNREACHABLE.to_string()));
            }
        };

        let status = response.status();

        if status.is_success() {
            // A 2xx body that is not the envelope carries neither success
            // field, so it fails the predicate like any other business
            // failure.
            let envelope = response.json::<Envelope>().await.unwrap_or_default();

            if envelope.is_success() {
                return Ok(envelope);
            }

            let message = envelope
                .message
                .clone()
                .unwrap_or_else(|| REQUEST_FAILED.to_string());

            self.emit_notification(&message);

            return Err(TransportError::Business {
                message,
                body: envelope,
            });
        }

        let body = response.json::<Envelope>().await.unwrap_or_default();
        let message = classify_status(status.as_u16(), body.message);

        Err(self.transport_failure(Some(status.as_u16()), message))
    }
}
