use std::sync::Arc;

use serde_json::Value;

use crate::transport::{
    error::TransportError,
    request::{ApiRequest, QueryParams},
    response::Envelope,
    transport::Transport,
};

// One-line wrappers around the transport adapter, one per backend
// endpoint. Everything here is plumbing: supply method, path and payload,
// return the adapter's outcome untouched.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        ApiClient { transport }
    }

    pub async fn dashboard_stats(&self) -> Result<Envelope, TransportError> {
        self.transport
            .send(ApiRequest::get("/api/dashboard-stats"))
            .await
    }

    pub async fn test_case_stats(&self) -> Result<Envelope, TransportError> {
        self.transport
            .send(ApiRequest::get("/api/test-cases/stats"))
            .await
    }

    pub async fn test_cases(&self, params: QueryParams) -> Result<Envelope, TransportError> {
        self.transport
            .send(ApiRequest::get("/api/test-cases").params(params))
            .await
    }

    pub async fn update_test_case(
        &self,
        case_hash: &str,
        data: Value,
    ) -> Result<Envelope, TransportError> {
        self.transport
            .send(ApiRequest::put(format!("/api/test-cases/{case_hash}")).body(data))
            .await
    }

    pub async fn scan_test_cases(&self) -> Result<Envelope, TransportError> {
        self.transport.send(ApiRequest::get("/api/scan-cases")).await
    }

    pub async fn test_plans(&self, params: QueryParams) -> Result<Envelope, TransportError> {
        self.transport
            .send(ApiRequest::get("/api/test-plans").params(params))
            .await
    }

    pub async fn execute_test_plan(&self, data: Value) -> Result<Envelope, TransportError> {
        self.transport
            .send(ApiRequest::post("/api/execute-plan").body(data))
            .await
    }

    pub async fn execution_history(
        &self,
        params: QueryParams,
    ) -> Result<Envelope, TransportError> {
        self.transport
            .send(ApiRequest::get("/api/execution-history").params(params))
            .await
    }

    pub async fn machines(&self) -> Result<Envelope, TransportError> {
        self.transport.send(ApiRequest::get("/api/machines")).await
    }

    pub async fn batch_execute_plans(&self, data: Value) -> Result<Envelope, TransportError> {
        self.transport
            .send(ApiRequest::post("/api/batch-execute-plans").body(data))
            .await
    }

    pub async fn batch_executions(
        &self,
        params: QueryParams,
    ) -> Result<Envelope, TransportError> {
        self.transport
            .send(ApiRequest::get("/api/batch-executions").params(params))
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use crate::api::api_client::ApiClient;
    use crate::transport::request::{Method, QueryParams};
    use crate::transport::response::Envelope;
    use crate::transport::transport::MockTransport;

    fn success_envelope() -> Envelope {
        Envelope {
            code: Some(200),
            ..Envelope::default()
        }
    }

    #[tokio::test]
    async fn dashboard_stats_routes_through_the_transport() {
        let mut mock = MockTransport::new();

        mock.expect_send()
            .withf(|request| {
                request.method == Method::Get && request.path == "/api/dashboard-stats"
            })
            .returning(|_| Ok(success_envelope()));

        let client = ApiClient::new(Arc::new(mock));

        let envelope = client.dashboard_stats().await.unwrap();
        assert_eq!(envelope.code, Some(200));
    }

    #[tokio::test]
    async fn test_cases_forwards_the_query_params() {
        let mut mock = MockTransport::new();

        mock.expect_send()
            .withf(|request| {
                request.path == "/api/test-cases"
                    && request
                        .params
                        .as_ref()
                        .is_some_and(|p| p.get("page") == Some(&"3".to_string()))
            })
            .returning(|_| Ok(success_envelope()));

        let client = ApiClient::new(Arc::new(mock));

        client
            .test_cases(QueryParams::from([("page", "3")]))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn update_test_case_puts_to_the_hashed_path_with_the_body() {
        let mut mock = MockTransport::new();

        mock.expect_send()
            .withf(|request| {
                request.method == Method::Put
                    && request.path == "/api/test-cases/abc123"
                    && request.body == Some(json!({"enabled": false}))
            })
            .returning(|_| Ok(success_envelope()));

        let client = ApiClient::new(Arc::new(mock));

        client
            .update_test_case("abc123", json!({"enabled": false}))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn execute_test_plan_posts_the_payload() {
        let mut mock = MockTransport::new();

        mock.expect_send()
            .withf(|request| {
                request.method == Method::Post
                    && request.path == "/api/execute-plan"
                    && request.body == Some(json!({"plan_id": 42}))
            })
            .returning(|_| Ok(success_envelope()));

        let client = ApiClient::new(Arc::new(mock));

        client.execute_test_plan(json!({"plan_id": 42})).await.unwrap();
    }

    #[tokio::test]
    async fn wrapper_returns_the_rejection_untouched() {
        use crate::transport::error::{REQUEST_FAILED, TransportError};

        let mut mock = MockTransport::new();

        mock.expect_send().returning(|_| {
            Err(TransportError::Business {
                message: REQUEST_FAILED.to_string(),
                body: Envelope::default(),
            })
        });

        let client = ApiClient::new(Arc::new(mock));

        let err = client.machines().await.unwrap_err();
        assert!(matches!(err, TransportError::Business { .. }));
    }
}
