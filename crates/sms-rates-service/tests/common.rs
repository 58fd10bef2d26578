//! Common test utilities for sms-rates integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use axum::Router;
use axum_test::TestServer;

use sms_rates_service::{create_router, AppState, ServiceConfig};

/// Test harness containing everything needed for integration tests.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
}

impl TestHarness {
    /// Create a new test harness over the default rate tables.
    pub fn new() -> Self {
        let config = ServiceConfig {
            listen_addr: "127.0.0.1:0".into(),
            ..ServiceConfig::default()
        };

        let state = AppState::new(config);
        let router: Router = create_router(state);

        let server = TestServer::new(router).expect("Failed to create test server");

        Self { server }
    }

    /// POST a quote request built from the four raw inputs.
    pub async fn quote(
        &self,
        credit_amount: &str,
        credit_currency: &str,
        destination_country: &str,
        message_type: &str,
    ) -> axum_test::TestResponse {
        self.server
            .post("/v1/quote")
            .json(&serde_json::json!({
                "credit_amount": credit_amount,
                "credit_currency": credit_currency,
                "destination_country": destination_country,
                "message_type": message_type,
            }))
            .await
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
