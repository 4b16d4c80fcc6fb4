/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for ftx-adapter tests

use std::sync::Arc;

use ftx_adapter::{ClientConfig, Credentials, FixedClock, FtxClient, RequestSigner};
use wiremock::{Match, MockServer, Request};

pub const API_KEY: &str = "test-api-key";
pub const API_SECRET: &str = "test-api-secret";
pub const FIXED_TS: i64 = 1_700_000_000_000;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server with a fixed clock and test credentials
pub fn test_client(server: &MockServer) -> FtxClient {
    let mut client = FtxClient::with_config(ClientConfig {
        base_url: format!("{}/api", server.uri()),
        ..ClientConfig::default()
    })
    .expect("client init")
    .with_clock(Arc::new(FixedClock(FIXED_TS)));
    client.set_auth(API_KEY, API_SECRET);
    client
}

/// Matches requests whose FTX-SIGN header is valid for their own
/// timestamp, method, path, query and body
pub struct ValidSignature;

impl Match for ValidSignature {
    fn matches(&self, request: &Request) -> bool {
        let Some(timestamp) = request
            .headers
            .get("FTX-TS")
            .and_then(|value| value.to_str().ok())
        else {
            return false;
        };
        let Some(signature) = request
            .headers
            .get("FTX-SIGN")
            .and_then(|value| value.to_str().ok())
        else {
            return false;
        };

        let path_with_query = match request.url.query() {
            Some(query) => format!("{}?{}", request.url.path(), query),
            None => request.url.path().to_string(),
        };
        let body = (!request.body.is_empty()).then_some(request.body.as_slice());
        let expected = RequestSigner::new(Credentials::new(API_KEY, API_SECRET)).sign_at(
            timestamp.to_string(),
            request.method.as_str(),
            &path_with_query,
            body,
        );
        expected.signature == signature
    }
}
