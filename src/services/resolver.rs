// src/services/resolver.rs
//! Bounded-retry DID resolution poll.
//!
//! A freshly anchored DID takes a moment to become resolvable. The
//! resolver polls the resolution endpoint up to a fixed number of
//! attempts before declaring the DID unavailable.

use std::time::Duration;

use log::{debug, warn};
use reqwest::StatusCode;

use crate::error::HarnessError;

/// Maximum number of resolution attempts before giving up.
pub const MAX_RESOLVE_ATTEMPTS: u32 = 10;

/// Delay between resolution attempts.
const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Polls a resolution endpoint until a DID resolves.
#[derive(Clone)]
pub struct DidResolver {
    /// HTTP client, shared with the registry client so the poll carries
    /// the same TLS trust settings
    http: reqwest::Client,

    /// Resolution endpoint base URL; the DID is appended per request
    base_url: String,

    /// Delay between attempts
    retry_delay: Duration,
}

impl DidResolver {
    /// Creates a resolver polling `{base_url}/{did}`.
    pub fn new(http: reqwest::Client, base_url: String) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }

    /// Overrides the inter-attempt delay. Used by tests to keep the
    /// exhaustion path fast.
    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    /// Blocks until the DID resolves, or fails after
    /// [`MAX_RESOLVE_ATTEMPTS`] attempts.
    ///
    /// Transport errors and non-200 responses both count as failed
    /// attempts; only exhaustion of the bound is terminal.
    pub async fn wait_until_resolvable(&self, did: &str) -> Result<(), HarnessError> {
        let endpoint = format!("{}/{did}", self.base_url);

        for attempt in 1..=MAX_RESOLVE_ATTEMPTS {
            match self.http.get(&endpoint).send().await {
                Ok(response) if response.status() == StatusCode::OK => {
                    debug!("resolved {did} on attempt {attempt}");
                    return Ok(());
                }
                Ok(response) => {
                    warn!(
                        "resolve attempt {attempt}/{MAX_RESOLVE_ATTEMPTS} for {did}: status {}",
                        response.status()
                    );
                }
                Err(e) => {
                    warn!("resolve attempt {attempt}/{MAX_RESOLVE_ATTEMPTS} for {did}: {e}");
                }
            }

            if attempt < MAX_RESOLVE_ATTEMPTS {
                tokio::time::sleep(self.retry_delay).await;
            }
        }

        Err(HarnessError::ResolutionExhausted {
            did: did.to_string(),
            attempts: MAX_RESOLVE_ATTEMPTS,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn resolver_for(server: &MockServer) -> DidResolver {
        DidResolver::new(reqwest::Client::new(), format!("{}/document", server.uri()))
            .with_retry_delay(Duration::from_millis(5))
    }

    #[tokio::test]
    async fn resolves_once_the_document_appears() {
        let server = MockServer::start().await;
        let did = "did:sidetree:EiBJz3qA4g0";

        // The first two polls miss; the third finds the document.
        Mock::given(method("GET"))
            .and(path(format!("/document/{did}")))
            .respond_with(ResponseTemplate::new(404))
            .up_to_n_times(2)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(format!("/document/{did}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": did
            })))
            .mount(&server)
            .await;

        resolver_for(&server).wait_until_resolvable(did).await.unwrap();
    }

    #[tokio::test]
    async fn exhausts_the_attempt_bound() {
        let server = MockServer::start().await;
        let did = "did:sidetree:EiNeverAnchored";

        Mock::given(method("GET"))
            .and(path(format!("/document/{did}")))
            .respond_with(ResponseTemplate::new(404))
            .expect(u64::from(MAX_RESOLVE_ATTEMPTS))
            .mount(&server)
            .await;

        let result = resolver_for(&server).wait_until_resolvable(did).await;
        match result.unwrap_err() {
            HarnessError::ResolutionExhausted { did: failed, attempts } => {
                assert_eq!(failed, did);
                assert_eq!(attempts, MAX_RESOLVE_ATTEMPTS);
            }
            other => panic!("expected ResolutionExhausted, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn transport_errors_count_as_failed_attempts() {
        // Point at a closed port; every attempt errors and the bound
        // still applies.
        let resolver = DidResolver::new(
            reqwest::Client::builder()
                .timeout(Duration::from_millis(50))
                .build()
                .unwrap(),
            "http://127.0.0.1:1/document".to_string(),
        )
        .with_retry_delay(Duration::from_millis(1));

        let result = resolver.wait_until_resolvable("did:sidetree:EiUnreachable").await;
        assert!(matches!(
            result,
            Err(HarnessError::ResolutionExhausted { .. })
        ));
    }
}
