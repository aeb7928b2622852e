// src/services/registry_client.rs
//! Client for the Sidetree DID registry.
//!
//! Submits DID-create operations to the registry's document endpoint over
//! an HTTPS connection built from the harness's TLS trust settings. The
//! local test deployment runs with a self-signed certificate, so the
//! client supports an extra root certificate and an accept-invalid-certs
//! switch.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;

use crate::config::HarnessConfig;
use crate::error::HarnessError;
use crate::models::did::DidDocument;
use crate::services::expect_status;
use crate::utils::serialization::deserialize;

/// Client for the DID registry's document endpoint.
#[derive(Clone)]
pub struct RegistryClient {
    /// HTTP client carrying the registry's TLS trust settings
    http: reqwest::Client,

    /// Full URL of the document endpoint
    document_url: String,
}

impl RegistryClient {
    /// Creates a new RegistryClient from the harness configuration.
    ///
    /// # Errors
    /// Returns an error if the configured CA certificate is not valid PEM
    /// or the underlying HTTP client cannot be built.
    pub fn new(config: &HarnessConfig) -> Result<Self, HarnessError> {
        let mut builder =
            reqwest::Client::builder().timeout(Duration::from_secs(config.http_timeout_secs));

        if let Some(pem) = &config.tls_ca_pem {
            let certificate =
                reqwest::Certificate::from_pem(pem).map_err(|e| HarnessError::Transport {
                    endpoint: "client_init".to_string(),
                    source: e,
                })?;
            builder = builder.add_root_certificate(certificate);
        }

        if config.tls_accept_invalid_certs {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let http = builder.build().map_err(|e| HarnessError::Transport {
            endpoint: "client_init".to_string(),
            source: e,
        })?;

        Ok(Self {
            http,
            document_url: config.sidetree_url.clone(),
        })
    }

    /// Submits a serialized create operation and returns the registered
    /// DID document.
    ///
    /// # Errors
    /// - Any non-200 response fails with the registry endpoint, status,
    ///   and body
    /// - A response that does not parse as a DID document, or whose
    ///   document carries no identifier or public key entries, fails with
    ///   context
    pub async fn create_did(&self, operation: &[u8]) -> Result<DidDocument, HarnessError> {
        let response = self
            .http
            .post(&self.document_url)
            .header(CONTENT_TYPE, "application/json")
            .body(operation.to_vec())
            .send()
            .await
            .map_err(|e| HarnessError::Transport {
                endpoint: self.document_url.clone(),
                source: e,
            })?;

        let body = expect_status(&self.document_url, StatusCode::OK, response).await?;

        let document: DidDocument =
            deserialize(&body).map_err(|e| HarnessError::MalformedResponse {
                endpoint: self.document_url.clone(),
                reason: format!("failed to parse public DID document: {e}"),
            })?;

        if document.id.is_empty() {
            return Err(HarnessError::MalformedResponse {
                endpoint: self.document_url.clone(),
                reason: "DID document has no id".to_string(),
            });
        }
        if document.public_key.is_empty() {
            return Err(HarnessError::MalformedResponse {
                endpoint: self.document_url.clone(),
                reason: "DID document has no public key entries".to_string(),
            });
        }

        Ok(document)
    }

    /// The HTTP client carrying the registry's TLS trust settings, shared
    /// with the resolution poll.
    pub fn http_client(&self) -> &reqwest::Client {
        &self.http
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sidetree::build_create_request;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const PUBLIC_KEY: &str = "4zvwRjXUKGfvwnParsHAS3HuSVzV5cA4McphgmoCtajS";

    fn client_for(server: &MockServer) -> RegistryClient {
        RegistryClient::new(&HarnessConfig::single_host(&server.uri())).unwrap()
    }

    #[tokio::test]
    async fn create_did_returns_registered_document() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/document"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "@context": ["https://w3id.org/did/v1"],
                "id": "did:sidetree:EiBJz3qA4g0",
                "publicKey": [{
                    "id": "#key-1",
                    "type": "Ed25519VerificationKey2018",
                    "publicKeyBase58": PUBLIC_KEY
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let operation = build_create_request(PUBLIC_KEY).unwrap();
        let document = client_for(&server).create_did(&operation).await.unwrap();
        assert_eq!(document.id, "did:sidetree:EiBJz3qA4g0");
        assert!(document.public_key("#key-1").is_some());
    }

    #[tokio::test]
    async fn create_did_failure_names_registry_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/document"))
            .respond_with(ResponseTemplate::new(500).set_body_string("anchoring failed"))
            .mount(&server)
            .await;

        let operation = build_create_request(PUBLIC_KEY).unwrap();
        let result = client_for(&server).create_did(&operation).await;
        match result.unwrap_err() {
            HarnessError::UnexpectedStatus { endpoint, status, body, .. } => {
                assert!(endpoint.ends_with("/document"));
                assert_eq!(status, 500);
                assert_eq!(body, "anchoring failed");
            }
            other => panic!("expected UnexpectedStatus, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn document_without_public_keys_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/document"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "@context": [],
                "id": "did:sidetree:EiBJz3qA4g0",
                "publicKey": []
            })))
            .mount(&server)
            .await;

        let operation = build_create_request(PUBLIC_KEY).unwrap();
        let result = client_for(&server).create_did(&operation).await;
        assert!(matches!(
            result,
            Err(HarnessError::MalformedResponse { .. })
        ));
    }

    #[tokio::test]
    async fn non_json_body_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/document"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not a document"))
            .mount(&server)
            .await;

        let operation = build_create_request(PUBLIC_KEY).unwrap();
        let result = client_for(&server).create_did(&operation).await;
        assert!(matches!(
            result,
            Err(HarnessError::MalformedResponse { .. })
        ));
    }
}
