// src/services/issuer_client.rs
//! Client for the issuer service HTTP API.
//!
//! Drives the three issuer surfaces a scenario touches:
//! - Key Generator: `GET /kms/generatekeypair`
//! - Profile Store: `POST /profile`
//! - Credential Issuer: per-profile `issueCredential` and
//!   `composeAndIssueCredential` endpoints
//!
//! Every method expects one specific status code; anything else is a hard
//! failure carrying the endpoint, status, and response body.

use std::time::Duration;

use log::debug;
use reqwest::StatusCode;
use serde::Serialize;

use crate::config::HarnessConfig;
use crate::error::HarnessError;
use crate::models::credential::VerifiableCredential;
use crate::models::issuer_api::{
    GenerateKeyPairResponse, IssuanceRequest, IssueCredentialOptions, IssueCredentialRequest,
    ProfileRequest, ProfileResponse,
};
use crate::services::expect_status;
use crate::utils::serialization::deserialize;

/// The fixed unsigned credential submitted by direct issuance.
const UNIVERSITY_DEGREE_VC: &str = include_str!("fixtures/university_degree.json");

/// Client for the issuer service.
///
/// Holds one shared HTTP client; per-profile endpoint URLs are derived
/// from the profile name at call time.
#[derive(Clone)]
pub struct IssuerClient {
    /// Shared HTTP client
    http: reqwest::Client,

    /// Issuer service base URL, without trailing slash
    base_url: String,
}

impl IssuerClient {
    /// Creates a new IssuerClient from the harness configuration.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &HarnessConfig) -> Result<Self, HarnessError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()
            .map_err(|e| HarnessError::Transport {
                endpoint: "client_init".to_string(),
                source: e,
            })?;

        Ok(Self {
            http,
            base_url: config.issuer_url.trim_end_matches('/').to_string(),
        })
    }

    /// Requests a fresh public key from the issuer's key generator.
    ///
    /// # Returns
    /// The base58-encoded public key.
    ///
    /// # Errors
    /// Any non-200 response fails with the status and body; a body that
    /// does not parse as a keypair response fails with context.
    pub async fn generate_keypair(&self) -> Result<String, HarnessError> {
        let endpoint = format!("{}/kms/generatekeypair", self.base_url);

        let response = self.http.get(&endpoint).send().await.map_err(|e| {
            HarnessError::Transport {
                endpoint: endpoint.clone(),
                source: e,
            }
        })?;

        let body = expect_status(&endpoint, StatusCode::OK, response).await?;
        let keypair: GenerateKeyPairResponse =
            deserialize(&body).map_err(|e| HarnessError::MalformedResponse {
                endpoint,
                reason: format!("failed to parse keypair response: {e}"),
            })?;

        Ok(keypair.public_key)
    }

    /// Creates an issuer profile.
    ///
    /// # Arguments
    /// * `request` - Profile request with the scenario's name and DID set
    ///
    /// # Errors
    /// Any non-201 response fails with the status and body.
    pub async fn create_profile(
        &self,
        request: &ProfileRequest,
    ) -> Result<ProfileResponse, HarnessError> {
        let endpoint = format!("{}/profile", self.base_url);

        let response = self
            .http
            .post(&endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| HarnessError::Transport {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        let body = expect_status(&endpoint, StatusCode::CREATED, response).await?;
        deserialize(&body).map_err(|e| HarnessError::MalformedResponse {
            endpoint,
            reason: format!("failed to parse profile response: {e}"),
        })
    }

    /// Issues a credential under a profile.
    ///
    /// Both issuance modes return the raw signed-credential bytes; callers
    /// decide how deeply to inspect them.
    ///
    /// # Arguments
    /// * `profile_name` - Profile to issue under
    /// * `request` - Which issuance mode to exercise
    pub async fn issue(
        &self,
        profile_name: &str,
        request: &IssuanceRequest,
    ) -> Result<Vec<u8>, HarnessError> {
        match request {
            IssuanceRequest::Direct { assertion_did } => {
                debug!("issuing fixed credential under profile {profile_name}");

                let credential: VerifiableCredential = serde_json::from_str(UNIVERSITY_DEGREE_VC)?;
                let body = IssueCredentialRequest {
                    credential: serde_json::to_value(&credential)?,
                    opts: Some(IssueCredentialOptions {
                        assertion_method: assertion_did.clone(),
                    }),
                };

                self.post_credentials(profile_name, "issueCredential", &body)
                    .await
            }
            IssuanceRequest::Compose { request } => {
                debug!("composing credential under profile {profile_name}");

                self.post_credentials(profile_name, "composeAndIssueCredential", request)
                    .await
            }
        }
    }

    /// POSTs a body to a per-profile credentials endpoint, expecting 200.
    async fn post_credentials<T: Serialize>(
        &self,
        profile_name: &str,
        operation: &str,
        body: &T,
    ) -> Result<Vec<u8>, HarnessError> {
        let endpoint = format!("{}/{profile_name}/credentials/{operation}", self.base_url);

        let response = self
            .http
            .post(&endpoint)
            .json(body)
            .send()
            .await
            .map_err(|e| HarnessError::Transport {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        expect_status(&endpoint, StatusCode::OK, response).await
    }
}
