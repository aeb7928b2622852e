// src/scenario/steps.rs
//! Scenario step implementations.
//!
//! Each step drives one slice of the issuer/registry contract and records
//! its outcome in the scenario context. The steps compose into the full
//! credential lifecycle:
//!
//! 1. `create_did`: generate key, submit create operation, wait for the
//!    DID to resolve
//! 2. `create_issuer_profile`: bind a uniquely named profile to the DID
//! 3. `issue_and_verify_credential` / `compose_issue_and_verify_credential`:
//!    exercise one issuance mode and check the proof shape
//! 4. `create_credential`: the whole flow, retaining the signed credential
//!
//! Every step is a terminal failure point. The only retried operation is
//! the DID-resolution poll inside the resolver.

use log::{debug, info};
use uuid::Uuid;

use crate::config::HarnessConfig;
use crate::error::HarnessError;
use crate::models::issuer_api::{ComposeCredentialRequest, IssuanceRequest, ProfileRequest};
use crate::scenario::context::ScenarioContext;
use crate::services::issuer_client::IssuerClient;
use crate::services::registry_client::RegistryClient;
use crate::services::resolver::DidResolver;
use crate::services::verifier::verify_proof;
use crate::sidetree;

/// Template for profile-creation requests; name and DID are overridden
/// per scenario actor.
const PROFILE_REQUEST_TEMPLATE: &str = include_str!("fixtures/profile_request.json");

/// Template for compose-and-issue requests; the signing key id is
/// overridden with the actor's DID.
const COMPOSE_REQUEST_TEMPLATE: &str = include_str!("fixtures/compose_request.json");

/// Scenario steps bound to one context and one set of service clients.
pub struct Steps {
    issuer: IssuerClient,
    registry: RegistryClient,
    resolver: DidResolver,
    context: ScenarioContext,
}

impl Steps {
    /// Builds the service clients from the harness configuration.
    pub fn new(config: &HarnessConfig) -> Result<Self, HarnessError> {
        let issuer = IssuerClient::new(config)?;
        let registry = RegistryClient::new(config)?;
        // The resolution poll shares the registry's TLS trust settings.
        let resolver = DidResolver::new(
            registry.http_client().clone(),
            config.resolver_url.clone(),
        );

        Ok(Self {
            issuer,
            registry,
            resolver,
            context: ScenarioContext::new(),
        })
    }

    /// Read access to the accumulated scenario state.
    pub fn context(&self) -> &ScenarioContext {
        &self.context
    }

    /// Creates a DID for the user from a freshly generated public key and
    /// waits until it resolves.
    pub async fn create_did(&mut self, user: &str) -> Result<(), HarnessError> {
        let public_key = self.issuer.generate_keypair().await?;
        let operation = sidetree::build_create_request(&public_key)?;
        let document = self.registry.create_did(&operation).await?;

        info!("created DID {} for {user}", document.id);
        if let Some(key) = document.public_key(sidetree::KEY_ID) {
            debug!("registered verification key {} ({})", key.id, key.key_type);
        }
        self.context.set_did(user, document.id.clone());

        self.resolver.wait_until_resolvable(&document.id).await
    }

    /// Creates an issuer profile bound to the user's DID.
    ///
    /// The stored profile name is the supplied name prefixed with a fresh
    /// UUID, so concurrent scenarios never collide. The profile store
    /// must echo back the DID it was given; a mismatch is a hard failure.
    pub async fn create_issuer_profile(
        &mut self,
        user: &str,
        profile_name: &str,
    ) -> Result<(), HarnessError> {
        let did = self.require_did(user)?.to_string();

        let mut request: ProfileRequest = serde_json::from_str(PROFILE_REQUEST_TEMPLATE)?;
        request.name = format!("{}{profile_name}", Uuid::new_v4());
        request.did = did.clone();

        let profile = self.issuer.create_profile(&request).await?;
        if profile.did != did {
            return Err(HarnessError::ProfileDidMismatch {
                expected: did,
                actual: profile.did,
            });
        }

        info!("created profile {} for {user}", profile.name);
        self.context.set_profile_name(user, profile.name.clone());

        self.resolver.wait_until_resolvable(&profile.did).await
    }

    /// Issues the fixed credential with the user's DID and verifies the
    /// proof shape.
    pub async fn issue_and_verify_credential(&mut self, user: &str) -> Result<(), HarnessError> {
        let did = self.require_did(user)?.to_string();
        info!("DID for signing {did}");

        let request = IssuanceRequest::Direct { assertion_did: did };
        let signed = self.issue_credential(user, &request).await?;

        verify_proof(&signed)
    }

    /// Composes and issues a credential signed with `<DID>#key-1` and
    /// verifies the proof shape.
    pub async fn compose_issue_and_verify_credential(
        &mut self,
        user: &str,
    ) -> Result<(), HarnessError> {
        let did = self.require_did(user)?.to_string();
        info!("DID for signing {did}");

        let mut compose: ComposeCredentialRequest =
            serde_json::from_str(COMPOSE_REQUEST_TEMPLATE)?;
        compose.proof_format_options.kid = format!("{did}{}", sidetree::KEY_ID);

        let request = IssuanceRequest::Compose { request: compose };
        let signed = self.issue_credential(user, &request).await?;

        verify_proof(&signed)
    }

    /// Runs the whole credential lifecycle for a user and retains the
    /// signed credential in the scenario context.
    pub async fn create_credential(&mut self, user: &str) -> Result<(), HarnessError> {
        self.create_did(user).await?;
        self.create_issuer_profile(user, &Uuid::new_v4().to_string())
            .await?;

        let did = self.require_did(user)?.to_string();
        let request = IssuanceRequest::Direct { assertion_did: did };
        let signed = self.issue_credential(user, &request).await?;
        verify_proof(&signed)?;

        self.context
            .set_credential(user, String::from_utf8_lossy(&signed).into_owned());

        Ok(())
    }

    /// Re-resolves the user's DID, then submits the issuance request
    /// under the user's profile.
    async fn issue_credential(
        &self,
        user: &str,
        request: &IssuanceRequest,
    ) -> Result<Vec<u8>, HarnessError> {
        let did = self.require_did(user)?;
        self.resolver.wait_until_resolvable(did).await?;

        let profile_name =
            self.context
                .profile_name(user)
                .ok_or_else(|| HarnessError::MissingScenarioState {
                    user: user.to_string(),
                    item: "profile name",
                })?;

        self.issuer.issue(profile_name, request).await
    }

    fn require_did(&self, user: &str) -> Result<&str, HarnessError> {
        self.context
            .did(user)
            .ok_or_else(|| HarnessError::MissingScenarioState {
                user: user.to_string(),
                item: "DID",
            })
    }
}
