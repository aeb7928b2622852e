// src/models/issuer_api.rs
//! Request and response payloads for the issuer service HTTP API.
//!
//! Mirrors the wire shapes of the four issuer endpoints the harness
//! drives: key generation, profile creation, direct issuance, and
//! compose-and-issue.

use serde::{Deserialize, Serialize};

/// Response of `GET /kms/generatekeypair`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GenerateKeyPairResponse {
    /// Base58-encoded public key
    #[serde(rename = "publicKey")]
    pub public_key: String,
}

/// Request body of `POST /profile`.
///
/// The harness loads a fixed template and overrides `name` and `did`
/// per scenario actor.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRequest {
    /// Profile name, unique per scenario actor
    pub name: String,

    /// Base URI stamped into credentials issued under this profile
    pub uri: String,

    /// Signature suite the profile signs with
    /// Example: "Ed25519Signature2018"
    pub signature_type: String,

    /// DID the profile signs on behalf of
    #[serde(default)]
    pub did: String,
}

/// Profile representation returned by the profile store.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    /// Stored profile name
    pub name: String,

    /// DID the profile was bound to
    #[serde(default)]
    pub did: String,

    /// Base URI stamped into issued credentials
    #[serde(default)]
    pub uri: Option<String>,

    /// Signature suite the profile signs with
    #[serde(default)]
    pub signature_type: Option<String>,

    /// Profile creation timestamp
    #[serde(default)]
    pub created: Option<String>,
}

/// Request body of `POST /{profile}/credentials/issueCredential`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct IssueCredentialRequest {
    /// The unsigned credential to sign, embedded as raw JSON
    pub credential: serde_json::Value,

    /// Issuance options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opts: Option<IssueCredentialOptions>,
}

/// Options accepted by the direct-issuance endpoint.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct IssueCredentialOptions {
    /// DID whose assertion-method key signs the credential
    #[serde(rename = "assertionMethod")]
    pub assertion_method: String,
}

/// Request body of `POST /{profile}/credentials/composeAndIssueCredential`.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ComposeCredentialRequest {
    /// Issuer DID
    pub issuer: String,

    /// Subject DID
    pub subject: String,

    /// Credential types to compose
    pub types: Vec<String>,

    /// RFC 3339 issuance timestamp
    pub issuance_date: String,

    /// RFC 3339 expiration timestamp
    pub expiration_date: String,

    /// Claims to embed in the credential subject
    pub claims: serde_json::Value,

    /// Evidence entry
    pub evidence: serde_json::Value,

    /// Terms-of-use entry
    pub terms_of_use: serde_json::Value,

    /// Requested proof format
    /// Example: "jws"
    pub proof_format: String,

    /// Options for the requested proof format
    pub proof_format_options: ProofFormatOptions,
}

/// Proof-format options carrying the signing key identifier.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ProofFormatOptions {
    /// Signing key identifier, derived as `<DID>#key-1`
    pub kid: String,
}

/// The two issuance modes the issuer service offers.
///
/// Both modes yield raw signed-credential bytes; they differ only in
/// which endpoint is called and what the request carries.
#[derive(Debug, Clone)]
pub enum IssuanceRequest {
    /// Submit a fixed unsigned credential for signing with the DID's
    /// assertion-method key.
    Direct { assertion_did: String },

    /// Ask the issuer to compose the credential server-side.
    Compose { request: ComposeCredentialRequest },
}
