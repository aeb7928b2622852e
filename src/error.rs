// src/error.rs
//! Error types for the behavior-test harness.
//!
//! Every failure a scenario step can hit maps to one variant here:
//! - Transport failures (connection refused, timeouts)
//! - Unexpected HTTP status codes, carrying the offending body
//! - Malformed response payloads
//! - Semantic failures (proof shape, profile/DID mismatch, resolution
//!   exhaustion)
//!
//! All variants are terminal for the step that produced them. The only
//! retried operation in the harness is the DID-resolution poll, and its
//! exhaustion surfaces as [`HarnessError::ResolutionExhausted`].

use thiserror::Error;

/// Errors produced while driving the issuer service and DID registry.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// HTTP transport failure (connection error, timeout). Never retried.
    #[error("transport error calling {endpoint}: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a status code other than the expected one.
    #[error("got unexpected response from {endpoint} status '{status}' body {body}")]
    UnexpectedStatus {
        endpoint: String,
        expected: u16,
        status: u16,
        body: String,
    },

    /// The response body could not be parsed into the expected shape.
    #[error("malformed response from {endpoint}: {reason}")]
    MalformedResponse { endpoint: String, reason: String },

    /// A base58-encoded public key could not be decoded.
    #[error("failed to decode base58 public key: {0}")]
    KeyDecode(#[from] bs58::decode::Error),

    /// The public key decoded to zero bytes.
    #[error("public key must not be empty")]
    EmptyPublicKey,

    /// A request payload could not be serialized.
    #[error("failed to serialize payload: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The signed credential's proof failed a shape check.
    #[error("credential proof is not valid: {0}")]
    InvalidProof(String),

    /// The profile store returned a profile bound to a different DID.
    #[error("DID not saved in the profile - expected={expected} actual={actual}")]
    ProfileDidMismatch { expected: String, actual: String },

    /// The DID did not become resolvable within the bounded poll.
    #[error("DID {did} is not resolvable after {attempts} attempts")]
    ResolutionExhausted { did: String, attempts: u32 },

    /// A step was invoked before the step that records its input.
    #[error("no {item} recorded for user {user}")]
    MissingScenarioState { user: String, item: &'static str },
}
