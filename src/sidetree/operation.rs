// src/sidetree/operation.rs
//! Builder for Sidetree DID-create operations.
//!
//! A create operation wraps a minimal DID document (the "opaque document")
//! in an envelope committing to future recovery and update secrets. The
//! registry never inspects the document content; it anchors the operation
//! and answers with the registered document.
//!
//! Commitments are multihashes of fixed reveal values, base64url-encoded
//! without padding. The reveal values themselves stay client-side until a
//! recovery or update operation discloses them.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::HarnessError;
use crate::models::did::{DidDocument, PublicKeyEntry};
use crate::utils::crypto::{sha2_256_multihash, SHA2_256_CODE};
use crate::utils::serialization::serialize;

/// Identifier of the document's verification key.
pub const KEY_ID: &str = "#key-1";

/// Key-type label for the document's verification key.
pub const KEY_TYPE: &str = "Ed25519VerificationKey2018";

/// Identifier of the recovery key carried in the envelope.
const RECOVERY_KEY_ID: &str = "recoveryKey";

/// Reveal value committed to for the next recovery operation.
const RECOVERY_REVEAL_VALUE: &str = "recoveryOTP";

/// Reveal value committed to for the next update operation.
const UPDATE_REVEAL_VALUE: &str = "updateOTP";

/// A serialized DID-create operation envelope.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequest {
    /// Operation type, always `"create"`
    #[serde(rename = "type")]
    pub operation_type: String,

    /// The serialized minimal DID document
    pub opaque_document: String,

    /// Identifier of the recovery key
    pub recovery_key: String,

    /// Commitment to the next recovery reveal value
    pub next_recovery_commitment: String,

    /// Commitment to the next update reveal value
    pub next_update_commitment: String,

    /// Multihash algorithm code used for the commitments
    pub multihash_code: u64,
}

/// Builds a serialized DID-create operation from a base58 public key.
///
/// The key is decoded to validate it, wrapped under [`KEY_ID`] and
/// [`KEY_TYPE`] in a minimal document with an empty context and current
/// creation/update timestamps, and the serialized document is embedded in
/// the create envelope.
///
/// # Errors
/// - [`HarnessError::KeyDecode`] if the key is not valid base58
/// - [`HarnessError::EmptyPublicKey`] if the key decodes to zero bytes
/// - [`HarnessError::Serialization`] if the document or envelope cannot
///   be serialized
pub fn build_create_request(base58_public_key: &str) -> Result<Vec<u8>, HarnessError> {
    let raw_key = bs58::decode(base58_public_key).into_vec()?;
    if raw_key.is_empty() {
        return Err(HarnessError::EmptyPublicKey);
    }

    let public_key = PublicKeyEntry {
        id: KEY_ID.to_string(),
        key_type: KEY_TYPE.to_string(),
        public_key_base58: bs58::encode(&raw_key).into_string(),
    };

    let now = Utc::now();
    let document = DidDocument {
        context: vec![],
        id: String::new(),
        public_key: vec![public_key],
        created: Some(now),
        updated: Some(now),
    };

    let request = CreateRequest {
        operation_type: "create".to_string(),
        opaque_document: serialize(&document)?,
        recovery_key: RECOVERY_KEY_ID.to_string(),
        next_recovery_commitment: commitment(RECOVERY_REVEAL_VALUE.as_bytes()),
        next_update_commitment: commitment(UPDATE_REVEAL_VALUE.as_bytes()),
        multihash_code: SHA2_256_CODE,
    };

    Ok(serde_json::to_vec(&request)?)
}

/// Derives a commitment from a reveal value: the base64url (unpadded)
/// encoding of the reveal value's SHA2-256 multihash.
fn commitment(reveal_value: &[u8]) -> String {
    base64::encode_config(sha2_256_multihash(reveal_value), base64::URL_SAFE_NO_PAD)
}
