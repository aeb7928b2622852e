// src/models/did.rs
//! Decentralized Identifier (DID) document data model.
//!
//! Covers the two documents the harness touches: the minimal document
//! embedded in a Sidetree create operation, and the registered document the
//! registry returns. Follows the basic structure of the
//! [DID Core Specification](https://www.w3.org/TR/did-core/).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A public key entry in a DID document.
///
/// The key material is carried base58-encoded, matching the encoding the
/// issuer's key-generation endpoint hands out.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PublicKeyEntry {
    /// Key identifier relative to the document
    /// Example: "#key-1"
    pub id: String,

    /// Key-type label identifying the verification suite
    /// Example: "Ed25519VerificationKey2018"
    #[serde(rename = "type")]
    pub key_type: String,

    /// Base58-encoded public key bytes
    #[serde(rename = "publicKeyBase58")]
    pub public_key_base58: String,
}

/// A DID document.
///
/// Outgoing create operations embed a document with an empty context, no
/// `id` (the registry derives it), and fresh creation/update timestamps.
/// Documents returned by the registry carry the assigned `id`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DidDocument {
    /// JSON-LD context entries. Empty for the minimal create document.
    #[serde(rename = "@context")]
    pub context: Vec<String>,

    /// The complete DID string identifier
    /// Example: "did:sidetree:EiBJz3qA4g0..."
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Public key entries registered for this DID
    #[serde(rename = "publicKey", default)]
    pub public_key: Vec<PublicKeyEntry>,

    /// Document creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// Document last-update timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

impl DidDocument {
    /// Looks up a public key entry by its identifier.
    pub fn public_key(&self, id: &str) -> Option<&PublicKeyEntry> {
        self.public_key.iter().find(|k| k.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_document_omits_id_and_keeps_empty_context() {
        let doc = DidDocument {
            context: vec![],
            id: String::new(),
            public_key: vec![PublicKeyEntry {
                id: "#key-1".to_string(),
                key_type: "Ed25519VerificationKey2018".to_string(),
                public_key_base58: "4zvwRjXUKGfvwnParsHAS3HuSVzV5cA4McphgmoCtajS".to_string(),
            }],
            created: Some(Utc::now()),
            updated: Some(Utc::now()),
        };

        let json = serde_json::to_value(&doc).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["@context"].as_array().unwrap().len(), 0);
        assert_eq!(json["publicKey"][0]["type"], "Ed25519VerificationKey2018");
    }

    #[test]
    fn registered_document_parses_and_exposes_key_lookup() {
        let body = serde_json::json!({
            "@context": ["https://w3id.org/did/v1"],
            "id": "did:sidetree:EiBJz3qA4g0",
            "publicKey": [{
                "id": "#key-1",
                "type": "Ed25519VerificationKey2018",
                "publicKeyBase58": "4zvwRjXUKGfvwnParsHAS3HuSVzV5cA4McphgmoCtajS"
            }],
            "created": "2020-03-25T19:38:54Z"
        });

        let doc: DidDocument = serde_json::from_value(body).unwrap();
        assert_eq!(doc.id, "did:sidetree:EiBJz3qA4g0");
        assert!(doc.public_key("#key-1").is_some());
        assert!(doc.public_key("#key-2").is_none());
    }
}
