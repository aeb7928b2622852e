// src/services/verifier.rs
//! Credential proof verification.
//!
//! Checks the shape of the proof attached to a signed credential: the
//! proof must be a JSON object whose `type` names the expected signature
//! suite and whose `jws` is non-empty. No cryptographic verification is
//! performed; signature validity is the issuer's concern and is covered
//! by its own test suites.

use crate::error::HarnessError;
use crate::models::credential::Proof;
use crate::utils::serialization::deserialize;

/// Signature suite every issued credential must carry.
pub const SIGNATURE_SUITE: &str = "Ed25519Signature2018";

/// Verifies the proof shape of a signed credential.
///
/// # Arguments
/// * `signed_credential` - Raw bytes returned by an issuance endpoint
///
/// # Errors
/// Returns [`HarnessError::InvalidProof`] when:
/// - the bytes are not a JSON object
/// - the `proof` field is absent or not an object
/// - `proof.type` differs from [`SIGNATURE_SUITE`]
/// - `proof.jws` is absent or empty
pub fn verify_proof(signed_credential: &[u8]) -> Result<(), HarnessError> {
    let credential: serde_json::Value = deserialize(signed_credential)
        .map_err(|e| HarnessError::InvalidProof(format!("credential is not valid JSON: {e}")))?;

    let proof_value = credential
        .get("proof")
        .ok_or_else(|| HarnessError::InvalidProof("proof is missing".to_string()))?;
    if !proof_value.is_object() {
        return Err(HarnessError::InvalidProof(
            "proof is not an object".to_string(),
        ));
    }

    let proof: Proof = serde_json::from_value(proof_value.clone())
        .map_err(|e| HarnessError::InvalidProof(format!("proof shape is not valid: {e}")))?;

    if proof.proof_type != SIGNATURE_SUITE {
        return Err(HarnessError::InvalidProof(format!(
            "proof type is not valid: {}",
            proof.proof_type
        )));
    }

    if proof.jws.is_empty() {
        return Err(HarnessError::InvalidProof(
            "proof jws value is empty".to_string(),
        ));
    }

    Ok(())
}
