// src/utils/crypto.rs
//! Hashing utilities for Sidetree commitments.
//!
//! Sidetree commits to future recovery/update secrets by publishing a
//! multihash of the reveal value. The registry in this environment uses
//! SHA2-256, multihash code `0x12`.

use sha2::{Digest, Sha256};

/// Multihash algorithm code for SHA2-256.
pub const SHA2_256_CODE: u64 = 18;

/// Length in bytes of a SHA2-256 digest.
const SHA2_256_LEN: u8 = 32;

/// Computes the SHA2-256 multihash of the input data.
///
/// # Arguments
/// * `data` - Binary data to hash (as bytes slice)
///
/// # Returns
/// The digest prefixed with the multihash code and length bytes
/// (`0x12 0x20` followed by the 32-byte digest).
pub fn sha2_256_multihash(data: &[u8]) -> Vec<u8> {
    let digest = Sha256::digest(data);

    let mut out = Vec::with_capacity(2 + digest.len());
    out.push(SHA2_256_CODE as u8);
    out.push(SHA2_256_LEN);
    out.extend_from_slice(&digest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multihash_carries_code_and_length_prefix() {
        let hash = sha2_256_multihash(b"recoveryOTP");
        assert_eq!(hash.len(), 34);
        assert_eq!(hash[0], 0x12);
        assert_eq!(hash[1], 0x20);
    }

    #[test]
    fn multihash_is_deterministic() {
        assert_eq!(sha2_256_multihash(b"updateOTP"), sha2_256_multihash(b"updateOTP"));
        assert_ne!(sha2_256_multihash(b"updateOTP"), sha2_256_multihash(b"recoveryOTP"));
    }
}
