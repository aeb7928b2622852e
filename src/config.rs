// src/config.rs
//! Harness configuration.
//!
//! Base URLs and TLS trust settings for the external services the harness
//! drives. Defaults match the local test deployment; every value can be
//! overridden through environment variables (a `.env` file is honored by
//! the binary entry point).
//!
//! ## Environment Variables
//! - `ISSUER_URL`: issuer service base URL (default: `http://localhost:8070`)
//! - `SIDETREE_URL`: Sidetree document endpoint (default: `https://localhost:48326/document`)
//! - `RESOLVER_URL`: DID resolution endpoint polled after creation
//!   (default: the Sidetree document endpoint)
//! - `TLS_CA_CERT`: path to an extra PEM root certificate for the registry
//! - `TLS_ACCEPT_INVALID_CERTS`: `true` to trust self-signed registry certs
//! - `HTTP_TIMEOUT_SECS`: per-request timeout (default: 30)

use std::fs;

use thiserror::Error;

/// Default issuer service base URL for the local test deployment.
const DEFAULT_ISSUER_URL: &str = "http://localhost:8070";

/// Default Sidetree document endpoint for the local test deployment.
const DEFAULT_SIDETREE_URL: &str = "https://localhost:48326/document";

/// Settings for connecting to the issuer service and the DID registry.
#[derive(Clone)]
pub struct HarnessConfig {
    /// Issuer service base URL (key generation, profiles, issuance).
    pub issuer_url: String,
    /// Sidetree document endpoint accepting DID-create operations.
    pub sidetree_url: String,
    /// Endpoint polled to check that a freshly created DID resolves.
    pub resolver_url: String,
    /// Extra PEM root certificate trusted when talking to the registry.
    pub tls_ca_pem: Option<Vec<u8>>,
    /// Whether to accept invalid (self-signed) registry certificates.
    pub tls_accept_invalid_certs: bool,
    /// Per-request timeout in seconds.
    pub http_timeout_secs: u64,
}

impl std::fmt::Debug for HarnessConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HarnessConfig")
            .field("issuer_url", &self.issuer_url)
            .field("sidetree_url", &self.sidetree_url)
            .field("resolver_url", &self.resolver_url)
            .field("tls_ca_pem", &self.tls_ca_pem.as_ref().map(|_| "[PEM]"))
            .field("tls_accept_invalid_certs", &self.tls_accept_invalid_certs)
            .field("http_timeout_secs", &self.http_timeout_secs)
            .finish()
    }
}

impl HarnessConfig {
    /// Loads configuration from environment variables, falling back to the
    /// local test deployment defaults.
    ///
    /// # Errors
    /// Returns [`ConfigError::CertRead`] when `TLS_CA_CERT` names a file
    /// that cannot be read.
    pub fn from_env() -> Result<Self, ConfigError> {
        let sidetree_url = env_or("SIDETREE_URL", DEFAULT_SIDETREE_URL);
        let resolver_url =
            std::env::var("RESOLVER_URL").unwrap_or_else(|_| sidetree_url.clone());

        let tls_ca_pem = match std::env::var("TLS_CA_CERT") {
            Ok(path) => Some(fs::read(&path).map_err(|e| ConfigError::CertRead {
                path,
                reason: e.to_string(),
            })?),
            Err(_) => None,
        };

        Ok(Self {
            issuer_url: env_or("ISSUER_URL", DEFAULT_ISSUER_URL),
            sidetree_url,
            resolver_url,
            tls_ca_pem,
            tls_accept_invalid_certs: std::env::var("TLS_ACCEPT_INVALID_CERTS")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
            http_timeout_secs: std::env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        })
    }

}

#[cfg(test)]
impl HarnessConfig {
    /// Builds a configuration pointing every service at one base URL, with
    /// no TLS trust overrides. Used by the mock-server tests.
    pub fn single_host(base_url: &str) -> Self {
        Self {
            issuer_url: base_url.to_string(),
            sidetree_url: format!("{base_url}/document"),
            resolver_url: format!("{base_url}/document"),
            tls_ca_pem: None,
            tls_accept_invalid_certs: false,
            http_timeout_secs: 5,
        }
    }
}

fn env_or(var: &str, default: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| default.to_string())
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read TLS CA certificate {path}: {reason}")]
    CertRead { path: String, reason: String },
}
