// src/services/mod.rs
//! HTTP clients for the external services the harness drives.

pub mod issuer_client;
pub mod registry_client;
pub mod resolver;
pub mod verifier;

use reqwest::StatusCode;

use crate::error::HarnessError;

/// Reads the response body and enforces the expected status code.
///
/// On a mismatch the full body is carried in the error for diagnostics.
pub(crate) async fn expect_status(
    endpoint: &str,
    expected: StatusCode,
    response: reqwest::Response,
) -> Result<Vec<u8>, HarnessError> {
    let status = response.status();
    let body = response.bytes().await.map_err(|e| HarnessError::Transport {
        endpoint: endpoint.to_string(),
        source: e,
    })?;

    if status != expected {
        return Err(HarnessError::UnexpectedStatus {
            endpoint: endpoint.to_string(),
            expected: expected.as_u16(),
            status: status.as_u16(),
            body: String::from_utf8_lossy(&body).into_owned(),
        });
    }

    Ok(body.to_vec())
}
