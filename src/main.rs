// src/main.rs

//! # Issuer Service Behavior-Test Harness - Main Entry Point
//!
//! Drives an already-running verifiable-credential issuer service and a
//! Sidetree DID registry over HTTP, asserting on status codes and
//! response shapes.
//!
//! ## Flow Exercised
//! 1. **Key Generator**: request a public key from the issuer's KMS
//! 2. **DID Registry**: submit a Sidetree create operation, poll until
//!    the DID resolves
//! 3. **Profile Store**: create an issuer profile bound to the DID
//! 4. **Credential Issuer**: issue directly and via compose-and-issue,
//!    checking the returned proof shape
//!
//! ## Environment Variables
//! - `ISSUER_URL`: issuer service base URL (default: http://localhost:8070)
//! - `SIDETREE_URL`: Sidetree document endpoint (default: https://localhost:48326/document)
//! - `RESOLVER_URL`: DID resolution endpoint (default: the Sidetree endpoint)
//! - `TLS_CA_CERT`: (Optional) extra PEM root certificate for the registry
//! - `TLS_ACCEPT_INVALID_CERTS`: (Optional) trust self-signed registry certs
//! - `RUST_LOG`: log filter (e.g. `info`)

use anyhow::Context;
use dotenv::dotenv;
use log::info;

use crate::config::HarnessConfig;
use crate::scenario::steps::Steps;

// Module declarations (organized by functional domain)
mod config; // Environment-driven settings
mod error; // Step failure taxonomy
mod models; // Wire-format data structures
mod scenario; // Scenario state and steps
mod services; // HTTP clients for the external services
mod sidetree; // DID-create operation construction
mod utils; // Helper functions

/// Main harness entry point
///
/// # Run Sequence
/// 1. Load environment configuration
/// 2. Build the service clients
/// 3. Run the full credential flow for two independent actors
/// 4. Exercise both issuance modes for a third actor
///
/// Exits non-zero on the first failing step.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();
    env_logger::init();

    let config = HarnessConfig::from_env().context("failed to load configuration")?;
    info!(
        "driving issuer at {} and registry at {}",
        config.issuer_url, config.sidetree_url
    );

    let mut steps = Steps::new(&config).context("failed to build service clients")?;

    // Two independent actors must end up with independent DIDs and
    // profile names.
    for user in ["alice", "bob"] {
        steps
            .create_credential(user)
            .await
            .with_context(|| format!("credential flow failed for {user}"))?;
    }
    anyhow::ensure!(
        steps.context().did("alice") != steps.context().did("bob"),
        "distinct users must receive distinct DIDs"
    );
    anyhow::ensure!(
        steps.context().profile_name("alice") != steps.context().profile_name("bob"),
        "distinct users must receive distinct profile names"
    );
    for user in ["alice", "bob"] {
        let size = steps.context().credential(user).map(str::len).unwrap_or(0);
        info!("retained signed credential for {user} ({size} bytes)");
    }

    // Exercise both issuance modes against a fresh actor.
    steps
        .create_did("carol")
        .await
        .context("DID creation failed for carol")?;
    steps
        .create_issuer_profile("carol", "carol-profile")
        .await
        .context("profile creation failed for carol")?;
    steps
        .issue_and_verify_credential("carol")
        .await
        .context("direct issuance failed for carol")?;
    steps
        .compose_issue_and_verify_credential("carol")
        .await
        .context("compose-and-issue failed for carol")?;

    info!("all scenario steps completed");
    Ok(())
}
