// src/scenario/context.rs
//! Scenario-scoped state shared across steps.
//!
//! Each scenario actor accumulates a DID, a profile name, and a signed
//! credential as the steps run. The context keys state by user name and
//! exposes typed accessors, so later steps read exactly what earlier
//! steps recorded.

use std::collections::HashMap;

/// State accumulated for one scenario actor.
#[derive(Debug, Clone, Default)]
struct UserState {
    /// DID created for the actor
    did: Option<String>,

    /// Issuer profile name created for the actor
    profile_name: Option<String>,

    /// Signed credential retained by the full-flow step
    credential: Option<String>,
}

/// Per-scenario store of actor state.
///
/// Steps within one scenario run sequentially, so the context needs no
/// interior synchronization. Parallel scenarios each own their context.
#[derive(Debug, Default)]
pub struct ScenarioContext {
    users: HashMap<String, UserState>,
}

impl ScenarioContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the DID created for a user.
    pub fn set_did(&mut self, user: &str, did: String) {
        self.users.entry(user.to_string()).or_default().did = Some(did);
    }

    /// The DID created for a user, if the creation step ran.
    pub fn did(&self, user: &str) -> Option<&str> {
        self.users.get(user).and_then(|s| s.did.as_deref())
    }

    /// Records the profile name created for a user.
    pub fn set_profile_name(&mut self, user: &str, profile_name: String) {
        self.users.entry(user.to_string()).or_default().profile_name = Some(profile_name);
    }

    /// The profile name created for a user, if the profile step ran.
    pub fn profile_name(&self, user: &str) -> Option<&str> {
        self.users.get(user).and_then(|s| s.profile_name.as_deref())
    }

    /// Retains the signed credential issued to a user.
    pub fn set_credential(&mut self, user: &str, credential: String) {
        self.users.entry(user.to_string()).or_default().credential = Some(credential);
    }

    /// The signed credential issued to a user, if one was retained.
    pub fn credential(&self, user: &str) -> Option<&str> {
        self.users.get(user).and_then(|s| s.credential.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_return_none_for_unknown_user() {
        let context = ScenarioContext::new();
        assert!(context.did("alice").is_none());
        assert!(context.profile_name("alice").is_none());
        assert!(context.credential("alice").is_none());
    }

    #[test]
    fn state_is_kept_per_user() {
        let mut context = ScenarioContext::new();
        context.set_did("alice", "did:sidetree:EiAlice".to_string());
        context.set_did("bob", "did:sidetree:EiBob".to_string());
        context.set_profile_name("alice", "alice-profile".to_string());

        assert_eq!(context.did("alice"), Some("did:sidetree:EiAlice"));
        assert_eq!(context.did("bob"), Some("did:sidetree:EiBob"));
        assert_eq!(context.profile_name("alice"), Some("alice-profile"));
        assert!(context.profile_name("bob").is_none());
    }

    #[test]
    fn later_writes_overwrite_earlier_state() {
        let mut context = ScenarioContext::new();
        context.set_did("alice", "did:sidetree:EiFirst".to_string());
        context.set_did("alice", "did:sidetree:EiSecond".to_string());
        assert_eq!(context.did("alice"), Some("did:sidetree:EiSecond"));
    }
}
