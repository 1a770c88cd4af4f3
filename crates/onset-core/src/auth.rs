//! The access gate protecting admin mutations.
//!
//! Two states, `Locked` (initial) and `Unlocked`; a submission matching the
//! operator credential unlocks, anything else stays locked and signals an
//! auth error. No logout transition exists. The gate holds only a SHA-256
//! digest of the credential - the plaintext never lives in library code -
//! but it remains a single-operator gate, not a session mechanism.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::warn;

use crate::ports::CatalogError;

/// Authentication state exposed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthState {
    /// Mutations are refused.
    Locked,
    /// Mutations are allowed.
    Unlocked,
}

/// Shared-secret check guarding catalog mutations.
#[derive(Debug, Clone)]
pub struct AccessGate {
    credential_digest: [u8; 32],
    state: AuthState,
}

impl AccessGate {
    /// Create a locked gate from a SHA-256 credential digest.
    pub const fn new(credential_digest: [u8; 32]) -> Self {
        Self {
            credential_digest,
            state: AuthState::Locked,
        }
    }

    /// Create a locked gate by digesting a plaintext credential.
    ///
    /// Meant for tests and throwaway demos; production composition roots
    /// should pass a stored digest to [`AccessGate::new`] instead.
    pub fn from_secret(secret: &str) -> Self {
        Self::new(digest(secret))
    }

    /// Current authentication state.
    pub const fn state(&self) -> AuthState {
        self.state
    }

    /// Whether mutations are currently allowed.
    pub const fn is_unlocked(&self) -> bool {
        matches!(self.state, AuthState::Unlocked)
    }

    /// Submit a credential attempt.
    ///
    /// A matching credential transitions the gate to `Unlocked` and any
    /// later submission is then a no-op. A mismatch leaves the gate locked
    /// and returns [`CatalogError::Auth`].
    pub fn submit_credential(&mut self, attempt: &str) -> Result<(), CatalogError> {
        if self.is_unlocked() {
            return Ok(());
        }
        if digest(attempt) == self.credential_digest {
            self.state = AuthState::Unlocked;
            Ok(())
        } else {
            warn!("rejected admin credential attempt");
            Err(CatalogError::Auth("wrong password".to_string()))
        }
    }
}

fn digest(value: &str) -> [u8; 32] {
    Sha256::digest(value.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_credential_stays_locked() {
        let mut gate = AccessGate::from_secret("OnsetAdmin123");
        let err = gate.submit_credential("wrong").unwrap_err();
        assert!(matches!(err, CatalogError::Auth(_)));
        assert_eq!(gate.state(), AuthState::Locked);
    }

    #[test]
    fn test_correct_credential_unlocks() {
        let mut gate = AccessGate::from_secret("OnsetAdmin123");
        gate.submit_credential("OnsetAdmin123").unwrap();
        assert_eq!(gate.state(), AuthState::Unlocked);
    }

    #[test]
    fn test_submission_after_unlock_is_noop() {
        let mut gate = AccessGate::from_secret("OnsetAdmin123");
        gate.submit_credential("OnsetAdmin123").unwrap();
        // Even a wrong attempt no longer relocks or errors.
        gate.submit_credential("wrong").unwrap();
        assert!(gate.is_unlocked());
    }

    #[test]
    fn test_gate_from_digest_matches_from_secret() {
        let digest = Sha256::digest(b"OnsetAdmin123").into();
        let mut gate = AccessGate::new(digest);
        gate.submit_credential("OnsetAdmin123").unwrap();
        assert!(gate.is_unlocked());
    }
}
