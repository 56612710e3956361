/**
 * Password Hashing
 *
 * This module hashes and verifies user passwords with bcrypt.
 *
 * # Properties
 *
 * - Every hash carries a fresh random salt, so equal passwords produce
 *   different stored hashes
 * - Verification compares in constant time (inside `bcrypt::verify`)
 * - The cost factor is fixed when the hasher is built
 *
 * # Blocking
 *
 * bcrypt is deliberately slow: tens to hundreds of milliseconds per call at
 * production cost. The `*_blocking` methods move the work onto Tokio's
 * blocking pool so request tasks keep running. Once a hash has started it
 * runs to completion even if the request that asked for it is dropped.
 */
use std::sync::Arc;

use thiserror::Error;

/// bcrypt only reads the first 72 bytes of its input
pub const MAX_PASSWORD_BYTES: usize = 72;

const DECOY_PASSWORD: &str = "decoy-password-for-unknown-accounts";

/// Password hashing errors
#[derive(Debug, Error)]
pub enum PasswordError {
    /// Input is longer than bcrypt can hash without truncating it
    #[error("password exceeds {MAX_PASSWORD_BYTES} bytes")]
    TooLong,

    /// Stored hash is not a valid bcrypt string
    #[error("stored password hash is malformed: {reason}")]
    MalformedHash { reason: String },

    /// bcrypt rejected the hashing request (bad cost, RNG failure)
    #[error("password hashing failed: {0}")]
    Hashing(#[source] bcrypt::BcryptError),

    /// The blocking task panicked or was cancelled
    #[error("password hashing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// bcrypt password hasher
///
/// Cheap to clone; clones share the decoy hash.
#[derive(Clone)]
pub struct PasswordHasher {
    cost: u32,
    decoy: Arc<str>,
}

impl std::fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHasher").field("cost", &self.cost).finish()
    }
}

impl PasswordHasher {
    /// Create a hasher with the given bcrypt cost
    ///
    /// Computes one decoy hash at the requested cost, which also validates
    /// the cost.
    ///
    /// # Errors
    ///
    /// Returns `PasswordError::Hashing` if the cost is outside 4..=31.
    pub fn new(cost: u32) -> Result<Self, PasswordError> {
        let decoy = bcrypt::hash(DECOY_PASSWORD, cost).map_err(PasswordError::Hashing)?;
        Ok(Self {
            cost,
            decoy: decoy.into(),
        })
    }

    /// bcrypt cost factor
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a password for storage
    pub fn hash(&self, password: &str) -> Result<Vec<u8>, PasswordError> {
        if password.len() > MAX_PASSWORD_BYTES {
            return Err(PasswordError::TooLong);
        }

        let hash = bcrypt::hash(password, self.cost).map_err(PasswordError::Hashing)?;
        Ok(hash.into_bytes())
    }

    /// Check a password against a stored hash
    ///
    /// Returns `Ok(false)` on mismatch and `Err(MalformedHash)` when the
    /// stored hash cannot be parsed.
    pub fn verify(&self, hash: &[u8], password: &str) -> Result<bool, PasswordError> {
        let hash = std::str::from_utf8(hash).map_err(|e| PasswordError::MalformedHash {
            reason: e.to_string(),
        })?;

        // Never matches, but still costs one full verification
        if password.len() > MAX_PASSWORD_BYTES {
            let prefix = &password.as_bytes()[..MAX_PASSWORD_BYTES];
            bcrypt::verify(prefix, hash).map_err(|e| PasswordError::MalformedHash {
                reason: e.to_string(),
            })?;
            return Ok(false);
        }

        bcrypt::verify(password, hash).map_err(|e| PasswordError::MalformedHash {
            reason: e.to_string(),
        })
    }

    /// Spend one verification's worth of work against the decoy hash
    ///
    /// Used when the account does not exist, so that path costs the same
    /// as a wrong password.
    pub fn verify_decoy(&self, password: &str) {
        let _ = bcrypt::verify(password, &self.decoy);
    }

    /// `hash` on the blocking pool
    pub async fn hash_blocking(&self, password: String) -> Result<Vec<u8>, PasswordError> {
        let hasher = self.clone();
        tokio::task::spawn_blocking(move || hasher.hash(&password)).await?
    }

    /// `verify` on the blocking pool
    pub async fn verify_blocking(
        &self,
        hash: Vec<u8>,
        password: String,
    ) -> Result<bool, PasswordError> {
        let hasher = self.clone();
        tokio::task::spawn_blocking(move || hasher.verify(&hash, &password)).await?
    }

    /// `verify_decoy` on the blocking pool
    pub async fn verify_decoy_blocking(&self, password: String) {
        let hasher = self.clone();
        if let Err(e) = tokio::task::spawn_blocking(move || hasher.verify_decoy(&password)).await {
            tracing::debug!(error = %e, "decoy verification task failed");
        }
    }
}
