/**
 * Password Hashing
 *
 * bcrypt hashing and verification for user passwords. Every hash carries its
 * own random salt, so hashing the same password twice gives different strings.
 *
 * bcrypt reads at most 72 bytes including a trailing NUL, so the longest
 * accepted password is 71 bytes. Longer passwords are rejected instead of
 * being silently truncated.
 */

use thiserror::Error;

/// Lowest work factor bcrypt accepts; keeps tests fast
pub const MIN_COST: u32 = 4;

/// Longest password, in bytes, that can be hashed without truncation
pub const MAX_PASSWORD_BYTES: usize = 71;

/// Hashing failed (input too long, or an internal bcrypt error)
#[derive(Debug, Error)]
#[error("password hashing failed: {0}")]
pub struct HashError(#[from] bcrypt::BcryptError);

/// bcrypt hasher with a fixed work factor
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher {
    /// Create a hasher with the given bcrypt cost
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plaintext password with a fresh salt
    pub fn hash(&self, password: &str) -> Result<String, HashError> {
        Ok(bcrypt::non_truncating_hash(password, self.cost)?)
    }

    /// Check a plaintext password against a stored hash
    ///
    /// Returns `false` for a mismatch, a malformed hash, or a password bcrypt
    /// cannot represent.
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        match bcrypt::non_truncating_verify(password, hash) {
            Ok(valid) => valid,
            Err(e) => {
                tracing::debug!("Password verification error: {:?}", e);
                false
            }
        }
    }
}
