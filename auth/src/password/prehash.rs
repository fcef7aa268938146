use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use sha2::Digest;
use sha2::Sha256;

use super::errors::PasswordError;
use super::CredentialHasher;

/// Bcrypt over a SHA-256 digest of the password.
///
/// The digest is base64-encoded before hashing, which keeps the bcrypt input
/// at a fixed 44 NUL-free bytes whatever the password length. Hashes from this
/// strategy do not verify under [`super::BcryptHasher`] and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sha256BcryptHasher {
    cost: u32,
}

impl Sha256BcryptHasher {
    /// Create a hasher with the given bcrypt cost factor.
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    fn prehash(password: &str) -> String {
        let digest = Sha256::digest(password.as_bytes());
        STANDARD.encode(digest)
    }
}

impl Default for Sha256BcryptHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl CredentialHasher for Sha256BcryptHasher {
    fn hash(&self, password: &str) -> Result<String, PasswordError> {
        bcrypt::hash(Self::prehash(password), self.cost)
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    fn verify(&self, password: &str, stored_hash: &str) -> bool {
        match bcrypt::verify(Self::prehash(password), stored_hash) {
            Ok(matches) => matches,
            Err(e) => {
                tracing::debug!(error = %e, "Stored hash could not be verified");
                false
            }
        }
    }

    fn is_too_long(&self, _password: &str) -> bool {
        false
    }
}
