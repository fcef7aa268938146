use super::errors::PasswordError;
use super::is_password_too_long;
use super::password_length_bytes;
use super::CredentialHasher;
use super::BCRYPT_MAX_PASSWORD_BYTES;

/// Bcrypt over the raw UTF-8 bytes of the password.
///
/// Input is capped at 72 bytes. Longer passwords are refused rather than
/// truncated, so callers should check [`CredentialHasher::is_too_long`] first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    /// Create a hasher with the given bcrypt cost factor.
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl CredentialHasher for BcryptHasher {
    fn hash(&self, password: &str) -> Result<String, PasswordError> {
        if self.is_too_long(password) {
            return Err(PasswordError::TooLong {
                max: BCRYPT_MAX_PASSWORD_BYTES,
                actual: password_length_bytes(password),
            });
        }

        bcrypt::hash(password.as_bytes(), self.cost)
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    fn verify(&self, password: &str, stored_hash: &str) -> bool {
        // bcrypt would silently compare only the first 72 bytes
        if self.is_too_long(password) {
            return false;
        }

        match bcrypt::verify(password.as_bytes(), stored_hash) {
            Ok(matches) => matches,
            Err(e) => {
                tracing::debug!(error = %e, "Stored hash could not be verified");
                false
            }
        }
    }

    fn is_too_long(&self, password: &str) -> bool {
        is_password_too_long(password)
    }
}
