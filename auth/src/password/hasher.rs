use serde::Deserialize;

use super::direct::BcryptHasher;
use super::errors::PasswordError;
use super::prehash::Sha256BcryptHasher;
use super::CredentialHasher;

/// Hashing scheme governing a deployment.
///
/// Switching schemes makes every existing stored hash unverifiable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordScheme {
    /// Bcrypt over the raw password, limited to 72 bytes.
    #[default]
    Bcrypt,
    /// Bcrypt over a SHA-256 digest of the password, no length limit.
    Sha256Bcrypt,
}

/// Password hasher selected by [`PasswordScheme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordHasher {
    Bcrypt(BcryptHasher),
    Sha256Bcrypt(Sha256BcryptHasher),
}

impl PasswordHasher {
    /// Build the hasher for `scheme` at the given bcrypt cost.
    pub fn new(scheme: PasswordScheme, cost: u32) -> Self {
        match scheme {
            PasswordScheme::Bcrypt => Self::Bcrypt(BcryptHasher::new(cost)),
            PasswordScheme::Sha256Bcrypt => Self::Sha256Bcrypt(Sha256BcryptHasher::new(cost)),
        }
    }

    pub fn scheme(&self) -> PasswordScheme {
        match self {
            Self::Bcrypt(_) => PasswordScheme::Bcrypt,
            Self::Sha256Bcrypt(_) => PasswordScheme::Sha256Bcrypt,
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(PasswordScheme::default(), bcrypt::DEFAULT_COST)
    }
}

impl CredentialHasher for PasswordHasher {
    fn hash(&self, password: &str) -> Result<String, PasswordError> {
        match self {
            Self::Bcrypt(hasher) => hasher.hash(password),
            Self::Sha256Bcrypt(hasher) => hasher.hash(password),
        }
    }

    fn verify(&self, password: &str, stored_hash: &str) -> bool {
        match self {
            Self::Bcrypt(hasher) => hasher.verify(password, stored_hash),
            Self::Sha256Bcrypt(hasher) => hasher.verify(password, stored_hash),
        }
    }

    fn is_too_long(&self, password: &str) -> bool {
        match self {
            Self::Bcrypt(hasher) => hasher.is_too_long(password),
            Self::Sha256Bcrypt(hasher) => hasher.is_too_long(password),
        }
    }
}
