pub mod direct;
pub mod errors;
pub mod hasher;
pub mod prehash;

pub use direct::BcryptHasher;
pub use errors::PasswordError;
pub use hasher::PasswordHasher;
pub use hasher::PasswordScheme;
pub use prehash::Sha256BcryptHasher;

/// Largest input, in bytes, bcrypt consumes before truncating.
pub const BCRYPT_MAX_PASSWORD_BYTES: usize = 72;

/// Range of cost factors bcrypt accepts.
pub const BCRYPT_MIN_COST: u32 = 4;
pub const BCRYPT_MAX_COST: u32 = 31;

/// Port for credential hashing strategies.
///
/// Stored hashes are only comparable under the strategy that produced them,
/// so a deployment must pick one implementation and keep it.
pub trait CredentialHasher: Send + Sync {
    /// Hash a plaintext password with a fresh random salt.
    ///
    /// # Errors
    /// * `TooLong` - Input exceeds what the strategy accepts
    /// * `HashingFailed` - The underlying primitive rejected the input or parameters
    fn hash(&self, password: &str) -> Result<String, PasswordError>;

    /// Check a candidate password against a stored hash.
    ///
    /// Any mismatch, including a malformed or foreign hash, yields `false`.
    fn verify(&self, password: &str, stored_hash: &str) -> bool;

    /// Whether `password` must be rejected before hashing.
    fn is_too_long(&self, password: &str) -> bool;
}

/// Length of the UTF-8 encoding of `password`.
pub fn password_length_bytes(password: &str) -> usize {
    password.len()
}

/// Whether `password` exceeds the bcrypt input limit.
pub fn is_password_too_long(password: &str) -> bool {
    password_length_bytes(password) > BCRYPT_MAX_PASSWORD_BYTES
}
