use std::sync::Arc;
use std::sync::OnceLock;

use chrono::Duration;
use thiserror::Error;

use crate::config::AuthConfig;
use crate::password::CredentialHasher;
use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::password::BCRYPT_MAX_PASSWORD_BYTES;
use crate::token::bearer_token;
use crate::token::TokenError;
use crate::token::TokenService;

/// Authentication coordinator combining password verification and token issuance.
///
/// Generic over the hashing strategy so services can swap in their own
/// [`CredentialHasher`]; deployments normally use [`PasswordHasher`].
pub struct Authenticator<H = PasswordHasher> {
    password_hasher: Arc<H>,
    token_service: TokenService,
    dummy_hash: Arc<OnceLock<Option<String>>>,
}

/// Plaintext behind the hash verified when no account matched.
const DUMMY_PASSWORD: &str = "neonhire-unknown-account";

/// Result of successful authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticationResult {
    /// Signed access token
    pub access_token: String,
    /// Always "bearer"
    pub token_type: &'static str,
}

/// Authentication operation errors.
#[derive(Debug, Error)]
pub enum AuthenticationError {
    #[error("Password must be at most {0} bytes / Пароль должен быть не длиннее {0} байт.")]
    PasswordTooLong(usize),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Unauthorized")]
    InvalidToken,

    #[error("Password error: {0}")]
    PasswordError(PasswordError),

    #[error("Token error: {0}")]
    TokenError(TokenError),

    #[error("Password hashing task failed: {0}")]
    TaskFailed(String),

    #[error("Invalid authentication configuration: {0}")]
    InvalidConfiguration(String),
}

impl From<PasswordError> for AuthenticationError {
    fn from(error: PasswordError) -> Self {
        match error {
            PasswordError::TooLong { max, .. } => Self::PasswordTooLong(max),
            other => Self::PasswordError(other),
        }
    }
}

impl From<TokenError> for AuthenticationError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::Invalid => Self::InvalidToken,
            other => Self::TokenError(other),
        }
    }
}

impl Authenticator<PasswordHasher> {
    /// Create an authenticator from loaded configuration.
    ///
    /// # Errors
    /// * `InvalidConfiguration` - Token validity does not fit a duration
    pub fn new(config: &AuthConfig) -> Result<Self, AuthenticationError> {
        let validity = Duration::try_hours(config.jwt.expiration_hours).ok_or_else(|| {
            AuthenticationError::InvalidConfiguration(format!(
                "jwt.expiration_hours out of range: {}",
                config.jwt.expiration_hours
            ))
        })?;

        Ok(Self::with_hasher(
            PasswordHasher::new(config.password.scheme, config.password.bcrypt_cost),
            TokenService::new(config.jwt.secret.as_bytes(), validity),
        ))
    }
}

impl<H> Authenticator<H>
where
    H: CredentialHasher + 'static,
{
    /// Create an authenticator from its parts.
    pub fn with_hasher(password_hasher: H, token_service: TokenService) -> Self {
        Self {
            password_hasher: Arc::new(password_hasher),
            token_service,
            dummy_hash: Arc::new(OnceLock::new()),
        }
    }

    /// Reject passwords the hashing strategy cannot accept.
    ///
    /// Runs before any hashing work so the caller can report the problem.
    ///
    /// # Errors
    /// * `PasswordTooLong` - Password exceeds the strategy's input limit
    pub fn validate_password(&self, password: &str) -> Result<(), AuthenticationError> {
        if self.password_hasher.is_too_long(password) {
            tracing::debug!(
                password_bytes = password.len(),
                "Password rejected before hashing: too long"
            );
            return Err(AuthenticationError::PasswordTooLong(BCRYPT_MAX_PASSWORD_BYTES));
        }

        Ok(())
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordTooLong` - Password exceeds the strategy's input limit
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, AuthenticationError> {
        self.validate_password(password)?;

        Ok(self.password_hasher.hash(password)?)
    }

    /// Verify credentials and issue an access token.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored hash of the account, `None` if no account matched
    /// * `subject` - Identifier to bind the token to
    ///
    /// An unknown account still pays for one verification so that it answers
    /// in the same time as a wrong password.
    ///
    /// # Errors
    /// * `PasswordTooLong` - Password exceeds the strategy's input limit
    /// * `InvalidCredentials` - Unknown account or wrong password
    /// * `TokenError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: Option<&str>,
        subject: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        self.validate_password(password)?;

        let is_valid = verify_credentials(
            self.password_hasher.as_ref(),
            &self.dummy_hash,
            password,
            stored_hash,
        );

        self.complete_authentication(is_valid, subject)
    }

    /// Issue an access token without password verification.
    ///
    /// # Errors
    /// * `TokenError` - Subject is empty or encoding failed
    pub fn generate_token(&self, subject: &str) -> Result<String, AuthenticationError> {
        Ok(self.token_service.issue(subject)?)
    }

    /// Validate an access token and return its subject.
    ///
    /// # Errors
    /// * `InvalidToken` - Token is invalid, expired, or has no subject
    pub fn validate_token(&self, token: &str) -> Result<String, AuthenticationError> {
        Ok(self.token_service.parse(token)?)
    }

    /// Resolve the subject from an `Authorization: Bearer <token>` header value.
    ///
    /// # Errors
    /// * `InvalidToken` - Header is malformed or the token does not validate
    pub fn authorize(&self, authorization: &str) -> Result<String, AuthenticationError> {
        let token = bearer_token(authorization)?;

        self.validate_token(token)
    }

    /// Hash a password on the blocking thread pool.
    ///
    /// Same contract as [`Self::hash_password`].
    pub async fn hash_password_async(
        &self,
        password: String,
    ) -> Result<String, AuthenticationError> {
        self.validate_password(&password)?;

        let hasher = Arc::clone(&self.password_hasher);
        let hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AuthenticationError::TaskFailed(e.to_string()))??;

        Ok(hash)
    }

    /// Verify credentials on the blocking thread pool and issue an access token.
    ///
    /// Same contract as [`Self::authenticate`].
    pub async fn authenticate_async(
        &self,
        password: String,
        stored_hash: Option<String>,
        subject: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        self.validate_password(&password)?;

        let hasher = Arc::clone(&self.password_hasher);
        let dummy_hash = Arc::clone(&self.dummy_hash);
        let is_valid = tokio::task::spawn_blocking(move || {
            verify_credentials(
                hasher.as_ref(),
                &dummy_hash,
                &password,
                stored_hash.as_deref(),
            )
        })
        .await
        .map_err(|e| AuthenticationError::TaskFailed(e.to_string()))?;

        self.complete_authentication(is_valid, subject)
    }

    fn complete_authentication(
        &self,
        is_valid: bool,
        subject: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !is_valid {
            tracing::info!("Authentication failed: invalid credentials");
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.token_service.issue(subject)?;

        Ok(AuthenticationResult {
            access_token,
            token_type: "bearer",
        })
    }
}

/// Verify `password` against the account's hash, or against a dummy hash when
/// no account matched. The dummy result is discarded.
fn verify_credentials<H>(
    hasher: &H,
    dummy_hash: &OnceLock<Option<String>>,
    password: &str,
    stored_hash: Option<&str>,
) -> bool
where
    H: CredentialHasher + ?Sized,
{
    match stored_hash {
        Some(hash) => hasher.verify(password, hash),
        None => {
            let dummy = dummy_hash.get_or_init(|| match hasher.hash(DUMMY_PASSWORD) {
                Ok(hash) => Some(hash),
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to prepare dummy password hash");
                    None
                }
            });
            hasher.verify(password, dummy.as_deref().unwrap_or_default());
            false
        }
    }
}
