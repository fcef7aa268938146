use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Default lifetime of an access token.
pub const DEFAULT_TOKEN_VALIDITY_HOURS: i64 = 24;

/// Longest lifetime configuration may ask for (ten years).
pub const MAX_TOKEN_VALIDITY_HOURS: i64 = 24 * 365 * 10;

/// Issues and validates signed, time-limited access tokens.
///
/// Tokens are HS256 JWTs carrying the subject and an expiry. There is no
/// server-side state: a token stays valid until it expires or the signing
/// secret is rotated.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    validity: Duration,
}

impl TokenService {
    /// Create a token service.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens
    /// * `validity` - Lifetime of issued tokens
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Rotating the secret invalidates every outstanding token
    pub fn new(secret: &[u8], validity: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            validity,
        }
    }

    /// Create a token service with the default 24 hour validity.
    pub fn with_secret(secret: &[u8]) -> Self {
        Self::new(secret, Duration::hours(DEFAULT_TOKEN_VALIDITY_HOURS))
    }

    pub fn validity(&self) -> Duration {
        self.validity
    }

    /// Issue a token for `subject`, valid from now.
    ///
    /// # Errors
    /// * `EmptySubject` - Subject is empty
    /// * `EncodingFailed` - Expiry is out of range or token encoding failed
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        self.issue_at(subject, Utc::now())
    }

    /// Issue a token for `subject` as if the current time were `now`.
    pub fn issue_at(&self, subject: &str, now: DateTime<Utc>) -> Result<String, TokenError> {
        if subject.is_empty() {
            return Err(TokenError::EmptySubject);
        }

        let claims = Claims::for_subject(subject, now, self.validity).ok_or_else(|| {
            TokenError::EncodingFailed(format!(
                "expiry out of range for validity of {} hours",
                self.validity.num_hours()
            ))
        })?;
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Validate a token and return its subject.
    ///
    /// # Errors
    /// * `Invalid` - Signature mismatch, undecodable token, elapsed expiry, or
    ///   missing subject
    pub fn parse(&self, token: &str) -> Result<String, TokenError> {
        self.parse_at(token, Utc::now())
    }

    /// Validate a token against the clock reading `now`.
    pub fn parse_at(&self, token: &str, now: DateTime<Utc>) -> Result<String, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is checked below against `now`, with no leeway
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| {
                tracing::debug!(error = %e, "Token rejected");
                TokenError::Invalid
            })?
            .claims;

        if claims.is_expired(now.timestamp()) {
            tracing::debug!(exp = claims.exp, "Token rejected: expired");
            return Err(TokenError::Invalid);
        }

        match claims.subject() {
            Some(subject) => Ok(subject.to_string()),
            None => {
                tracing::debug!("Token rejected: missing subject");
                Err(TokenError::Invalid)
            }
        }
    }
}
