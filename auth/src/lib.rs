//! Authentication core for the NEONHIRE job board
//!
//! Provides the pieces the web layer calls into:
//! - Password hashing (bcrypt, optionally over a SHA-256 prehash)
//! - Signed, time-limited bearer tokens (HS256 JWT)
//! - Authentication coordination (register, login, bearer header resolution)
//!
//! Routing, persistence and page rendering stay with the caller. Stored hashes
//! and tokens are opaque strings that can be persisted or transmitted verbatim.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use neonhire_auth::{BcryptHasher, CredentialHasher};
//!
//! let hasher = BcryptHasher::new(4);
//! let hash = hasher.hash("correct horse").unwrap();
//! assert!(hasher.verify("correct horse", &hash));
//! assert!(!hasher.verify("wrong horse", &hash));
//! ```
//!
//! ## Access Tokens
//! ```
//! use neonhire_auth::TokenService;
//!
//! let service = TokenService::with_secret(b"secret_key_at_least_32_bytes_long!");
//! let token = service.issue("alice@example.com").unwrap();
//! assert_eq!(service.parse(&token).unwrap(), "alice@example.com");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use neonhire_auth::{Authenticator, PasswordHasher, PasswordScheme, TokenService};
//!
//! let auth = Authenticator::with_hasher(
//!     PasswordHasher::new(PasswordScheme::Bcrypt, 4),
//!     TokenService::with_secret(b"secret_key_at_least_32_bytes_long!"),
//! );
//!
//! // Register: validate length and hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue token
//! let result = auth
//!     .authenticate("password123", Some(&hash), "alice@example.com")
//!     .unwrap();
//!
//! // Later request: resolve the subject from the Authorization header
//! let header = format!("Bearer {}", result.access_token);
//! assert_eq!(auth.authorize(&header).unwrap(), "alice@example.com");
//! ```

pub mod authenticator;
pub mod config;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use config::AuthConfig;
pub use password::is_password_too_long;
pub use password::BcryptHasher;
pub use password::CredentialHasher;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use password::PasswordScheme;
pub use password::Sha256BcryptHasher;
pub use password::BCRYPT_MAX_PASSWORD_BYTES;
pub use token::TokenError;
pub use token::TokenService;
