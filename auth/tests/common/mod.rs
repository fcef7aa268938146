#![allow(dead_code)]

use std::sync::Once;

use neonhire_auth::config::JwtConfig;
use neonhire_auth::config::PasswordConfig;
use neonhire_auth::AuthConfig;
use neonhire_auth::Authenticator;
use neonhire_auth::PasswordScheme;

pub const TEST_SECRET: &str = "test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Cheapest cost bcrypt accepts, keeps the suite fast
pub const TEST_COST: u32 = 4;

static TRACING: Once = Once::new();

/// Install a tracing subscriber once per test binary, honouring RUST_LOG
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "neonhire_auth=debug".into()),
            )
            .with_test_writer()
            .try_init();
    });
}

pub fn test_config(scheme: PasswordScheme) -> AuthConfig {
    AuthConfig {
        jwt: JwtConfig {
            secret: TEST_SECRET.to_string(),
            expiration_hours: 24,
        },
        password: PasswordConfig {
            scheme,
            bcrypt_cost: TEST_COST,
        },
    }
}

pub fn test_authenticator(scheme: PasswordScheme) -> Authenticator {
    Authenticator::new(&test_config(scheme)).expect("Failed to build authenticator")
}
