use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

use crate::password::PasswordScheme;
use crate::password::BCRYPT_MAX_COST;
use crate::password::BCRYPT_MIN_COST;
use crate::token::DEFAULT_TOKEN_VALIDITY_HOURS;
use crate::token::MAX_TOKEN_VALIDITY_HOURS;

/// Signing secret used outside production when none is configured.
///
/// It is public, so tokens signed with it prove nothing.
pub const DEFAULT_SECRET_KEY: &str = "neonhire-clean-secret-key";

const PRODUCTION_RUN_MODE: &str = "production";

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub jwt: JwtConfig,
    pub password: PasswordConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_hours: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PasswordConfig {
    pub scheme: PasswordScheme,
    pub bcrypt_cost: u32,
}

impl AuthConfig {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. SECRET_KEY environment variable (signing secret only)
    /// 2. Environment variables (AUTH__JWT__SECRET, AUTH__PASSWORD__SCHEME, etc.)
    /// 3. Environment-specific config file (config/{environment}.toml)
    /// 4. Default config file (config/default.toml)
    /// 5. Built-in defaults
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        Self::load_for(&run_mode, env::var("SECRET_KEY").ok())
    }

    /// Load configuration for `run_mode`, with an explicit signing secret override.
    ///
    /// Outside production a missing secret falls back to [`DEFAULT_SECRET_KEY`].
    /// In production the secret must be supplied and must differ from it.
    pub fn load_for(run_mode: &str, secret_key: Option<String>) -> Result<Self, ConfigError> {
        let production = run_mode == PRODUCTION_RUN_MODE;

        let mut builder = ConfigBuilder::builder()
            .set_default("jwt.expiration_hours", DEFAULT_TOKEN_VALIDITY_HOURS)?
            .set_default("password.scheme", "bcrypt")?
            .set_default("password.bcrypt_cost", i64::from(bcrypt::DEFAULT_COST))?;

        if !production {
            builder = builder.set_default("jwt.secret", DEFAULT_SECRET_KEY)?;
        }

        let configuration = builder
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: AUTH__PASSWORD__SCHEME=sha256_bcrypt overrides password.scheme
            .add_source(
                Environment::with_prefix("AUTH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("jwt.secret", secret_key)?
            .build()?;

        if production && configuration.get_string("jwt.secret").is_err() {
            return Err(ConfigError::Message(
                "SECRET_KEY must be set in production".to_string(),
            ));
        }

        let config: AuthConfig = configuration.try_deserialize()?;
        config.validate(production)?;

        if config.jwt.secret == DEFAULT_SECRET_KEY {
            tracing::warn!(
                run_mode = %run_mode,
                "Using the built-in signing secret; set SECRET_KEY before deploying"
            );
        }

        tracing::info!(
            run_mode = %run_mode,
            password_scheme = ?config.password.scheme,
            bcrypt_cost = config.password.bcrypt_cost,
            expiration_hours = config.jwt.expiration_hours,
            "Authentication configuration loaded"
        );

        Ok(config)
    }

    fn validate(&self, production: bool) -> Result<(), ConfigError> {
        if self.jwt.secret.is_empty() {
            return Err(ConfigError::Message(
                "jwt.secret must not be empty".to_string(),
            ));
        }

        if production && self.jwt.secret == DEFAULT_SECRET_KEY {
            return Err(ConfigError::Message(
                "The built-in signing secret must not be used in production".to_string(),
            ));
        }

        if !(1..=MAX_TOKEN_VALIDITY_HOURS).contains(&self.jwt.expiration_hours) {
            return Err(ConfigError::Message(format!(
                "jwt.expiration_hours must be between 1 and {}, got {}",
                MAX_TOKEN_VALIDITY_HOURS, self.jwt.expiration_hours
            )));
        }

        if !(BCRYPT_MIN_COST..=BCRYPT_MAX_COST).contains(&self.password.bcrypt_cost) {
            return Err(ConfigError::Message(format!(
                "password.bcrypt_cost must be between {} and {}, got {}",
                BCRYPT_MIN_COST,
                BCRYPT_MAX_COST,
                self.password.bcrypt_cost
            )));
        }

        Ok(())
    }
}
