use crate::{ConfigError, ConfigErrorResult, DEFAULT_TOKEN_TTL_DAYS, MIN_JWT_SECRET_BYTES};

use serde::Deserialize;

/// Token signing configuration.
///
/// Unlike a pure gateway, this service issues tokens at login, so the signing
/// secret is mandatory and symmetric (HS256).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub jwt_secret: Option<String>,
    /// Lifetime of tokens issued at login, in days
    pub token_ttl_days: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_days: DEFAULT_TOKEN_TTL_DAYS,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match self.jwt_secret {
            None => Err(ConfigError::auth(
                "auth.jwt_secret is required (set it in config.toml or BCARD_JWT_SECRET)",
            )),
            Some(ref secret) if secret.len() < MIN_JWT_SECRET_BYTES => Err(ConfigError::auth(
                format!(
                    "auth.jwt_secret must be at least {} bytes, got {}",
                    MIN_JWT_SECRET_BYTES,
                    secret.len()
                ),
            )),
            Some(_) => {
                if self.token_ttl_days < 1 {
                    return Err(ConfigError::auth(format!(
                        "auth.token_ttl_days must be at least 1, got {}",
                        self.token_ttl_days
                    )));
                }
                Ok(())
            }
        }
    }
}
