/// Bearer token validation
///
/// Session tokens are issued by the identity provider and signed with
/// RS256. An HS256 shared secret is accepted outside production so local
/// setups and tests can mint their own tokens.
use crate::config::AuthConfig;
use anyhow::{anyhow, Result};
use jsonwebtoken::{decode, Algorithm, DecodingKey, TokenData, Validation};
use serde::{Deserialize, Serialize};

/// Claims read from session tokens. `sub` is the caller's user id.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
    #[serde(default)]
    pub iat: Option<i64>,
}

pub struct JwtValidator {
    key: DecodingKey,
    validation: Validation,
}

impl JwtValidator {
    pub fn rs256(public_key_pem: &str) -> Result<Self> {
        let key = DecodingKey::from_rsa_pem(public_key_pem.as_bytes())
            .map_err(|e| anyhow!("Invalid JWT public key: {e}"))?;
        Ok(Self::with_key(key, Algorithm::RS256))
    }

    pub fn hs256(secret: &str) -> Self {
        Self::with_key(DecodingKey::from_secret(secret.as_bytes()), Algorithm::HS256)
    }

    /// Build the validator from configuration, preferring the RS256 key.
    /// Returns `None` when no key source is configured.
    pub fn from_config(config: &AuthConfig) -> Result<Option<Self>> {
        if let Some(pem) = &config.public_key_pem {
            return Self::rs256(pem).map(Some);
        }
        Ok(config.dev_secret.as_deref().map(Self::hs256))
    }

    fn with_key(key: DecodingKey, algorithm: Algorithm) -> Self {
        let mut validation = Validation::new(algorithm);
        validation.validate_exp = true;
        // Session tokens carry no audience claim.
        validation.validate_aud = false;
        Self { key, validation }
    }

    pub fn validate_token(&self, token: &str) -> Result<TokenData<Claims>> {
        decode::<Claims>(token, &self.key, &self.validation)
            .map_err(|e| anyhow!("Token validation failed: {e}"))
    }
}
