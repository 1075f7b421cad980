//! JWT (JSON Web Token) utilities for authentication.

use crate::types::{AuthError, AuthResult};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String, // Subject
    pub exp: usize,  // Expiration time
    pub iat: usize,  // Issued at
    pub nbf: usize,  // Not before
    pub iss: String, // Issuer
    pub aud: String, // Audience
    pub jti: String, // JWT ID
}

/// Issues and validates HS256 bearer tokens against a fixed
/// issuer/audience pair. Validation checks signature, issuer, audience,
/// and expiry; any single failure rejects the token.
pub struct TokenManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    audience: String,
    token_duration: Duration,
}

impl TokenManager {
    /// Create a new token manager
    pub fn new(secret: &str, issuer: String, audience: String) -> Self {
        let encoding_key = EncodingKey::from_secret(secret.as_ref());
        let decoding_key = DecodingKey::from_secret(secret.as_ref());

        Self {
            encoding_key,
            decoding_key,
            issuer,
            audience,
            token_duration: Duration::from_secs(24 * 60 * 60),
        }
    }

    /// Set custom token duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.token_duration = duration;
        self
    }

    /// Issue a new token for the given subject.
    pub fn issue(&self, subject: &str) -> AuthResult<String> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| AuthError::TokenCreationFailed("System time error".to_string()))?;

        let exp = now + self.token_duration;

        let claims = Claims {
            sub: subject.to_string(),
            exp: exp.as_secs() as usize,
            iat: now.as_secs() as usize,
            nbf: now.as_secs() as usize,
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            jti: uuid::Uuid::new_v4().to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AuthError::TokenCreationFailed("Failed to encode token".to_string()))
    }

    /// Validate and decode a token
    pub fn validate(&self, token: &str) -> AuthResult<Claims> {
        let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|err| AuthError::InvalidToken(format!("Token validation failed: {}", err)))?;

        Ok(token_data.claims)
    }
}
