//! Bearer token issuing and validation.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::server::{
    error::auth::AuthError,
    model::auth::{Claims, Role},
};

/// Signs and verifies HS256 tokens for a single issuer.
///
/// Cheap to clone; the keys are derived once from the shared secret.
#[derive(Clone)]
pub struct TokenService {
    issuer: String,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenService {
    pub fn new(secret: &str, issuer: impl Into<String>) -> Self {
        Self {
            issuer: issuer.into(),
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issues a token for `subject` carrying `roles`, valid for `ttl`.
    pub fn issue(&self, subject: &str, roles: &[Role], ttl: Duration) -> Result<String, AuthError> {
        let now = Utc::now();

        let claims = Claims {
            sub: subject.to_string(),
            roles: roles.to_vec(),
            iss: self.issuer.clone(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(AuthError::TokenIssue)
    }

    /// Verifies signature, issuer and expiry of `token` and returns its claims.
    pub fn validate(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);

        let data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(AuthError::InvalidToken)?;

        Ok(data.claims)
    }
}
