//! Signed Bearer Tokens
//!
//! HS256 JWTs whose subject is the account id. Tokens are stateless: the
//! signing secret and the expiry are all that is needed to verify them.

use std::fmt;

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use rand::RngCore;
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Token lifetime: exactly one day
pub const TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

/// Claims embedded in every token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Account id
    pub sub: Uuid,
    /// Issued-at (Unix seconds)
    pub iat: i64,
    /// Expiration (Unix seconds)
    pub exp: i64,
}

/// Token errors
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Token signing secret must not be empty")]
    EmptySecret,

    #[error("Token expired")]
    Expired,

    #[error("Token invalid")]
    Invalid,

    #[error("Token encoding failed: {0}")]
    Encoding(String),
}

/// A freshly signed token together with its claims
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub claims: Claims,
}

/// Signing and verification keys derived from the shared secret.
///
/// Built once at startup and shared behind an `Arc`.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenKeys {
    pub fn from_secret(secret: &[u8]) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::EmptySecret);
        }
        Ok(Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        })
    }

    /// Keys from a random 32-byte secret (development only; tokens die with the process)
    pub fn with_random_secret() -> Self {
        let mut secret = [0u8; 32];
        OsRng.fill_bytes(&mut secret);
        Self {
            encoding: EncodingKey::from_secret(&secret),
            decoding: DecodingKey::from_secret(&secret),
        }
    }

    /// Sign a token for `subject`, valid for [`TOKEN_TTL_SECS`].
    pub fn issue(&self, subject: Uuid) -> Result<IssuedToken, TokenError> {
        let iat = Utc::now().timestamp();
        let claims = Claims {
            sub: subject,
            iat,
            exp: iat + TOKEN_TTL_SECS,
        };

        let token = encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| TokenError::Encoding(e.to_string()))?;

        Ok(IssuedToken { token, claims })
    }

    /// Check signature and expiry, returning the claims.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                JwtErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })
    }
}

impl fmt::Debug for TokenKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenKeys")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test-secret-that-is-long-enough-for-hmac";

    fn keys() -> TokenKeys {
        TokenKeys::from_secret(SECRET).unwrap()
    }

    #[test]
    fn test_issue_embeds_subject_and_one_day_expiry() {
        let subject = Uuid::new_v4();
        let issued = keys().issue(subject).unwrap();

        // Decodable by anyone holding the shared secret
        let decoded = decode::<Claims>(
            &issued.token,
            &DecodingKey::from_secret(SECRET),
            &Validation::default(),
        )
        .unwrap()
        .claims;

        assert_eq!(decoded.sub, subject);
        assert_eq!(decoded.exp - decoded.iat, 86_400);
        assert_eq!(decoded, issued.claims);
    }

    #[test]
    fn test_verify_roundtrip() {
        let keys = keys();
        let subject = Uuid::new_v4();
        let issued = keys.issue(subject).unwrap();
        assert_eq!(keys.verify(&issued.token).unwrap().sub, subject);
    }

    #[test]
    fn test_verify_rejects_other_secret() {
        let issued = keys().issue(Uuid::new_v4()).unwrap();
        let other = TokenKeys::from_secret(b"another-secret").unwrap();
        assert!(matches!(other.verify(&issued.token), Err(TokenError::Invalid)));
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: Uuid::new_v4(),
            iat: now - 2 * TOKEN_TTL_SECS,
            exp: now - TOKEN_TTL_SECS,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        assert!(matches!(keys().verify(&token), Err(TokenError::Expired)));
    }

    #[test]
    fn test_expiry_has_no_leeway() {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: Uuid::new_v4(),
            iat: now - TOKEN_TTL_SECS - 5,
            exp: now - 5,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        assert!(matches!(keys().verify(&token), Err(TokenError::Expired)));
    }

    #[test]
    fn test_verify_rejects_garbage() {
        assert!(matches!(keys().verify("abc.def.ghi"), Err(TokenError::Invalid)));
        assert!(matches!(keys().verify(""), Err(TokenError::Invalid)));
    }

    #[test]
    fn test_empty_secret_is_refused() {
        assert!(matches!(
            TokenKeys::from_secret(b""),
            Err(TokenError::EmptySecret)
        ));
    }

    #[test]
    fn test_random_secrets_differ() {
        let issued = TokenKeys::with_random_secret()
            .issue(Uuid::new_v4())
            .unwrap();
        assert!(TokenKeys::with_random_secret().verify(&issued.token).is_err());
    }

    #[test]
    fn test_debug_redacts_secret() {
        assert!(format!("{:?}", keys()).contains("REDACTED"));
    }
}
