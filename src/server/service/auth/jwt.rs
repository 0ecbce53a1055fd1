//! Access-token signing and validation, and refresh-token generation.
//!
//! Access tokens are HS256-signed JWTs carrying a [`Claims`] payload. Refresh tokens
//! are opaque random strings; only their SHA-256 hash is persisted.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand::Rng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Claims embedded in every access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject, the user's database id.
    pub sub: i32,
    /// Staff flag at the time the token was issued.
    pub is_staff: bool,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token identifier (UUID v4).
    pub jti: String,
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    pub access_token_expiry_mins: i64,
    pub refresh_token_expiry_days: i64,
}

/// Signs an access token for the given user.
pub fn generate_access_token(
    user_id: i32,
    is_staff: bool,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();

    let claims = Claims {
        sub: user_id,
        is_staff,
        exp: now + config.access_token_expiry_mins * 60,
        iat: now,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validates signature and expiry of an access token and returns its claims.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(token_data.claims)
}

/// Generates a random refresh token.
///
/// # Returns
/// - `(plaintext, sha256_hex)` - The plaintext goes to the client, only the hash is stored
pub fn generate_refresh_token() -> (String, String) {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                             abcdefghijklmnopqrstuvwxyz\
                             0123456789";
    const TOKEN_LENGTH: usize = 48;

    let mut rng = rand::rng();

    let plaintext: String = (0..TOKEN_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect();
    let hash = hash_refresh_token(&plaintext);

    (plaintext, hash)
}

/// Computes the SHA-256 hex digest of a refresh token.
pub fn hash_refresh_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 5,
            refresh_token_expiry_days: 1,
        }
    }

    #[test]
    fn signs_and_validates_access_token() {
        let config = test_config();
        let token = generate_access_token(42, true, &config).unwrap();

        let claims = validate_token(&token, &config).unwrap();

        assert_eq!(claims.sub, 42);
        assert!(claims.is_staff);
        assert_eq!(claims.exp - claims.iat, 300);
        assert!(!claims.jti.is_empty());
    }

    #[test]
    fn rejects_expired_token() {
        let config = test_config();
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: 1,
            is_staff: false,
            exp: now - 300,
            iat: now - 600,
            jti: Uuid::new_v4().to_string(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .unwrap();

        assert!(validate_token(&token, &config).is_err());
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let token = generate_access_token(1, false, &test_config()).unwrap();
        let other = JwtConfig {
            secret: "another-secret".to_string(),
            ..test_config()
        };

        assert!(validate_token(&token, &other).is_err());
    }

    #[test]
    fn refresh_token_hash_is_stable() {
        let (plaintext, hash) = generate_refresh_token();

        assert_eq!(plaintext.len(), 48);
        assert_eq!(hash, hash_refresh_token(&plaintext));
        assert_eq!(hash.len(), 64);
    }
}
