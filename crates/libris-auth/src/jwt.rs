//! JWT creation and verification.
//!
//! Tokens are HS256-signed with [`JwtConfig::secret`]. Verification checks the
//! signature and the `exp` claim.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use libris_config::JwtConfig;
use libris_core::AppError;

use crate::claims::Claims;
use crate::user_type::UserType;

/// Creates an access token for `user_id` holding `user_type`.
///
/// # Errors
///
/// Returns an internal error if the issue or expiry time cannot be expressed
/// as a claim timestamp, or if encoding fails.
pub fn create_access_token(
    user_id: &str,
    user_type: UserType,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp();
    let exp = now
        .checked_add(jwt_config.access_token_expiry)
        .ok_or_else(|| AppError::internal(anyhow::anyhow!("Token expiry overflows")))?;

    let claims = Claims {
        sub: user_id.to_string(),
        user_type: user_type.as_str().to_string(),
        exp: claim_timestamp(exp)?,
        iat: claim_timestamp(now)?,
    };

    encode_claims(&claims, jwt_config)
}

/// Claim timestamps are unsigned; a time before the Unix epoch has no encoding.
fn claim_timestamp(seconds: i64) -> Result<usize, AppError> {
    usize::try_from(seconds).map_err(|_| {
        AppError::internal(anyhow::anyhow!(
            "Timestamp {} is not a valid claim time",
            seconds
        ))
    })
}

/// Signs arbitrary claims. Useful when a caller needs a non-standard payload,
/// such as an expired token or an unknown user type.
pub fn encode_claims(claims: &Claims, jwt_config: &JwtConfig) -> Result<String, AppError> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to create token: {}", e)))
}

/// Verifies an access token and returns its claims.
///
/// # Errors
///
/// Returns 401 `Invalid or expired token` when the signature does not match,
/// the token is expired, or the payload is not a [`Claims`].
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized(anyhow::anyhow!("Invalid or expired token")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> JwtConfig {
        JwtConfig::with_secret("test-secret")
    }

    #[test]
    fn test_create_and_verify_token() {
        let token = create_access_token("user-1", UserType::Librarian, &config()).unwrap();
        let claims = verify_token(&token, &config()).unwrap();

        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.user_type, "LIBRARIAN");
        assert_eq!(claims.exp, claims.iat + 3600);
    }

    #[test]
    fn test_unrepresentable_expiry_is_internal_error() {
        let mut overflowing = config();
        overflowing.access_token_expiry = i64::MAX;
        let err = create_access_token("user-1", UserType::Librarian, &overflowing).unwrap_err();
        assert_eq!(err.status.as_u16(), 500);

        let mut before_epoch = config();
        before_epoch.access_token_expiry = i64::MIN / 2;
        let err = create_access_token("user-1", UserType::Librarian, &before_epoch).unwrap_err();
        assert_eq!(err.status.as_u16(), 500);
    }

    #[test]
    fn test_verify_with_wrong_secret() {
        let token = create_access_token("user-1", UserType::Student, &config()).unwrap();
        let err = verify_token(&token, &JwtConfig::with_secret("other")).unwrap_err();

        assert_eq!(err.status.as_u16(), 401);
        assert_eq!(err.message(), "Invalid or expired token");
    }

    #[test]
    fn test_verify_expired_token() {
        let now = usize::try_from(Utc::now().timestamp()).unwrap();
        let claims = Claims {
            sub: "user-1".to_string(),
            user_type: "LIBRARIAN".to_string(),
            exp: now - 3600,
            iat: now - 7200,
        };
        let token = encode_claims(&claims, &config()).unwrap();

        assert!(verify_token(&token, &config()).is_err());
    }

    #[test]
    fn test_verify_garbage_token() {
        assert!(verify_token("not.a.jwt", &config()).is_err());
    }

    #[test]
    fn test_unknown_user_type_still_verifies() {
        let now = usize::try_from(Utc::now().timestamp()).unwrap();
        let claims = Claims {
            sub: "user-1".to_string(),
            user_type: "JANITOR".to_string(),
            exp: now + 60,
            iat: now,
        };
        let token = encode_claims(&claims, &config()).unwrap();

        let verified = verify_token(&token, &config()).unwrap();
        assert_eq!(verified.user_type, "JANITOR");
    }
}
