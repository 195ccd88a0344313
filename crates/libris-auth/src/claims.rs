//! JWT claims and the principal derived from them.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::user_type::UserType;

/// JWT claims for access tokens.
///
/// `user_type` is kept as the raw string from the token. Converting it to a
/// [`UserType`] happens at the role gate, where an unknown value is reported
/// as a denied authorization rather than as a failed authentication.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// User ID (subject claim)
    pub sub: String,
    /// Role name, `LIBRARIAN` or `STUDENT`
    pub user_type: String,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}

/// The authenticated identity a request runs as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Principal {
    pub id: String,
    pub user_type: UserType,
}

impl TryFrom<&Claims> for Principal {
    type Error = anyhow::Error;

    fn try_from(claims: &Claims) -> Result<Self, Self::Error> {
        Ok(Principal {
            id: claims.sub.clone(),
            user_type: claims.user_type.parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(user_type: &str) -> Claims {
        Claims {
            sub: "user-id-123".to_string(),
            user_type: user_type.to_string(),
            exp: 9999999999,
            iat: 1234567890,
        }
    }

    #[test]
    fn test_claims_deserialize() {
        let json = r#"{"sub":"user-id-456","user_type":"STUDENT","exp":9999999999,"iat":9999999900}"#;
        let claims: Claims = serde_json::from_str(json).unwrap();
        assert_eq!(claims.sub, "user-id-456");
        assert_eq!(claims.user_type, "STUDENT");
        assert_eq!(claims.exp, 9999999999);
    }

    #[test]
    fn test_principal_from_claims() {
        let principal = Principal::try_from(&claims("LIBRARIAN")).unwrap();
        assert_eq!(principal.id, "user-id-123");
        assert_eq!(principal.user_type, UserType::Librarian);
    }

    #[test]
    fn test_principal_from_unknown_user_type() {
        let err = Principal::try_from(&claims("JANITOR")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid user type: JANITOR");
    }
}
