use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use libris_auth::{Claims, Principal, verify_token};
use libris_core::AppError;

use crate::state::AppState;

/// A request whose bearer token verified successfully.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn user_id(&self) -> &str {
        &self.0.sub
    }

    /// Resolves the claims into a [`Principal`], or `None` when the token
    /// carries a user type this service does not know.
    pub fn principal(&self) -> Option<Principal> {
        Principal::try_from(&self.0).ok()
    }
}

/// The authenticator: `None` when no `Authorization` header was sent.
///
/// A header that is present but is not a valid bearer token is rejected with
/// 401 rather than treated as anonymous.
#[derive(Debug, Clone)]
pub struct MaybeAuthUser(pub Option<AuthUser>);

impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(auth_header) = parts.headers.get(header::AUTHORIZATION) else {
            return Ok(MaybeAuthUser(None));
        };

        let token = auth_header
            .to_str()
            .ok()
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or_else(|| AppError::unauthorized(anyhow::anyhow!("Invalid or expired token")))?;

        let claims = verify_token(token.trim(), &state.jwt_config)?;

        Ok(MaybeAuthUser(Some(AuthUser(claims))))
    }
}
