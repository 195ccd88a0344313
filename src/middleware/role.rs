//! Role gate for Axum handlers.
//!
//! [`authorize`] is the decision function. The [`RequireLibrarian`] and
//! [`RequireStudent`] extractors run the authenticator, then the gate, and
//! hand the resulting [`Principal`] to the handler.

use axum::{extract::FromRequestParts, http::request::Parts};
use libris_auth::{Principal, UserType};
use libris_core::AppError;

use crate::middleware::auth::{AuthUser, MaybeAuthUser};
use crate::state::AppState;

pub const AUTHENTICATION_REQUIRED_MESSAGE: &str = "Authentication required";

/// Decides whether `auth_user` may proceed to an operation requiring
/// `required`.
///
/// First match wins:
/// 1. no principal: 401
/// 2. any user type other than `required`, including one this service does
///    not recognise: 403
pub fn authorize(auth_user: Option<&AuthUser>, required: UserType) -> Result<Principal, AppError> {
    let Some(auth_user) = auth_user else {
        return Err(AppError::unauthorized(anyhow::anyhow!(
            AUTHENTICATION_REQUIRED_MESSAGE
        )));
    };

    let Some(principal) = auth_user.principal() else {
        tracing::warn!(
            user_id = %auth_user.user_id(),
            user_type = %auth_user.0.user_type,
            "Unrecognised user type in token"
        );
        return Err(access_denied(required));
    };

    if principal.user_type != required {
        return Err(access_denied(required));
    }

    Ok(principal)
}

fn access_denied(required: UserType) -> AppError {
    AppError::forbidden(anyhow::anyhow!(
        "Access denied. {} privileges required.",
        required.display_name()
    ))
}

/// Defines an extractor that only admits principals of one user type.
macro_rules! require_user_type {
    ($name:ident, $user_type:expr) => {
        #[derive(Debug, Clone)]
        pub struct $name(pub Principal);

        impl FromRequestParts<AppState> for $name {
            type Rejection = AppError;

            async fn from_request_parts(
                parts: &mut Parts,
                state: &AppState,
            ) -> Result<Self, Self::Rejection> {
                let MaybeAuthUser(auth_user) =
                    MaybeAuthUser::from_request_parts(parts, state).await?;

                let decision = authorize(auth_user.as_ref(), $user_type);
                crate::metrics::track_authorization_check(
                    decision.is_ok(),
                    $user_type.as_str(),
                );

                Ok($name(decision?))
            }
        }
    };
}

require_user_type!(RequireLibrarian, UserType::Librarian);
require_user_type!(RequireStudent, UserType::Student);
