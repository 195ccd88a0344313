//! Request authentication and role gating.
//!
//! - [`auth`]: the authenticator, turning a bearer token into an optional
//!   [`AuthUser`](auth::AuthUser)
//! - [`role`]: the role gate and the `RequireLibrarian` / `RequireStudent`
//!   extractors built on it
//!
//! # Flow
//!
//! 1. Client sends `Authorization: Bearer <token>` (or nothing)
//! 2. `MaybeAuthUser` verifies the token when one is present
//! 3. The role gate checks the principal against the route's required role
//! 4. The handler runs with the resulting `Principal`
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::role::RequireLibrarian;
//!
//! async fn restock(RequireLibrarian(principal): RequireLibrarian) -> impl IntoResponse {
//!     // Only reached by librarians
//! }
//! ```

pub mod auth;
pub mod role;
