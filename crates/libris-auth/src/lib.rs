//! # Libris Auth
//!
//! Identity types and JWT utilities for the Libris API.
//!
//! - [`user_type`]: the closed set of roles a principal can hold
//! - [`claims`]: the JWT payload and the [`Principal`] derived from it
//! - [`jwt`]: token creation and verification
//!
//! Token minting is not exposed over HTTP; [`create_access_token`] exists for
//! tests and operator tooling.
//!
//! # Example
//!
//! ```ignore
//! use libris_auth::{UserType, create_access_token, verify_token};
//! use libris_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token("user-1", UserType::Librarian, &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.user_type, "LIBRARIAN");
//! ```

pub mod claims;
pub mod jwt;
pub mod user_type;

pub use claims::{Claims, Principal};
pub use jwt::{create_access_token, encode_claims, verify_token};
pub use user_type::UserType;
