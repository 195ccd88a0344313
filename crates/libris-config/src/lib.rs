//! # Libris Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`jwt`]: token verification settings
//! - [`cors`]: allowed browser origins
//! - [`server`]: listen address
//! - [`store`]: which book store backend to run against
//!
//! Every loader falls back to a development default when its variable is
//! unset or unparsable.
//!
//! # Example
//!
//! ```ignore
//! use libris_config::{CorsConfig, JwtConfig, ServerConfig, StoreConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod cors;
pub mod jwt;
pub mod server;
pub mod store;

pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;
pub use store::{StoreBackend, StoreConfig};
