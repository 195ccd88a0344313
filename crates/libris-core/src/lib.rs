//! # Libris Core
//!
//! Foundational types shared by every Libris crate:
//!
//! - [`errors`]: the [`AppError`] type and its JSON rendering
//! - [`serde`]: custom deserialization helpers for request bodies
//!
//! # Example
//!
//! ```ignore
//! use libris_core::AppError;
//!
//! let error = AppError::not_found(anyhow::anyhow!("Book not found"));
//! ```

pub mod errors;
pub mod serde;

pub use errors::{AppError, ErrorResponse};
