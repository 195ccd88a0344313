//! Persistence port for books.
//!
//! [`BookStore`] is the contract the handlers depend on. Adapters:
//!
//! - [`PgBookStore`]: PostgreSQL through sqlx
//! - [`MemoryBookStore`]: process-local, used for tests and `LIBRIS_STORE=memory`
//!
//! Every method is one atomic store call. Faults are returned as
//! [`anyhow::Error`] and translated into HTTP errors by the caller.

use async_trait::async_trait;
use uuid::Uuid;
use validator::Validate;

use crate::modules::books::model::{Book, BookChanges, NewBook};
use crate::validator::format_errors;

pub mod memory;
pub mod postgres;

pub use memory::MemoryBookStore;
pub use postgres::PgBookStore;

#[async_trait]
pub trait BookStore: Send + Sync {
    /// All books in store-native order.
    async fn find_all(&self) -> anyhow::Result<Vec<Book>>;

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Book>>;

    /// Stores a new book and returns it with its assigned key.
    async fn create(&self, book: NewBook) -> anyhow::Result<Book>;

    /// Applies `changes` and returns the updated record, or `None` when no
    /// book has this key.
    async fn update_by_id(&self, id: Uuid, changes: BookChanges) -> anyhow::Result<Option<Book>>;

    /// Removes the book and returns it, or `None` when no book has this key.
    async fn delete_by_id(&self, id: Uuid) -> anyhow::Result<Option<Book>>;
}

/// Enforces the book schema rules shared by every adapter.
pub(crate) fn check_schema<T: Validate>(value: &T) -> anyhow::Result<()> {
    value
        .validate()
        .map_err(|errors| anyhow::anyhow!("Book validation failed: {}", format_errors(&errors)))
}
