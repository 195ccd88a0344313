pub mod controller;
pub mod model;
pub mod policy;
pub mod router;
pub mod store;

pub use model::*;
pub use router::init_books_router;
pub use store::{BookStore, MemoryBookStore, PgBookStore};
