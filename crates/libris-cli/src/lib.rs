//! # Libris CLI
//!
//! Database seeding utilities for Libris testing and development.
//!
//! ## Usage
//!
//! ```ignore
//! use libris_cli::seeder::seed_books;
//!
//! seed_books(&pool, 25).await?;
//! ```

pub mod seeder;
