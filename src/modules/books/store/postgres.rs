use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use super::{BookStore, check_schema};
use crate::modules::books::model::{Book, BookChanges, NewBook};

const BOOK_COLUMNS: &str = "id, title, author, isbn, publisher, published_year, genre, \
                            description, quantity, created_at, updated_at";

/// PostgreSQL-backed book store. Native ordering is creation time.
#[derive(Debug, Clone)]
pub struct PgBookStore {
    db: PgPool,
}

impl PgBookStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

/// Rewrites check-constraint violations into the schema message the
/// in-memory store produces for the same input.
fn map_db_error(e: sqlx::Error) -> anyhow::Error {
    if let sqlx::Error::Database(db_err) = &e
        && let Some(constraint) = db_err.constraint()
    {
        let message = match constraint {
            "books_title_not_empty" => Some("Title cannot be empty"),
            "books_author_not_empty" => Some("Author cannot be empty"),
            "books_quantity_not_negative" => Some("Quantity cannot be negative"),
            _ => None,
        };
        if let Some(message) = message {
            return anyhow::anyhow!("Book validation failed: {}", message);
        }
    }
    anyhow::Error::from(e)
}

#[async_trait]
impl BookStore for PgBookStore {
    #[instrument(skip(self))]
    async fn find_all(&self) -> anyhow::Result<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(&format!(
            "SELECT {BOOK_COLUMNS} FROM books ORDER BY created_at, id"
        ))
        .fetch_all(&self.db)
        .await
        .map_err(map_db_error)?;

        Ok(books)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(&format!(
            "SELECT {BOOK_COLUMNS} FROM books WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(map_db_error)?;

        Ok(book)
    }

    #[instrument(skip(self))]
    async fn create(&self, book: NewBook) -> anyhow::Result<Book> {
        check_schema(&book)?;

        let book = sqlx::query_as::<_, Book>(&format!(
            r#"INSERT INTO books (title, author, isbn, publisher, published_year, genre, description, quantity)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
               RETURNING {BOOK_COLUMNS}"#
        ))
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.isbn)
        .bind(&book.publisher)
        .bind(book.published_year)
        .bind(&book.genre)
        .bind(&book.description)
        .bind(book.quantity)
        .fetch_one(&self.db)
        .await
        .map_err(map_db_error)?;

        Ok(book)
    }

    #[instrument(skip(self))]
    async fn update_by_id(&self, id: Uuid, changes: BookChanges) -> anyhow::Result<Option<Book>> {
        let mut tx = self.db.begin().await?;

        // A missing record is reported before the changes are checked.
        let exists = sqlx::query_scalar::<_, Uuid>("SELECT id FROM books WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_db_error)?;
        if exists.is_none() {
            return Ok(None);
        }

        check_schema(&changes)?;

        let (set_published_year, published_year) = match changes.published_year {
            Some(year) => (true, year),
            None => (false, None),
        };

        let book = sqlx::query_as::<_, Book>(&format!(
            r#"UPDATE books SET
                   title = COALESCE($2, title),
                   author = COALESCE($3, author),
                   isbn = COALESCE($4, isbn),
                   publisher = COALESCE($5, publisher),
                   published_year = CASE WHEN $6 THEN $7 ELSE published_year END,
                   genre = COALESCE($8, genre),
                   description = COALESCE($9, description),
                   quantity = COALESCE($10, quantity),
                   updated_at = NOW()
               WHERE id = $1
               RETURNING {BOOK_COLUMNS}"#
        ))
        .bind(id)
        .bind(changes.title)
        .bind(changes.author)
        .bind(changes.isbn)
        .bind(changes.publisher)
        .bind(set_published_year)
        .bind(published_year)
        .bind(changes.genre)
        .bind(changes.description)
        .bind(changes.quantity)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await?;

        Ok(book)
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: Uuid) -> anyhow::Result<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(&format!(
            "DELETE FROM books WHERE id = $1 RETURNING {BOOK_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(map_db_error)?;

        Ok(book)
    }
}
