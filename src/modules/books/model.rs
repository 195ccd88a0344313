//! Book domain models and DTOs.
//!
//! [`Book`] is the stored entity. [`CreateBookDto`] and [`BookChanges`] are the
//! request bodies for create and update; [`NewBook`] is the normalised create
//! input handed to a [`BookStore`](super::store::BookStore).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use libris_core::AppError;
use libris_core::serde::deserialize_some;

pub const REQUIRED_FIELDS_MESSAGE: &str = "Title, Author, and Quantity are required";
pub const BOOK_NOT_FOUND_MESSAGE: &str = "Book not found";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub publisher: String,
    pub published_year: Option<i32>,
    pub genre: String,
    pub description: String,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /books/add`.
///
/// Every field is optional at the type level so that a missing `title`,
/// `author` or `quantity` is reported with one message instead of a serde
/// rejection naming the first absent field.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookDto {
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub publisher: Option<String>,
    pub published_year: Option<i32>,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<i32>,
}

impl CreateBookDto {
    /// Checks the required fields and fills optional ones with their defaults.
    ///
    /// `title` and `author` count as missing when absent or empty, `quantity`
    /// only when absent. A `publishedYear` of `0` is treated as unset.
    pub fn into_new_book(self) -> Result<NewBook, AppError> {
        let (Some(title), Some(author), Some(quantity)) = (
            self.title.filter(|t| !t.is_empty()),
            self.author.filter(|a| !a.is_empty()),
            self.quantity,
        ) else {
            return Err(AppError::bad_request(anyhow::anyhow!(
                REQUIRED_FIELDS_MESSAGE
            )));
        };

        Ok(NewBook {
            title,
            author,
            isbn: self.isbn.unwrap_or_default(),
            publisher: self.publisher.unwrap_or_default(),
            published_year: self.published_year.filter(|year| *year != 0),
            genre: self.genre.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            quantity,
        })
    }
}

/// A fully defaulted book ready to be stored. The store assigns the key and
/// timestamps.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewBook {
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author cannot be empty"))]
    pub author: String,
    pub isbn: String,
    pub publisher: String,
    pub published_year: Option<i32>,
    pub genre: String,
    pub description: String,
    #[validate(range(min = 0, message = "Quantity cannot be negative"))]
    pub quantity: i32,
}

impl NewBook {
    pub fn into_book(self, id: Uuid, now: DateTime<Utc>) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            isbn: self.isbn,
            publisher: self.publisher,
            published_year: self.published_year,
            genre: self.genre,
            description: self.description,
            quantity: self.quantity,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Body of `PUT /books/{id}`: the fields a client may change.
///
/// Unknown keys are ignored, so the id and timestamps cannot be overwritten.
/// `publishedYear` is tri-state: absent leaves it alone, `null` clears it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookChanges {
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "Author cannot be empty"))]
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub publisher: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<i32>)]
    pub published_year: Option<Option<i32>>,
    pub genre: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0, message = "Quantity cannot be negative"))]
    pub quantity: Option<i32>,
}

impl BookChanges {
    pub fn apply(self, book: &mut Book, now: DateTime<Utc>) {
        if let Some(title) = self.title {
            book.title = title;
        }
        if let Some(author) = self.author {
            book.author = author;
        }
        if let Some(isbn) = self.isbn {
            book.isbn = isbn;
        }
        if let Some(publisher) = self.publisher {
            book.publisher = publisher;
        }
        if let Some(published_year) = self.published_year {
            book.published_year = published_year;
        }
        if let Some(genre) = self.genre {
            book.genre = genre;
        }
        if let Some(description) = self.description {
            book.description = description;
        }
        if let Some(quantity) = self.quantity {
            book.quantity = quantity;
        }
        book.updated_at = now;
    }
}

/// Response for create and update.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookMutationResponse {
    pub message: String,
    pub book: Book,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
