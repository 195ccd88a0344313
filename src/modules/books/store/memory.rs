use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::instrument;
use uuid::Uuid;

use super::{BookStore, check_schema};
use crate::modules::books::model::{Book, BookChanges, NewBook};

/// In-process book store. Insertion order is the native ordering.
#[derive(Debug, Default)]
pub struct MemoryBookStore {
    books: RwLock<Vec<Book>>,
}

impl MemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookStore for MemoryBookStore {
    #[instrument(skip(self))]
    async fn find_all(&self) -> anyhow::Result<Vec<Book>> {
        Ok(self.books.read().await.clone())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Book>> {
        let books = self.books.read().await;
        Ok(books.iter().find(|book| book.id == id).cloned())
    }

    #[instrument(skip(self))]
    async fn create(&self, book: NewBook) -> anyhow::Result<Book> {
        check_schema(&book)?;

        let book = book.into_book(Uuid::new_v4(), Utc::now());
        self.books.write().await.push(book.clone());

        Ok(book)
    }

    #[instrument(skip(self))]
    async fn update_by_id(&self, id: Uuid, changes: BookChanges) -> anyhow::Result<Option<Book>> {
        let mut books = self.books.write().await;
        let Some(book) = books.iter_mut().find(|book| book.id == id) else {
            return Ok(None);
        };

        check_schema(&changes)?;

        changes.apply(book, Utc::now());

        Ok(Some(book.clone()))
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: Uuid) -> anyhow::Result<Option<Book>> {
        let mut books = self.books.write().await;
        let Some(index) = books.iter().position(|book| book.id == id) else {
            return Ok(None);
        };

        Ok(Some(books.remove(index)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_book(title: &str, quantity: i32) -> NewBook {
        NewBook {
            title: title.to_string(),
            author: "Author".to_string(),
            isbn: String::new(),
            publisher: String::new(),
            published_year: None,
            genre: String::new(),
            description: String::new(),
            quantity,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_distinct_ids() {
        let store = MemoryBookStore::new();
        let first = store.create(new_book("One", 1)).await.unwrap();
        let second = store.create(new_book("Two", 1)).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(store.find_by_id(first.id).await.unwrap(), Some(first));
    }

    #[tokio::test]
    async fn test_find_all_keeps_insertion_order() {
        let store = MemoryBookStore::new();
        for title in ["C", "A", "B"] {
            store.create(new_book(title, 1)).await.unwrap();
        }

        let titles: Vec<String> = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|book| book.title)
            .collect();
        assert_eq!(titles, vec!["C", "A", "B"]);
    }

    #[tokio::test]
    async fn test_create_rejects_negative_quantity() {
        let store = MemoryBookStore::new();
        let err = store.create(new_book("Bad", -1)).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "Book validation failed: Quantity cannot be negative"
        );
        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let store = MemoryBookStore::new();
        let updated = store
            .update_by_id(Uuid::new_v4(), BookChanges::default())
            .await
            .unwrap();
        assert!(updated.is_none());
    }

    #[tokio::test]
    async fn test_update_applies_changes() {
        let store = MemoryBookStore::new();
        let book = store.create(new_book("Old", 1)).await.unwrap();

        let changes = BookChanges {
            title: Some("New".to_string()),
            ..Default::default()
        };
        let updated = store.update_by_id(book.id, changes).await.unwrap().unwrap();

        assert_eq!(updated.title, "New");
        assert_eq!(updated.id, book.id);
        assert_eq!(store.find_by_id(book.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_update_invalid_changes_leave_record_untouched() {
        let store = MemoryBookStore::new();
        let book = store.create(new_book("Keep", 3)).await.unwrap();

        let changes = BookChanges {
            quantity: Some(-5),
            ..Default::default()
        };
        assert!(store.update_by_id(book.id, changes).await.is_err());
        assert_eq!(store.find_by_id(book.id).await.unwrap(), Some(book));
    }

    #[tokio::test]
    async fn test_update_missing_id_wins_over_invalid_changes() {
        let store = MemoryBookStore::new();

        let changes = BookChanges {
            quantity: Some(-5),
            ..Default::default()
        };
        assert_eq!(store.update_by_id(Uuid::new_v4(), changes).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let store = MemoryBookStore::new();
        let book = store.create(new_book("Gone", 1)).await.unwrap();

        assert_eq!(store.delete_by_id(book.id).await.unwrap(), Some(book.clone()));
        assert_eq!(store.delete_by_id(book.id).await.unwrap(), None);
        assert_eq!(store.find_by_id(book.id).await.unwrap(), None);
    }
}
