use libris::modules::books::{BookChanges, BookStore, NewBook, PgBookStore};
use sqlx::PgPool;
use uuid::Uuid;

fn new_book(title: &str) -> NewBook {
    NewBook {
        title: title.to_string(),
        author: "Octavia E. Butler".to_string(),
        isbn: String::new(),
        publisher: String::new(),
        published_year: Some(1979),
        genre: "Science Fiction".to_string(),
        description: String::new(),
        quantity: 4,
    }
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL pointing at PostgreSQL"]
async fn test_pg_store_crud(pool: PgPool) {
    let store = PgBookStore::new(pool);

    let first = store.create(new_book("Kindred")).await.unwrap();
    let second = store.create(new_book("Dawn")).await.unwrap();
    assert_eq!(first.isbn, "");
    assert_eq!(first.published_year, Some(1979));

    let all = store.find_all().await.unwrap();
    let ids: Vec<Uuid> = all.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    let fetched = store.find_by_id(first.id).await.unwrap().unwrap();
    assert_eq!(fetched, first);

    let changes = BookChanges {
        quantity: Some(9),
        published_year: Some(None),
        ..Default::default()
    };
    let updated = store.update_by_id(first.id, changes).await.unwrap().unwrap();
    assert_eq!(updated.title, "Kindred");
    assert_eq!(updated.quantity, 9);
    assert_eq!(updated.published_year, None);
    assert_eq!(updated.created_at, first.created_at);

    let deleted = store.delete_by_id(first.id).await.unwrap().unwrap();
    assert_eq!(deleted.id, first.id);
    assert!(store.find_by_id(first.id).await.unwrap().is_none());
    assert!(store.delete_by_id(first.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL pointing at PostgreSQL"]
async fn test_pg_store_rejects_invalid_books(pool: PgPool) {
    let store = PgBookStore::new(pool);

    let mut invalid = new_book("Kindred");
    invalid.quantity = -1;
    let err = store.create(invalid).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Book validation failed: Quantity cannot be negative"
    );

    let book = store.create(new_book("Kindred")).await.unwrap();
    let changes = BookChanges {
        author: Some(String::new()),
        ..Default::default()
    };
    let err = store.update_by_id(book.id, changes).await.unwrap_err();
    assert_eq!(err.to_string(), "Book validation failed: Author cannot be empty");

    let missing = store
        .update_by_id(Uuid::new_v4(), BookChanges::default())
        .await
        .unwrap();
    assert!(missing.is_none());

    let invalid_on_missing = BookChanges {
        quantity: Some(-3),
        ..Default::default()
    };
    let missing = store
        .update_by_id(Uuid::new_v4(), invalid_on_missing)
        .await
        .unwrap();
    assert!(missing.is_none());
}
