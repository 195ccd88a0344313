//! Book seeding functionality.
//!
//! Generates fake catalogue entries and inserts them with multi-value
//! INSERT statements inside a single transaction.

use fake::Fake;
use fake::faker::company::en::CompanyName;
use fake::faker::lorem::en::{Paragraph, Sentence, Words};
use fake::faker::name::en::Name;
use rayon::prelude::*;
use sqlx::{PgPool, Postgres, Transaction};
use std::time::Instant;

const GENRES: [&str; 10] = [
    "Fiction",
    "Mystery",
    "Science Fiction",
    "Fantasy",
    "Biography",
    "History",
    "Poetry",
    "Romance",
    "Philosophy",
    "Science",
];

const BATCH_SIZE: usize = 500;
const COLUMNS_PER_ROW: usize = 8;

/// Seed data for one book row.
#[derive(Debug, Clone)]
pub struct BookSeed {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub publisher: String,
    pub published_year: Option<i32>,
    pub genre: String,
    pub description: String,
    pub quantity: i32,
}

/// Builds an ISBN-13 with a valid check digit from twelve random digits.
fn fake_isbn() -> String {
    let mut digits: Vec<u32> = vec![9, 7, 8];
    digits.extend((0..9).map(|_| (0..10u32).fake::<u32>()));

    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| if i % 2 == 0 { *d } else { d * 3 })
        .sum();
    digits.push((10 - sum % 10) % 10);

    let digits: String = digits.iter().map(|d| d.to_string()).collect();
    format!(
        "{}-{}-{}-{}",
        &digits[..3],
        &digits[3..4],
        &digits[4..12],
        &digits[12..]
    )
}

/// Generates book data in parallel using Rayon
pub fn generate_books(count: usize) -> Vec<BookSeed> {
    (0..count)
        .into_par_iter()
        .map(|i| {
            let words: Vec<String> = Words(1..5).fake();
            let title = capitalize_words(&words.join(" "));
            let sentence: String = Sentence(4..10).fake();
            let paragraph: String = Paragraph(1..3).fake();

            BookSeed {
                title,
                author: Name().fake(),
                isbn: fake_isbn(),
                publisher: CompanyName().fake(),
                // Roughly one book in ten has no known publication year
                published_year: if i % 10 == 0 {
                    None
                } else {
                    Some((1850..2026).fake())
                },
                genre: GENRES[i % GENRES.len()].to_string(),
                description: format!("{} {}", sentence, paragraph),
                quantity: (0..20).fake(),
            }
        })
        .collect()
}

fn capitalize_words(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Seeds books into the database
pub async fn seed_books(db: &PgPool, count: usize) -> Result<u64, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("📚 Seeding {} books...", count);

    let books = generate_books(count);
    let inserted = insert_books_batch(db, &books).await?;

    println!(
        "   ✓ Inserted {} books in {:?}",
        inserted,
        start_time.elapsed()
    );

    Ok(inserted)
}

/// Inserts books in batches using multi-value INSERT statements
pub async fn insert_books_batch(
    db: &PgPool,
    books: &[BookSeed],
) -> Result<u64, Box<dyn std::error::Error>> {
    let mut tx = db.begin().await?;
    let mut inserted = 0;

    for chunk in books.chunks(BATCH_SIZE) {
        inserted += insert_books_chunk(&mut tx, chunk).await?;
    }

    tx.commit().await?;
    Ok(inserted)
}

async fn insert_books_chunk(
    tx: &mut Transaction<'_, Postgres>,
    books: &[BookSeed],
) -> Result<u64, Box<dyn std::error::Error>> {
    if books.is_empty() {
        return Ok(0);
    }

    let query = build_insert_query(books.len());

    let mut q = sqlx::query(&query);
    for book in books {
        q = q
            .bind(&book.title)
            .bind(&book.author)
            .bind(&book.isbn)
            .bind(&book.publisher)
            .bind(book.published_year)
            .bind(&book.genre)
            .bind(&book.description)
            .bind(book.quantity);
    }

    let result = q.execute(&mut **tx).await?;
    Ok(result.rows_affected())
}

fn build_insert_query(rows: usize) -> String {
    let mut query = String::from(
        "INSERT INTO books (title, author, isbn, publisher, published_year, genre, description, quantity) VALUES ",
    );

    for row in 0..rows {
        if row > 0 {
            query.push_str(", ");
        }
        let placeholders: Vec<String> = (1..=COLUMNS_PER_ROW)
            .map(|col| format!("${}", row * COLUMNS_PER_ROW + col))
            .collect();
        query.push('(');
        query.push_str(&placeholders.join(", "));
        query.push(')');
    }

    query
}

/// Removes every book from the catalogue
pub async fn clear_books(db: &PgPool) -> Result<u64, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🗑️  Clearing books...");

    let result = sqlx::query("DELETE FROM books").execute(db).await?;

    println!(
        "   ✓ Removed {} books in {:?}",
        result.rows_affected(),
        start_time.elapsed()
    );

    Ok(result.rows_affected())
}
