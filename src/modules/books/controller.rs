use axum::{
    Json,
    extract::{Path, State},
};
use tracing::{info, instrument};
use uuid::Uuid;

use libris_core::{AppError, ErrorResponse};

use crate::middleware::role::RequireLibrarian;
use crate::modules::books::model::{
    BOOK_NOT_FOUND_MESSAGE, Book, BookChanges, BookMutationResponse, CreateBookDto,
    MessageResponse,
};
use crate::modules::books::policy::BookOperation;
use crate::state::AppState;
use crate::validator::JsonBody;

fn book_not_found() -> AppError {
    AppError::not_found(anyhow::anyhow!(BOOK_NOT_FOUND_MESSAGE))
}

/// A string that is not a store key is a store fault for `op`, answered with
/// that operation's fault status.
fn parse_book_id(op: BookOperation, id: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id).map_err(|e| op.fault(anyhow::anyhow!("Invalid book id '{}': {}", id, e)))
}

#[utoipa::path(
    get,
    path = "/books",
    responses(
        (status = 200, description = "All books", body = Vec<Book>),
        (status = 500, description = "Store fault", body = ErrorResponse)
    ),
    tag = "Books"
)]
#[instrument(skip(state))]
pub async fn get_books(State(state): State<AppState>) -> Result<Json<Vec<Book>>, AppError> {
    let op = BookOperation::List;
    let books = state.books.find_all().await.map_err(|e| op.fault(e))?;
    op.succeeded();

    Ok(Json(books))
}

#[utoipa::path(
    get,
    path = "/books/{id}",
    params(
        ("id" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = ErrorResponse),
        (status = 500, description = "Store fault or malformed id", body = ErrorResponse)
    ),
    tag = "Books"
)]
#[instrument(skip(state))]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Book>, AppError> {
    let op = BookOperation::Get;
    let id = parse_book_id(op, &id)?;

    let book = state
        .books
        .find_by_id(id)
        .await
        .map_err(|e| op.fault(e))?
        .ok_or_else(book_not_found)?;
    op.succeeded();

    Ok(Json(book))
}

#[utoipa::path(
    post,
    path = "/books/add",
    request_body = CreateBookDto,
    responses(
        (status = 200, description = "Book added successfully", body = BookMutationResponse),
        (status = 400, description = "Missing required fields or invalid book", body = ErrorResponse),
        (status = 401, description = "Authentication required", body = ErrorResponse),
        (status = 403, description = "Librarian privileges required", body = ErrorResponse)
    ),
    tag = "Books",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn create_book(
    RequireLibrarian(principal): RequireLibrarian,
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<CreateBookDto>,
) -> Result<Json<BookMutationResponse>, AppError> {
    let op = BookOperation::Create;
    let new_book = dto.into_new_book()?;

    let book = state.books.create(new_book).await.map_err(|e| op.fault(e))?;
    op.succeeded();

    info!(book_id = %book.id, librarian = %principal.id, "Book added");

    Ok(Json(BookMutationResponse {
        message: "Book added successfully".to_string(),
        book,
    }))
}

#[utoipa::path(
    put,
    path = "/books/{id}",
    params(
        ("id" = String, Path, description = "Book ID")
    ),
    request_body = BookChanges,
    responses(
        (status = 200, description = "Book updated successfully", body = BookMutationResponse),
        (status = 400, description = "Invalid changes or malformed id", body = ErrorResponse),
        (status = 401, description = "Authentication required", body = ErrorResponse),
        (status = 403, description = "Librarian privileges required", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse)
    ),
    tag = "Books",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn update_book(
    RequireLibrarian(principal): RequireLibrarian,
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(changes): JsonBody<BookChanges>,
) -> Result<Json<BookMutationResponse>, AppError> {
    let op = BookOperation::Update;
    let id = parse_book_id(op, &id)?;

    let book = state
        .books
        .update_by_id(id, changes)
        .await
        .map_err(|e| op.fault(e))?
        .ok_or_else(book_not_found)?;
    op.succeeded();

    info!(book_id = %book.id, librarian = %principal.id, "Book updated");

    Ok(Json(BookMutationResponse {
        message: "Book updated successfully".to_string(),
        book,
    }))
}

#[utoipa::path(
    delete,
    path = "/books/{id}",
    params(
        ("id" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book deleted successfully", body = MessageResponse),
        (status = 401, description = "Authentication required", body = ErrorResponse),
        (status = 403, description = "Librarian privileges required", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse),
        (status = 500, description = "Store fault or malformed id", body = ErrorResponse)
    ),
    tag = "Books",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_book(
    RequireLibrarian(principal): RequireLibrarian,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let op = BookOperation::Delete;
    let id = parse_book_id(op, &id)?;

    let book = state
        .books
        .delete_by_id(id)
        .await
        .map_err(|e| op.fault(e))?
        .ok_or_else(book_not_found)?;
    op.succeeded();

    info!(book_id = %book.id, librarian = %principal.id, "Book deleted");

    Ok(Json(MessageResponse::new("Book deleted successfully")))
}
