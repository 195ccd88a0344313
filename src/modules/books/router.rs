use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{create_book, delete_book, get_book, get_books, update_book};

pub fn init_books_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_books))
        .route("/add", post(create_book))
        .route("/{id}", get(get_book).put(update_book).delete(delete_book))
}
