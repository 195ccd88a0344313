//! How each book operation reports a store fault.
//!
//! Create and update faults are most often schema violations on client input,
//! so they surface as 400. Faults while listing, reading or deleting have no
//! client-side cause and surface as 500.

use axum::http::StatusCode;
use libris_core::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookOperation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl BookOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookOperation::List => "list",
            BookOperation::Get => "get",
            BookOperation::Create => "create",
            BookOperation::Update => "update",
            BookOperation::Delete => "delete",
        }
    }

    pub fn fault_status(&self) -> StatusCode {
        match self {
            BookOperation::Create | BookOperation::Update => StatusCode::BAD_REQUEST,
            BookOperation::List | BookOperation::Get | BookOperation::Delete => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Converts a store fault into the response this operation answers with.
    pub fn fault(self, err: anyhow::Error) -> AppError {
        tracing::warn!(operation = self.as_str(), error = %err, "Book store fault");
        crate::metrics::track_book_operation(self.as_str(), "fault");
        AppError::new(self.fault_status(), err)
    }

    pub fn succeeded(self) {
        crate::metrics::track_book_operation(self.as_str(), "success");
    }
}
