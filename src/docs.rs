use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use libris_auth::UserType;
use libris_core::ErrorResponse;

use crate::modules::books::model::{
    Book, BookChanges, BookMutationResponse, CreateBookDto, MessageResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::books::controller::get_books,
        crate::modules::books::controller::get_book,
        crate::modules::books::controller::create_book,
        crate::modules::books::controller::update_book,
        crate::modules::books::controller::delete_book,
    ),
    components(
        schemas(
            Book,
            CreateBookDto,
            BookChanges,
            BookMutationResponse,
            MessageResponse,
            ErrorResponse,
            UserType,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Books", description = "Book catalogue. Reads are public, changes require a librarian.")
    ),
    info(
        title = "Libris API",
        version = "0.1.0",
        description = "Role-gated book catalogue built with Rust, Axum, and PostgreSQL.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
