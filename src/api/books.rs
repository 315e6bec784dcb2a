//! Book management endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookPayload},
    AppState,
};

use super::MessageResponse;

/// List books active in the catalog
#[utoipa::path(
    get,
    path = "/lista/livros",
    tag = "books",
    responses(
        (status = 200, description = "Book list", body = Vec<Book>),
        (status = 500, description = "Database error", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.repository.books.list_all().await?;
    Ok(Json(books))
}

/// Get a book by id. Retired books are still found here, with the
/// availability flag cleared.
#[utoipa::path(
    get,
    path = "/lista/livro/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "No matching book", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Book>> {
    let book = state
        .repository
        .books
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))?;
    Ok(Json(book))
}

/// Register a new book. A cover-image filename in the payload is
/// attached in a second write once the id is known; a failed attach
/// is logged and does not fail the registration.
#[utoipa::path(
    post,
    path = "/novo/livro",
    tag = "books",
    request_body = BookPayload,
    responses(
        (status = 200, description = "Book registered", body = MessageResponse),
        (status = 400, description = "Registration rejected", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    Json(payload): Json<BookPayload>,
) -> AppResult<Json<MessageResponse>> {
    match state.repository.books.create(&payload).await {
        Some(book_id) => {
            if let Some(ref filename) = payload.cover_image {
                if !state.repository.books.set_cover_image(filename, book_id).await {
                    tracing::warn!(book_id, "book registered but cover image was not attached");
                }
            }
            Ok(Json(MessageResponse::new("Book registered successfully!")))
        }
        None => Err(AppError::BadRequest(
            "Could not register the book. Contact the system administrator.".to_string(),
        )),
    }
}

/// Update a book's descriptive fields. The availability flag and cover
/// image are left untouched.
#[utoipa::path(
    put,
    path = "/atualiza/livro/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    request_body = BookPayload,
    responses(
        (status = 200, description = "Book updated", body = MessageResponse),
        (status = 400, description = "No matching book", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<BookPayload>,
) -> AppResult<Json<MessageResponse>> {
    if state.repository.books.update(id, &payload).await {
        Ok(Json(MessageResponse::new("Book updated successfully!")))
    } else {
        Err(AppError::BadRequest(
            "Could not update the book. Contact the system administrator.".to_string(),
        ))
    }
}

/// Retire a book from the catalog: its loans are cancelled and its
/// availability flag cleared, but the row is kept.
#[utoipa::path(
    delete,
    path = "/remove/livro/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book removed", body = MessageResponse),
        (status = 401, description = "No matching book", body = crate::error::ErrorResponse)
    )
)]
pub async fn remove_book(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    if state.repository.books.remove(id).await {
        Ok(Json(MessageResponse::new("Book removed successfully!")))
    } else {
        // Clients expect 401 here, unlike the 400 answered by the
        // other entities' removal paths.
        Err(AppError::NotAuthorized(
            "Could not remove the book. Contact the system administrator.".to_string(),
        ))
    }
}
