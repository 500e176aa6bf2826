//! Book endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        book::{BookPayload, BookQuery},
        envelope::{ApiResponse, BookCreated, BookDetail, BookList, MessageResponse},
    },
};

use super::{JsonBody, QueryParams};

/// Add a book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookPayload,
    responses(
        (status = 201, description = "Book created", body = ApiResponse<BookCreated>),
        (status = 400, description = "Name missing or readPage greater than pageCount", body = MessageResponse),
        (status = 500, description = "Book could not be stored", body = MessageResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    JsonBody(data): JsonBody<BookPayload>,
) -> AppResult<(StatusCode, Json<ApiResponse<BookCreated>>)> {
    let book_id = state.services.books.create(data).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(BookCreated { book_id }).with_message("Buku berhasil ditambahkan")),
    ))
}

/// List books, optionally filtered
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(BookQuery),
    responses(
        (status = 200, description = "Matching books (id, name, publisher)", body = ApiResponse<BookList>)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    QueryParams(pairs): QueryParams<Vec<(String, String)>>,
) -> AppResult<Json<ApiResponse<BookList>>> {
    let query = BookQuery::from_pairs(pairs);
    let books = state.services.books.list(&query).await?;
    Ok(Json(ApiResponse::success(BookList { books })))
}

/// Get book details by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = ApiResponse<BookDetail>),
        (status = 404, description = "Book not found", body = MessageResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<BookDetail>>> {
    let book = state.services.books.get_by_id(&id).await?;
    Ok(Json(ApiResponse::success(BookDetail { book })))
}

/// Update a book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book ID")),
    request_body = BookPayload,
    responses(
        (status = 200, description = "Book updated", body = MessageResponse),
        (status = 400, description = "Name missing or readPage greater than pageCount", body = MessageResponse),
        (status = 404, description = "Book not found", body = MessageResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    JsonBody(data): JsonBody<BookPayload>,
) -> AppResult<Json<MessageResponse>> {
    state.services.books.update(&id, data).await?;
    Ok(Json(MessageResponse::success("Buku berhasil diperbarui")))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 404, description = "Book not found", body = MessageResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.services.books.delete(&id).await?;
    Ok(Json(MessageResponse::success("Buku berhasil dihapus")))
}
