//! Book catalog service

use chrono::{SecondsFormat, Utc};
use rand::Rng;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookPayload, BookQuery, BookSummary, PayloadError},
    repository::Repository,
};

/// Length of generated book ids
pub const BOOK_ID_LENGTH: usize = 16;

const ID_ALPHABET: &[u8] = b"useandom-26T198340PX75pxJACKVERYMINDBUSHWOLF_GQZbfghjklqvwyzrict";

const CREATE_FAILED: &str = "Gagal menambahkan buku";
const UPDATE_FAILED: &str = "Gagal memperbarui buku";

pub const MSG_BOOK_NOT_FOUND: &str = "Buku tidak ditemukan";
pub const MSG_UPDATE_ID_NOT_FOUND: &str = "Gagal memperbarui buku. Id tidak ditemukan";
pub const MSG_DELETE_ID_NOT_FOUND: &str = "Buku gagal dihapus. Id tidak ditemukan";
pub const MSG_INSERT_FAILED: &str = "Buku gagal ditambahkan";

/// Generate a URL-safe random id
pub fn generate_book_id() -> String {
    let mut rng = rand::thread_rng();
    (0..BOOK_ID_LENGTH)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

/// Current time as an ISO-8601 UTC string with millisecond precision
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn rejected(action: &str, err: PayloadError) -> AppError {
    AppError::Validation(format!("{}. {}", action, err))
}

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Validate and store a new book, returning its id
    pub async fn create(&self, data: BookPayload) -> AppResult<String> {
        let fields = data.validate().map_err(|e| {
            tracing::debug!("Book create rejected: {}", e);
            rejected(CREATE_FAILED, e)
        })?;

        let id = generate_book_id();
        let book = Book::new(id.clone(), fields, timestamp_now());

        let mut store = self.repository.books.write().await;
        store.append(book);

        // An append always lands; a miss here means the store itself is broken.
        if store.find_by_id(&id).is_none() {
            return Err(AppError::Internal(MSG_INSERT_FAILED.to_string()));
        }

        tracing::info!(book_id = %id, "Book created");
        Ok(id)
    }

    /// Books matching every filter, in insertion order
    pub async fn list(&self, query: &BookQuery) -> AppResult<Vec<BookSummary>> {
        let store = self.repository.books.read().await;
        let books = store
            .iter()
            .filter(|book| query.matches(book))
            .map(BookSummary::from)
            .collect();
        Ok(books)
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<Book> {
        self.repository
            .books
            .read()
            .await
            .find_by_id(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(MSG_BOOK_NOT_FOUND.to_string()))
    }

    /// Replace the mutable fields of an existing book.
    ///
    /// The id is resolved before the payload is validated, so an unknown id
    /// reports 404 even when the payload is also invalid.
    pub async fn update(&self, id: &str, data: BookPayload) -> AppResult<Book> {
        let mut store = self.repository.books.write().await;

        let index = store.find_index_by_id(id).ok_or_else(|| {
            tracing::debug!(book_id = %id, "Book update on unknown id");
            AppError::NotFound(MSG_UPDATE_ID_NOT_FOUND.to_string())
        })?;

        let fields = data.validate().map_err(|e| {
            tracing::debug!(book_id = %id, "Book update rejected: {}", e);
            rejected(UPDATE_FAILED, e)
        })?;

        let book = store
            .get_mut(index)
            .ok_or_else(|| AppError::NotFound(MSG_UPDATE_ID_NOT_FOUND.to_string()))?;
        book.apply(fields, timestamp_now());

        tracing::info!(book_id = %id, "Book updated");
        Ok(book.clone())
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let mut store = self.repository.books.write().await;

        let index = store.find_index_by_id(id).ok_or_else(|| {
            tracing::debug!(book_id = %id, "Book delete on unknown id");
            AppError::NotFound(MSG_DELETE_ID_NOT_FOUND.to_string())
        })?;
        store.remove_at(index);

        tracing::info!(book_id = %id, "Book deleted");
        Ok(())
    }

    /// Number of stored books (for readiness)
    pub async fn count(&self) -> usize {
        self.repository.books.count().await
    }
}
