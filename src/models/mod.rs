//! Data models for Bookshelf

pub mod book;
pub mod envelope;

// Re-export commonly used types
pub use book::{Book, BookFields, BookPayload, BookQuery, BookSummary, PayloadError};
pub use envelope::{ApiResponse, BookCreated, BookDetail, BookList, MessageResponse, ResponseStatus};
