//! Uniform response envelope

use serde::Serialize;
use utoipa::ToSchema;

use super::book::{Book, BookSummary};

/// Outcome reported in every response body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    /// Request handled
    Success,
    /// Client error (bad payload, unknown id)
    Fail,
    /// Server error
    Error,
}

/// Envelope carrying a data object
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T>
where
    T: for<'a> ToSchema<'a>,
{
    pub status: ResponseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

impl<T> ApiResponse<T>
where
    T: for<'a> ToSchema<'a>,
{
    pub fn success(data: T) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: None,
            data,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Envelope carrying only a message; used for errors too
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub status: ResponseStatus,
    pub message: String,
}

impl MessageResponse {
    pub fn new(status: ResponseStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ResponseStatus::Success, message)
    }
}

/// `data` of a successful create
#[derive(Debug, Serialize, ToSchema)]
pub struct BookCreated {
    #[serde(rename = "bookId")]
    pub book_id: String,
}

/// `data` of the list endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct BookList {
    pub books: Vec<BookSummary>,
}

/// `data` of the detail endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct BookDetail {
    pub book: Book,
}
