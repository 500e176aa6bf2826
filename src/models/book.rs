//! Book model and related request types

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::{IntoParams, ToSchema};

/// Book record held in the store
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// 16-character identifier generated by the server
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    /// Total number of pages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<i64>,
    /// Pages read so far, never greater than `pageCount`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_page: Option<i64>,
    /// Derived: `readPage == pageCount`
    pub finished: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading: Option<bool>,
    /// Creation timestamp (ISO-8601, milliseconds, UTC)
    pub inserted_at: String,
    /// Last modification timestamp
    #[serde(rename = "updateAt")]
    pub updated_at: String,
}

impl Book {
    /// Build a new record from validated fields; both timestamps are set to `now`
    pub fn new(id: String, fields: BookFields, now: String) -> Self {
        let finished = fields.is_finished();
        Self {
            id,
            name: fields.name,
            year: fields.year,
            author: fields.author,
            summary: fields.summary,
            publisher: fields.publisher,
            page_count: fields.page_count,
            read_page: fields.read_page,
            finished,
            reading: fields.reading,
            inserted_at: now.clone(),
            updated_at: now,
        }
    }

    /// Replace every mutable field, keeping `id` and `inserted_at`
    pub fn apply(&mut self, fields: BookFields, now: String) {
        self.finished = fields.is_finished();
        self.name = fields.name;
        self.year = fields.year;
        self.author = fields.author;
        self.summary = fields.summary;
        self.publisher = fields.publisher;
        self.page_count = fields.page_count;
        self.read_page = fields.read_page;
        self.reading = fields.reading;
        self.updated_at = now;
    }
}

/// Short book representation returned by the list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct BookSummary {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
}

impl From<&Book> for BookSummary {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.clone(),
            name: book.name.clone(),
            publisher: book.publisher.clone(),
        }
    }
}

/// Create/update book request body
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    pub name: Option<String>,
    pub year: Option<i32>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub page_count: Option<i64>,
    pub read_page: Option<i64>,
    pub reading: Option<bool>,
}

/// Payload rule violations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadError {
    #[error("Mohon isi nama buku")]
    MissingName,

    #[error("readPage tidak boleh lebih besar dari pageCount")]
    ReadPageExceedsPageCount,
}

/// Payload fields that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct BookFields {
    pub name: String,
    pub year: Option<i32>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub page_count: Option<i64>,
    pub read_page: Option<i64>,
    pub reading: Option<bool>,
}

impl BookFields {
    pub fn is_finished(&self) -> bool {
        self.page_count == self.read_page
    }
}

impl BookPayload {
    /// Check the required name and the page invariant.
    ///
    /// The page comparison only applies when both counts are present; a
    /// JSON `null` count is treated the same as an omitted one.
    pub fn validate(self) -> Result<BookFields, PayloadError> {
        let name = self.name.ok_or(PayloadError::MissingName)?;

        if let (Some(page_count), Some(read_page)) = (self.page_count, self.read_page) {
            if page_count < read_page {
                return Err(PayloadError::ReadPageExceedsPageCount);
            }
        }

        Ok(BookFields {
            name,
            year: self.year,
            author: self.author,
            summary: self.summary,
            publisher: self.publisher,
            page_count: self.page_count,
            read_page: self.read_page,
            reading: self.reading,
        })
    }
}

/// Book list filters
#[derive(Debug, Clone, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookQuery {
    /// Case-insensitive substring of the book name
    pub name: Option<String>,
    /// Numeric flag: non-zero means reading
    pub reading: Option<String>,
    /// Numeric flag: non-zero means finished
    pub finished: Option<String>,
}

impl BookQuery {
    /// Fold raw query pairs into filters.
    ///
    /// A repeated key keeps its last value; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "name" => query.name = Some(value),
                "reading" => query.reading = Some(value),
                "finished" => query.finished = Some(value),
                _ => {}
            }
        }
        query
    }

    /// True when the book satisfies every filter that is set
    pub fn matches(&self, book: &Book) -> bool {
        if let Some(ref name) = self.name {
            if !book.name.to_lowercase().contains(&name.to_lowercase()) {
                return false;
            }
        }
        if let Some(ref reading) = self.reading {
            if book.reading != Some(truthy_flag(reading)) {
                return false;
            }
        }
        if let Some(ref finished) = self.finished {
            if book.finished != truthy_flag(finished) {
                return false;
            }
        }
        true
    }
}

/// Interpret a query string as a number, then as a boolean.
///
/// Empty input is zero. Radix literals (`0x`, `0o`, `0b`), signed decimals
/// with exponent and `Infinity` are numbers; anything else is NaN. The
/// result is true for every number except zero and NaN.
pub fn truthy_flag(raw: &str) -> bool {
    let value = raw.trim();
    if value.is_empty() {
        return false;
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = value.strip_prefix(prefix) {
            let valid = !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix));
            return valid && digits.chars().any(|c| c != '0');
        }
    }

    let unsigned = value.strip_prefix(&['+', '-'][..]).unwrap_or(value);
    if unsigned == "Infinity" {
        return true;
    }
    // f64 parsing also accepts "inf" and "nan" spellings
    if unsigned
        .chars()
        .any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E')
    {
        return false;
    }

    match value.parse::<f64>() {
        Ok(number) => number != 0.0 && !number.is_nan(),
        Err(_) => false,
    }
}
