//! Repository layer holding the in-memory store

pub mod books;

/// Main repository struct; clones share the same underlying data
#[derive(Clone, Default)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a repository with an empty store
    pub fn new() -> Self {
        Self {
            books: books::BooksRepository::new(),
        }
    }
}
