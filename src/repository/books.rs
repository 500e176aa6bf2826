//! In-memory book store

use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::book::Book;

/// Ordered sequence of books; insertion order is list order.
///
/// Id uniqueness is left to the id generator.
#[derive(Debug, Default)]
pub struct BookStore {
    books: Vec<Book>,
}

impl BookStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, book: Book) {
        self.books.push(book);
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    pub fn find_index_by_id(&self, id: &str) -> Option<usize> {
        self.books.iter().position(|book| book.id == id)
    }

    /// Mutable access to the book at `index` for in-place replacement
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Book> {
        self.books.get_mut(index)
    }

    /// Remove the book at `index`, shifting later entries down
    pub fn remove_at(&mut self, index: usize) -> Book {
        self.books.remove(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Book> {
        self.books.iter()
    }
}

/// Shared handle on the book store
#[derive(Clone, Default)]
pub struct BooksRepository {
    store: Arc<RwLock<BookStore>>,
}

impl BooksRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared access for lookups and scans
    pub async fn read(&self) -> RwLockReadGuard<'_, BookStore> {
        self.store.read().await
    }

    /// Exclusive access; hold the guard for the whole check-then-mutate sequence
    pub async fn write(&self) -> RwLockWriteGuard<'_, BookStore> {
        self.store.write().await
    }

    pub async fn count(&self) -> usize {
        self.store.read().await.iter().count()
    }
}
