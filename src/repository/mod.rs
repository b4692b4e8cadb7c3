//! Repository layer for in-memory storage

pub mod books;

use crate::models::book::Book;

/// Main repository struct holding every store
#[derive(Clone, Default)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a repository holding the given books
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books: books::BooksRepository::with_books(books),
        }
    }

    /// Create a repository holding the seed catalog
    pub fn seeded() -> Self {
        Self::new(Book::seed_catalog())
    }
}
