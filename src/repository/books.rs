//! In-memory book store

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::book::Book,
};

/// Ordered collection of books behind a single lock.
///
/// Lookups scan in insertion order and return the first match, so duplicate
/// ids resolve to the oldest record. Cloning shares the same storage.
#[derive(Clone, Default)]
pub struct BooksRepository {
    books: Arc<RwLock<Vec<Book>>>,
}

impl BooksRepository {
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: Arc::new(RwLock::new(books)),
        }
    }

    /// All books in collection order
    pub async fn list(&self) -> Vec<Book> {
        self.books.read().await.clone()
    }

    /// First book with the given id
    pub async fn find_by_id(&self, id: &str) -> AppResult<Book> {
        self.books
            .read()
            .await
            .iter()
            .find(|book| book.id == id)
            .cloned()
            .ok_or_else(AppError::book_not_found)
    }

    pub async fn contains_id(&self, id: &str) -> bool {
        self.books.read().await.iter().any(|book| book.id == id)
    }

    /// Add a book at the end, whether or not its id is already taken
    pub async fn append(&self, book: Book) {
        self.books.write().await.push(book);
    }

    /// Run `f` on the first book with the given id while holding the write lock.
    ///
    /// The whole closure is atomic with respect to other store operations.
    pub async fn modify_by_id<T, F>(&self, id: &str, f: F) -> AppResult<T>
    where
        F: FnOnce(&mut Book) -> AppResult<T>,
    {
        let mut books = self.books.write().await;
        let book = books
            .iter_mut()
            .find(|book| book.id == id)
            .ok_or_else(AppError::book_not_found)?;
        f(book)
    }

    /// Remove the first book with the given id. Returns false if none matched.
    pub async fn remove_by_id(&self, id: &str) -> bool {
        let mut books = self.books.write().await;
        match books.iter().position(|book| book.id == id) {
            Some(index) => {
                books.remove(index);
                true
            }
            None => false,
        }
    }

    pub async fn count(&self) -> usize {
        self.books.read().await.len()
    }
}
