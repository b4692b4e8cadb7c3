//! Inventory service: catalog maintenance and checkout

use crate::{
    config::InventoryConfig,
    error::{AppError, AppResult},
    models::book::{Book, CreateBook, UpdateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct InventoryService {
    repository: Repository,
    config: InventoryConfig,
}

impl InventoryService {
    pub fn new(repository: Repository, config: InventoryConfig) -> Self {
        Self { repository, config }
    }

    pub async fn list_books(&self) -> Vec<Book> {
        self.repository.books.list().await
    }

    pub async fn count_books(&self) -> usize {
        self.repository.books.count().await
    }

    pub async fn get_book(&self, id: &str) -> AppResult<Book> {
        self.repository.books.find_by_id(id).await
    }

    /// Append a new book. Duplicate ids are kept unless the inventory is
    /// configured to reject them.
    pub async fn create_book(&self, data: CreateBook) -> AppResult<Book> {
        let book = Book::from(data);

        if self.config.reject_duplicate_ids && self.repository.books.contains_id(&book.id).await {
            return Err(AppError::Conflict(format!(
                "Book with id {} already exists",
                book.id
            )));
        }

        self.repository.books.append(book.clone()).await;
        tracing::info!(id = %book.id, title = %book.title, "Book created");
        Ok(book)
    }

    /// Merge the provided fields onto the stored book
    pub async fn update_book(&self, id: &str, data: &UpdateBook) -> AppResult<Book> {
        let book = self
            .repository
            .books
            .modify_by_id(id, |book| {
                if let Some(ref new_id) = data.id {
                    if new_id != &book.id {
                        return Err(AppError::BadRequest(
                            "Book id cannot be changed".to_string(),
                        ));
                    }
                }
                data.apply_to(book);
                Ok(book.clone())
            })
            .await?;

        tracing::info!(id = %book.id, "Book updated");
        Ok(book)
    }

    /// Delete the first book with the given id. Deleting a missing id is a no-op.
    pub async fn delete_book(&self, id: &str) -> bool {
        let removed = self.repository.books.remove_by_id(id).await;
        if removed {
            tracing::info!(id = %id, "Book deleted");
        } else {
            tracing::debug!(id = %id, "Delete requested for unknown book");
        }
        removed
    }

    /// Take one copy out of stock
    pub async fn checkout_book(&self, id: &str) -> AppResult<Book> {
        let book = self
            .repository
            .books
            .modify_by_id(id, |book| {
                if book.quantity == 0 {
                    return Err(AppError::Unavailable("Book not available".to_string()));
                }
                book.quantity -= 1;
                Ok(book.clone())
            })
            .await?;

        tracing::info!(id = %book.id, remaining = book.quantity, "Book checked out");
        Ok(book)
    }
}
