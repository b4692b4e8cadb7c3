//! Book model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Book record held in the inventory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Caller-supplied identifier (not guaranteed unique)
    pub id: String,
    pub title: String,
    pub author: String,
    /// Copies available for checkout
    pub quantity: u32,
}

impl Book {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        quantity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            quantity,
        }
    }

    /// Records the inventory starts with
    pub fn seed_catalog() -> Vec<Book> {
        vec![
            Book::new("1", "In Search of Lost Time", "Marcel Proust", 2),
            Book::new("2", "The Great Gatsby", "F. Scott Fitzgerald", 5),
            Book::new("3", "War and Peace", "Leo Tolstoy", 6),
        ]
    }
}

/// Create book request
///
/// Missing fields decode to their empty value.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateBook {
    pub id: String,
    pub title: String,
    pub author: String,
    pub quantity: u32,
}

impl From<CreateBook> for Book {
    fn from(data: CreateBook) -> Self {
        Self {
            id: data.id,
            title: data.title,
            author: data.author,
            quantity: data.quantity,
        }
    }
}

/// Update book request, only the fields present are applied
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateBook {
    /// Must match the path id when given
    pub id: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub quantity: Option<u32>,
}

impl UpdateBook {
    /// Merge the provided fields onto `book`
    pub fn apply_to(&self, book: &mut Book) {
        if let Some(ref title) = self.title {
            book.title = title.clone();
        }
        if let Some(ref author) = self.author {
            book.author = author.clone();
        }
        if let Some(quantity) = self.quantity {
            book.quantity = quantity;
        }
    }
}
