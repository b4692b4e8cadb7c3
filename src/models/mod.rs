//! Data models for the book inventory

pub mod book;

// Re-export commonly used types
pub use book::{Book, CreateBook, UpdateBook};
