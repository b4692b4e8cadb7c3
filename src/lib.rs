//! Book Inventory
//!
//! A small REST JSON server keeping an in-memory list of books, with
//! create/update/delete and single-copy checkout.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use repository::Repository;
use services::Services;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Build the state around an existing repository
    pub fn new(repository: Repository, config: &AppConfig) -> Self {
        Self {
            services: Arc::new(Services::new(repository, config.inventory.clone())),
        }
    }

    /// Build the state from configuration, seeding the inventory if enabled
    pub fn from_config(config: &AppConfig) -> Self {
        let repository = if config.inventory.seed_on_startup {
            Repository::seeded()
        } else {
            Repository::default()
        };
        Self::new(repository, config)
    }
}
