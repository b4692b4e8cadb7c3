//! Business logic services

pub mod inventory;

use crate::{config::InventoryConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub inventory: inventory::InventoryService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, inventory_config: InventoryConfig) -> Self {
        Self {
            inventory: inventory::InventoryService::new(repository, inventory_config),
        }
    }
}
