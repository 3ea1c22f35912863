use std::sync::Arc;

use crate::models::TicketTier;
use crate::store::InventoryStore;
use crate::utils::error::AppError;

/// Read-only catalog queries. Always reflects the latest committed
/// availability; there is no caching layer.
#[derive(Clone)]
pub struct TicketService {
    store: Arc<dyn InventoryStore>,
}

impl TicketService {
    pub fn new(store: Arc<dyn InventoryStore>) -> Self {
        Self { store }
    }

    /// All tiers, ordered by descending price.
    pub async fn list_tickets(&self) -> Result<Vec<TicketTier>, AppError> {
        Ok(self.store.list_tiers().await?)
    }
}
