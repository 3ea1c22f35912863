use std::sync::Arc;

use crate::services::{BookingService, PaymentGateway, PurchaseService, TicketService};
use crate::store::InventoryStore;

/// Shared handler state. The store is the only shared mutable state between
/// concurrent requests; everything here is cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub tickets: TicketService,
    pub purchases: PurchaseService,
}

impl AppState {
    pub fn new(store: Arc<dyn InventoryStore>, payments: Arc<dyn PaymentGateway>) -> Self {
        let bookings = BookingService::new(store.clone());
        Self {
            tickets: TicketService::new(store),
            purchases: PurchaseService::new(bookings, payments),
        }
    }
}
