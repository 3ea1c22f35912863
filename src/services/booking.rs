use std::sync::Arc;

use uuid::Uuid;

use crate::models::{Booking, TicketTier};
use crate::store::InventoryStore;
use crate::utils::error::AppError;

/// Reservation engine and booking recorder.
///
/// Stock is consumed through the store's single conditional update; the
/// check and the decrement are never split into a separate read then write,
/// so two concurrent buyers cannot both pass the check and oversell.
#[derive(Clone)]
pub struct BookingService {
    store: Arc<dyn InventoryStore>,
}

impl BookingService {
    pub fn new(store: Arc<dyn InventoryStore>) -> Self {
        Self { store }
    }

    /// Reserve `quantity` seats from a tier and record the booking.
    ///
    /// When the conditional update matches no row, one follow-up read
    /// decides which failure to report. That read never re-attempts the
    /// mutation, so there is no second race window.
    pub async fn create_booking(
        &self,
        tier_id: Uuid,
        user_id: &str,
        quantity: i32,
    ) -> Result<Booking, AppError> {
        if quantity <= 0 {
            return Err(AppError::InvalidQuantity);
        }

        match self
            .store
            .reserve_and_record(tier_id, user_id, quantity)
            .await?
        {
            Some(booking) => {
                tracing::info!(
                    booking_id = %booking.id,
                    %tier_id,
                    quantity,
                    "Booking recorded"
                );
                Ok(booking)
            }
            // Either the tier doesn't exist or another buyer got there
            // first and not enough stock remains.
            None => match self.store.find_tier(tier_id).await? {
                None => Err(AppError::TierNotFound(tier_id)),
                Some(_) => Err(AppError::InsufficientStock),
            },
        }
    }

    /// Tier lookup used for pricing before payment processing.
    pub async fn get_tier(&self, tier_id: Uuid) -> Result<Option<TicketTier>, AppError> {
        Ok(self.store.find_tier(tier_id).await?)
    }
}
