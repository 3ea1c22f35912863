use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Booking, TicketTier};

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgInventoryStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error")]
    Database(#[from] sqlx::Error),
}

/// Durable home of ticket tiers and bookings.
///
/// The load-bearing operation is `decrement_available`: a conditional atomic
/// update that decrements a tier's remaining stock only while the guard
/// `available >= quantity` holds, visible to all callers as a single
/// indivisible step. Everything else the purchase flow needs is built on
/// point lookups and an append-only booking insert.
#[async_trait]
pub trait InventoryStore: Send + Sync {
    /// All tiers, most expensive first.
    async fn list_tiers(&self) -> Result<Vec<TicketTier>, StoreError>;

    /// Point lookup by tier id.
    async fn find_tier(&self, tier_id: Uuid) -> Result<Option<TicketTier>, StoreError>;

    /// Conditional atomic decrement of `available`. Returns the number of
    /// rows affected: 1 when the tier existed with sufficient stock and the
    /// decrement was applied, 0 otherwise. Never decrements below zero.
    async fn decrement_available(&self, tier_id: Uuid, quantity: i32)
        -> Result<u64, StoreError>;

    /// Append a booking row. Performs no stock check; callers must only
    /// invoke this after a successful decrement of the same quantity.
    async fn insert_booking(&self, booking: Booking) -> Result<Booking, StoreError>;

    /// Reserve stock and record the booking in one step. Returns `None`
    /// when the conditional decrement matched no row (unknown tier or
    /// insufficient stock), leaving the store untouched.
    ///
    /// Backends with transactions override this so both writes commit or
    /// roll back together. The default composes the two calls sequentially;
    /// if the insert then fails, stock stays decremented with no booking to
    /// show for it, and the failure is logged as a reconciliation candidate.
    async fn reserve_and_record(
        &self,
        tier_id: Uuid,
        user_id: &str,
        quantity: i32,
    ) -> Result<Option<Booking>, StoreError> {
        if self.decrement_available(tier_id, quantity).await? == 0 {
            return Ok(None);
        }
        let booking = Booking::new(tier_id, user_id, quantity);
        match self.insert_booking(booking).await {
            Ok(booking) => Ok(Some(booking)),
            Err(e) => {
                tracing::error!(
                    %tier_id,
                    quantity,
                    error = ?e,
                    "booking insert failed after stock was reserved; needs reconciliation"
                );
                Err(e)
            }
        }
    }
}
