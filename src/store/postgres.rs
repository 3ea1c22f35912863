use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Booking, TicketTier};
use crate::store::{InventoryStore, StoreError};

const DECREMENT_AVAILABLE: &str = "UPDATE ticket_tiers \
     SET available = available - $2 \
     WHERE id = $1 AND available >= $2";

const INSERT_BOOKING: &str = "INSERT INTO bookings (id, ticket_tier_id, user_id, quantity, created_at) \
     VALUES ($1, $2, $3, $4, $5)";

/// Postgres-backed inventory store.
///
/// The database serializes concurrent conditional decrements on the same
/// row, so no in-process locking is needed; the `available >= $2` guard in
/// the UPDATE is what prevents overselling.
#[derive(Clone)]
pub struct PgInventoryStore {
    pool: PgPool,
}

impl PgInventoryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InventoryStore for PgInventoryStore {
    async fn list_tiers(&self) -> Result<Vec<TicketTier>, StoreError> {
        let tiers = sqlx::query_as::<_, TicketTier>(
            "SELECT id, name, price, quantity, available FROM ticket_tiers ORDER BY price DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(tiers)
    }

    async fn find_tier(&self, tier_id: Uuid) -> Result<Option<TicketTier>, StoreError> {
        let tier = sqlx::query_as::<_, TicketTier>(
            "SELECT id, name, price, quantity, available FROM ticket_tiers WHERE id = $1",
        )
        .bind(tier_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(tier)
    }

    async fn decrement_available(
        &self,
        tier_id: Uuid,
        quantity: i32,
    ) -> Result<u64, StoreError> {
        let result = sqlx::query(DECREMENT_AVAILABLE)
            .bind(tier_id)
            .bind(quantity)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn insert_booking(&self, booking: Booking) -> Result<Booking, StoreError> {
        sqlx::query(INSERT_BOOKING)
            .bind(booking.id)
            .bind(booking.ticket_tier_id)
            .bind(&booking.user_id)
            .bind(booking.quantity)
            .bind(booking.created_at)
            .execute(&self.pool)
            .await?;

        Ok(booking)
    }

    /// Both writes run in one transaction, so a failed booking insert rolls
    /// the stock decrement back instead of leaking reserved seats.
    async fn reserve_and_record(
        &self,
        tier_id: Uuid,
        user_id: &str,
        quantity: i32,
    ) -> Result<Option<Booking>, StoreError> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query(DECREMENT_AVAILABLE)
            .bind(tier_id)
            .bind(quantity)
            .execute(&mut *tx)
            .await?;

        if updated.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(None);
        }

        let booking = Booking::new(tier_id, user_id, quantity);
        sqlx::query(INSERT_BOOKING)
            .bind(booking.id)
            .bind(booking.ticket_tier_id)
            .bind(&booking.user_id)
            .bind(booking.quantity)
            .bind(booking.created_at)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(Some(booking))
    }
}
