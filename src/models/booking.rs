use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Durable record that a stock reservation was consumed by a buyer.
///
/// Bookings are append-only: created exactly once after a successful
/// reservation, never mutated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub id: Uuid,
    pub ticket_tier_id: Uuid,
    pub user_id: String,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(ticket_tier_id: Uuid, user_id: impl Into<String>, quantity: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            ticket_tier_id,
            user_id: user_id.into(),
            quantity,
            created_at: Utc::now(),
        }
    }
}
