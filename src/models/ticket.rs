use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A class of ticket with a fixed total issue and a live remaining count.
///
/// `available` is only ever mutated through the store's conditional
/// decrement, so `0 <= available <= quantity` holds at all times.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TicketTier {
    pub id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub quantity: i32,
    pub available: i32,
}

impl TicketTier {
    pub fn new(name: impl Into<String>, price: Decimal, quantity: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            price,
            quantity,
            available: quantity,
        }
    }
}
