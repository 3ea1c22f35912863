use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::models::Booking;
use crate::services::booking::BookingService;
use crate::services::payment::{PaymentGateway, PaymentReceipt};
use crate::utils::error::AppError;

/// Result of a successful purchase: the booking, what was charged, and the
/// gateway receipt.
#[derive(Debug, Clone, Serialize)]
pub struct PurchaseOutcome {
    pub booking: Booking,
    pub total_charged: Decimal,
    pub payment: PaymentReceipt,
}

/// Composes payment, reservation, and recording into the purchase flow.
///
/// Payment runs before the reservation because the stock decrement is
/// irreversible; a declined charge must never consume stock, and this
/// ordering needs no compensation path.
#[derive(Clone)]
pub struct PurchaseService {
    bookings: BookingService,
    payments: Arc<dyn PaymentGateway>,
}

impl PurchaseService {
    pub fn new(bookings: BookingService, payments: Arc<dyn PaymentGateway>) -> Self {
        Self { bookings, payments }
    }

    /// Each step is a hard gate; the first failure short-circuits the rest.
    pub async fn purchase(
        &self,
        tier_id: Uuid,
        user_id: &str,
        quantity: i32,
    ) -> Result<PurchaseOutcome, AppError> {
        if quantity <= 0 {
            return Err(AppError::InvalidQuantity);
        }

        let tier = self
            .bookings
            .get_tier(tier_id)
            .await?
            .ok_or(AppError::TierNotFound(tier_id))?;

        let total = tier.price * Decimal::from(quantity);

        let receipt = self
            .payments
            .charge(user_id, total)
            .await
            .map_err(|declined| AppError::PaymentFailed(declined.0))?;

        let booking = self
            .bookings
            .create_booking(tier_id, user_id, quantity)
            .await?;

        Ok(PurchaseOutcome {
            booking,
            total_charged: total,
            payment: receipt,
        })
    }
}
