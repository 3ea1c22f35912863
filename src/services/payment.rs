use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

/// Proof that a charge went through.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentReceipt {
    pub transaction_id: String,
    pub amount: Decimal,
    pub currency: String,
}

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct PaymentDeclined(pub String);

/// Charges a buyer before any stock is consumed.
///
/// Kept behind a trait so the reservation path never depends on gateway
/// timing or randomness; tests substitute deterministic stubs.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn charge(&self, user_id: &str, amount: Decimal)
        -> Result<PaymentReceipt, PaymentDeclined>;
}

const DECLINE_REASONS: [&str; 4] = [
    "Insufficient funds",
    "Card declined",
    "Payment gateway timeout",
    "Invalid card details",
];

/// Stand-in for a real gateway: random processing delay and a configurable
/// decline rate, no persisted effect.
pub struct SimulatedGateway {
    decline_rate: f64,
}

impl SimulatedGateway {
    /// `decline_rate` is clamped to `[0, 1]`.
    pub fn new(decline_rate: f64) -> Self {
        Self {
            decline_rate: decline_rate.clamp(0.0, 1.0),
        }
    }
}

#[async_trait]
impl PaymentGateway for SimulatedGateway {
    async fn charge(
        &self,
        user_id: &str,
        amount: Decimal,
    ) -> Result<PaymentReceipt, PaymentDeclined> {
        // ThreadRng is not Send, so draw everything before suspending.
        let (delay_ms, declined, reason) = {
            let mut rng = rand::thread_rng();
            (
                rng.gen_range(100..=500u64),
                rng.gen_bool(self.decline_rate),
                DECLINE_REASONS[rng.gen_range(0..DECLINE_REASONS.len())],
            )
        };

        tokio::time::sleep(Duration::from_millis(delay_ms)).await;

        if declined {
            tracing::warn!(%user_id, %amount, reason, "Payment declined");
            return Err(PaymentDeclined(reason.to_string()));
        }

        let transaction_id = format!(
            "txn_{}_{}",
            Utc::now().timestamp_millis(),
            Uuid::new_v4().simple()
        );
        tracing::info!(%user_id, %amount, %transaction_id, "Payment successful");

        Ok(PaymentReceipt {
            transaction_id,
            amount,
            currency: "USD".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn always_declining_gateway_reports_a_reason() {
        let gateway = SimulatedGateway::new(1.0);
        let err = gateway
            .charge("user-1", Decimal::from(10))
            .await
            .unwrap_err();
        assert!(DECLINE_REASONS.contains(&err.0.as_str()));
    }

    #[tokio::test]
    async fn never_declining_gateway_issues_a_receipt() {
        let gateway = SimulatedGateway::new(0.0);
        let receipt = gateway.charge("user-1", Decimal::from(10)).await.unwrap();
        assert!(receipt.transaction_id.starts_with("txn_"));
        assert_eq!(receipt.amount, Decimal::from(10));
        assert_eq!(receipt.currency, "USD");
    }

    #[test]
    fn decline_rate_is_clamped() {
        assert_eq!(SimulatedGateway::new(7.5).decline_rate, 1.0);
        assert_eq!(SimulatedGateway::new(-0.2).decline_rate, 0.0);
    }
}
