use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::Decimal;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::models::{Booking, TicketTier};
use crate::store::{InventoryStore, StoreError};

#[derive(Default)]
struct Inner {
    tiers: HashMap<Uuid, TicketTier>,
    bookings: Vec<Booking>,
}

/// In-memory inventory store.
///
/// A plain map has no conditional-write primitive, so the check-and-decrement
/// runs inside one mutex-guarded critical section to keep it indivisible.
/// The guard is never held across a suspension point.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tier with full availability, returning it for later reference.
    pub async fn add_tier(&self, name: &str, price: Decimal, quantity: i32) -> TicketTier {
        let tier = TicketTier::new(name, price, quantity);
        let mut inner = self.inner.lock().await;
        inner.tiers.insert(tier.id, tier.clone());
        tier
    }

    /// Snapshot of all bookings drawn against a tier.
    pub async fn bookings_for(&self, tier_id: Uuid) -> Vec<Booking> {
        let inner = self.inner.lock().await;
        inner
            .bookings
            .iter()
            .filter(|b| b.ticket_tier_id == tier_id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl InventoryStore for MemoryStore {
    async fn list_tiers(&self) -> Result<Vec<TicketTier>, StoreError> {
        let inner = self.inner.lock().await;
        let mut tiers: Vec<TicketTier> = inner.tiers.values().cloned().collect();
        tiers.sort_by(|a, b| b.price.cmp(&a.price));
        Ok(tiers)
    }

    async fn find_tier(&self, tier_id: Uuid) -> Result<Option<TicketTier>, StoreError> {
        let inner = self.inner.lock().await;
        Ok(inner.tiers.get(&tier_id).cloned())
    }

    async fn decrement_available(
        &self,
        tier_id: Uuid,
        quantity: i32,
    ) -> Result<u64, StoreError> {
        let mut inner = self.inner.lock().await;
        match inner.tiers.get_mut(&tier_id) {
            Some(tier) if tier.available >= quantity => {
                tier.available -= quantity;
                Ok(1)
            }
            _ => Ok(0),
        }
    }

    async fn insert_booking(&self, booking: Booking) -> Result<Booking, StoreError> {
        let mut inner = self.inner.lock().await;
        inner.bookings.push(booking.clone());
        Ok(booking)
    }

    /// One critical section covers the decrement and the insert, matching
    /// the transactional guarantee of the Postgres store.
    async fn reserve_and_record(
        &self,
        tier_id: Uuid,
        user_id: &str,
        quantity: i32,
    ) -> Result<Option<Booking>, StoreError> {
        let mut inner = self.inner.lock().await;
        match inner.tiers.get_mut(&tier_id) {
            Some(tier) if tier.available >= quantity => {
                tier.available -= quantity;
                let booking = Booking::new(tier_id, user_id, quantity);
                inner.bookings.push(booking.clone());
                Ok(Some(booking))
            }
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn decrement_applies_only_while_guard_holds() {
        let store = MemoryStore::new();
        let tier = store.add_tier("VIP", Decimal::from(100), 5).await;

        assert_eq!(store.decrement_available(tier.id, 3).await.unwrap(), 1);
        assert_eq!(store.decrement_available(tier.id, 3).await.unwrap(), 0);
        assert_eq!(store.decrement_available(tier.id, 2).await.unwrap(), 1);

        let tier = store.find_tier(tier.id).await.unwrap().unwrap();
        assert_eq!(tier.available, 0);
    }

    #[tokio::test]
    async fn decrement_on_unknown_tier_affects_nothing() {
        let store = MemoryStore::new();
        assert_eq!(
            store.decrement_available(Uuid::new_v4(), 1).await.unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn reserve_and_record_is_all_or_nothing() {
        let store = MemoryStore::new();
        let tier = store.add_tier("Front Row", Decimal::from(50), 2).await;

        let booking = store
            .reserve_and_record(tier.id, "user-1", 2)
            .await
            .unwrap()
            .expect("stock was available");
        assert_eq!(booking.quantity, 2);

        // Exhausted: no decrement, no booking.
        assert!(store
            .reserve_and_record(tier.id, "user-2", 1)
            .await
            .unwrap()
            .is_none());
        assert_eq!(store.bookings_for(tier.id).await.len(), 1);

        let tier = store.find_tier(tier.id).await.unwrap().unwrap();
        assert_eq!(tier.available, 0);
    }

    #[tokio::test]
    async fn tiers_are_listed_by_descending_price() {
        let store = MemoryStore::new();
        store.add_tier("General Admission", Decimal::from(10), 50).await;
        store.add_tier("VIP", Decimal::from(100), 20).await;
        store.add_tier("Front Row", Decimal::from(50), 30).await;

        let names: Vec<String> = store
            .list_tiers()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, ["VIP", "Front Row", "General Admission"]);
    }

    #[tokio::test]
    async fn store_stays_usable_after_a_client_task_panics() {
        let store = Arc::new(MemoryStore::new());
        let tier = store.add_tier("VIP", Decimal::from(100), 5).await;

        let crashing = tokio::spawn({
            let store = store.clone();
            let tier_id = tier.id;
            async move {
                store.decrement_available(tier_id, 1).await.unwrap();
                panic!("client bug");
            }
        });
        assert!(crashing.await.is_err());

        // Later callers still get normal results, not a panic.
        assert_eq!(store.decrement_available(tier.id, 4).await.unwrap(), 1);
        let tier = store.find_tier(tier.id).await.unwrap().unwrap();
        assert_eq!(tier.available, 0);
    }
}
