use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::{created, success};

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    service: &'static str,
}

pub async fn health_check() -> Response {
    let payload = HealthPayload {
        status: "ok",
        service: "boxoffice-api",
    };

    success(payload, "Health check successful").into_response()
}

pub async fn list_tickets(State(state): State<AppState>) -> Result<Response, AppError> {
    let tiers = state.tickets.list_tickets().await?;
    Ok(success(tiers, "Tickets fetched successfully").into_response())
}

#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    pub ticket_tier_id: Uuid,
    pub user_id: String,
    pub quantity: i32,
}

pub async fn create_booking(
    State(state): State<AppState>,
    Json(req): Json<CreateBookingRequest>,
) -> Result<Response, AppError> {
    let outcome = state
        .purchases
        .purchase(req.ticket_tier_id, &req.user_id, req.quantity)
        .await?;

    Ok(created(outcome, "Booking confirmed! Payment processed successfully.").into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::SimulatedGateway;
    use crate::store::MemoryStore;
    use axum::http::StatusCode;
    use rust_decimal::Decimal;
    use std::sync::Arc;

    async fn state_with_tier() -> (AppState, Uuid) {
        let store = Arc::new(MemoryStore::new());
        let tier = store.add_tier("VIP", Decimal::from(100), 20).await;
        let state = AppState::new(store, Arc::new(SimulatedGateway::new(0.0)));
        (state, tier.id)
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let res = health_check().await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn listing_succeeds_with_ok() {
        let (state, _) = state_with_tier().await;
        let res = list_tickets(State(state)).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn booking_returns_created() {
        let (state, tier_id) = state_with_tier().await;
        let res = create_booking(
            State(state),
            Json(CreateBookingRequest {
                ticket_tier_id: tier_id,
                user_id: "user-1".to_string(),
                quantity: 2,
            }),
        )
        .await
        .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn oversized_booking_maps_to_conflict() {
        let (state, tier_id) = state_with_tier().await;
        let err = create_booking(
            State(state),
            Json(CreateBookingRequest {
                ticket_tier_id: tier_id,
                user_id: "user-1".to_string(),
                quantity: 21,
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
    }
}
