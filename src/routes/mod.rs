use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::config::{create_cors_layer, security_header_layers_from_env};
use crate::handlers::{create_booking, health_check, list_tickets};
use crate::state::AppState;

pub fn create_routes(state: AppState) -> Router {
    let mut app = Router::new()
        .route("/health", get(health_check))
        .route("/api/tickets", get(list_tickets))
        .route("/api/bookings", post(create_booking))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    for layer in security_header_layers_from_env() {
        app = app.layer(layer);
    }

    app.layer(create_cors_layer())
}
