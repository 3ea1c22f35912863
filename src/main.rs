use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use dotenvy::dotenv;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;

use boxoffice_server::config::Config;
use boxoffice_server::routes::create_routes;
use boxoffice_server::services::{PaymentGateway, SimulatedGateway};
use boxoffice_server::state::AppState;
use boxoffice_server::store::{InventoryStore, PgInventoryStore};

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env();

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Successfully connected to database");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    tracing::info!("Migrations run successfully");

    let store: Arc<dyn InventoryStore> = Arc::new(PgInventoryStore::new(pool));
    let payments: Arc<dyn PaymentGateway> =
        Arc::new(SimulatedGateway::new(config.payment_decline_rate));

    let app: Router = create_routes(AppState::new(store, payments));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server running at http://{}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app).await.expect("Server failed");
}
