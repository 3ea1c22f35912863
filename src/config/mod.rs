use std::env;

pub mod cors;
pub mod security;

pub use cors::create_cors_layer;
pub use security::security_header_layers_from_env;

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_PAYMENT_DECLINE_RATE: f64 = 0.05;

pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub payment_decline_rate: f64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost/boxoffice".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            payment_decline_rate: env::var("PAYMENT_DECLINE_RATE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PAYMENT_DECLINE_RATE),
        }
    }
}
