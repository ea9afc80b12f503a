//! REST API for the Autoquote service

pub mod error;
pub mod handlers;

use std::sync::Arc;

use autoquote_pricing::{PremiumCalculator, PricingConfig};
use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use error::ApiError;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub calculator: Arc<PremiumCalculator>,
}

impl AppState {
    pub fn new(config: PricingConfig) -> Self {
        Self {
            calculator: Arc::new(PremiumCalculator::new(config)),
        }
    }
}

/// Create the REST API routes
pub fn create_router(state: AppState) -> Router {
    // CORS layer to allow browser clients from any origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/calculate-premium", post(handlers::calculate_premium))
        .route("/health", get(handlers::health_check))
        .route("/api/v1/version", get(handlers::version))
        .route("/api/v1/config", get(handlers::pricing_config))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
