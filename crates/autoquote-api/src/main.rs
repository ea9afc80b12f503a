//! Autoquote Service Binary

use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use autoquote_api::{create_router, AppState, ServiceConfig};
use autoquote_pricing::REFERENCE_YEAR;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting Autoquote service v{}", autoquote_common::VERSION);

    // Load configuration
    let config = ServiceConfig::load()?;
    info!("Loaded configuration: {:?}", config);
    info!(
        "Pricing config: coverage_percentage={}, gis_adjustment={}, reference_year={}",
        config.pricing.coverage_percentage, config.pricing.gis_adjustment, REFERENCE_YEAR
    );

    let addr = config.bind_addr()?;
    let app = create_router(AppState::new(config.pricing));

    let shutdown = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for shutdown signal: {}", err);
            std::future::pending::<()>().await;
        }
        info!("Received shutdown signal");
    };

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("REST API server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Shutting down Autoquote service");
    Ok(())
}
