//! carecost-server binary
//!
//! Reads configuration from the environment (and `.env`), loads the
//! historical dataset and serves the API.

use carecost_server::{create_app, AppState, ServerConfig, ServerError};
use costing_facade::{CostingService, ForecastConfig};
use data_facade::DatasetConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "carecost_server=info,tower_http=info".into()),
        )
        .init();

    if let Err(e) = run().await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    let addr = config.socket_addr()?;

    // A missing or unreadable dataset degrades the forecast and catalog
    // endpoints but does not stop the server.
    let dataset = match DatasetConfig::new(&config.dataset_path).load() {
        Ok(dataset) => Some(dataset),
        Err(e) => {
            tracing::warn!(
                path = %config.dataset_path.display(),
                error = %e,
                "dataset not loaded"
            );
            None
        }
    };

    let forecast = ForecastConfig {
        seed: config.forecast_seed,
        ..ForecastConfig::default()
    };
    let costing = CostingService::builder()
        .dataset(dataset)
        .config(forecast)
        .build();
    let app = create_app(AppState::new(costing));

    tracing::info!("carecost-server v{} listening on {}", env!("CARGO_PKG_VERSION"), addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
