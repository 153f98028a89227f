use std::process::ExitCode;

use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use trip_server::catalog::TripCatalog;
use trip_server::config::ServerConfig;
use trip_server::provider::TripsApiClient;
use trip_server::search::SearchTrips;
use trip_server::store::DocumentStore;
use trip_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine; the environment may already be set
    let dotenv_loaded = dotenv::dotenv().is_ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_timer(tracing_subscriber::fmt::time::ChronoUtc::rfc_3339()),
        )
        .init();

    if !dotenv_loaded {
        warn!("no .env file loaded; using process environment only");
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("{message}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), String> {
    let config = ServerConfig::from_env().map_err(|e| e.to_string())?;

    let client = TripsApiClient::new(config.trips_api.clone())
        .map_err(|e| format!("failed to create trips API client: {e}"))?;

    let store = match &config.store_path {
        Some(path) => DocumentStore::open(path)
            .await
            .map_err(|e| format!("failed to open trip store {}: {e}", path.display()))?,
        None => {
            info!("TRIPS_STORE_PATH not set; saved trips are kept in memory");
            DocumentStore::in_memory()
        }
    };

    let state = AppState::new(SearchTrips::new(client), TripCatalog::new(store));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .map_err(|e| format!("failed to bind {}: {e}", config.bind_addr))?;

    info!(addr = %config.bind_addr, "trip planner listening");
    info!("  GET    /health            - Health check");
    info!("  GET    /api/trips/search  - Search provider trips");
    info!("  POST   /api/trips         - Save a trip");
    info!("  GET    /api/trips         - List saved trips");
    info!("  DELETE /api/trips/:id     - Delete a saved trip");

    axum::serve(listener, app)
        .await
        .map_err(|e| format!("server error: {e}"))
}
