pub mod api;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeFile;

use crate::config::Config;
use crate::error::Result;
use crate::services::{ExchangeRateApiClient, FrankfurterClient};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub current_rates: ExchangeRateApiClient,
    pub historical_rates: FrankfurterClient,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let current_rates = ExchangeRateApiClient::new(config.current_rates_url.clone())?;
        let historical_rates = FrankfurterClient::new(config.historical_rates_url.clone())?;

        Ok(Self {
            config: Arc::new(config),
            current_rates,
            historical_rates,
        })
    }
}

/// Build the application router: API routes, CORS and the two static
/// front-end assets.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers(Any);

    let static_dir = &state.config.static_dir;
    let index_page = ServeFile::new(static_dir.join("index.html"));
    let app_js = ServeFile::new(static_dir.join("js").join("app.js"));

    Router::new()
        .route("/api", get(api::api_info_handler))
        .route("/api/currencies", get(api::list_currencies_handler))
        .route("/api/rates/{base}", get(api::rates_handler))
        .route("/api/convert", get(api::convert_handler))
        .route("/api/history/{base}/{quote}", get(api::history_handler))
        .route("/api/popular-pairs", get(api::popular_pairs_handler))
        .route("/api/multi-convert", get(api::multi_convert_handler))
        .route(
            "/api/rate-on-date/{base}/{quote}/{date}",
            get(api::rate_on_date_handler),
        )
        .route(
            "/api/compare-dates/{base}/{quote}",
            get(api::compare_dates_handler),
        )
        .route_service("/", index_page)
        .route_service("/js/app.js", app_js)
        .layer(cors)
        .with_state(state)
}

/// Start the axum server.
pub async fn serve(config: Config, port: u16) -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    tracing::info!("Starting kurtakip server");
    tracing::info!(
        "Current rates provider: {}",
        config.current_rates_url
    );
    tracing::info!(
        "Historical rates provider: {} (real data: {})",
        config.historical_rates_url,
        config.use_real_historical_data
    );
    tracing::info!("Static assets from {}", config.static_dir.display());

    tracing::info!("Registering routes:");
    tracing::info!("  GET /api");
    tracing::info!("  GET /api/currencies");
    tracing::info!("  GET /api/rates/{{base}}");
    tracing::info!("  GET /api/convert?from_currency=USD&to_currency=TRY&amount=100");
    tracing::info!("  GET /api/history/{{base}}/{{quote}}?days=30");
    tracing::info!("  GET /api/popular-pairs");
    tracing::info!("  GET /api/multi-convert?from_currency=USD&amount=100");
    tracing::info!("  GET /api/rate-on-date/{{base}}/{{quote}}/{{date}}");
    tracing::info!("  GET /api/compare-dates/{{base}}/{{quote}}?start_date=X&end_date=Y");
    tracing::info!("  GET / and /js/app.js (static front-end)");

    let state = AppState::new(config)?;
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!(%addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
