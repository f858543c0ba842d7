// In crates/web-server/src/lib.rs

use analytics::AnalyticsEngine;
use app_config::ServerSettings;
use axum::{
    Router,
    extract::{State, rejection::JsonRejection},
    response::Json,
    routing::{get, post},
};
use core_types::Trade;
use risk::RuleSettings;
use tokio::net::TcpListener;
use types::AnalyzeTradeResponse;

pub mod error;
pub mod types;

// Re-export our custom error type for convenience.
pub use error::{Error, Result};

/// The shared application state that is available to all API handlers.
///
/// It is immutable and cheap to clone, so handlers never contend on it.
#[derive(Clone, Debug)]
pub struct AppState {
    pub engine: AnalyticsEngine,
    pub rules: RuleSettings,
}

impl AppState {
    pub fn new(rules: RuleSettings) -> Self {
        Self {
            engine: AnalyticsEngine::new(),
            rules,
        }
    }
}

/// Creates the main application router with all routes and middleware.
///
/// # Arguments
///
/// * `app_state`: The shared `AppState` holding the rule thresholds.
///
/// # Returns
///
/// The configured `axum::Router`.
pub fn create_router(app_state: AppState) -> Router {
    // Browser clients are served from anywhere, so CORS is fully open.
    let cors = tower_http::cors::CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any);

    Router::new()
        .route("/analyze-trade", post(analyze_trade_handler))
        .route("/health", get(health_check_handler))
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}

/// A simple health check handler.
async fn health_check_handler() -> &'static str {
    "OK"
}

/// The handler for `POST /analyze-trade`.
/// Reviews the submitted trade and returns its metrics, insights and severity.
async fn analyze_trade_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Trade>, JsonRejection>,
) -> Result<Json<AnalyzeTradeResponse>> {
    let Json(trade) = payload?;

    let response = AnalyzeTradeResponse::review(&state.engine, &trade, &state.rules);

    tracing::info!(
        direction = %trade.direction,
        severity = response.severity.tier(),
        insights = response.insights.len(),
        "Trade reviewed."
    );

    Ok(Json(response))
}

/// The main entry point for running the web server.
///
/// This function sets up the TCP listener and serves the application router
/// until the process receives Ctrl+C.
pub async fn run(settings: ServerSettings, rules: RuleSettings) -> Result<()> {
    let app = create_router(AppState::new(rules));

    let address = settings.address();
    let listener = TcpListener::bind(&address).await.map_err(Error::ServerBindError)?;
    tracing::info!(
        %address,
        max_risk_pct = rules.max_risk_pct,
        min_rr = rules.min_rr,
        "Web server listening."
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(Error::ServeError)?;

    tracing::info!("Web server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for the shutdown signal.");
        // Without a signal handler, keep serving until the process is killed.
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received.");
}
