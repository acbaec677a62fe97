mod accounts;
pub mod api;
mod calculations;
pub mod schema;
pub mod utils;

use axum::{
    Router,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use dotenvy::dotenv;
use std::env;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber;

use api::{
    config::ApiConfig,
    error::ApiError,
    handlers::{
        accounts::{get_account_by_id, get_accounts, update_account_balance},
        calculations::{
            calculate_account_fees, calculate_account_rewards, calculate_fees, calculate_rewards,
        },
        health, method_not_allowed, route_not_found,
    },
};
use utils::app_config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenv();
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            env::var("RUST_LOG")
                .unwrap_or_else(|_| "info".to_string())
                .as_str(),
        )
        .init();

    // Load API configuration
    let api_config = ApiConfig::from_env();

    tracing::info!("API configuration loaded successfully");

    // Load AppConfig (store connection pool)
    let app_config = AppConfig::from_env()?;
    tracing::info!("Application configuration loaded successfully");

    // Abandon any request that outlives the configured timeout and report
    // it as a store fault
    let request_timeout = api_config.request_timeout;
    let timeout_layer = middleware::from_fn(move |req: axum::extract::Request, next: Next| {
        async move {
            match tokio::time::timeout(request_timeout, next.run(req)).await {
                Ok(response) => Ok::<Response, ApiError>(response.into_response()),
                Err(_) => Err(ApiError::store_unavailable("Request timed out")),
            }
        }
    });

    // Build router with all routes
    let router = Router::new()
        // Health check
        .route("/health", get(health::health))
        // Account service endpoints
        .route("/accounts", get(get_accounts).fallback(method_not_allowed))
        .route(
            "/accounts/:id",
            get(get_account_by_id)
                .put(update_account_balance)
                .fallback(method_not_allowed),
        )
        // Calculation service endpoints - account_id in the path or the body
        .route("/fees", post(calculate_fees).fallback(method_not_allowed))
        .route(
            "/fees/:account_id",
            post(calculate_account_fees).fallback(method_not_allowed),
        )
        .route(
            "/rewards",
            post(calculate_rewards).fallback(method_not_allowed),
        )
        .route(
            "/rewards/:account_id",
            post(calculate_account_rewards).fallback(method_not_allowed),
        )
        .fallback(route_not_found)
        // Add middleware layers before state binding
        .layer(TraceLayer::new_for_http())
        .layer(timeout_layer)
        .layer(CorsLayer::permissive())
        // Shared state - applied after middleware
        .with_state(app_config);

    // Get port from environment or use default
    let port = env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse::<u16>()
        .unwrap_or(8080);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Starting banking API server on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
