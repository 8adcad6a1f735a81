use anyhow::Result;
use axum::{routing::get, Router};
use dotenvy::dotenv;
use migration::MigratorTrait;
use sea_orm::Database;
use std::net::SocketAddr;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod admin;
mod config;
mod db;
mod error;
mod handlers;
mod services;
mod state;
mod templates;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trackdays=debug,tower_http=debug,axum=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Trackdays...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Connect to database
    let db = Database::connect(&config.database_url).await?;
    tracing::info!("Connected to database");

    // Run migrations
    migration::Migrator::up(&db, None).await?;
    tracing::info!("Database migrations completed");

    // Initialize application state
    let state = AppState::new(db, config.clone());

    // Build application routes
    let app = create_router(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server_host, config.server_port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health::health_check))

        // API routes (JSON)
        .nest("/api", handlers::api_routes())

        // Public HTML routes
        .merge(handlers::html_routes())

        // Admin panel
        .nest("/admin", handlers::admin_routes())

        // Static assets (stylesheet)
        .nest_service("/static", ServeDir::new("static"))

        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
