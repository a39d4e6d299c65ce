//! HTTP proxy over the public countries API.
//!
//! # Overview
//! Each request fetches the full dataset from the configured upstream,
//! narrows it with the core query pipeline and returns the surviving
//! records as JSON, every upstream field intact.
//!
//! # Design
//! - The dataset source is a trait object (`CountrySource`) so tests can
//!   swap in a fixed dataset or a failing upstream.
//! - Nothing is shared between requests except the immutable service.
//! - Upstream failures become `400 Bad Request` carrying the error message.

pub mod config;
pub mod error;
pub mod routes;
pub mod service;
pub mod source;

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use config::{Args, Config, ConfigError};
pub use error::ApiError;
pub use service::CountryService;
pub use source::{CountrySource, HttpCountrySource, StaticCountrySource};

pub fn app(service: Arc<CountryService>) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/api/countries", get(routes::list_countries))
        .route("/api/countries/search", get(routes::search_countries))
        .route("/api/countries/by-population", get(routes::countries_by_population))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

pub async fn run(listener: TcpListener, router: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
