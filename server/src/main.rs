use std::sync::Arc;

use clap::Parser;
use countries_core::FilterPipeline;
use countries_server::{Args, Config, CountryService, HttpCountrySource};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "countries_server=info,tower_http=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_args(Args::parse())
        .inspect_err(|e| tracing::error!(error = %e, "invalid configuration"))?;

    let source = HttpCountrySource::new(&config.upstream_url, config.upstream_timeout);
    let service = CountryService::new(Arc::new(source), Arc::new(FilterPipeline));

    let listener = TcpListener::bind(config.bind).await?;
    tracing::info!(upstream = %config.upstream_url, "listening on {}", config.bind);
    countries_server::run(listener, countries_server::app(Arc::new(service))).await?;
    Ok(())
}
