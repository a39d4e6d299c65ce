//! Process configuration, read once at startup.
//!
//! Values come from the command line or the environment. The upstream URL
//! is the only required setting; without it the process refuses to start.

use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;
use thiserror::Error;

#[derive(Debug, Parser)]
#[command(
    name = "countries-server",
    version,
    about = "Filtered, sorted and limited views over the public countries API"
)]
pub struct Args {
    /// Full URL of the upstream dataset, e.g. https://restcountries.com/v3.1/all
    #[arg(long, env = "COUNTRY_API_BASE_URL")]
    pub upstream_url: Option<String>,

    /// Server bind address
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:3000")]
    pub bind: String,

    /// Give up on the upstream after this many seconds (no limit by default)
    #[arg(long, env = "UPSTREAM_TIMEOUT_SECS")]
    pub upstream_timeout_secs: Option<u64>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("COUNTRY_API_BASE_URL is not defined in configuration")]
    MissingUpstreamUrl,
    #[error("invalid bind address `{0}`")]
    InvalidBindAddress(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub upstream_url: String,
    pub bind: SocketAddr,
    pub upstream_timeout: Option<Duration>,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        let upstream_url = args
            .upstream_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::MissingUpstreamUrl)?;
        let bind = args
            .bind
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddress(args.bind.clone()))?;

        Ok(Self {
            upstream_url,
            bind,
            upstream_timeout: args.upstream_timeout_secs.map(Duration::from_secs),
        })
    }
}
