//! Where the country dataset comes from.
//!
//! `HttpCountrySource` drives the core's request builder and response
//! parser with a ureq agent on a blocking task. `StaticCountrySource`
//! hands back a fixed dataset and never touches the network.

use std::time::Duration;

use async_trait::async_trait;
use countries_core::{CountriesClient, CountryRecord, HttpRequest, HttpResponse, UpstreamError};

/// Largest upstream body accepted.
const MAX_BODY_BYTES: u64 = 64 * 1024 * 1024;

/// Fetches the full, unfiltered dataset.
#[async_trait]
pub trait CountrySource: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<CountryRecord>, UpstreamError>;
}

/// One upstream GET per call. No caching, no retry.
#[derive(Clone)]
pub struct HttpCountrySource {
    client: CountriesClient,
    agent: ureq::Agent,
}

impl HttpCountrySource {
    pub fn new(upstream_url: &str, timeout: Option<Duration>) -> Self {
        // Non-2xx responses come back as data so the core decides what they mean.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build()
            .new_agent();

        Self {
            client: CountriesClient::new(upstream_url),
            agent,
        }
    }

    pub fn upstream_url(&self) -> &str {
        self.client.base_url()
    }
}

#[async_trait]
impl CountrySource for HttpCountrySource {
    async fn fetch_all(&self) -> Result<Vec<CountryRecord>, UpstreamError> {
        let request = self.client.build_fetch_all();
        let agent = self.agent.clone();

        let response = tokio::task::spawn_blocking(move || execute(&agent, request))
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))??;

        let records = self.client.parse_fetch_all(response)?;
        tracing::debug!(count = records.len(), "fetched countries from upstream");
        Ok(records)
    }
}

fn execute(agent: &ureq::Agent, request: HttpRequest) -> Result<HttpResponse, UpstreamError> {
    let mut builder = agent.get(&request.url);
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }
    let mut response = builder
        .call()
        .map_err(|e| UpstreamError::Transport(e.to_string()))?;

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.as_str().to_string(), v.to_string())))
        .collect();
    let body = response
        .body_mut()
        .with_config()
        .limit(MAX_BODY_BYTES)
        .read_to_string()
        .map_err(|e| UpstreamError::Transport(e.to_string()))?;

    Ok(HttpResponse { status, headers, body })
}

/// A fixed in-memory dataset.
#[derive(Debug, Clone, Default)]
pub struct StaticCountrySource {
    records: Vec<CountryRecord>,
}

impl StaticCountrySource {
    pub fn new(records: Vec<CountryRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl CountrySource for StaticCountrySource {
    async fn fetch_all(&self) -> Result<Vec<CountryRecord>, UpstreamError> {
        Ok(self.records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_source_returns_its_records_in_order() {
        let source = StaticCountrySource::new(vec![CountryRecord::new("Peru", 3), CountryRecord::new("Chad", 1)]);
        let records = source.fetch_all().await.unwrap();
        let names: Vec<_> = records.iter().map(|r| r.common_name()).collect();
        assert_eq!(names, ["Peru", "Chad"]);
    }

    #[tokio::test]
    async fn unreachable_upstream_is_a_transport_error() {
        let addr = std::net::TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
        // The listener is gone, so nothing answers on `addr`.
        let source = HttpCountrySource::new(&format!("http://{addr}/v3.1/all"), Some(Duration::from_secs(2)));
        let err = source.fetch_all().await.unwrap_err();
        assert!(matches!(err, UpstreamError::Transport(_)));
    }

    #[test]
    fn upstream_url_is_kept() {
        let source = HttpCountrySource::new("https://restcountries.com/v3.1/all", None);
        assert_eq!(source.upstream_url(), "https://restcountries.com/v3.1/all");
    }
}
