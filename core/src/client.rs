//! Stateless request builder and response parser for the upstream countries API.
//!
//! # Design
//! `CountriesClient` holds only the dataset URL. `build_fetch_all` produces
//! the `HttpRequest` and `parse_fetch_all` consumes the `HttpResponse`; the
//! caller runs the round-trip in between, so this crate never does I/O.

use crate::error::UpstreamError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::CountryRecord;

#[derive(Debug, Clone)]
pub struct CountriesClient {
    base_url: String,
}

impl CountriesClient {
    /// `base_url` is the full dataset URL, e.g. `https://restcountries.com/v3.1/all`.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_fetch_all(&self) -> HttpRequest {
        HttpRequest {
            url: self.base_url.clone(),
            headers: vec![("accept".to_string(), "application/json".to_string())],
        }
    }

    /// Records come back complete and in upstream order.
    pub fn parse_fetch_all(&self, response: HttpResponse) -> Result<Vec<CountryRecord>, UpstreamError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| UpstreamError::Deserialization(e.to_string()))
    }
}

fn check_status(response: &HttpResponse) -> Result<(), UpstreamError> {
    if response.is_success() {
        return Ok(());
    }
    Err(UpstreamError::Status {
        status: response.status,
        body: response.body.clone(),
    })
}
