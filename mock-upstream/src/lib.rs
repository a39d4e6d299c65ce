//! Stand-in for the public countries API.
//!
//! Serves either a fixed JSON array of country objects or a fixed failure
//! at `DATASET_PATH`. Tests start it on a random port and point the proxy
//! at it.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub const DATASET_PATH: &str = "/v3.1/all";

type Dataset = Arc<Vec<Value>>;

/// Serves `countries` verbatim.
pub fn app(countries: Vec<Value>) -> Router {
    let dataset: Dataset = Arc::new(countries);
    Router::new()
        .route(DATASET_PATH, get(list_countries))
        .with_state(dataset)
}

/// Answers every dataset request with `status` and `message` as the body.
pub fn failing_app(status: StatusCode, message: &str) -> Router {
    let failure = Arc::new((status, message.to_string()));
    Router::new()
        .route(DATASET_PATH, get(fail))
        .with_state(failure)
}

/// Answers with 200 and a body that is not a country array.
pub fn garbage_app() -> Router {
    Router::new().route(DATASET_PATH, get(|| async { "<html>maintenance</html>" }))
}

pub async fn run(listener: TcpListener, router: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, router).await
}

async fn list_countries(State(dataset): State<Dataset>) -> Json<Vec<Value>> {
    Json(dataset.as_ref().clone())
}

async fn fail(State(failure): State<Arc<(StatusCode, String)>>) -> (StatusCode, String) {
    (failure.0, failure.1.clone())
}

/// A handful of countries in the upstream's v3.1 shape.
pub fn fixture() -> Vec<Value> {
    vec![
        json!({
            "name": {
                "common": "South Africa",
                "official": "Republic of South Africa",
                "nativeName": {"eng": {"official": "Republic of South Africa", "common": "South Africa"}}
            },
            "tld": [".za"],
            "cca2": "ZA",
            "independent": true,
            "currencies": {"ZAR": {"name": "South African rand", "symbol": "R"}},
            "capital": ["Pretoria", "Bloemfontein", "Cape Town"],
            "region": "Africa",
            "subregion": "Southern Africa",
            "languages": {"afr": "Afrikaans", "eng": "English", "zul": "Zulu"},
            "borders": ["BWA", "LSO", "MOZ", "NAM", "SWZ", "ZWE"],
            "population": 59308690,
            "timezones": ["UTC+02:00"],
            "flags": {"png": "https://flagcdn.com/w320/za.png", "svg": "https://flagcdn.com/za.svg"}
        }),
        json!({
            "name": {"common": "Iceland", "official": "Iceland"},
            "cca2": "IS",
            "region": "Europe",
            "subregion": "Northern Europe",
            "population": 366425,
            "timezones": ["UTC"]
        }),
        json!({
            "name": {"common": "Brazil", "official": "Federative Republic of Brazil"},
            "cca2": "BR",
            "region": "Americas",
            "subregion": "South America",
            "population": 212559409,
            "timezones": ["UTC-05:00", "UTC-04:00", "UTC-03:00", "UTC-02:00"]
        }),
        json!({
            "name": {"common": "Finland", "official": "Republic of Finland"},
            "cca2": "FI",
            "region": "Europe",
            "subregion": "Northern Europe",
            "population": 5530719,
            "timezones": ["UTC+02:00"]
        }),
        json!({
            "name": {"common": "Ireland", "official": "Republic of Ireland"},
            "cca2": "IE",
            "region": "Europe",
            "subregion": "Northern Europe",
            "population": 4994724,
            "timezones": ["UTC"]
        }),
    ]
}
