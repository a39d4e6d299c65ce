//! Axum handlers for the `/api/countries` endpoints.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use countries_core::{CountryRecord, QuerySpec, SortDirection};
use serde::Deserialize;

use crate::error::ApiError;
use crate::service::CountryService;

/// Cap applied to `GET /api/countries` when the caller gives no filter and no limit.
pub const DEFAULT_LIMIT: i64 = 15;

pub type AppState = Arc<CountryService>;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub name: String,
}

/// `GET /api/countries?name=&population=&sort=&limit=`
///
/// With no name, population or sort this is the plain capped listing.
pub async fn list_countries(
    State(service): State<AppState>,
    Query(spec): Query<QuerySpec>,
) -> Result<Json<Vec<CountryRecord>>, ApiError> {
    let countries = if spec.is_limit_only() {
        service.list(Some(spec.limit.unwrap_or(DEFAULT_LIMIT))).await?
    } else {
        service.query(&spec).await?
    };
    Ok(Json(countries))
}

/// `GET /api/countries/search?name=`
pub async fn search_countries(
    State(service): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<CountryRecord>>, ApiError> {
    Ok(Json(service.search(&params.name).await?))
}

/// `GET /api/countries/by-population?population=&sort=&limit=`
///
/// Sorts ascending and caps at `DEFAULT_LIMIT` unless told otherwise.
pub async fn countries_by_population(
    State(service): State<AppState>,
    Query(mut spec): Query<QuerySpec>,
) -> Result<Json<Vec<CountryRecord>>, ApiError> {
    if spec.population_ceiling_millions.is_none() {
        return Err(ApiError::MissingParameter("population"));
    }
    if spec.sort == SortDirection::None {
        spec.sort = SortDirection::Ascending;
    }
    spec.limit.get_or_insert(DEFAULT_LIMIT);
    Ok(Json(service.query(&spec).await?))
}

pub async fn health() -> &'static str {
    "ok"
}
