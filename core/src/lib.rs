//! I/O-free core for the countries proxy.
//!
//! # Overview
//! Builds the upstream `HttpRequest` and parses the `HttpResponse` without
//! touching the network (host-does-IO pattern), and runs the
//! filter/sort/limit pipeline over the fetched records.
//!
//! # Design
//! - `CountriesClient` is stateless. It holds only the upstream URL.
//! - The query pipeline is a pure function behind the `QueryProcessor` trait;
//!   it owns the records it is handed and never fails.
//! - Upstream records keep every field they arrived with, so the service can
//!   return them verbatim.

pub mod client;
pub mod error;
pub mod http;
pub mod query;
pub mod types;

pub use client::CountriesClient;
pub use error::UpstreamError;
pub use http::{HttpRequest, HttpResponse};
pub use query::{apply, apply_limit_only, search, FilterPipeline, QueryProcessor};
pub use types::{CountryName, CountryRecord, QuerySpec, SortDirection};
