//! Fetch-then-query for each request.
//!
//! Every call fetches the dataset fresh from the source and hands it to the
//! query processor. Failures only ever come from the fetch.

use std::sync::Arc;

use countries_core::{CountryRecord, QueryProcessor, QuerySpec, UpstreamError};

use crate::source::CountrySource;

pub struct CountryService {
    source: Arc<dyn CountrySource>,
    processor: Arc<dyn QueryProcessor>,
}

impl CountryService {
    pub fn new(source: Arc<dyn CountrySource>, processor: Arc<dyn QueryProcessor>) -> Self {
        Self { source, processor }
    }

    /// The dataset in upstream order, capped at `limit`.
    pub async fn list(&self, limit: Option<i64>) -> Result<Vec<CountryRecord>, UpstreamError> {
        let records = self.fetch().await?;
        Ok(self.processor.apply_limit_only(records, limit))
    }

    pub async fn query(&self, spec: &QuerySpec) -> Result<Vec<CountryRecord>, UpstreamError> {
        let records = self.fetch().await?;
        Ok(self.processor.apply(records, spec))
    }

    pub async fn search(&self, name: &str) -> Result<Vec<CountryRecord>, UpstreamError> {
        let records = self.fetch().await?;
        Ok(self.processor.search(records, name))
    }

    async fn fetch(&self) -> Result<Vec<CountryRecord>, UpstreamError> {
        self.source
            .fetch_all()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "fetching countries failed"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StaticCountrySource;
    use async_trait::async_trait;
    use countries_core::{FilterPipeline, SortDirection};

    struct Unavailable;

    #[async_trait]
    impl CountrySource for Unavailable {
        async fn fetch_all(&self) -> Result<Vec<CountryRecord>, UpstreamError> {
            Err(UpstreamError::Transport("connection refused".into()))
        }
    }

    fn service(source: impl CountrySource + 'static) -> CountryService {
        CountryService::new(Arc::new(source), Arc::new(FilterPipeline))
    }

    fn greek() -> StaticCountrySource {
        StaticCountrySource::new(vec![
            CountryRecord::new("Zeta", 100),
            CountryRecord::new("Alpha", 200),
            CountryRecord::new("Beta", 50),
        ])
    }

    fn names(records: &[CountryRecord]) -> Vec<&str> {
        records.iter().map(|r| r.common_name()).collect()
    }

    #[tokio::test]
    async fn list_caps_without_reordering() {
        let out = service(greek()).list(Some(2)).await.unwrap();
        assert_eq!(names(&out), ["Zeta", "Alpha"]);
    }

    #[tokio::test]
    async fn query_runs_the_pipeline() {
        let spec = QuerySpec {
            sort: SortDirection::Ascending,
            limit: Some(2),
            ..QuerySpec::default()
        };
        let out = service(greek()).query(&spec).await.unwrap();
        assert_eq!(names(&out), ["Alpha", "Beta"]);
    }

    #[tokio::test]
    async fn search_filters_by_name() {
        let out = service(greek()).search("ET").await.unwrap();
        assert_eq!(names(&out), ["Zeta", "Beta"]);
    }

    #[tokio::test]
    async fn fetch_failure_propagates_unchanged() {
        let err = service(Unavailable).query(&QuerySpec::default()).await.unwrap_err();
        assert_eq!(err.to_string(), "upstream transport failed: connection refused");
    }
}
