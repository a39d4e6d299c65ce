//! Filter, sort and limit over an in-memory set of country records.
//!
//! The stages always run in the same order: name, population, sort, limit.
//! Sorting before the limit is what decides which records survive the cut.

use crate::types::{CountryRecord, QuerySpec, SortDirection};

const MILLION: i64 = 1_000_000;

/// Applies a `QuerySpec` to a fetched dataset.
pub trait QueryProcessor: Send + Sync {
    fn apply(&self, records: Vec<CountryRecord>, spec: &QuerySpec) -> Vec<CountryRecord>;

    fn apply_limit_only(&self, records: Vec<CountryRecord>, limit: Option<i64>) -> Vec<CountryRecord>;

    fn search(&self, records: Vec<CountryRecord>, name: &str) -> Vec<CountryRecord>;
}

/// The production pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterPipeline;

impl QueryProcessor for FilterPipeline {
    fn apply(&self, records: Vec<CountryRecord>, spec: &QuerySpec) -> Vec<CountryRecord> {
        apply(records, spec)
    }

    fn apply_limit_only(&self, records: Vec<CountryRecord>, limit: Option<i64>) -> Vec<CountryRecord> {
        apply_limit_only(records, limit)
    }

    fn search(&self, records: Vec<CountryRecord>, name: &str) -> Vec<CountryRecord> {
        search(records, name)
    }
}

pub fn apply(records: Vec<CountryRecord>, spec: &QuerySpec) -> Vec<CountryRecord> {
    let records = filter_by_name(records, spec.name.as_deref());
    let records = filter_by_population(records, spec.population_ceiling_millions);
    let records = sort_by_name(records, spec.sort);
    apply_limit_only(records, spec.limit)
}

/// Keeps the first `limit` records. Absent, zero or negative means all.
pub fn apply_limit_only(mut records: Vec<CountryRecord>, limit: Option<i64>) -> Vec<CountryRecord> {
    if let Some(limit) = limit.filter(|l| *l > 0) {
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        records.truncate(limit);
    }
    records
}

/// Case-insensitive substring match on the common name.
pub fn search(records: Vec<CountryRecord>, name: &str) -> Vec<CountryRecord> {
    filter_by_name(records, Some(name))
}

fn filter_by_name(records: Vec<CountryRecord>, pattern: Option<&str>) -> Vec<CountryRecord> {
    let Some(pattern) = pattern.filter(|p| !p.trim().is_empty()) else {
        return records;
    };
    let pattern = pattern.to_lowercase();
    records
        .into_iter()
        .filter(|r| r.common_name().to_lowercase().contains(&pattern))
        .collect()
}

fn filter_by_population(records: Vec<CountryRecord>, ceiling_millions: Option<i64>) -> Vec<CountryRecord> {
    let Some(millions) = ceiling_millions else {
        return records;
    };
    let ceiling = i128::from(millions.saturating_mul(MILLION));
    records
        .into_iter()
        .filter(|r| i128::from(r.population) < ceiling)
        .collect()
}

// `sort_by` is stable, so equal names keep their fetch order in both directions.
fn sort_by_name(mut records: Vec<CountryRecord>, direction: SortDirection) -> Vec<CountryRecord> {
    match direction {
        SortDirection::Ascending => records.sort_by(|a, b| a.common_name().cmp(b.common_name())),
        SortDirection::Descending => records.sort_by(|a, b| b.common_name().cmp(a.common_name())),
        SortDirection::None => {}
    }
    records
}
