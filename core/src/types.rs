//! Country records and the per-request query description.
//!
//! `CountryRecord` names only the two fields the pipeline inspects. Every
//! other upstream field lands in a flattened map and is serialized back out
//! untouched, in the order it arrived.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One country as returned by the upstream API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub name: CountryName,
    #[serde(default)]
    pub population: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The upstream `name` object. Only `common` is interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryName {
    pub common: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CountryRecord {
    /// A record carrying nothing but a common name and a population.
    pub fn new(common: impl Into<String>, population: u64) -> Self {
        Self {
            name: CountryName {
                common: common.into(),
                extra: Map::new(),
            },
            population,
            extra: Map::new(),
        }
    }

    pub fn common_name(&self) -> &str {
        &self.name.common
    }
}

/// Ordering applied to the common name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
    #[default]
    None,
}

impl SortDirection {
    /// Unrecognised values leave the fetch order alone.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "ascend" | "asc" | "ascending" => SortDirection::Ascending,
            "descend" | "desc" | "descending" => SortDirection::Descending,
            _ => SortDirection::None,
        }
    }
}

impl<'de> Deserialize<'de> for SortDirection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(SortDirection::parse(&value))
    }
}

/// What subset of the dataset a request wants.
///
/// Deserializes straight from a query string: `name`, `population`
/// (millions), `sort` and `limit`. Empty values count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QuerySpec {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub name: Option<String>,
    #[serde(default, rename = "population", deserialize_with = "empty_as_none_i64")]
    pub population_ceiling_millions: Option<i64>,
    #[serde(default)]
    pub sort: SortDirection,
    #[serde(default, deserialize_with = "empty_as_none_i64")]
    pub limit: Option<i64>,
}

impl QuerySpec {
    /// True when only the limit (if anything) was asked for.
    pub fn is_limit_only(&self) -> bool {
        self.name.is_none()
            && self.population_ceiling_millions.is_none()
            && self.sort == SortDirection::None
    }
}

fn empty_as_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.trim().is_empty()))
}

// Query strings carry numbers as text; JSON carries them as numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(i64),
    Text(String),
}

fn empty_as_none_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(n)) => Ok(Some(n)),
        Some(NumberOrText::Text(t)) if t.trim().is_empty() => Ok(None),
        Some(NumberOrText::Text(t)) => t
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("expected an integer, got `{t}`"))),
    }
}
