//! Series identifiers, credentials and the series catalog.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

use crate::UnknownSeriesError;

/// Numeric identifier of a data series (`api_id` on the API side).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeriesId(u32);

impl SeriesId {
    /// Creates a series id.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw numeric id.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl From<u32> for SeriesId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl FromStr for SeriesId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl std::fmt::Display for SeriesId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// API credential sent as the `key` field of every request.
///
/// The `Debug` output is redacted so keys do not end up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wraps an API key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the key text.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

impl From<&str> for ApiKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for ApiKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// Mapping from series id to series name, ordered by id.
///
/// Built once from the catalog response and not modified afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SeriesCatalog {
    names: BTreeMap<SeriesId, String>,
}

impl SeriesCatalog {
    /// Returns the name of a series.
    #[must_use]
    pub fn get(&self, id: SeriesId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    /// Returns the number of series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Resolves the names of `ids`, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownSeriesError`] for the first id that is not
    /// in the catalog.
    pub fn names_for(&self, ids: &[SeriesId]) -> Result<Vec<String>, UnknownSeriesError> {
        ids.iter()
            .map(|id| {
                self.get(*id)
                    .map(str::to_string)
                    .ok_or(UnknownSeriesError(*id))
            })
            .collect()
    }
}

impl FromIterator<(SeriesId, String)> for SeriesCatalog {
    /// Later duplicates of an id replace earlier ones.
    fn from_iter<I: IntoIterator<Item = (SeriesId, String)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}
