// crates/countries-core/src/filter.rs

//! The two list-view predicates: name search and region.

use crate::model::{Country, Region};
use crate::text::{contains_folded, fold_key};
use serde::{Deserialize, Serialize};

/// Search text plus optional region, applied conjunctively.
///
/// An empty search and no region match every record.
///
/// ```rust
/// use countries_core::{CountryFilter, Region};
///
/// let filter = CountryFilter::new()
///     .with_search("land")
///     .with_region(Region::Europe);
/// assert_eq!(filter.region(), Some(Region::Europe));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryFilter {
    search: String,
    region: Option<Region>,
}

impl CountryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn region(&self) -> Option<Region> {
        self.region
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Selecting the region that is already selected keeps it selected.
    pub fn set_region(&mut self, region: Region) {
        self.region = Some(region);
    }

    pub fn clear_region(&mut self) {
        self.region = None;
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.region.is_none()
    }

    pub fn matches(&self, country: &Country) -> bool {
        let matches_region = self.region.map_or(true, |r| r.matches(country.region()));
        matches_region && contains_folded(country.name(), &self.search)
    }

    /// Records matching the filter, in dataset order.
    pub fn apply<'a>(&self, countries: &'a [Country]) -> Vec<&'a Country> {
        if self.is_empty() {
            return countries.iter().collect();
        }
        // Fold the needle once rather than per record.
        let needle = fold_key(&self.search);
        countries
            .iter()
            .filter(|c| self.region.map_or(true, |r| r.matches(c.region())))
            .filter(|c| needle.is_empty() || fold_key(c.name()).contains(&needle))
            .collect()
    }
}
