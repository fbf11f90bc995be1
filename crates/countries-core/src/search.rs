// crates/countries-core/src/search.rs

//! Lookups over the in-memory dataset.
//!
//! The dataset is a few hundred records, so every lookup is a linear scan.

use crate::filter::CountryFilter;
use crate::model::{Country, Region};
use crate::text::equals_folded;
use serde::{Deserialize, Serialize};

/// The loaded dataset.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Directory {
    pub countries: Vec<Country>,
}

impl Directory {
    pub fn new(countries: Vec<Country>) -> Self {
        Self { countries }
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

/// Per-region record counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryStats {
    pub countries: usize,
    /// Counts for the five filterable regions, in [`Region::ALL`] order.
    pub regions: Vec<(Region, usize)>,
    /// Records whose region is none of the five (e.g. "Polar").
    pub other: usize,
}

/// A border code resolved against the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Neighbour {
    Resolved { code: String, name: String },
    Unresolved { code: String },
}

impl Neighbour {
    /// The neighbour's name, or the raw code when it did not resolve.
    pub fn label(&self) -> &str {
        match self {
            Neighbour::Resolved { name, .. } => name,
            Neighbour::Unresolved { code } => code,
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Neighbour::Resolved { code, .. } | Neighbour::Unresolved { code } => code,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Neighbour::Resolved { .. })
    }
}

/// The lookup operations available on a set of countries.
///
/// Implementors only provide [`CountrySearch::countries`]; every lookup is
/// derived from it.
pub trait CountrySearch {
    fn countries(&self) -> &[Country];

    fn stats(&self) -> DirectoryStats {
        let countries = self.countries();
        let regions: Vec<(Region, usize)> = Region::ALL
            .into_iter()
            .map(|r| (r, countries.iter().filter(|c| r.matches(c.region())).count()))
            .collect();
        let known: usize = regions.iter().map(|(_, n)| n).sum();
        DirectoryStats {
            countries: countries.len(),
            other: countries.len() - known,
            regions,
        }
    }

    /// First record whose name equals `name`, ignoring case.
    fn find_by_name(&self, name: &str) -> Option<&Country> {
        self.countries()
            .iter()
            .find(|c| equals_folded(c.name(), name))
    }

    /// Record with the given alpha-3 code. Codes are compared exactly.
    fn find_by_alpha3(&self, code: &str) -> Option<&Country> {
        self.countries().iter().find(|c| c.alpha3() == code)
    }

    fn filter(&self, filter: &CountryFilter) -> Vec<&Country> {
        filter.apply(self.countries())
    }

    /// Resolves each of `country`'s border codes, keeping border order.
    fn neighbours(&self, country: &Country) -> Vec<Neighbour> {
        country
            .borders()
            .iter()
            .map(|code| match self.find_by_alpha3(code) {
                Some(n) => Neighbour::Resolved {
                    code: code.clone(),
                    name: n.name().to_string(),
                },
                None => Neighbour::Unresolved { code: code.clone() },
            })
            .collect()
    }
}

impl CountrySearch for Directory {
    fn countries(&self) -> &[Country] {
        &self.countries
    }
}

impl CountrySearch for [Country] {
    fn countries(&self) -> &[Country] {
        self
    }
}

impl CountrySearch for Vec<Country> {
    fn countries(&self) -> &[Country] {
        self
    }
}
