// crates/countries-core/src/view/list.rs
use crate::error::Result;
use crate::filter::CountryFilter;
use crate::model::{Country, Region};
use crate::route::Route;
use serde::{Deserialize, Serialize};

/// The searchable, region-filterable list of all countries.
///
/// Starts out loading; [`ListView::load`] installs the dataset. The filter
/// is re-applied on every read, straight from the in-memory records.
#[derive(Debug, Clone, Default)]
pub struct ListView {
    countries: Option<Vec<Country>>,
    filter: CountryFilter,
    regions_open: bool,
}

/// One entry of the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryCard {
    pub name: String,
    pub population: u64,
    pub region: String,
    pub capital: Option<String>,
    pub flag_url: Option<String>,
    /// Path of this country's detail page.
    pub path: String,
}

impl CountryCard {
    pub fn from_country(c: &Country) -> Self {
        Self {
            name: c.name().to_string(),
            population: c.population(),
            region: c.region().to_string(),
            capital: c.capital().map(str::to_string),
            flag_url: c.flag_url().map(str::to_string),
            path: Route::country(c.name()).to_path(),
        }
    }
}

/// An entry of the region menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionOption {
    pub region: Region,
    /// The active filter value; rendered emphasised.
    pub selected: bool,
}

/// Everything the list view renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListModel {
    pub search: String,
    pub region: Option<Region>,
    pub loading: bool,
    /// Present only while the region menu is open.
    pub region_options: Option<Vec<RegionOption>>,
    pub cards: Vec<CountryCard>,
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the fetched dataset. A failed fetch leaves an empty list.
    pub fn load(&mut self, result: Result<Vec<Country>>) {
        let countries = result.unwrap_or_else(|err| {
            tracing::warn!(error = %err, "dataset fetch failed; showing an empty list");
            Vec::new()
        });
        tracing::debug!(count = countries.len(), "list view loaded");
        self.countries = Some(countries);
    }

    pub fn is_loading(&self) -> bool {
        self.countries.is_none()
    }

    pub fn countries(&self) -> &[Country] {
        self.countries.as_deref().unwrap_or_default()
    }

    pub fn filter(&self) -> &CountryFilter {
        &self.filter
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.set_search(search);
    }

    /// Sets the region filter. Selecting the active region again is a no-op.
    pub fn select_region(&mut self, region: Region) {
        self.filter.set_region(region);
    }

    pub fn clear_region(&mut self) {
        self.filter.clear_region();
    }

    pub fn regions_open(&self) -> bool {
        self.regions_open
    }

    /// Shows or hides the region menu. Does not touch the filter.
    pub fn toggle_region_menu(&mut self) {
        self.regions_open = !self.regions_open;
    }

    /// Records passing the current filter, in dataset order.
    pub fn visible(&self) -> Vec<&Country> {
        self.filter.apply(self.countries())
    }

    pub fn cards(&self) -> Vec<CountryCard> {
        self.visible()
            .into_iter()
            .map(CountryCard::from_country)
            .collect()
    }

    pub fn region_options(&self) -> Option<Vec<RegionOption>> {
        self.regions_open.then(|| {
            Region::ALL
                .into_iter()
                .map(|region| RegionOption {
                    region,
                    selected: self.filter.region() == Some(region),
                })
                .collect()
        })
    }

    pub fn model(&self) -> ListModel {
        ListModel {
            search: self.filter.search().to_string(),
            region: self.filter.region(),
            loading: self.is_loading(),
            region_options: self.region_options(),
            cards: self.cards(),
        }
    }
}
