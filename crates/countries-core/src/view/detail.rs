// crates/countries-core/src/view/detail.rs
use crate::error::Result;
use crate::model::Country;
use crate::route::Route;
use crate::search::{CountrySearch, Neighbour};
use serde::{Deserialize, Serialize};

/// Shown in the currencies or languages slot when the record has none.
pub const NOT_AVAILABLE: &str = "N/A";
/// Shown in the border list when the record has no borders.
pub const NO_BORDERS: &str = "None";
pub const LOADING_MESSAGE: &str = "Loading...";
pub const NOT_FOUND_MESSAGE: &str = "Country not found!";

/// Where a detail page is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "country", rename_all = "snake_case")]
pub enum DetailPhase {
    Loading,
    Found(Box<CountryDetail>),
    NotFound,
}

/// The page for a single country, addressed by name.
#[derive(Debug, Clone)]
pub struct DetailView {
    name: String,
    phase: DetailPhase,
}

/// Everything the detail page renders for a located record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryDetail {
    pub name: String,
    pub native_name: Option<String>,
    pub population: u64,
    pub region: String,
    pub subregion: Option<String>,
    pub capital: Option<String>,
    pub top_level_domain: String,
    /// Currency names, or [`NOT_AVAILABLE`].
    pub currencies: String,
    /// Language names, or [`NOT_AVAILABLE`].
    pub languages: String,
    pub borders: Vec<Neighbour>,
    pub flag_url: Option<String>,
    pub back_path: String,
}

impl CountryDetail {
    /// Build the page for `country`, resolving borders against `dataset`.
    pub fn build<S: CountrySearch + ?Sized>(country: &Country, dataset: &S) -> Self {
        Self {
            name: country.name().to_string(),
            native_name: country.native_name().map(str::to_string),
            population: country.population(),
            region: country.region().to_string(),
            subregion: country.subregion().map(str::to_string),
            capital: country.capital().map(str::to_string),
            top_level_domain: country.top_level_domain(),
            currencies: country
                .currency_names()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            languages: country
                .language_names()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            borders: dataset.neighbours(country),
            flag_url: country.flag_url().map(str::to_string),
            back_path: Route::List.to_path(),
        }
    }

    /// Border labels as displayed: neighbour names, raw codes for unknown
    /// neighbours, or the single [`NO_BORDERS`] placeholder.
    pub fn border_labels(&self) -> Vec<&str> {
        if self.borders.is_empty() {
            return vec![NO_BORDERS];
        }
        self.borders.iter().map(Neighbour::label).collect()
    }
}

impl DetailView {
    /// A page for `name` (already percent-decoded), waiting for data.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phase: DetailPhase::Loading,
        }
    }

    /// Locate the record among the fetched dataset.
    ///
    /// A failed fetch is indistinguishable from an absent country.
    pub fn load(&mut self, result: Result<Vec<Country>>) {
        self.phase = match result {
            Ok(countries) => match countries.find_by_name(&self.name) {
                Some(country) => {
                    DetailPhase::Found(Box::new(CountryDetail::build(country, &countries)))
                }
                None => {
                    tracing::debug!(name = %self.name, "no country with this name");
                    DetailPhase::NotFound
                }
            },
            Err(err) => {
                tracing::warn!(name = %self.name, error = %err, "dataset fetch failed");
                DetailPhase::NotFound
            }
        };
    }

    /// The requested name, as taken from the path.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phase(&self) -> &DetailPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, DetailPhase::Loading)
    }

    pub fn detail(&self) -> Option<&CountryDetail> {
        match &self.phase {
            DetailPhase::Found(detail) => Some(&**detail),
            _ => None,
        }
    }

    /// The placeholder text for the current phase, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self.phase {
            DetailPhase::Loading => Some(LOADING_MESSAGE),
            DetailPhase::NotFound => Some(NOT_FOUND_MESSAGE),
            DetailPhase::Found(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DirectoryError;
    use serde_json::json;

    fn dataset() -> Vec<Country> {
        serde_json::from_value(json!([
            {"name": "France", "region": "Europe", "subregion": "Western Europe",
             "alpha3Code": "FRA", "borders": ["ESP", "DEU"],
             "currencies": {"EUR": {"name": "Euro", "symbol": "€"}},
             "languages": {"fra": {"name": "French"}},
             "topLevelDomain": [".fr"]},
            {"name": "Spain", "alpha3Code": "ESP", "borders": ["FRA", "XKX"]},
            {"name": "Germany", "alpha3Code": "DEU"},
            {"name": "Iceland", "alpha3Code": "ISL", "currencies": null}
        ]))
        .unwrap()
    }

    fn loaded(name: &str) -> DetailView {
        let mut view = DetailView::new(name);
        view.load(Ok(dataset()));
        view
    }

    #[test]
    fn loading_is_distinct_from_not_found() {
        let view = DetailView::new("France");
        assert!(view.is_loading());
        assert_eq!(view.message(), Some(LOADING_MESSAGE));

        let view = loaded("Atlantis");
        assert_eq!(view.phase(), &DetailPhase::NotFound);
        assert_eq!(view.message(), Some(NOT_FOUND_MESSAGE));
    }

    #[test]
    fn lookup_ignores_case() {
        let view = loaded("fRANCE");
        assert_eq!(view.detail().map(|d| d.name.as_str()), Some("France"));
        assert_eq!(view.message(), None);
    }

    #[test]
    fn borders_resolve_from_same_dataset() {
        let view = loaded("France");
        let detail = view.detail().unwrap();
        assert_eq!(detail.border_labels(), ["Spain", "Germany"]);
        assert_eq!(detail.currencies, "Euro");
        assert_eq!(detail.languages, "French");
        assert_eq!(detail.top_level_domain, ".fr");
        assert_eq!(detail.back_path, "/");
    }

    #[test]
    fn unresolved_border_shows_raw_code() {
        let view = loaded("Spain");
        assert_eq!(view.detail().unwrap().border_labels(), ["France", "XKX"]);
    }

    #[test]
    fn absent_currencies_and_languages_are_na() {
        let view = loaded("Iceland");
        let detail = view.detail().unwrap();
        assert_eq!(detail.currencies, NOT_AVAILABLE);
        assert_eq!(detail.languages, NOT_AVAILABLE);
        assert_eq!(detail.border_labels(), [NO_BORDERS]);
    }

    #[test]
    fn failed_fetch_degrades_to_not_found() {
        let mut view = DetailView::new("France");
        view.load(Err(DirectoryError::NotFound("data.json".into())));
        assert_eq!(view.message(), Some(NOT_FOUND_MESSAGE));
    }
}
