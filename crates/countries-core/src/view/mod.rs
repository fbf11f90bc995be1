// crates/countries-core/src/view/mod.rs

//! The two views of the directory and their render models.
//!
//! Views own the dataset they fetched; nothing is shared between them.

mod detail;
mod list;

pub use detail::{
    CountryDetail, DetailPhase, DetailView, LOADING_MESSAGE, NOT_AVAILABLE, NOT_FOUND_MESSAGE,
    NO_BORDERS,
};
pub use list::{CountryCard, ListModel, ListView, RegionOption};

use crate::error::Result;
use crate::model::Country;
use crate::route::Route;

/// The active view.
#[derive(Debug, Clone)]
pub enum View {
    List(ListView),
    Detail(DetailView),
}

impl View {
    /// A fresh view for `route`, waiting for its dataset.
    pub fn for_route(route: &Route) -> Self {
        match route {
            Route::List => View::List(ListView::new()),
            Route::Country { name } => View::Detail(DetailView::new(name.clone())),
        }
    }

    pub fn load(&mut self, result: Result<Vec<Country>>) {
        match self {
            View::List(list) => list.load(result),
            View::Detail(detail) => detail.load(result),
        }
    }

    pub fn is_loading(&self) -> bool {
        match self {
            View::List(list) => list.is_loading(),
            View::Detail(detail) => detail.is_loading(),
        }
    }
}
