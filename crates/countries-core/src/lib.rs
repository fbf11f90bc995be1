// crates/countries-core/src/lib.rs

//! # countries-core
//!
//! An in-memory directory of countries: load a static JSON dataset, search it
//! by name and region, look up a single country and resolve its neighbours
//! from border codes.
//!
//! On top of the data layer sit the two views of the directory (a filtered
//! list and a per-country detail page), the router mapping navigational paths
//! to those views, and [`App`], the top-level state holding the current view
//! and the dark-mode flag. Front ends (`countries-cli`, `countries-wasm`)
//! only drive [`App`] and render its view models.
//!
//! ```rust
//! use countries_core::prelude::*;
//!
//! let json = r#"[
//!   {"name": "France", "region": "Europe", "alpha3Code": "FRA", "borders": ["ESP"]},
//!   {"name": "Spain", "region": "Europe", "alpha3Code": "ESP", "borders": ["FRA"]}
//! ]"#;
//! let db = Directory::new(StaticSource::new(json).fetch().unwrap());
//!
//! let filter = CountryFilter::new().with_search("fra");
//! assert_eq!(db.filter(&filter).len(), 1);
//!
//! let france = db.find_by_name("FRANCE").unwrap();
//! assert_eq!(db.neighbours(france)[0].label(), "Spain");
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod app;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod route;
pub mod search;
pub mod source;
pub mod text;
pub mod view;

pub mod prelude;

// Re-exports
pub use crate::app::{App, FetchTicket, Screen, Theme};
pub use crate::config::Config;
pub use crate::error::{DirectoryError, Result};
pub use crate::filter::CountryFilter;
pub use crate::model::{Country, Currency, Flags, Language, Region};
pub use crate::route::Route;
pub use crate::search::{CountrySearch, Directory, DirectoryStats, Neighbour};
pub use crate::source::{DataLocation, DataSource, StaticSource};
pub use crate::view::{CountryCard, CountryDetail, DetailView, ListView, View};
