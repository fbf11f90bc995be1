// crates/countries-core/src/prelude.rs
//! Everything a front end needs in one import.

pub use crate::app::{App, Body, FetchTicket, Header, Screen, Theme};
pub use crate::error::{DirectoryError, Result};
pub use crate::filter::CountryFilter;
pub use crate::model::{Country, Currency, Flags, Language, Region};
pub use crate::route::Route;
pub use crate::search::{CountrySearch, Directory, DirectoryStats, Neighbour};
pub use crate::source::{DataLocation, DataSource, StaticSource};
pub use crate::view::{
    CountryCard, CountryDetail, DetailPhase, DetailView, ListView, RegionOption, View,
};

#[cfg(feature = "json")]
pub use crate::source::FileSource;
#[cfg(feature = "fetch")]
pub use crate::source::HttpSource;
