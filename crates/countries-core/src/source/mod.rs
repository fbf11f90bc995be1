// crates/countries-core/src/source/mod.rs

//! # Data Sources
//!
//! Where the dataset comes from. Every view activation calls
//! [`DataSource::fetch`] once and owns the result; nothing is cached between
//! calls, so two views fetch the same document twice.

use crate::error::Result;
use crate::model::Country;
use std::io::Read;
use std::path::PathBuf;

#[cfg(feature = "json")]
mod file;
#[cfg(feature = "fetch")]
mod http;

#[cfg(feature = "json")]
pub use file::FileSource;
#[cfg(feature = "fetch")]
pub use http::HttpSource;

/// File name of the bundled dataset.
pub const DEFAULT_DATASET_FILENAME: &str = "data.json";

/// Anything that can produce the full list of country records.
pub trait DataSource {
    /// Load the whole dataset. Called once per view activation.
    fn fetch(&self) -> Result<Vec<Country>>;

    /// Human-readable origin, used in log lines.
    fn describe(&self) -> String;
}

impl<S: DataSource + ?Sized> DataSource for Box<S> {
    fn fetch(&self) -> Result<Vec<Country>> {
        (**self).fetch()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Parse a dataset document: a JSON array of country records.
pub fn parse_dataset(text: &str) -> Result<Vec<Country>> {
    Ok(serde_json::from_str(text)?)
}

/// Parse a dataset document from a reader.
pub fn read_dataset<R: Read>(reader: R) -> Result<Vec<Country>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Directory holding the bundled sample dataset.
pub fn default_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Path of the bundled sample dataset.
pub fn default_data_path() -> PathBuf {
    default_data_dir().join(DEFAULT_DATASET_FILENAME)
}

// -----------------------------------------------------------------------------
// StaticSource
// -----------------------------------------------------------------------------

/// A dataset held in memory as JSON text. Parsed anew on every fetch.
#[derive(Debug, Clone)]
pub struct StaticSource {
    json: String,
}

impl StaticSource {
    pub fn new(json: impl Into<String>) -> Self {
        Self { json: json.into() }
    }
}

impl DataSource for StaticSource {
    fn fetch(&self) -> Result<Vec<Country>> {
        parse_dataset(&self.json)
    }

    fn describe(&self) -> String {
        format!("in-memory dataset ({} bytes)", self.json.len())
    }
}

// -----------------------------------------------------------------------------
// DataLocation
// -----------------------------------------------------------------------------

/// A configured dataset location: a local path or an HTTP(S) URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataLocation {
    Path(PathBuf),
    Url(String),
}

impl DataLocation {
    /// `http://` and `https://` locations are URLs, everything else a path.
    pub fn parse(location: &str) -> Self {
        let trimmed = location.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            DataLocation::Url(trimmed.to_string())
        } else {
            DataLocation::Path(PathBuf::from(trimmed))
        }
    }

    /// Build the source for this location.
    ///
    /// Fails when the crate was built without the feature the location
    /// needs (`json` for paths, `fetch` for URLs).
    pub fn open(&self) -> Result<Box<dyn DataSource>> {
        match self {
            #[cfg(feature = "json")]
            DataLocation::Path(path) => Ok(Box::new(FileSource::new(path.clone()))),
            #[cfg(not(feature = "json"))]
            DataLocation::Path(path) => Err(crate::error::DirectoryError::invalid_config(format!(
                "cannot read {}: built without the 'json' feature",
                path.display()
            ))),
            #[cfg(feature = "fetch")]
            DataLocation::Url(url) => Ok(Box::new(HttpSource::new(url.clone()))),
            #[cfg(not(feature = "fetch"))]
            DataLocation::Url(url) => Err(crate::error::DirectoryError::invalid_config(format!(
                "cannot fetch {url}: built without the 'fetch' feature"
            ))),
        }
    }
}

impl Default for DataLocation {
    fn default() -> Self {
        DataLocation::Path(default_data_path())
    }
}

impl std::fmt::Display for DataLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataLocation::Path(p) => write!(f, "{}", p.display()),
            DataLocation::Url(u) => f.write_str(u),
        }
    }
}
