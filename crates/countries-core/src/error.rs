// crates/countries-core/src/error.rs
//! Error types for the country directory.

use thiserror::Error;

/// Everything that can go wrong while loading the dataset, reading the
/// configuration or resolving a navigational path.
///
/// None of these reach the user as a diagnostic: the views degrade to an
/// empty list or the not-found placeholder. Front ends still see them so
/// they can log.
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The dataset could not be located.
    #[error("dataset not found: {0}")]
    NotFound(String),

    /// The dataset is not a JSON array of country records.
    #[error("invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP transfer of the dataset failed.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The front end's own transport failed (e.g. the browser fetch).
    #[error("fetching dataset from {url} failed: {message}")]
    Fetch {
        /// Where the dataset was requested from.
        url: String,
        /// Transport error text.
        message: String,
    },

    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    Config(Box<figment::Error>),

    /// Configuration loaded but is unusable.
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the validation failure.
        message: String,
    },

    /// The path matched a route but its parameter could not be decoded.
    #[error("invalid route {path}: {message}")]
    InvalidRoute {
        /// The offending path.
        path: String,
        /// Description of what went wrong.
        message: String,
    },

    /// No route matches the path.
    #[error("no route matches {0}")]
    UnknownRoute(String),

    /// Not one of the five filterable regions.
    #[error("unknown region: {0}")]
    UnknownRegion(String),
}

/// A specialized Result type for directory operations.
pub type Result<T> = std::result::Result<T, DirectoryError>;

impl From<figment::Error> for DirectoryError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl DirectoryError {
    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an invalid route error.
    #[must_use]
    pub fn invalid_route(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidRoute {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a transport error for front ends that fetch on their own.
    #[must_use]
    pub fn fetch_failed(url: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Fetch {
            url: url.into(),
            message: err.to_string(),
        }
    }

    /// True for errors caused by the navigational path rather than the data.
    #[must_use]
    pub fn is_route_error(&self) -> bool {
        matches!(self, Self::InvalidRoute { .. } | Self::UnknownRoute(_))
    }
}
