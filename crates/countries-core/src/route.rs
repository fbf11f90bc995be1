// crates/countries-core/src/route.rs

//! Navigational paths: `/` for the list and `/country/{name}` for a detail
//! page, the name percent-encoded the way `encodeURIComponent` does it.

use crate::error::{DirectoryError, Result};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Characters escaped in a path segment. Everything but the unreserved set
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const COUNTRY_PREFIX: &str = "/country/";

/// One of the two views.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "route", rename_all = "snake_case")]
pub enum Route {
    /// `/`
    #[default]
    List,
    /// `/country/{name}`; `name` is stored decoded.
    Country { name: String },
}

impl Route {
    pub fn country(name: impl Into<String>) -> Self {
        Route::Country { name: name.into() }
    }

    /// Resolve a path. A trailing `/`, a query and a fragment are ignored.
    pub fn parse(path: &str) -> Result<Self> {
        let trimmed = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_end_matches('/');

        if trimmed.is_empty() {
            return Ok(Route::List);
        }

        match trimmed.strip_prefix(COUNTRY_PREFIX) {
            Some(segment) if !segment.is_empty() && !segment.contains('/') => {
                let name = decode_component(segment)
                    .map_err(|message| DirectoryError::invalid_route(path, message))?;
                Ok(Route::Country { name })
            }
            _ => Err(DirectoryError::UnknownRoute(path.to_string())),
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Route::List => "/".to_string(),
            Route::Country { name } => format!("{COUNTRY_PREFIX}{}", encode_component(name)),
        }
    }
}

impl FromStr for Route {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self> {
        Route::parse(s)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}

/// Percent-encode a path segment like `encodeURIComponent`.
///
/// ```rust
/// use countries_core::route::encode_component;
/// assert_eq!(encode_component("Bolivia (Plurinational State of)"),
///            "Bolivia%20(Plurinational%20State%20of)");
/// ```
pub fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, COMPONENT).to_string()
}

/// Percent-decode a path segment. Rejects `%` not followed by two hex
/// digits and escapes that do not decode to UTF-8.
pub fn decode_component(s: &str) -> std::result::Result<String, String> {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes.len() > i + 2
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !valid {
                return Err(format!("malformed escape at byte {i}"));
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    percent_decode_str(s)
        .decode_utf8()
        .map(|cow| cow.into_owned())
        .map_err(|e| format!("escape is not UTF-8: {e}"))
}
