// crates/countries-core/src/source/http.rs
use super::{parse_dataset, DataSource};
use crate::error::Result;
use crate::model::Country;

/// Dataset served over HTTP, fetched with a blocking client.
///
/// One GET per fetch. No retry and no timeout beyond the client defaults;
/// a non-success status is an error.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    client: reqwest::blocking::Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(url, reqwest::blocking::Client::new())
    }

    pub fn with_client(url: impl Into<String>, client: reqwest::blocking::Client) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl DataSource for HttpSource {
    fn fetch(&self) -> Result<Vec<Country>> {
        tracing::debug!(url = %self.url, "fetching dataset");
        let response = self.client.get(&self.url).send()?.error_for_status()?;
        tracing::debug!(status = %response.status(), "dataset response");
        let body = response.text()?;
        parse_dataset(&body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
