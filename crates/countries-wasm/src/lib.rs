//! countries-wasm - WebAssembly bindings for countries-core
//!
//! This crate exposes the country directory to JavaScript as a single
//! `CountriesApp` class. The page owns the DOM; the class owns the state
//! (theme, route, filters, fetched data) and hands back a plain JS object
//! describing what to draw.
//!
//! What it provides
//! ----------------
//! - `new CountriesApp(dataUrl)`: starts on the list view and fetches the
//!   dataset from `dataUrl` (relative URLs resolve against the page URL;
//!   the constructor throws when `dataUrl` cannot be resolved)
//! - `navigate(path)`: `/` or `/country/{name}`; every call fetches afresh
//! - list controls: `set_search`, `select_region`, `clear_region`,
//!   `toggle_region_menu`
//! - `toggle_dark_mode()`, `is_dark()`
//! - `on_change(callback)`: called whenever a fetch completes
//! - `render()`: the screen view model
//! - free functions `encode_country_path(name)` and `regions()`
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { CountriesApp } from 'countries-wasm';
//!
//! async function main() {
//!   await init();
//!   const app = new CountriesApp('/data.json');
//!   app.on_change(() => draw(app.render()));
//!   window.addEventListener('popstate', () => {
//!     app.navigate(location.pathname);
//!     draw(app.render());
//!   });
//!   draw(app.render()); // "Loading..." until the dataset arrives
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - A fetch that completes after the user navigated away is dropped.
//! - Fetch failures are logged to the console; the list shows nothing and
//!   the detail view shows "Country not found!".
use std::cell::RefCell;
use std::fmt::Display;
use std::rc::Rc;

use countries_core::{App, Country, DirectoryError, FetchTicket, Region, Route};
use countries_core::source::parse_dataset;
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use url::Url;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing countries WASM module...".into());
}

/* --------------------------------------------------------------------------
   Helpers
-------------------------------------------------------------------------- */

fn log(message: &str) {
    web_sys::console::log_1(&message.into());
}

fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

fn js_error(err: impl Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Plain objects rather than `Map`s, so flattened fields read like any
/// other property.
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(js_error)
}

/// Resolve `data_url` against the page's URL, as the browser's own
/// `fetch` would. Without a page (e.g. under Node) the URL is kept as given.
fn resolve_data_url(page_url: Option<&str>, data_url: &str) -> Result<String, url::ParseError> {
    match page_url {
        Some(base) => Ok(Url::parse(base)?.join(data_url)?.into()),
        None => Ok(data_url.to_string()),
    }
}

fn page_url() -> Option<String> {
    web_sys::window().and_then(|w| w.location().href().ok())
}

async fn fetch_dataset(url: &str) -> countries_core::Result<Vec<Country>> {
    let fail = |err: reqwest::Error| DirectoryError::fetch_failed(url, err);
    let text = reqwest::get(url)
        .await
        .map_err(fail)?
        .error_for_status()
        .map_err(fail)?
        .text()
        .await
        .map_err(fail)?;
    parse_dataset(&text)
}

/* --------------------------------------------------------------------------
   CountriesApp
-------------------------------------------------------------------------- */

struct Shared {
    app: RefCell<App>,
    data_url: String,
    listener: RefCell<Option<js_sys::Function>>,
}

impl Shared {
    fn notify(&self) {
        // Cloned so the callback may call on_change itself.
        let listener = self.listener.borrow().clone();
        if let Some(callback) = listener {
            if let Err(err) = callback.call0(&JsValue::NULL) {
                web_sys::console::error_2(&"change listener failed:".into(), &err);
            }
        }
    }
}

/// Start the fetch for `ticket` and hand the result to the app when it
/// arrives.
fn spawn_fetch(shared: &Rc<Shared>, ticket: FetchTicket) {
    let shared = Rc::clone(shared);
    spawn_local(async move {
        let result = fetch_dataset(&shared.data_url).await;
        if let Err(err) = &result {
            warn(&err.to_string());
        }
        let delivered = shared.app.borrow_mut().deliver(ticket, result);
        if delivered {
            shared.notify();
        } else {
            log(&format!("dropped dataset for stale view #{}", ticket.id()));
        }
    });
}

/// The country directory, driven from JavaScript.
#[wasm_bindgen]
pub struct CountriesApp {
    shared: Rc<Shared>,
}

#[wasm_bindgen]
impl CountriesApp {
    /// Create the app on the list route and start fetching `data_url`.
    /// Throws when `data_url` cannot be resolved against the page URL.
    #[wasm_bindgen(constructor)]
    pub fn new(data_url: &str) -> Result<CountriesApp, JsValue> {
        let data_url = resolve_data_url(page_url().as_deref(), data_url).map_err(js_error)?;
        let app = App::new();
        let pending = app.pending_fetch();
        let shared = Rc::new(Shared {
            app: RefCell::new(app),
            data_url,
            listener: RefCell::new(None),
        });
        if let Some(ticket) = pending {
            spawn_fetch(&shared, ticket);
        }
        Ok(CountriesApp { shared })
    }

    /// Show the view for `path`. Throws on paths that match no route; the
    /// current view stays.
    pub fn navigate(&self, path: &str) -> Result<(), JsValue> {
        let ticket = self
            .shared
            .app
            .borrow_mut()
            .navigate(path)
            .map_err(js_error)?;
        spawn_fetch(&self.shared, ticket);
        Ok(())
    }

    /// Current path, e.g. for `history.pushState`.
    pub fn path(&self) -> String {
        self.shared.app.borrow().route().to_path()
    }

    pub fn set_search(&self, text: &str) {
        if let Some(list) = self.shared.app.borrow_mut().list_mut() {
            list.set_search(text);
        }
    }

    /// Case-insensitive region name. Throws on anything but the five
    /// regions.
    pub fn select_region(&self, name: &str) -> Result<(), JsValue> {
        let region: Region = name.parse().map_err(js_error)?;
        if let Some(list) = self.shared.app.borrow_mut().list_mut() {
            list.select_region(region);
        }
        Ok(())
    }

    pub fn clear_region(&self) {
        if let Some(list) = self.shared.app.borrow_mut().list_mut() {
            list.clear_region();
        }
    }

    pub fn toggle_region_menu(&self) {
        if let Some(list) = self.shared.app.borrow_mut().list_mut() {
            list.toggle_region_menu();
        }
    }

    pub fn toggle_dark_mode(&self) {
        self.shared.app.borrow_mut().toggle_dark_mode();
    }

    pub fn is_dark(&self) -> bool {
        self.shared.app.borrow().theme().is_dark()
    }

    /// Register the callback run after each delivered fetch. Replaces any
    /// earlier one.
    pub fn on_change(&self, callback: js_sys::Function) {
        *self.shared.listener.borrow_mut() = Some(callback);
    }

    /// The screen view model as a plain object.
    pub fn render(&self) -> Result<JsValue, JsValue> {
        let screen = self.shared.app.borrow().render();
        to_js(&screen)
    }
}

/* --------------------------------------------------------------------------
   Free functions
-------------------------------------------------------------------------- */

/// `/country/{name}` with the name percent-encoded.
#[wasm_bindgen]
pub fn encode_country_path(name: &str) -> String {
    Route::country(name).to_path()
}

/// The five filterable region names, in menu order.
#[wasm_bindgen]
pub fn regions() -> Result<JsValue, JsValue> {
    let names: Vec<&str> = Region::ALL.iter().map(|r| r.as_str()).collect();
    to_js(&names)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "https://example.org/app/index.html";

    #[test]
    fn relative_urls_resolve_against_the_page() {
        let page = Some(PAGE);
        assert_eq!(resolve_data_url(page, "/data.json").unwrap(), "https://example.org/data.json");
        assert_eq!(resolve_data_url(page, "data.json").unwrap(), "https://example.org/app/data.json");
        assert_eq!(resolve_data_url(page, "../data.json").unwrap(), "https://example.org/data.json");
    }

    #[test]
    fn protocol_relative_and_absolute_urls_keep_their_host() {
        let page = Some(PAGE);
        assert_eq!(
            resolve_data_url(page, "//cdn.example.org/data.json").unwrap(),
            "https://cdn.example.org/data.json"
        );
        assert_eq!(
            resolve_data_url(page, "http://mirror.example.net/data.json").unwrap(),
            "http://mirror.example.net/data.json"
        );
    }

    #[test]
    fn without_a_page_the_url_is_kept() {
        assert_eq!(resolve_data_url(None, "/data.json").unwrap(), "/data.json");
        assert!(resolve_data_url(Some("not a url"), "/data.json").is_err());
    }

    #[test]
    fn region_names_in_menu_order() {
        let names: Vec<&str> = Region::ALL.iter().map(|r| r.as_str()).collect();
        assert_eq!(names, ["Africa", "Americas", "Asia", "Europe", "Oceania"]);
    }

    #[test]
    fn country_paths_are_encoded() {
        assert_eq!(encode_country_path("Côte d'Ivoire"), "/country/C%C3%B4te%20d'Ivoire");
    }
}
