// crates/countries-core/src/app.rs

//! Top-level application state: the dark-mode flag, the current route and
//! the view it activated.
//!
//! Fetching is left to the front end. Every activation hands out a
//! [`FetchTicket`]; the front end fetches the dataset however it can and
//! gives the result back through [`App::deliver`] together with the ticket.
//! Results for a view that has since been replaced are discarded.

use crate::error::Result;
use crate::model::Country;
use crate::route::Route;
use crate::view::{DetailPhase, ListModel, ListView, View};
use serde::{Deserialize, Serialize};

pub const TITLE: &str = "Where in the world?";
pub const DARK_MODE_LABEL: &str = "Dark Mode";

/// Identifies the view activation a dataset fetch was started for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Light or dark styling. Never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Class applied to the root container.
    pub fn root_class(self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => "dark",
        }
    }

    /// Class applied to the header.
    pub fn header_class(self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => "darkHeader",
        }
    }
}

/// The header shown above every view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub title: String,
    pub toggle_label: String,
    pub class: String,
}

/// What the current view renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum Body {
    List(ListModel),
    Detail {
        /// The name requested by the path.
        name: String,
        #[serde(flatten)]
        phase: DetailPhase,
        /// Placeholder text while loading or when nothing matched.
        message: Option<String>,
    },
}

/// A complete frame: header, theme classes and body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    pub theme: Theme,
    pub root_class: String,
    pub path: String,
    pub header: Header,
    pub body: Body,
}

/// The running application.
#[derive(Debug, Clone)]
pub struct App {
    theme: Theme,
    route: Route,
    view: View,
    issued: u64,
    pending: Option<FetchTicket>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// An app on the list route. The initial activation's ticket is
    /// available from [`App::pending_fetch`].
    pub fn new() -> Self {
        let mut app = Self {
            theme: Theme::default(),
            route: Route::List,
            view: View::List(ListView::new()),
            issued: 0,
            pending: None,
        };
        app.activate(Route::List);
        app
    }

    /// Parse `path` and activate its view. Unknown or malformed paths leave
    /// the current view in place.
    pub fn navigate(&mut self, path: &str) -> Result<FetchTicket> {
        let route = Route::parse(path)?;
        Ok(self.activate(route))
    }

    /// Tear down the current view and start a fresh one for `route`.
    ///
    /// Filter state does not survive: coming back to the list starts over.
    pub fn activate(&mut self, route: Route) -> FetchTicket {
        self.issued += 1;
        let ticket = FetchTicket(self.issued);
        tracing::debug!(route = %route, ticket = ticket.id(), "activating view");
        self.view = View::for_route(&route);
        self.route = route;
        self.pending = Some(ticket);
        ticket
    }

    /// Hand a fetched dataset to the view it was requested for.
    ///
    /// Returns `false`, dropping the result, when `ticket` does not belong
    /// to the current view.
    pub fn deliver(&mut self, ticket: FetchTicket, result: Result<Vec<Country>>) -> bool {
        if self.pending != Some(ticket) {
            tracing::debug!(ticket = ticket.id(), "discarding dataset for a torn-down view");
            return false;
        }
        self.pending = None;
        self.view.load(result);
        true
    }

    /// Ticket of the fetch the current view is still waiting for.
    pub fn pending_fetch(&self) -> Option<FetchTicket> {
        self.pending
    }

    pub fn toggle_dark_mode(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    /// The list view, when it is the active one.
    pub fn list_mut(&mut self) -> Option<&mut ListView> {
        match &mut self.view {
            View::List(list) => Some(list),
            View::Detail(_) => None,
        }
    }

    pub fn render(&self) -> Screen {
        let body = match &self.view {
            View::List(list) => Body::List(list.model()),
            View::Detail(detail) => Body::Detail {
                name: detail.name().to_string(),
                phase: detail.phase().clone(),
                message: detail.message().map(str::to_string),
            },
        };
        Screen {
            theme: self.theme,
            root_class: self.theme.root_class().to_string(),
            path: self.route.to_path(),
            header: Header {
                title: TITLE.to_string(),
                toggle_label: DARK_MODE_LABEL.to_string(),
                class: self.theme.header_class().to_string(),
            },
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Region;
    use crate::source::{DataSource, StaticSource};
    use crate::view::NOT_FOUND_MESSAGE;

    const DATA: &str = r#"[
        {"name": "France", "region": "Europe", "alpha3Code": "FRA", "borders": ["ESP", "DEU"]},
        {"name": "Spain", "region": "Europe", "alpha3Code": "ESP", "borders": ["FRA"]},
        {"name": "Germany", "region": "Europe", "alpha3Code": "DEU"},
        {"name": "Brazil", "region": "Americas", "alpha3Code": "BRA"}
    ]"#;

    fn fetch() -> Result<Vec<Country>> {
        StaticSource::new(DATA).fetch()
    }

    #[test]
    fn dark_mode_toggles_back() {
        let mut app = App::new();
        let before = app.render();
        app.toggle_dark_mode();
        assert_eq!(app.render().root_class, "dark");
        assert_eq!(app.render().header.class, "darkHeader");
        app.toggle_dark_mode();
        let after = app.render();
        assert_eq!(after.theme, Theme::Light);
        assert_eq!(after.root_class, before.root_class);
        assert_eq!(after.header, before.header);
    }

    #[test]
    fn initial_activation_is_pending() {
        let mut app = App::new();
        let ticket = app.pending_fetch().unwrap();
        assert!(app.view().is_loading());
        assert!(app.deliver(ticket, fetch()));
        assert!(app.pending_fetch().is_none());
        assert!(!app.view().is_loading());
    }

    #[test]
    fn stale_results_are_discarded() {
        let mut app = App::new();
        let first = app.pending_fetch().unwrap();
        let second = app.navigate("/country/France").unwrap();

        assert!(!app.deliver(first, fetch()));
        assert!(app.view().is_loading());

        assert!(app.deliver(second, fetch()));
        assert!(!app.deliver(second, fetch()));
    }

    #[test]
    fn detail_resolves_neighbours() {
        let mut app = App::new();
        let ticket = app.navigate("/country/france").unwrap();
        app.deliver(ticket, fetch());
        match app.render().body {
            Body::Detail { phase: DetailPhase::Found(detail), message, .. } => {
                assert_eq!(detail.border_labels(), ["Spain", "Germany"]);
                assert!(message.is_none());
            }
            other => panic!("unexpected body {other:?}"),
        }
    }

    #[test]
    fn not_found_after_load() {
        let mut app = App::new();
        let ticket = app.navigate("/country/Atlantis").unwrap();
        app.deliver(ticket, fetch());
        match app.render().body {
            Body::Detail { message, .. } => assert_eq!(message.as_deref(), Some(NOT_FOUND_MESSAGE)),
            other => panic!("unexpected body {other:?}"),
        }
    }

    #[test]
    fn filter_state_does_not_survive_navigation() {
        let mut app = App::new();
        let t = app.pending_fetch().unwrap();
        app.deliver(t, fetch());
        let list = app.list_mut().unwrap();
        list.set_search("an");
        list.select_region(Region::Europe);
        assert_eq!(list.cards().len(), 2);

        let t = app.navigate("/country/Spain").unwrap();
        app.deliver(t, fetch());
        assert!(app.list_mut().is_none());

        let t = app.navigate("/").unwrap();
        app.deliver(t, fetch());
        let list = app.list_mut().unwrap();
        assert!(list.filter().is_empty());
        assert_eq!(list.cards().len(), 4);
    }

    #[test]
    fn bad_path_keeps_current_view() {
        let mut app = App::new();
        assert!(app.navigate("/nowhere").is_err());
        assert_eq!(app.route(), &Route::List);
        assert_eq!(app.render().path, "/");
    }
}
