//! Line-driven browsing session for `countries browse`.
//!
//! Every activation fetches the dataset again through the configured
//! source, the same way each view does in the browser.

use anyhow::{anyhow, bail, Context};
use countries_core::prelude::*;
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::render;

pub const HELP: &str = "\
commands:
  search [TEXT]   filter by name (no text clears the search)
  region NAME     filter by region
  clear           clear the region filter
  menu            open or close the region menu
  open NAME       show a country
  go PATH         follow a path, e.g. /country/Japan
  back            return to the list
  dark            toggle dark mode
  help            show this text
  quit            leave";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Region(Region),
    ClearRegion,
    Menu,
    Open(String),
    Go(String),
    Back,
    Dark,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> anyhow::Result<Self> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let command = match word.to_ascii_lowercase().as_str() {
            "search" => Command::Search(rest.to_string()),
            "region" => Command::Region(rest.parse()?),
            "clear" => Command::ClearRegion,
            "menu" => Command::Menu,
            "open" if !rest.is_empty() => Command::Open(rest.to_string()),
            "go" if !rest.is_empty() => Command::Go(rest.to_string()),
            "open" | "go" => bail!("{word} needs an argument"),
            "back" => Command::Back,
            "dark" => Command::Dark,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => bail!("unknown command {other:?}, try 'help'"),
        };
        Ok(command)
    }
}

/// What the caller should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// State changed; show the screen again.
    Render,
    /// Print this line and keep the screen as it is.
    Message(String),
    Quit,
}

pub struct Session {
    app: App,
    source: Box<dyn DataSource>,
}

impl Session {
    /// Start on the list view with its dataset already fetched.
    pub fn new(source: Box<dyn DataSource>) -> Self {
        let mut session = Self { app: App::new(), source };
        session.settle();
        session
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    /// Run the fetch the current view is waiting for, if any.
    fn settle(&mut self) {
        if let Some(ticket) = self.app.pending_fetch() {
            tracing::debug!(source = %self.source.describe(), "fetching dataset");
            let result = self.source.fetch();
            self.app.deliver(ticket, result);
        }
    }

    fn list(&mut self) -> anyhow::Result<&mut ListView> {
        self.app
            .list_mut()
            .ok_or_else(|| anyhow!("not on the list view, use 'back' first"))
    }

    fn apply(&mut self, command: Command) -> anyhow::Result<Outcome> {
        match command {
            Command::Search(text) => self.list()?.set_search(text),
            Command::Region(region) => self.list()?.select_region(region),
            Command::ClearRegion => self.list()?.clear_region(),
            Command::Menu => self.list()?.toggle_region_menu(),
            Command::Open(name) => {
                self.app.activate(Route::country(name));
            }
            Command::Go(path) => {
                self.app.navigate(&path)?;
            }
            Command::Back => {
                self.app.activate(Route::List);
            }
            Command::Dark => self.app.toggle_dark_mode(),
            Command::Help => return Ok(Outcome::Message(HELP.to_string())),
            Command::Quit => return Ok(Outcome::Quit),
        }
        self.settle();
        Ok(Outcome::Render)
    }

    /// Parse and apply one input line. Errors become messages.
    pub fn execute(&mut self, line: &str) -> Outcome {
        let result = line.parse::<Command>().and_then(|command| self.apply(command));
        match result {
            Ok(outcome) => outcome,
            Err(err) => Outcome::Message(format!("error: {err}")),
        }
    }

    fn show<W: Write>(&self, out: &mut W, json: bool) -> anyhow::Result<()> {
        let screen = self.app.render();
        if json {
            writeln!(out, "{}", serde_json::to_string(&screen)?)?;
        } else {
            writeln!(out, "{}", render::ScreenText(&screen))?;
        }
        Ok(())
    }

    /// Read commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W, json: bool) -> anyhow::Result<()> {
        self.show(&mut out, json)?;
        for line in input.lines() {
            let line = line.context("reading command")?;
            if line.trim().is_empty() {
                continue;
            }
            match self.execute(&line) {
                Outcome::Render => self.show(&mut out, json)?,
                Outcome::Message(message) => writeln!(out, "{message}")?,
                Outcome::Quit => break,
            }
        }
        out.flush()?;
        Ok(())
    }
}
