//! countries - command-line front end for countries-core
//!
//! Usage examples
//! --------------
//!
//! - List every country, or filter by name and region
//!   $ countries list
//!   $ countries list --search land --region europe
//!
//! - Show a country with its neighbours
//!   $ countries country "united states of america"
//!
//! - Render a path the way the browser would
//!   $ countries open /country/C%C3%B4te%20d'Ivoire
//!
//! - Browse interactively (type `help` for commands)
//!   $ countries browse
//!
//! Data source
//! -----------
//!
//! The dataset location comes from `countries.toml` (`[data] location`),
//! `COUNTRIES_DATA__LOCATION`, or `--data`, in increasing precedence. It may
//! be a JSON file, a gzipped JSON file, or an http(s) URL. Without any of
//! these the sample dataset bundled with countries-core is used.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use countries_cli::logging::init_logging;
use countries_cli::render;
use countries_cli::session::Session;
use countries_core::prelude::*;
use countries_core::Config;
use std::io;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let config = Config::load_from(args.config.as_deref()).context("loading configuration")?;
    init_logging(args.verbosity(), &config.log.level);

    let location = match &args.data {
        Some(data) => DataLocation::parse(data),
        None => config.data_location(),
    };
    tracing::debug!(%location, "using dataset");
    let source = location.open()?;

    match args.command {
        Commands::List { search, region } => {
            let region = region.as_deref().map(str::parse::<Region>).transpose()?;
            let mut app = App::new();
            settle(&mut app, &*source);
            if let Some(list) = app.list_mut() {
                list.set_search(search);
                if let Some(region) = region {
                    list.select_region(region);
                }
                let model = list.model();
                if args.json {
                    println!("{}", serde_json::to_string_pretty(&model.cards)?);
                } else {
                    print!("{}", render::ListText(&model));
                }
            }
        }

        Commands::Country { name } => {
            let mut app = App::new();
            app.activate(Route::country(name));
            settle(&mut app, &*source);
            print_screen(&app, args.json)?;
        }

        Commands::Open { path } => {
            let mut app = App::new();
            app.navigate(&path)
                .with_context(|| format!("cannot open {path:?}"))?;
            settle(&mut app, &*source);
            print_screen(&app, args.json)?;
        }

        Commands::Regions => {
            let countries = source.fetch()?;
            let stats = countries.stats();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                print!("{}", render::StatsText(&stats));
            }
        }

        Commands::Browse => {
            let stdin = io::stdin();
            let mut session = Session::new(source);
            session.run(stdin.lock(), io::stdout().lock(), args.json)?;
        }
    }

    Ok(())
}

/// Fetch for the pending activation, if there is one.
fn settle(app: &mut App, source: &dyn DataSource) {
    if let Some(ticket) = app.pending_fetch() {
        app.deliver(ticket, source.fetch());
    }
}

fn print_screen(app: &App, json: bool) -> anyhow::Result<()> {
    let screen = app.render();
    if json {
        println!("{}", serde_json::to_string_pretty(&screen)?);
    } else {
        print!("{}", render::ScreenText(&screen));
    }
    Ok(())
}
