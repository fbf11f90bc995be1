//! Plain-text rendering of the view models for the terminal.

use countries_core::prelude::*;
use countries_core::view::{ListModel, LOADING_MESSAGE};
use std::fmt;

pub const NO_MATCHES: &str = "No countries match.";

/// A full screen: header line, then the body.
pub struct ScreenText<'a>(pub &'a Screen);

/// The list view: filter controls, the region menu when open, and the
/// cards.
pub struct ListText<'a>(pub &'a ListModel);

pub struct CardsText<'a>(pub &'a [CountryCard]);

pub struct DetailText<'a>(pub &'a CountryDetail);

pub struct StatsText<'a>(pub &'a DirectoryStats);

impl fmt::Display for ScreenText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let screen = self.0;
        let mode = if screen.theme.is_dark() { "on" } else { "off" };
        writeln!(f, "{}    [{}: {mode}]", screen.header.title, screen.header.toggle_label)?;
        writeln!(f, "{}", "=".repeat(screen.header.title.chars().count()))?;
        match &screen.body {
            Body::List(model) => write!(f, "{}", ListText(model)),
            Body::Detail { phase, message, .. } => match (phase, message) {
                (DetailPhase::Found(d), _) => write!(f, "{}", DetailText(d)),
                (_, Some(message)) => writeln!(f, "{message}"),
                (_, None) => Ok(()),
            },
        }
    }
}

impl fmt::Display for ListText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let model = self.0;
        let region = model.region.map_or("All", Region::as_str);
        writeln!(f, "Search: {:?}    Region: {region}", model.search)?;
        if let Some(options) = &model.region_options {
            for option in options {
                let mark = if option.selected { 'x' } else { ' ' };
                writeln!(f, "  [{mark}] {}", option.region)?;
            }
        }
        writeln!(f)?;

        if model.loading {
            writeln!(f, "{LOADING_MESSAGE}")
        } else if model.cards.is_empty() {
            writeln!(f, "{NO_MATCHES}")
        } else {
            write!(f, "{}", CardsText(&model.cards))
        }
    }
}

impl fmt::Display for CardsText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in self.0 {
            writeln!(f, "{}", card.name)?;
            writeln!(f, "  Population: {}", card.population)?;
            writeln!(f, "  Region: {}", card.region)?;
            writeln!(f, "  Capital: {}", card.capital.as_deref().unwrap_or(""))?;
            writeln!(f, "  -> {}", card.path)?;
        }
        Ok(())
    }
}

impl fmt::Display for DetailText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.0;
        writeln!(f, "<- Back ({})", d.back_path)?;
        writeln!(f)?;
        writeln!(f, "{}", d.name)?;
        let population = d.population.to_string();
        let rows: [(&str, &str); 8] = [
            ("Native Name", d.native_name.as_deref().unwrap_or("")),
            ("Population", &population),
            ("Region", &d.region),
            ("Sub Region", d.subregion.as_deref().unwrap_or("")),
            ("Capital", d.capital.as_deref().unwrap_or("")),
            ("Top Level Domain", &d.top_level_domain),
            ("Currencies", &d.currencies),
            ("Languages", &d.languages),
        ];
        for (label, value) in rows {
            writeln!(f, "  {label}: {value}")?;
        }
        writeln!(f, "  Border Countries: {}", d.border_labels().join(", "))?;
        if let Some(flag) = &d.flag_url {
            writeln!(f, "  Flag: {flag}")?;
        }
        Ok(())
    }
}

impl fmt::Display for StatsText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = self.0;
        for (region, count) in &stats.regions {
            writeln!(f, "{:<10} {count:>5}", region.as_str())?;
        }
        if stats.other > 0 {
            writeln!(f, "{:<10} {:>5}", "(other)", stats.other)?;
        }
        writeln!(f, "{:<10} {:>5}", "Total", stats.countries)
    }
}
