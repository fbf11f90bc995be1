//! Basic usage example for countries-rs
//!
//! This example demonstrates how to:
//! - Load the bundled sample dataset
//! - Filter countries by name and region
//! - Resolve a country's neighbours
//! - Drive the app through paths, the way a front end does

use countries_rs::prelude::*;
use countries_rs::source::default_data_path;

fn main() -> Result<()> {
    println!("=== countries-rs Basic Usage Example ===\n");

    // Load the dataset
    println!("Loading dataset...");
    let source = FileSource::new(default_data_path());
    let countries = Directory::new(source.fetch()?);
    println!("✓ {} countries loaded\n", countries.len());

    // Example 1: Search by name
    println!("--- Example 1: Search \"an\" ---");
    let filter = CountryFilter::new().with_search("an");
    for country in countries.filter(&filter) {
        println!("{} ({})", country.name(), country.region());
    }
    println!();

    // Example 2: Search within a region
    println!("--- Example 2: Search \"an\" in Europe ---");
    let filter = filter.with_region(Region::Europe);
    for country in countries.filter(&filter) {
        println!("{}", country.name());
    }
    println!();

    // Example 3: Neighbours
    println!("--- Example 3: Neighbours of France ---");
    if let Some(france) = countries.find_by_name("france") {
        for neighbour in countries.neighbours(france) {
            let note = if neighbour.is_resolved() { "" } else { " (not in dataset)" };
            println!("{}{note}", neighbour.label());
        }
    }
    println!();

    // Example 4: Navigation
    println!("--- Example 4: Follow a path ---");
    let mut app = App::new();
    let path = Route::country("Côte d'Ivoire").to_path();
    println!("Path: {path}");
    let ticket = app.navigate(&path)?;
    app.deliver(ticket, source.fetch());
    if let View::Detail(view) = app.view() {
        match view.detail() {
            Some(detail) => {
                println!("Capital: {}", detail.capital.as_deref().unwrap_or("-"));
                println!("Currencies: {}", detail.currencies);
                println!("Languages: {}", detail.languages);
            }
            None => println!("{}", view.message().unwrap_or_default()),
        }
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}
