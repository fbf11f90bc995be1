//! Umbrella crate for the country directory workspace.
//!
//! Re-exports `countries-core` so demos can write `countries_rs::prelude::*`.

pub use countries_core::*;
