//! Support code for the `countries` binary: logging setup, text rendering
//! and the interactive browse session.

pub mod logging;
pub mod render;
pub mod session;
