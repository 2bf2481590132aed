//! Library components for the `hvfhir` command-line converter.

pub mod input;
pub mod logging;
pub mod pipeline;
