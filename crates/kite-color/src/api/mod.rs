//! Builder entry point for the crate.

mod colorizer;

pub use colorizer::KiteColorizer;
