//! Kite - color notation for just-intonation intervals
//!
//! Command-line harness around `kite_color`: configuration, interval
//! parsing and report rendering. This library exposes modules for
//! integration testing.

pub mod assets;
pub mod error;
pub mod models;
pub mod services;
