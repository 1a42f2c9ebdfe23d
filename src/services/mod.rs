pub mod colorizer;
pub mod trace_observer;

pub use colorizer::{render, ColorReport, ColorService, ContributionReport, HueReport, LchReport};
pub use trace_observer::TracingObserver;
