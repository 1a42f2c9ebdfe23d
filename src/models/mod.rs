pub mod config;
pub mod interval;

pub use config::{AppConfig, ConfigSource, OutputConfig, OutputFormat, RatioSetting, TuningConfig};
pub use interval::{Interval, IntervalError};
