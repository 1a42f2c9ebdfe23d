use crate::assets::AssetLoader;
use crate::error::ConfigError;
use kite_color::Tuning;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Application configuration loaded from config.yaml
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    /// Color notation constants
    #[serde(default)]
    pub tuning: TuningConfig,

    /// How reports are printed
    #[serde(default)]
    pub output: OutputConfig,
}

/// Tuning section; every key falls back to the default notation
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TuningConfig {
    #[serde(default = "default_neutral_hue")]
    pub neutral_hue: f64,

    #[serde(default = "default_hue_swing")]
    pub hue_swing: f64,

    #[serde(default = "default_hue_correction_divisor")]
    pub hue_correction_divisor: f64,

    #[serde(default = "default_desaturate_factor")]
    pub desaturate_factor: f64,

    /// Either a number or a fraction string such as "65/63"
    #[serde(default = "default_quarter_tone")]
    pub quarter_tone: RatioSetting,

    #[serde(default = "default_wolf_threshold")]
    pub wolf_threshold: u32,
}

fn default_neutral_hue() -> f64 {
    Tuning::default().neutral_hue
}

fn default_hue_swing() -> f64 {
    Tuning::default().hue_swing
}

fn default_hue_correction_divisor() -> f64 {
    Tuning::default().hue_correction_divisor
}

fn default_desaturate_factor() -> f64 {
    Tuning::default().desaturate_factor
}

fn default_quarter_tone() -> RatioSetting {
    RatioSetting::Fraction("65/63".to_string())
}

fn default_wolf_threshold() -> u32 {
    Tuning::default().wolf_threshold
}

impl Default for TuningConfig {
    fn default() -> Self {
        Self {
            neutral_hue: default_neutral_hue(),
            hue_swing: default_hue_swing(),
            hue_correction_divisor: default_hue_correction_divisor(),
            desaturate_factor: default_desaturate_factor(),
            quarter_tone: default_quarter_tone(),
            wolf_threshold: default_wolf_threshold(),
        }
    }
}

/// A ratio written as a plain number or as `"n/d"`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RatioSetting {
    Number(f64),
    Fraction(String),
}

impl RatioSetting {
    pub fn value(&self) -> Result<f64, ConfigError> {
        match self {
            RatioSetting::Number(value) => Ok(*value),
            RatioSetting::Fraction(text) => {
                let invalid = || ConfigError::Ratio(text.clone());
                let value = match text.split_once('/') {
                    Some((num, den)) => {
                        let num: f64 = num.trim().parse().map_err(|_| invalid())?;
                        let den: f64 = den.trim().parse().map_err(|_| invalid())?;
                        if den == 0.0 {
                            return Err(invalid());
                        }
                        num / den
                    }
                    None => text.trim().parse().map_err(|_| invalid())?,
                };
                Ok(value)
            }
        }
    }
}

/// Report format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// List per-prime contributions in text reports
    #[serde(default = "default_show_contributions")]
    pub show_contributions: bool,
}

fn default_show_contributions() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            show_contributions: default_show_contributions(),
        }
    }
}

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `--config` on the command line
    Argument(PathBuf),
    /// `KITE_CONFIG` in the environment
    Environment(PathBuf),
    Embedded,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Argument(path) => write!(f, "--config {}", path.display()),
            ConfigSource::Environment(path) => write!(f, "KITE_CONFIG={}", path.display()),
            ConfigSource::Embedded => write!(f, "embedded config.yaml"),
        }
    }
}

impl AppConfig {
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load configuration from AssetLoader (external file or embedded)
    pub fn load(loader: &AssetLoader) -> Result<Self, ConfigError> {
        let content = loader.read_config_string()?;
        let config = Self::from_yaml_str(&content)?;
        tracing::info!(
            filesystem = loader.uses_filesystem(),
            format = ?config.output.format,
            wolf_threshold = config.tuning.wolf_threshold,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Pick the config by precedence: explicit path, then environment, then embedded.
    ///
    /// An explicit path must exist. An environment path that does not exist yet
    /// is seeded with the embedded default.
    pub fn resolve(
        explicit: Option<PathBuf>,
        env: Option<PathBuf>,
    ) -> Result<(Self, ConfigSource), ConfigError> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ConfigError::NotFound(path));
            }
            let config = Self::load(&AssetLoader::new(Some(path.clone())))?;
            return Ok((config, ConfigSource::Argument(path)));
        }

        if let Some(path) = env {
            let loader = AssetLoader::new(Some(path.clone()));
            if let Err(e) = loader.seed_if_configured() {
                tracing::warn!(path = %path.display(), %e, "Failed to seed config file, using embedded default");
            }
            let config = Self::load(&loader)?;
            return Ok((config, ConfigSource::Environment(path)));
        }

        let config = Self::load(&AssetLoader::new(None))?;
        Ok((config, ConfigSource::Embedded))
    }

    /// Validated tuning constants
    pub fn to_tuning(&self) -> Result<Tuning, ConfigError> {
        let section = &self.tuning;
        let tuning = Tuning {
            neutral_hue: section.neutral_hue,
            hue_swing: section.hue_swing,
            hue_correction_divisor: section.hue_correction_divisor,
            desaturate_factor: section.desaturate_factor,
            quarter_tone: section.quarter_tone.value()?,
            wolf_threshold: section.wolf_threshold,
        };
        tuning.validate()?;
        Ok(tuning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_embedded_config_matches_defaults() {
        let config = AppConfig::load(&AssetLoader::new(None)).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.to_tuning().unwrap(), Tuning::default());
    }

    #[test]
    fn test_empty_sections_take_defaults() {
        let config = AppConfig::from_yaml_str("tuning: {}\n").unwrap();
        assert_eq!(config.tuning, TuningConfig::default());
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.output.show_contributions);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let yaml = r#"
tuning:
  desaturate_factor: 0.5
  quarter_tone: 1.03
output:
  format: json
  show_contributions: false
"#;
        let config = AppConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.tuning.desaturate_factor, 0.5);
        assert_eq!(config.tuning.quarter_tone, RatioSetting::Number(1.03));
        assert_eq!(config.tuning.wolf_threshold, 12);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.show_contributions);
    }

    #[test]
    fn test_ratio_setting_values() {
        assert_eq!(RatioSetting::Number(1.5).value().unwrap(), 1.5);
        assert_eq!(
            RatioSetting::Fraction("65/63".into()).value().unwrap(),
            65.0 / 63.0
        );
        assert_eq!(RatioSetting::Fraction(" 1.25 ".into()).value().unwrap(), 1.25);
        assert!(matches!(
            RatioSetting::Fraction("65/0".into()).value(),
            Err(ConfigError::Ratio(_))
        ));
        assert!(matches!(
            RatioSetting::Fraction("a/b".into()).value(),
            Err(ConfigError::Ratio(_))
        ));
    }

    #[test]
    fn test_to_tuning_rejects_invalid_values() {
        let mut config = AppConfig::default();
        config.tuning.wolf_threshold = 0;
        assert!(matches!(config.to_tuning(), Err(ConfigError::Tuning(_))));

        let mut config = AppConfig::default();
        config.tuning.quarter_tone = RatioSetting::Number(0.5);
        assert!(matches!(config.to_tuning(), Err(ConfigError::Tuning(_))));
    }

    #[test]
    fn test_unknown_format_fails_to_parse() {
        let result = AppConfig::from_yaml_str("output:\n  format: xml\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_resolve_embedded() {
        let (config, source) = AppConfig::resolve(None, None).unwrap();
        assert_eq!(source, ConfigSource::Embedded);
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_resolve_explicit_missing_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.yaml");
        let result = AppConfig::resolve(Some(path.clone()), None);
        match result {
            Err(ConfigError::NotFound(p)) => assert_eq!(p, path),
            other => panic!("Expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_explicit_wins_over_env() {
        let dir = tempfile::tempdir().unwrap();
        let explicit = dir.path().join("explicit.yaml");
        let env = dir.path().join("env.yaml");
        std::fs::write(&explicit, "output:\n  format: json\n").unwrap();
        std::fs::write(&env, "output:\n  format: text\n").unwrap();

        let (config, source) = AppConfig::resolve(Some(explicit.clone()), Some(env)).unwrap();
        assert_eq!(source, ConfigSource::Argument(explicit));
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_resolve_env_seeds_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let env = dir.path().join("kite").join("config.yaml");

        let (config, source) = AppConfig::resolve(None, Some(env.clone())).unwrap();
        assert_eq!(source, ConfigSource::Environment(env.clone()));
        assert!(env.exists());
        assert_eq!(config, AppConfig::default());
    }
}
