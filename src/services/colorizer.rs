use crate::error::{AppError, ConfigError};
use crate::models::{AppConfig, Interval, OutputFormat};
use crate::services::TracingObserver;
use kite_color::{KiteColorizer, PrimeContribution, Tuning};
use serde::Serialize;
use std::fmt;

/// Oklch triple as reported
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LchReport {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

/// One prime's share of the blended color
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContributionReport {
    pub prime: u64,
    pub exponent: i32,
    pub hue: f64,
    pub lightness: f64,
    pub chroma: f64,
}

impl From<PrimeContribution> for ContributionReport {
    fn from(contribution: PrimeContribution) -> Self {
        Self {
            prime: contribution.prime,
            exponent: contribution.exponent,
            hue: contribution.hue,
            lightness: contribution.lightness,
            chroma: contribution.chroma,
        }
    }
}

/// Everything printed for one interval
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorReport {
    /// The interval as normalized from user input
    pub input: String,
    pub monzo: Vec<i32>,
    pub cents: f64,
    pub fifths: i64,
    pub wolves: i64,
    pub comma: f64,
    pub oklch: LchReport,
    pub rgb: [u8; 3],
    pub hex: String,
    pub contributions: Vec<ContributionReport>,
    #[serde(skip)]
    show_contributions: bool,
}

impl fmt::Display for ColorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}  {:.3}¢", self.input, self.cents)?;
        writeln!(
            f,
            "  fifths {}  wolves {}  comma {:+.3}¢",
            self.fifths, self.wolves, self.comma
        )?;
        write!(
            f,
            "  oklch({:.4} {:.4} {:.2})  {}  {} {} {}",
            self.oklch.l, self.oklch.c, self.oklch.h, self.hex, self.rgb[0], self.rgb[1], self.rgb[2]
        )?;
        if self.show_contributions {
            for contribution in &self.contributions {
                write!(
                    f,
                    "\n  {}^{}  hue {:.2}  L {:.4}  C {:.4}",
                    contribution.prime,
                    contribution.exponent,
                    contribution.hue,
                    contribution.lightness,
                    contribution.chroma
                )?;
            }
        }
        Ok(())
    }
}

/// Hue of a single interval size or prime
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HueReport {
    pub input: String,
    pub hue: f64,
}

impl fmt::Display for HueReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  hue {:.4}°", self.input, self.hue)
    }
}

/// Colors user intervals with the configured tuning, tracing every stage
#[derive(Debug, Clone)]
pub struct ColorService {
    colorizer: KiteColorizer,
    show_contributions: bool,
}

impl ColorService {
    pub fn new(tuning: Tuning) -> Self {
        Self {
            colorizer: KiteColorizer::new().tuning(tuning).observer(TracingObserver),
            show_contributions: true,
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(config.to_tuning()?).show_contributions(config.output.show_contributions))
    }

    pub fn show_contributions(mut self, show: bool) -> Self {
        self.show_contributions = show;
        self
    }

    pub fn tuning(&self) -> &Tuning {
        self.colorizer.current_tuning()
    }

    /// Parse and color one interval
    pub fn report(&self, input: &str) -> Result<ColorReport, AppError> {
        let interval: Interval = input.parse()?;
        self.report_interval(&interval)
    }

    pub fn report_interval(&self, interval: &Interval) -> Result<ColorReport, AppError> {
        let monzo = interval.to_monzo()?;
        let analysis = self.colorizer.analyze(monzo.as_slice())?;
        let rgb = analysis.srgb();

        tracing::info!(interval = %interval, hex = %rgb.to_hex(), "Colored interval");

        Ok(ColorReport {
            input: interval.to_string(),
            monzo: monzo.as_slice().to_vec(),
            cents: monzo.cents()?,
            fifths: analysis.fold.fifths,
            wolves: analysis.fold.wolves,
            comma: analysis.fold.comma,
            oklch: LchReport {
                l: analysis.color.l,
                c: analysis.color.c,
                h: analysis.color.h,
            },
            rgb: rgb.to_bytes(),
            hex: rgb.to_hex(),
            contributions: analysis
                .contributions
                .iter()
                .copied()
                .map(ContributionReport::from)
                .collect(),
            show_contributions: self.show_contributions,
        })
    }

    pub fn hue_for_cents(&self, cents: f64) -> Result<HueReport, AppError> {
        let hue = self.colorizer.hue_from_cents(cents)?;
        Ok(HueReport {
            input: format!("{cents}¢"),
            hue,
        })
    }

    pub fn hue_for_prime(&self, prime: u64, undertone: bool) -> Result<HueReport, AppError> {
        let hue = self.colorizer.hue_from_prime(prime, undertone)?;
        let input = if undertone {
            format!("1/{prime}")
        } else {
            format!("{prime}/1")
        };
        Ok(HueReport { input, hue })
    }
}

impl Default for ColorService {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

/// Render reports in the configured format
pub fn render<T: Serialize + fmt::Display>(
    reports: &[T],
    format: OutputFormat,
) -> Result<String, AppError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(reports)?),
        OutputFormat::Text => Ok(reports
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")),
    }
}
