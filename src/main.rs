use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kite::assets::AssetLoader;
use kite::models::{AppConfig, OutputFormat};
use kite::services::{render, ColorService};

#[derive(Parser)]
#[command(name = "kite")]
#[command(about = "Kite's color notation for just-intonation intervals")]
#[command(version)]
struct Cli {
    /// Config file (overrides KITE_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log every pipeline stage (same as RUST_LOG=kite=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Color one or more intervals given as monzos or ratios
    Color {
        /// Intervals such as "10/7", "[1 0 1 -1>" or "1,0,1,-1"
        #[arg(required = true, allow_hyphen_values = true)]
        intervals: Vec<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Hue of an interval size or a prime
    #[command(group(ArgGroup::new("source").required(true).args(["cents", "prime"])))]
    Hue {
        /// Interval size in cents
        #[arg(long, allow_negative_numbers = true)]
        cents: Option<f64>,

        /// Prime harmonic
        #[arg(long)]
        prime: Option<u64>,

        /// Use the undertone 1/prime
        #[arg(long, requires = "prime")]
        undertone: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Write the embedded config.yaml to disk for customization
    Init {
        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let env_config = std::env::var("KITE_CONFIG").ok().map(PathBuf::from);

    match cli.command {
        Some(Commands::Init { force }) => run_init_command(cli.config.or(env_config), force),
        Some(Commands::Color { intervals, json }) => {
            run_color_command(cli.config, env_config, &intervals, json)
        }
        Some(Commands::Hue {
            cents,
            prime,
            undertone,
            json,
        }) => run_hue_command(cli.config, env_config, cents, prime, undertone, json),
        None => run_color_command(cli.config, env_config, &["[1 0 1 -1>".to_string()], false),
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "kite=debug" } else { "kite=warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).without_time())
        .init();
}

fn load_service(
    explicit: Option<PathBuf>,
    env: Option<PathBuf>,
) -> anyhow::Result<(ColorService, OutputFormat)> {
    let (config, source) = AppConfig::resolve(explicit, env)?;
    tracing::debug!(%source, "Using configuration");
    let service = ColorService::from_config(&config)?;
    Ok((service, config.output.format))
}

fn output_format(configured: OutputFormat, json: bool) -> OutputFormat {
    if json {
        OutputFormat::Json
    } else {
        configured
    }
}

/// Color intervals and print one report each
fn run_color_command(
    explicit: Option<PathBuf>,
    env: Option<PathBuf>,
    intervals: &[String],
    json: bool,
) -> anyhow::Result<()> {
    let (service, configured) = load_service(explicit, env)?;

    let reports = intervals
        .iter()
        .map(|input| service.report(input))
        .collect::<Result<Vec<_>, _>>()?;

    println!("{}", render(&reports, output_format(configured, json))?);
    Ok(())
}

/// Print the hue of a cents value or a prime
fn run_hue_command(
    explicit: Option<PathBuf>,
    env: Option<PathBuf>,
    cents: Option<f64>,
    prime: Option<u64>,
    undertone: bool,
    json: bool,
) -> anyhow::Result<()> {
    let (service, configured) = load_service(explicit, env)?;

    let report = match (cents, prime) {
        (Some(cents), _) => service.hue_for_cents(cents)?,
        (None, Some(prime)) => service.hue_for_prime(prime, undertone)?,
        (None, None) => anyhow::bail!("Either --cents or --prime is required"),
    };

    println!("{}", render(&[report], output_format(configured, json))?);
    Ok(())
}

/// Extract the embedded config to the filesystem
fn run_init_command(path: Option<PathBuf>, force: bool) -> anyhow::Result<()> {
    let loader = AssetLoader::new(path);
    let report = loader.init(force)?;

    for f in &report.written {
        println!("Wrote {f}");
    }
    for f in &report.skipped {
        println!("Skipped existing {f} (use --force to overwrite)");
    }

    Ok(())
}
