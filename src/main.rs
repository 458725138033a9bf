//! Employee roster pipeline - generate, convert and analyze a staff roster.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use chrono::Local;
use clap::{Parser, Subcommand};
use employee_roster as app;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use app::charts::BitmapRenderer;
use app::config::{AppConfig, ConfigLoadResult, LoggingConfig};
use app::fake::UkrainianFaker;
use app::jobs::{self, RosterGenerator};

const RULE: &str = "======================================================================";

/// Generate, convert and analyze a synthetic staff roster.
#[derive(Parser)]
#[command(name = "employee-roster")]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Use config.toml from current directory (dev mode)
    #[arg(long, global = true)]
    dev: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a fake roster CSV file
    Generate {
        /// Number of records to generate
        #[arg(long)]
        count: Option<usize>,
        /// Output CSV path
        #[arg(long)]
        output: Option<PathBuf>,
        /// RNG seed for a reproducible roster
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Convert the roster CSV into an age-bucketed XLSX workbook
    Convert {
        /// Input CSV path
        #[arg(long)]
        input: Option<PathBuf>,
        /// Output XLSX path
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print roster statistics and render charts
    Analyze {
        /// Input CSV path
        #[arg(long)]
        input: Option<PathBuf>,
        /// Directory for chart images
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config_path = if let Some(path) = &cli.config {
        path.clone()
    } else if cli.dev {
        PathBuf::from("config.toml")
    } else {
        AppConfig::default_path()
    };

    let (config, load_error) = match AppConfig::try_load(&config_path) {
        ConfigLoadResult::Loaded(config) => (config, None),
        ConfigLoadResult::Missing => (AppConfig::default(), None),
        ConfigLoadResult::Invalid(e) => (AppConfig::default(), Some(e)),
    };

    let _guard = init_logging(&config.logging);
    tracing::info!("Config path: {:?}", config_path);

    if let Some(e) = load_error {
        tracing::error!("Config invalid: {}", e);
        return ExitCode::FAILURE;
    }

    match run(cli.command, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Initialize logging to stderr, plus a log file when configured.
fn init_logging(config: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let (file_layer, guard) = match &config.directory {
        Some(dir) => {
            let appender = tracing_appender::rolling::never(dir, &config.file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(fmt::layer().with_writer(writer).with_ansi(false)), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    guard
}

fn banner(title: &str) {
    println!("{RULE}\n{title}\n{RULE}\n");
}

fn run(command: Command, mut config: AppConfig) -> anyhow::Result<()> {
    let today = Local::now().date_naive();

    match command {
        Command::Generate { count, output, seed } => {
            banner("Програма 1 - Генерація CSV файлу з даними співробітників");
            if let Some(count) = count {
                config.generator.count = count;
            }
            if seed.is_some() {
                config.generator.seed = seed;
            }
            let path = output.unwrap_or_else(|| config.roster.path.clone());
            config.validate()?;

            let mut seeder = match config.generator.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let faker = UkrainianFaker::new(StdRng::from_rng(&mut seeder)?);
            let mut generator = RosterGenerator::new(&config.generator, faker, seeder, today);

            let result = generator
                .write_roster(&path, config.generator.count)
                .with_context(|| format!("failed to write roster {}", path.display()))?;
            println!("{}", result.summary());
        }
        Command::Convert { input, output } => {
            banner("Програма 2 - Створення XLSX файлу з віковими категоріями");
            let input = input.unwrap_or(config.roster.path);
            let output = output.unwrap_or(config.converter.output);

            let result = jobs::convert(
                &input,
                &output,
                today,
                &config.age_bands,
                config.converter.max_column_width,
            )?;
            println!("{}", result.summary());
        }
        Command::Analyze { input, output_dir } => {
            banner("Програма 3 - Аналіз даних співробітників та побудова діаграм");
            let input = input.unwrap_or(config.roster.path);
            if let Some(dir) = output_dir {
                config.analyzer.output_dir = dir;
            }

            let renderer = BitmapRenderer::new(config.analyzer.font_family.as_str());
            let result = jobs::analyze(
                &input,
                &config.analyzer,
                &renderer,
                today,
                &config.age_bands,
                &mut std::io::stdout().lock(),
            )?;
            for chart in &result.charts {
                println!("   Діаграму збережено: {}", chart.display());
            }
        }
    }

    Ok(())
}
