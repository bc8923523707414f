mod report;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use dexkeep_core::{analyze, load_config, validate_config, Config, Inputs, OutputFormat};

/// Decide which captures of an evolution line to keep.
#[derive(Parser, Debug)]
#[command(name = "dexkeep")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Species to analyze (any member of the evolution line's graph keys)
    species: String,

    /// Configuration file (TOML)
    #[arg(short, long, env = "DEXKEEP_CONFIG")]
    config: Option<PathBuf>,

    /// Capture export to read (overrides data.captures_path)
    #[arg(long)]
    captures: Option<PathBuf>,

    /// Evolution graph to read (overrides data.evolutions_path)
    #[arg(long)]
    evolutions: Option<PathBuf>,

    /// Maximum search string length after the species prefix
    #[arg(long)]
    char_limit: Option<usize>,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            load_config(path).with_context(|| format!("Failed to load config from {:?}", path))?
        }
        None => Config::default(),
    };

    if let Some(path) = &cli.captures {
        config.data.captures_path = path.clone();
    }
    if let Some(path) = &cli.evolutions {
        config.data.evolutions_path = path.clone();
    }
    if let Some(limit) = cli.char_limit {
        config.search.char_limit = limit;
    }
    if cli.json {
        config.output.format = OutputFormat::Json;
    }

    validate_config(&config).context("Configuration validation failed")?;
    Ok(config)
}

fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;
    info!("Captures: {:?}", config.data.captures_path);
    info!("Evolutions: {:?}", config.data.evolutions_path);

    let inputs = Inputs::load(&config).context("Failed to load inputs")?;
    let analysis = analyze(&inputs.graph, &inputs.captures, &cli.species, &config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match config.output.format {
        OutputFormat::Table => report::write_table(&mut out, &analysis)?,
        OutputFormat::Json => report::write_json(&mut out, &analysis)?,
    }
    Ok(())
}
