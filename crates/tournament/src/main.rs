//! Tournament CLI
//!
//! Runs a four-game strength tournament and prints the results.

use anyhow::{Context, Result};
use clap::Parser;
use search_core::NoisyEvaluator;
use std::path::PathBuf;
use tournament::{TournamentConfig, TournamentRunner};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "tournament")]
#[command(about = "Alpha-beta strength tournament between two rated players")]
struct Args {
    /// TOML config file (flags below override its values)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// 0: player A maximizes first, 1: player B does
    #[arg(long, short = 's')]
    starting_role: Option<u8>,

    /// Rating of player A (must be greater than -1)
    #[arg(long, allow_hyphen_values = true)]
    rating_a: Option<f64>,

    /// Rating of player B (must be greater than -1)
    #[arg(long, allow_hyphen_values = true)]
    rating_b: Option<f64>,

    /// Seed for reproducible evaluation noise
    #[arg(long)]
    seed: Option<u64>,

    /// Write the full tournament state (including trees) as JSON
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Log level when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn init_tracing(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn load_config(args: &Args) -> Result<TournamentConfig> {
    let mut config = match &args.config {
        Some(path) => TournamentConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => TournamentConfig::default(),
    };

    if let Some(role) = args.starting_role {
        config.starting_role = role;
    }
    if let Some(rating) = args.rating_a {
        config.player_a.rating = rating;
    }
    if let Some(rating) = args.rating_b {
        config.player_b.rating = rating;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let config = load_config(&args)?;
    let names = config.names();
    info!(
        player_a = %names.a,
        rating_a = config.player_a.rating,
        player_b = %names.b,
        rating_b = config.player_b.rating,
        starting_role = config.starting_role,
        "starting tournament"
    );

    let runner = TournamentRunner::new();
    let (role, rating_a, rating_b) = (
        config.starting_role,
        config.player_a.rating,
        config.player_b.rating,
    );
    let state = match config.seed {
        Some(seed) => runner.run(role, rating_a, rating_b, &mut NoisyEvaluator::seeded(seed)),
        None => runner.run(role, rating_a, rating_b, &mut NoisyEvaluator::thread()),
    }
    .context("tournament failed")?;

    state.print_report(&names);

    if let Some(path) = &args.output {
        state
            .save(path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("Saved tournament state to {}", path.display());
    }

    Ok(())
}
