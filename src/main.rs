//! Point Buy - Entry Point
//!
//! Parses flags, computes the spread collection once, and runs exactly one
//! presentation mode: list, generate, or the interactive chooser.

use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser};
use pointbuy::core::{Mode, PointBuyConfig, PointBuyError, Result, RunConfig};
use pointbuy::present::{choose_scores, generate_scores, list_arrays};
use pointbuy::rules::RuleSet;
use pointbuy::spread::{SpreadCollection, SpreadEngine};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Generates random ability scores with constant point-buy cost.
///
/// By default, you are prompted to select from several stat arrays.
/// Your final ability scores are then assigned in a random order from
/// that array.
#[derive(Parser, Debug)]
#[command(name = "pointbuy")]
#[command(about = "Generate random D&D 5E ability scores with constant point-buy cost")]
struct Args {
    /// Total points available (default 27)
    #[arg(short, long, value_name = "n", allow_negative_numbers = true)]
    points: Option<i64>,

    /// Choose from n arrays (default 3)
    #[arg(short, long, value_name = "n", allow_negative_numbers = true)]
    choices: Option<i64>,

    /// Generate n random ability score arrays
    #[arg(short, long, value_name = "n", allow_negative_numbers = true)]
    generate: Option<i64>,

    /// List all valid point-buy arrays
    #[arg(short, long, action = ArgAction::SetTrue)]
    list: bool,

    /// Random seed for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "pointbuy=debug" } else { "pointbuy=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(run_config: &RunConfig, config: &PointBuyConfig, seed: u64) -> Result<()> {
    let rules = RuleSet::standard();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut engine = SpreadEngine::with_capacity(&rules.table, config.cache_capacity);
    let collection = SpreadCollection::resolve(&mut engine, rules.slot_count(), run_config.points);
    tracing::info!(
        points = run_config.points,
        spreads = collection.len(),
        exact = collection.is_exact(),
        mode = ?run_config.mode,
        "spread collection ready"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run_config.mode {
        Mode::List => list_arrays(&mut out, &rules.table, &collection)?,
        Mode::Generate { count } => {
            generate_scores(&mut out, &rules, &collection, count, &mut rng)?;
        }
        Mode::Choose { choices } => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            choose_scores(&mut input, &mut out, &rules, &collection, choices, &mut rng)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = PointBuyConfig::default();
    let run_config = match RunConfig::validate(
        &config,
        args.points,
        args.choices,
        args.generate,
        args.list,
    ) {
        Ok(run_config) => run_config,
        Err(e @ PointBuyError::ConflictingModes) => {
            Args::command().error(ErrorKind::ArgumentConflict, e).exit()
        }
        Err(PointBuyError::InvalidConfig(message)) => {
            Args::command().error(ErrorKind::ValueValidation, message).exit()
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let seed = args.seed.unwrap_or_else(|| rand::random());
    tracing::debug!(seed, "random generator seeded");

    match run(&run_config, &config, seed) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
