//! keno CLI - Command-line front end for the keno odds engine
//!
//! Loads payout tables, runs the engine, and prints reports to the console
//! or as JSON.

mod config;
mod print;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use keno_engine::sample_tables::classic_payout_table;
use keno_engine::{GameAnalyzer, GameConstants, PayoutTable};
use keno_table::{list_payout_files, load_file};

#[derive(Parser)]
#[command(name = "keno", version, about = "Exact keno odds, RTP and house edge for payout tables")]
struct Cli {
    #[command(flatten)]
    game: GameArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GameArgs {
    /// JSON file with pool_size, drawn and max_picks
    #[arg(long, global = true)]
    game: Option<PathBuf>,

    /// Numbers in the pool
    #[arg(long, global = true)]
    pool: Option<u32>,

    /// Numbers drawn per game
    #[arg(long, global = true)]
    drawn: Option<u32>,

    /// Largest pick count offered
    #[arg(long, global = true)]
    max_picks: Option<u32>,

    /// Print JSON instead of tables
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze every pick level of a payout file
    Analyze {
        /// Payout file (.csv or .json)
        file: PathBuf,
    },
    /// Report a single picks/hits outcome
    Outcome {
        /// Payout file (.csv or .json)
        file: PathBuf,
        #[arg(short, long)]
        picks: u32,
        #[arg(long)]
        hits: u32,
    },
    /// Probability and odds of every outcome, ignoring payouts
    Probabilities,
    /// List payout files (defaults to KENO_PAYOUT_DIR)
    List {
        dir: Option<PathBuf>,
    },
    /// Analyze the built-in classic payout table
    Demo,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    config::init_rayon_threads();

    let constants = config::game_constants(
        cli.game.game.as_deref(),
        cli.game.pool,
        cli.game.drawn,
        cli.game.max_picks,
    )?;
    let json = cli.game.json;

    match cli.command {
        Commands::Analyze { file } => analyze(constants, &load_table(&file)?, json),
        Commands::Outcome { file, picks, hits } => outcome(constants, &load_table(&file)?, picks, hits, json),
        Commands::Probabilities => probabilities(constants, json),
        Commands::List { dir } => list(dir.unwrap_or_else(config::payout_dir)),
        Commands::Demo => analyze(constants, &classic_payout_table(), json),
    }
}

/// Load a payout file, reporting skipped rows on stderr.
fn load_table(path: &Path) -> Result<PayoutTable> {
    let parsed = load_file(path).with_context(|| format!("failed to load {}", path.display()))?;
    for row in &parsed.skipped {
        eprintln!("warning: {}: line {}: {}", path.display(), row.line, row.reason);
    }
    Ok(parsed.table)
}

fn analyze(constants: GameConstants, table: &PayoutTable, json: bool) -> Result<()> {
    let report = GameAnalyzer::new(constants, table).compute_game_report()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", print::render_game(&report));
    }
    Ok(())
}

fn outcome(constants: GameConstants, table: &PayoutTable, picks: u32, hits: u32, json: bool) -> Result<()> {
    let report = GameAnalyzer::new(constants, table)
        .compute_outcome(picks, hits)
        .with_context(|| format!("cannot evaluate {} picks / {} hits", picks, hits))?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("picks        {}", report.picks);
        println!("hits         {}", report.hits);
        println!("probability  {:.12}", report.probability);
        println!("exact        {}/{}", report.exact.numerator(), report.exact.denominator());
        println!("odds         {}", report.odds);
        println!("payout       {}x", report.payout_multiplier);
        println!("ev           {:.12}", report.ev_contribution);
    }
    Ok(())
}

fn probabilities(constants: GameConstants, json: bool) -> Result<()> {
    let empty = PayoutTable::new();
    let report = GameAnalyzer::new(constants, &empty).compute_game_report()?;
    if json {
        let outcomes: Vec<_> = report.picks.iter().flat_map(|p| p.outcomes.iter()).collect();
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
    } else {
        print!("{}", print::render_probabilities(&report));
    }
    Ok(())
}

fn list(dir: PathBuf) -> Result<()> {
    let files = list_payout_files(&dir).with_context(|| format!("cannot list {}", dir.display()))?;
    if files.is_empty() {
        println!("no payout files in {}", dir.display());
    }
    for file in files {
        println!("{}", file.display());
    }
    Ok(())
}
