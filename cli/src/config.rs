//! Environment and game configuration for the CLI
//!
//! Reads `KENO_PAYOUT_DIR` and `RAYON_NUM_THREADS`; game constants come from
//! flags or a JSON file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use keno_engine::GameConstants;

/// Default directory searched by `keno list`.
pub const DEFAULT_PAYOUT_DIR: &str = "payouts";

/// `KENO_PAYOUT_DIR`, falling back to [`DEFAULT_PAYOUT_DIR`].
pub fn payout_dir() -> PathBuf {
    std::env::var("KENO_PAYOUT_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_PAYOUT_DIR))
}

/// Size the global rayon pool from `RAYON_NUM_THREADS` when it is set.
///
/// Tolerates an already-initialized pool. Returns the thread count in use.
pub fn init_rayon_threads() -> usize {
    let requested = std::env::var("RAYON_NUM_THREADS")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .filter(|&n| n > 0);
    if let Some(n) = requested {
        if rayon::ThreadPoolBuilder::new().num_threads(n).build_global().is_err() {
            log::debug!("rayon pool already initialized");
        }
    }
    let threads = rayon::current_num_threads();
    log::debug!("rayon threads: {}", threads);
    threads
}

/// Game constants from an optional JSON file, then flag overrides.
pub fn game_constants(
    file: Option<&Path>,
    pool: Option<u32>,
    drawn: Option<u32>,
    max_picks: Option<u32>,
) -> Result<GameConstants> {
    let base = match file {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read game file {}", path.display()))?;
            serde_json::from_str::<GameConstants>(&text)
                .with_context(|| format!("invalid game file {}", path.display()))?
        }
        None => GameConstants::classic(),
    };

    let constants = GameConstants::new(
        pool.unwrap_or(base.pool_size()),
        drawn.unwrap_or(base.drawn()),
        max_picks.unwrap_or(base.max_picks()),
    )?;
    log::debug!(
        "game: pool {} drawn {} max picks {}",
        constants.pool_size(),
        constants.drawn(),
        constants.max_picks()
    );
    Ok(constants)
}
