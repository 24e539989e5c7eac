//! Error types for the keno engine
//!
//! Impossible outcomes, missing payout entries and zero win probability are
//! ordinary values, not errors. Only inputs outside the game's domain end up
//! here.

use thiserror::Error;

/// Domain errors raised at the engine boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("picks {picks} outside supported range 1..={max}")]
    PicksOutOfRange { picks: u32, max: u32 },

    #[error("payout entry needs at least 1 pick")]
    ZeroPicks,

    #[error("hits {hits} exceeds picks {picks}")]
    HitsExceedPicks { picks: u32, hits: u32 },

    #[error("invalid payout multiplier {multiplier} for {picks} picks / {hits} hits")]
    InvalidMultiplier { picks: u32, hits: u32, multiplier: f64 },

    #[error("invalid game constants: {0}")]
    InvalidConstants(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
