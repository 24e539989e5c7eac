//! keno Engine - Exact odds and expected value for keno payout tables
//!
//! This crate contains the probability core: arbitrary-precision
//! combinatorics, the hypergeometric hit distribution, payout lookup, and the
//! aggregation that turns them into EV, RTP and house-edge reports.
//!
//! The engine is pure and stateless. It performs no I/O; loading payout files
//! and rendering reports belong to the `keno-table` and `keno-cli` crates.

pub mod analysis;
pub mod combinatorics;
pub mod error;
pub mod game;
pub mod odds;
pub mod payout;
pub mod probability;
pub mod report;
pub mod sample_tables;

pub use analysis::{compute_game_report, compute_outcome, compute_pick_report, GameAnalyzer};
pub use error::{EngineError, Result};
pub use game::GameConstants;
pub use odds::{odds_description, Odds};
pub use payout::PayoutTable;
pub use probability::{ExactProbability, HitDistribution, Hypergeometric};
pub use report::{GameReport, GameSummary, OutcomeReport, PickMetric, PickReport, PickSummary};
