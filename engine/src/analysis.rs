//! Outcome aggregation: probabilities joined with payouts
//!
//! For every pick level the analyzer walks hits 0..=picks in ascending
//! order, pairs each outcome probability with its multiplier, and folds the
//! results into a [`PickSummary`].
//!
//! Pick levels are independent of each other and only need shared
//! references (&PayoutTable, &HitDistribution), so the game-wide report
//! evaluates them in parallel with Rayon. `collect` keeps ascending picks
//! order, so the report matches a sequential run bit for bit.

use num_bigint::BigUint;
use num_traits::Zero;
use rayon::prelude::*;

use crate::error::Result;
use crate::game::GameConstants;
use crate::odds::Odds;
use crate::payout::PayoutTable;
use crate::probability::{ExactProbability, Hypergeometric, HitDistribution};
use crate::report::{GameReport, GameSummary, OutcomeReport, PickReport, PickSummary};

/// Analyzer over one payout table.
///
/// Holds nothing mutable; every call builds fresh reports.
pub struct GameAnalyzer<'t, D = Hypergeometric> {
    distribution: D,
    table: &'t PayoutTable,
}

impl<'t> GameAnalyzer<'t, Hypergeometric> {
    /// Analyzer for a keno draw described by `constants`.
    pub fn new(constants: GameConstants, table: &'t PayoutTable) -> Self {
        Self::with_distribution(Hypergeometric::new(constants), table)
    }
}

impl<'t, D: HitDistribution> GameAnalyzer<'t, D> {
    /// Analyzer using a custom hit distribution.
    pub fn with_distribution(distribution: D, table: &'t PayoutTable) -> Self {
        GameAnalyzer { distribution, table }
    }

    pub fn constants(&self) -> &GameConstants {
        self.distribution.constants()
    }

    pub fn table(&self) -> &PayoutTable {
        self.table
    }

    /// Report for a single outcome.
    pub fn compute_outcome(&self, picks: u32, hits: u32) -> Result<OutcomeReport> {
        let exact = self.distribution.exact(picks, hits)?;
        Ok(self.outcome_from_exact(picks, hits, exact))
    }

    fn outcome_from_exact(&self, picks: u32, hits: u32, exact: ExactProbability) -> OutcomeReport {
        let probability = exact.to_f64();
        let payout_multiplier = self.table.multiplier(picks, hits);
        OutcomeReport {
            picks,
            hits,
            probability,
            exact: exact.reduced(),
            odds: Odds::from_probability(probability),
            payout_multiplier,
            ev_contribution: probability * payout_multiplier,
        }
    }

    /// All outcomes for `picks`, ascending by hits, plus their summary.
    pub fn compute_pick_report(&self, picks: u32) -> Result<PickReport> {
        self.constants().check_picks(picks)?;

        let mut outcomes = Vec::with_capacity(picks as usize + 1);
        let mut total_ev = 0.0_f64;
        let mut max_payout = 0.0_f64;
        // Every outcome at this pick level shares the C(pool, picks)
        // denominator, so winning numerators can be summed exactly.
        let mut win_numerator = BigUint::zero();
        let mut win_denominator: Option<BigUint> = None;

        for hits in 0..=picks {
            let exact = self.distribution.exact(picks, hits)?;
            if self.table.multiplier(picks, hits) > 0.0 && !exact.is_zero() {
                win_numerator += exact.numerator();
                win_denominator.get_or_insert_with(|| exact.denominator().clone());
            }
            let outcome = self.outcome_from_exact(picks, hits, exact);
            total_ev += outcome.ev_contribution;
            max_payout = max_payout.max(outcome.payout_multiplier);
            outcomes.push(outcome);
        }

        let combined_win_probability = match win_denominator {
            Some(den) => ExactProbability::new(win_numerator, den).to_f64(),
            None => 0.0,
        };

        let summary = PickSummary {
            picks,
            total_ev,
            house_edge: 1.0 - total_ev,
            rtp: total_ev,
            max_payout,
            combined_win_probability,
            best_odds_to_win: Odds::from_probability(combined_win_probability),
        };
        log::trace!(
            "picks={} ev={:.6} win_p={:.6} max_payout={}",
            picks,
            summary.total_ev,
            summary.combined_win_probability,
            summary.max_payout
        );

        Ok(PickReport { summary, outcomes })
    }

    /// Reports for every pick level of the game plus the game summary.
    pub fn compute_game_report(&self) -> Result<GameReport> {
        let constants = *self.constants();
        for picks in self.table.pick_levels() {
            if constants.check_picks(picks).is_err() {
                log::debug!("payout table row for {} picks is outside the game and ignored", picks);
            }
        }

        let levels: Vec<u32> = constants.pick_levels().collect();
        let picks = levels
            .par_iter()
            .map(|&p| self.compute_pick_report(p))
            .collect::<Result<Vec<PickReport>>>()?;

        let summaries: Vec<&PickSummary> = picks.iter().map(|r| &r.summary).collect();
        let summary = GameSummary::from_picks(&summaries);
        log::debug!(
            "analyzed {} pick levels, mean RTP {:.4}, best odds {}",
            picks.len(),
            summary.mean_rtp,
            summary.best_odds_description()
        );

        Ok(GameReport { constants, picks, summary })
    }
}

/// Single outcome for a keno game with the given constants.
pub fn compute_outcome(
    constants: &GameConstants,
    picks: u32,
    hits: u32,
    table: &PayoutTable,
) -> Result<OutcomeReport> {
    GameAnalyzer::new(*constants, table).compute_outcome(picks, hits)
}

/// One pick level for a keno game with the given constants.
pub fn compute_pick_report(
    constants: &GameConstants,
    picks: u32,
    table: &PayoutTable,
) -> Result<PickReport> {
    GameAnalyzer::new(*constants, table).compute_pick_report(picks)
}

/// Whole-game report for a keno game with the given constants.
pub fn compute_game_report(constants: &GameConstants, table: &PayoutTable) -> Result<GameReport> {
    GameAnalyzer::new(*constants, table).compute_game_report()
}
