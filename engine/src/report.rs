//! Report model handed to presentation layers
//!
//! Everything here is derived data: built once per analysis run, never
//! mutated afterwards, and serializable so a front end can render it
//! however it likes.

use serde::Serialize;

use crate::game::GameConstants;
use crate::odds::Odds;
use crate::probability::ExactProbability;

/// One (picks, hits) outcome joined with its payout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutcomeReport {
    pub picks: u32,
    pub hits: u32,
    pub probability: f64,
    /// Reduced exact fraction behind `probability`
    pub exact: ExactProbability,
    pub odds: Odds,
    pub payout_multiplier: f64,
    /// probability × payout_multiplier
    pub ev_contribution: f64,
}

impl OutcomeReport {
    pub fn odds_description(&self) -> String {
        self.odds.to_string()
    }

    pub fn is_win(&self) -> bool {
        self.payout_multiplier > 0.0
    }
}

/// Aggregate metrics for one pick level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PickSummary {
    pub picks: u32,
    /// Σ ev_contribution over all hit counts
    pub total_ev: f64,
    /// 1 - total_ev
    pub house_edge: f64,
    /// Equal to total_ev
    pub rtp: f64,
    /// Largest multiplier across hit counts, 0 if none pay
    pub max_payout: f64,
    /// Σ probability over hit counts with a positive multiplier
    pub combined_win_probability: f64,
    /// 1 / combined_win_probability
    pub best_odds_to_win: Odds,
}

/// All outcomes for one pick level plus its summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PickReport {
    pub summary: PickSummary,
    /// Ordered by ascending hits
    pub outcomes: Vec<OutcomeReport>,
}

/// A pick level paired with one of its metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PickMetric<T> {
    pub picks: u32,
    pub value: T,
}

/// Game-wide figures across every pick level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSummary {
    pub best_rtp: Option<PickMetric<f64>>,
    pub worst_rtp: Option<PickMetric<f64>>,
    pub mean_rtp: f64,
    /// Pick level with the highest combined win probability; `None` if
    /// nothing in the table pays
    pub best_odds_to_win: Option<PickMetric<Odds>>,
}

impl GameSummary {
    /// Derive the summary from per-pick summaries. Ties go to the lowest
    /// pick count, which is also the iteration order.
    pub fn from_picks(summaries: &[&PickSummary]) -> Self {
        let mut best_rtp: Option<PickMetric<f64>> = None;
        let mut worst_rtp: Option<PickMetric<f64>> = None;
        let mut best_win: Option<(u32, f64)> = None;
        let mut rtp_sum = 0.0;

        for s in summaries {
            rtp_sum += s.rtp;
            if best_rtp.map_or(true, |b| s.rtp > b.value) {
                best_rtp = Some(PickMetric { picks: s.picks, value: s.rtp });
            }
            if worst_rtp.map_or(true, |w| s.rtp < w.value) {
                worst_rtp = Some(PickMetric { picks: s.picks, value: s.rtp });
            }
            if s.combined_win_probability > 0.0
                && best_win.map_or(true, |(_, p)| s.combined_win_probability > p)
            {
                best_win = Some((s.picks, s.combined_win_probability));
            }
        }

        let mean_rtp = if summaries.is_empty() { 0.0 } else { rtp_sum / summaries.len() as f64 };
        GameSummary {
            best_rtp,
            worst_rtp,
            mean_rtp,
            best_odds_to_win: best_win.map(|(picks, p)| PickMetric {
                picks,
                value: Odds::from_probability(p),
            }),
        }
    }

    /// Display form of the best odds, "impossible" when nothing pays.
    pub fn best_odds_description(&self) -> String {
        match &self.best_odds_to_win {
            Some(m) => m.value.to_string(),
            None => Odds::Impossible.to_string(),
        }
    }
}

/// Complete analysis of a payout table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameReport {
    pub constants: GameConstants,
    /// Ordered by ascending picks
    pub picks: Vec<PickReport>,
    pub summary: GameSummary,
}

impl GameReport {
    pub fn pick(&self, picks: u32) -> Option<&PickReport> {
        self.picks.iter().find(|r| r.summary.picks == picks)
    }

    pub fn summaries(&self) -> impl Iterator<Item = &PickSummary> {
        self.picks.iter().map(|r| &r.summary)
    }
}
