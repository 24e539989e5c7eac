//! Console rendering of reports

use keno_engine::odds::format_grouped;
use keno_engine::{GameReport, OutcomeReport, PickReport};

fn percent(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

fn multiplier(value: f64) -> String {
    format!("{}x", format_grouped(value, 2))
}

/// One outcome row.
pub fn outcome_line(o: &OutcomeReport) -> String {
    format!(
        "{:>4}  {:>14.10}  {:>22}  {:>14}  {:>12.8}",
        o.hits,
        o.probability,
        o.odds_description(),
        multiplier(o.payout_multiplier),
        o.ev_contribution
    )
}

/// Outcome table plus totals for one pick level.
pub fn render_pick(report: &PickReport) -> String {
    let s = &report.summary;
    let mut out = String::new();
    out.push_str(&format!("== {} pick{} ==\n", s.picks, if s.picks == 1 { "" } else { "s" }));
    out.push_str(&format!(
        "{:>4}  {:>14}  {:>22}  {:>14}  {:>12}\n",
        "hits", "probability", "odds", "payout", "ev"
    ));
    for o in &report.outcomes {
        out.push_str(&outcome_line(o));
        out.push('\n');
    }
    out.push_str(&format!(
        "EV {:.6}  RTP {}  house edge {}  max payout {}  best odds to win {}\n",
        s.total_ev,
        percent(s.rtp),
        percent(s.house_edge),
        multiplier(s.max_payout),
        s.best_odds_to_win
    ));
    out
}

/// Every pick level followed by the game summary.
pub fn render_game(report: &GameReport) -> String {
    let c = &report.constants;
    let mut out = format!(
        "Keno {}/{} (up to {} picks)\n\n",
        c.drawn(),
        c.pool_size(),
        c.max_picks()
    );
    for pick in &report.picks {
        out.push_str(&render_pick(pick));
        out.push('\n');
    }

    let summary = &report.summary;
    out.push_str("== summary ==\n");
    if let Some(best) = summary.best_rtp {
        out.push_str(&format!("best RTP      {} picks at {}\n", best.picks, percent(best.value)));
    }
    if let Some(worst) = summary.worst_rtp {
        out.push_str(&format!("worst RTP     {} picks at {}\n", worst.picks, percent(worst.value)));
    }
    out.push_str(&format!("mean RTP      {}\n", percent(summary.mean_rtp)));
    match &summary.best_odds_to_win {
        Some(m) => out.push_str(&format!("best odds     {} picks, {}\n", m.picks, m.value)),
        None => out.push_str(&format!("best odds     {}\n", summary.best_odds_description())),
    }
    out
}

/// Probability grid without payouts, one row per (picks, hits).
pub fn render_probabilities(report: &GameReport) -> String {
    let mut out = format!("{:>5}  {:>4}  {:>14}  {:>22}\n", "picks", "hits", "probability", "odds");
    for pick in &report.picks {
        for o in &pick.outcomes {
            out.push_str(&format!(
                "{:>5}  {:>4}  {:>14.10}  {:>22}\n",
                o.picks,
                o.hits,
                o.probability,
                o.odds_description()
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use keno_engine::sample_tables::{classic_payout_table, single_spot_table};
    use keno_engine::{compute_game_report, compute_pick_report, GameConstants, PayoutTable};

    #[test]
    fn test_render_single_spot() {
        let table = single_spot_table();
        let report = compute_pick_report(&GameConstants::classic(), 1, &table).unwrap();
        let text = render_pick(&report);
        assert!(text.starts_with("== 1 pick ==\n"));
        assert!(text.contains("RTP 95.00%"));
        assert!(text.contains("house edge 5.00%"));
        assert!(text.contains("max payout 3.80x"));
        assert!(text.contains("best odds to win 1 in 4.00"));
    }

    #[test]
    fn test_render_game_summary() {
        let report = compute_game_report(&GameConstants::classic(), &classic_payout_table()).unwrap();
        let text = render_game(&report);
        assert!(text.starts_with("Keno 20/80 (up to 10 picks)"));
        assert!(text.contains("== 10 picks =="));
        assert!(text.contains("1 in 8,911,711.18"));
        assert!(text.contains("best RTP      1 picks at 75.00%"));
    }

    #[test]
    fn test_render_empty_table() {
        let report = compute_game_report(&GameConstants::classic(), &PayoutTable::new()).unwrap();
        let text = render_game(&report);
        assert!(text.contains("best odds     impossible"));
    }

    #[test]
    fn test_probability_grid_rows() {
        let report = compute_game_report(&GameConstants::classic(), &PayoutTable::new()).unwrap();
        let text = render_probabilities(&report);
        // header + 2 + 3 + ... + 11 rows
        assert_eq!(text.lines().count(), 1 + (2..=11).sum::<usize>());
    }
}
