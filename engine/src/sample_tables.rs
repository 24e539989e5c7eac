//! Hardcoded payout tables for tests, benchmarks and the CLI demo
//!
//! Classic table (multiplier per unit bet; RTP on an 80/20 draw):
//!   picks  1: 1→3                                          RTP 0.7500
//!   picks  2: 2→12                                         RTP 0.7215
//!   picks  3: 2→1  3→42                                    RTP 0.7215
//!   picks  4: 2→1  3→4   4→100                             RTP 0.6920
//!   picks  5: 3→1  4→20  5→450                             RTP 0.6160
//!   picks  6: 3→1  4→4   5→90   6→1500                     RTP 0.7161
//!   picks  7: 3→1  4→2   5→20   6→80   7→5000              RTP 0.6327
//!   picks  8: 5→12 6→90  7→1200 8→10000                    RTP 0.6686
//!   picks  9: 4→1  5→4   6→25   7→200  8→4000  9→25000     RTP 0.6543
//!   picks 10: 0→2  5→2   6→20   7→90   8→500   9→5000  10→100000
//!                                                          RTP 0.6786

use crate::payout::PayoutTable;

const CLASSIC_ROWS: &[(u32, &[(u32, f64)])] = &[
    (1, &[(1, 3.0)]),
    (2, &[(2, 12.0)]),
    (3, &[(2, 1.0), (3, 42.0)]),
    (4, &[(2, 1.0), (3, 4.0), (4, 100.0)]),
    (5, &[(3, 1.0), (4, 20.0), (5, 450.0)]),
    (6, &[(3, 1.0), (4, 4.0), (5, 90.0), (6, 1500.0)]),
    (7, &[(3, 1.0), (4, 2.0), (5, 20.0), (6, 80.0), (7, 5000.0)]),
    (8, &[(5, 12.0), (6, 90.0), (7, 1200.0), (8, 10000.0)]),
    (9, &[(4, 1.0), (5, 4.0), (6, 25.0), (7, 200.0), (8, 4000.0), (9, 25000.0)]),
    (10, &[(0, 2.0), (5, 2.0), (6, 20.0), (7, 90.0), (8, 500.0), (9, 5000.0), (10, 100000.0)]),
];

/// Build a table from literal rows.
///
/// # Panics
///
/// If a literal row fails validation.
fn from_rows(rows: &[(u32, &[(u32, f64)])]) -> PayoutTable {
    let mut table = PayoutTable::new();
    for &(picks, entries) in rows {
        for &(hits, multiplier) in entries {
            if let Err(e) = table.insert(picks, hits, multiplier) {
                panic!("invalid fixture row {}/{}: {}", picks, hits, e);
            }
        }
    }
    table
}

/// Full 1-10 pick classic keno table.
pub fn classic_payout_table() -> PayoutTable {
    from_rows(CLASSIC_ROWS)
}

/// Only 1-spot is offered: 3.8x on a hit, 95% RTP.
pub fn single_spot_table() -> PayoutTable {
    from_rows(&[(1, &[(1, 3.8)])])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_table_shape() {
        let table = classic_payout_table();
        assert_eq!(table.pick_levels().collect::<Vec<_>>(), (1..=10).collect::<Vec<_>>());
        assert_eq!(table.len(), 36);
        assert_eq!(table.multiplier(10, 10), 100000.0);
        assert_eq!(table.multiplier(10, 0), 2.0);
        assert_eq!(table.multiplier(10, 1), 0.0);
    }

    #[test]
    fn test_single_spot_table() {
        let table = single_spot_table();
        assert_eq!(table.len(), 1);
        assert_eq!(table.multiplier(1, 1), 3.8);
    }

    #[test]
    #[should_panic(expected = "invalid fixture row 2/3")]
    fn test_invalid_literal_row_panics() {
        from_rows(&[(2, &[(3, 1.0)])]);
    }
}
