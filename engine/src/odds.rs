//! "1 in X" odds descriptors
//!
//! Rounding policy: X is rounded to two decimal places, half away from zero
//! (`f64::round` on X·100), and the integer part is grouped with commas.

use std::fmt;

use serde::Serialize;

const DECIMALS: u32 = 2;

/// Odds of an event derived from its probability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Odds {
    /// Probability zero; there is no "1 in X".
    Impossible,
    /// Probability one.
    Certain,
    /// 1 in X, with X = 1/p > 1.
    OneIn(f64),
}

impl Odds {
    pub fn from_probability(probability: f64) -> Self {
        if !(probability > 0.0) {
            Odds::Impossible
        } else if probability >= 1.0 {
            Odds::Certain
        } else {
            Odds::OneIn(1.0 / probability)
        }
    }

    /// X in "1 in X"; `None` when impossible.
    pub fn one_in(&self) -> Option<f64> {
        match self {
            Odds::Impossible => None,
            Odds::Certain => Some(1.0),
            Odds::OneIn(x) => Some(*x),
        }
    }

    pub fn is_impossible(&self) -> bool {
        matches!(self, Odds::Impossible)
    }
}

impl fmt::Display for Odds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Odds::Impossible => f.write_str("impossible"),
            Odds::Certain => f.write_str("1 in 1"),
            Odds::OneIn(x) => write!(f, "1 in {}", format_grouped(*x, DECIMALS)),
        }
    }
}

/// Shorthand for `Odds::from_probability(p).to_string()`.
pub fn odds_description(probability: f64) -> String {
    Odds::from_probability(probability).to_string()
}

/// Fixed-point with comma-grouped integer part, e.g. `8,911,711.18`.
///
/// Rounds half away from zero. Intended for the non-negative values odds and
/// multipliers produce; any finite magnitude keeps all of its digits.
pub fn format_grouped(value: f64, decimals: u32) -> String {
    let scaled = (value.abs() * 10f64.powi(decimals as i32)).round();
    if scaled.is_nan() {
        return "NaN".to_string();
    }
    if scaled.is_infinite() {
        return if value < 0.0 { "-inf".to_string() } else { "inf".to_string() };
    }
    // scaled is a whole number, so {:.0} prints its exact digits
    let digits = format!("{:0width$.0}", scaled, width = decimals as usize + 1);
    let (int_digits, frac_digits) = digits.split_at(digits.len() - decimals as usize);

    let mut grouped = String::with_capacity(digits.len() + int_digits.len() / 3 + 2);
    if value < 0.0 && scaled > 0.0 {
        grouped.push('-');
    }
    for (i, ch) in int_digits.chars().enumerate() {
        if i > 0 && (int_digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if decimals > 0 {
        grouped.push('.');
        grouped.push_str(frac_digits);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_cases() {
        assert_eq!(odds_description(0.0), "impossible");
        assert_eq!(odds_description(1.0), "1 in 1");
        assert_eq!(odds_description(f64::NAN), "impossible");
        assert_eq!(Odds::from_probability(0.0).one_in(), None);
        assert!(Odds::from_probability(-0.5).is_impossible());
    }

    #[test]
    fn test_one_in_x() {
        assert_eq!(odds_description(0.25), "1 in 4.00");
        assert_eq!(odds_description(1.0 / 3.0), "1 in 3.00");
        assert_eq!(odds_description(184_756.0 / 1_646_492_110_120.0), "1 in 8,911,711.18");
    }

    #[test]
    fn test_grouping() {
        assert_eq!(format_grouped(0.0, 2), "0.00");
        assert_eq!(format_grouped(999.994, 2), "999.99");
        assert_eq!(format_grouped(999.996, 2), "1,000.00");
        assert_eq!(format_grouped(1_234_567.0, 0), "1,234,567");
        assert_eq!(format_grouped(123_456.5, 0), "123,457");
        assert_eq!(format_grouped(-1500.0, 1), "-1,500.0");
    }

    #[test]
    fn test_round_half_away_from_zero() {
        // 2.5 and 0.125 are exact in binary
        assert_eq!(format_grouped(2.5, 0), "3");
        assert_eq!(format_grouped(0.125, 2), "0.13");
    }

    #[test]
    fn test_values_beyond_u64_keep_their_digits() {
        // 1 / C(80, 20) as computed in f64
        assert_eq!(
            format_grouped(3.5353161422121743e18, 2),
            "3,535,316,142,212,174,315.52"
        );
        let tiny = odds_description(1e-300);
        assert!(tiny.starts_with("1 in 99,999,999,999,999,98"));
        assert!(!tiny.contains("184,467,440,737,095,516"));
        assert_eq!(format_grouped(f64::INFINITY, 2), "inf");
        assert_eq!(odds_description(f64::MIN_POSITIVE / 1e10), "1 in inf");
    }
}
