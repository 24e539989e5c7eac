//! Hypergeometric hit probabilities
//!
//! P(hits | picks) = C(drawn, hits) · C(not_drawn, picks - hits) / C(pool, picks)
//!
//! Numerator and denominator are kept as exact integers. Conversion to `f64`
//! happens once, at the end, after reducing the fraction.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};
use serde::Serialize;

use crate::combinatorics::binomial;
use crate::error::Result;
use crate::game::GameConstants;

/// Largest bit width converted directly; wider fractions are shifted down first.
const F64_SAFE_BITS: u64 = 1000;

/// An exact probability `numerator / denominator` in [0, 1].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactProbability {
    numerator: BigUint,
    denominator: BigUint,
}

impl ExactProbability {
    /// Build from raw parts. `denominator` must be non-zero.
    pub fn new(numerator: BigUint, denominator: BigUint) -> Self {
        debug_assert!(!denominator.is_zero(), "zero denominator");
        ExactProbability { numerator, denominator }
    }

    pub fn zero() -> Self {
        ExactProbability { numerator: BigUint::zero(), denominator: BigUint::one() }
    }

    pub fn numerator(&self) -> &BigUint {
        &self.numerator
    }

    pub fn denominator(&self) -> &BigUint {
        &self.denominator
    }

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.numerator == self.denominator
    }

    /// Lowest-terms form.
    pub fn reduced(&self) -> Self {
        if self.numerator.is_zero() {
            return Self::zero();
        }
        let g = self.numerator.gcd(&self.denominator);
        ExactProbability {
            numerator: &self.numerator / &g,
            denominator: &self.denominator / &g,
        }
    }

    /// Nearest `f64`, computed from the reduced fraction.
    pub fn to_f64(&self) -> f64 {
        let reduced = self.reduced();
        let (mut num, mut den) = (reduced.numerator, reduced.denominator);
        let width = den.bits();
        if width > F64_SAFE_BITS {
            let shift = width - F64_SAFE_BITS;
            num >>= shift;
            den >>= shift;
        }
        match (num.to_f64(), den.to_f64()) {
            (Some(n), Some(d)) if d > 0.0 => n / d,
            _ => 0.0,
        }
    }
}

/// A source of per-outcome hit probabilities.
///
/// The aggregator only depends on this trait; [`Hypergeometric`] is the
/// implementation for a real keno draw.
pub trait HitDistribution: Sync {
    /// Game the probabilities describe
    fn constants(&self) -> &GameConstants;

    /// Exact P(exactly `hits` | `picks`).
    ///
    /// Fails only when `picks` is outside the game's range; impossible hit
    /// counts yield zero.
    fn exact(&self, picks: u32, hits: u32) -> Result<ExactProbability>;

    /// Same as [`exact`](Self::exact), converted for reporting.
    fn probability(&self, picks: u32, hits: u32) -> Result<f64> {
        self.exact(picks, hits).map(|p| p.to_f64())
    }
}

/// Hypergeometric distribution over a keno draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hypergeometric {
    constants: GameConstants,
}

impl Hypergeometric {
    pub fn new(constants: GameConstants) -> Self {
        Hypergeometric { constants }
    }

    /// True when the outcome cannot happen and no binomials are needed.
    fn is_impossible(&self, picks: u32, hits: u32) -> bool {
        hits > picks || hits > self.constants.drawn() || picks - hits > self.constants.not_drawn()
    }
}

impl HitDistribution for Hypergeometric {
    fn constants(&self) -> &GameConstants {
        &self.constants
    }

    fn exact(&self, picks: u32, hits: u32) -> Result<ExactProbability> {
        self.constants.check_picks(picks)?;
        if self.is_impossible(picks, hits) {
            return Ok(ExactProbability::zero());
        }

        let c = &self.constants;
        let numerator = binomial(c.drawn() as i64, hits as i64)
            * binomial(c.not_drawn() as i64, (picks - hits) as i64);
        let denominator = binomial(c.pool_size() as i64, picks as i64);
        Ok(ExactProbability::new(numerator, denominator))
    }
}

/// One-off lookup without building a [`Hypergeometric`] first.
pub fn probability(constants: &GameConstants, picks: u32, hits: u32) -> Result<f64> {
    Hypergeometric::new(*constants).probability(picks, hits)
}

impl Serialize for ExactProbability {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let reduced = self.reduced();
        let mut s = serializer.serialize_struct("ExactProbability", 2)?;
        s.serialize_field("numerator", &reduced.numerator.to_string())?;
        s.serialize_field("denominator", &reduced.denominator.to_string())?;
        s.end()
    }
}
