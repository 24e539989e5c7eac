//! Game constants for a hypergeometric draw game
//!
//! A keno draw picks `drawn` numbers out of a pool of `pool_size` without
//! replacement. Players pick between 1 and `max_picks` numbers of their own.
//! The remaining `pool_size - drawn` numbers are the "not drawn" class.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Classic keno: 20 numbers drawn from 80, up to 10 picks.
pub const CLASSIC_POOL_SIZE: u32 = 80;
pub const CLASSIC_DRAWN: u32 = 20;
pub const CLASSIC_MAX_PICKS: u32 = 10;

/// Immutable description of the draw.
///
/// The not-drawn count is derived rather than stored, so
/// `drawn + not_drawn == pool_size` cannot be violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGameConstants")]
pub struct GameConstants {
    pool_size: u32,
    drawn: u32,
    max_picks: u32,
}

impl GameConstants {
    /// Build a validated set of constants.
    pub fn new(pool_size: u32, drawn: u32, max_picks: u32) -> Result<Self> {
        if pool_size == 0 {
            return Err(EngineError::InvalidConstants("pool size must be positive".into()));
        }
        if drawn > pool_size {
            return Err(EngineError::InvalidConstants(format!(
                "drawn count {} exceeds pool size {}",
                drawn, pool_size
            )));
        }
        if max_picks == 0 || max_picks > pool_size {
            return Err(EngineError::InvalidConstants(format!(
                "max picks {} must be within 1..={}",
                max_picks, pool_size
            )));
        }
        Ok(GameConstants { pool_size, drawn, max_picks })
    }

    /// Classic 80/20 keno with up to 10 picks
    pub fn classic() -> Self {
        GameConstants {
            pool_size: CLASSIC_POOL_SIZE,
            drawn: CLASSIC_DRAWN,
            max_picks: CLASSIC_MAX_PICKS,
        }
    }

    pub fn pool_size(&self) -> u32 {
        self.pool_size
    }

    pub fn drawn(&self) -> u32 {
        self.drawn
    }

    pub fn not_drawn(&self) -> u32 {
        self.pool_size - self.drawn
    }

    pub fn max_picks(&self) -> u32 {
        self.max_picks
    }

    /// Pick levels a player may choose, ascending.
    pub fn pick_levels(&self) -> std::ops::RangeInclusive<u32> {
        1..=self.max_picks
    }

    /// Reject pick counts outside `1..=max_picks`.
    pub fn check_picks(&self, picks: u32) -> Result<()> {
        if picks == 0 || picks > self.max_picks {
            return Err(EngineError::PicksOutOfRange { picks, max: self.max_picks });
        }
        Ok(())
    }
}

impl Default for GameConstants {
    fn default() -> Self {
        Self::classic()
    }
}

/// Wire form of [`GameConstants`]; deserialization goes through `new`.
#[derive(Deserialize)]
struct RawGameConstants {
    pool_size: u32,
    drawn: u32,
    max_picks: u32,
}

impl TryFrom<RawGameConstants> for GameConstants {
    type Error = EngineError;

    fn try_from(raw: RawGameConstants) -> Result<Self> {
        GameConstants::new(raw.pool_size, raw.drawn, raw.max_picks)
    }
}
