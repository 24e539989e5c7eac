//! Payout table: picks → hits → multiplier
//!
//! Absent entries pay nothing. The engine only ever reads a table; building
//! one is the loader's job.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{EngineError, Result};

/// Multipliers per unit bet, keyed by pick count then hit count.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PayoutTable {
    entries: BTreeMap<u32, BTreeMap<u32, f64>>,
}

impl PayoutTable {
    pub fn new() -> Self {
        PayoutTable { entries: BTreeMap::new() }
    }

    /// Set the multiplier for `picks` / `hits`.
    ///
    /// Returns the multiplier it replaced, if any. Rejects `picks == 0`,
    /// `hits > picks`, and multipliers that are negative or not finite.
    pub fn insert(&mut self, picks: u32, hits: u32, multiplier: f64) -> Result<Option<f64>> {
        if picks == 0 {
            return Err(EngineError::ZeroPicks);
        }
        if hits > picks {
            return Err(EngineError::HitsExceedPicks { picks, hits });
        }
        if !multiplier.is_finite() || multiplier < 0.0 {
            return Err(EngineError::InvalidMultiplier { picks, hits, multiplier });
        }
        Ok(self.entries.entry(picks).or_default().insert(hits, multiplier))
    }

    /// Builder-style insert for literal tables.
    pub fn with(mut self, picks: u32, hits: u32, multiplier: f64) -> Result<Self> {
        self.insert(picks, hits, multiplier)?;
        Ok(self)
    }

    /// Multiplier for an outcome; 0 when the table has no entry.
    pub fn multiplier(&self, picks: u32, hits: u32) -> f64 {
        self.entries
            .get(&picks)
            .and_then(|row| row.get(&hits))
            .copied()
            .unwrap_or(0.0)
    }

    /// Entries for one pick level, ordered by hits.
    pub fn row(&self, picks: u32) -> Option<&BTreeMap<u32, f64>> {
        self.entries.get(&picks)
    }

    pub fn has_picks(&self, picks: u32) -> bool {
        self.entries.get(&picks).is_some_and(|row| !row.is_empty())
    }

    /// Pick levels with at least one entry, ascending.
    pub fn pick_levels(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries
            .iter()
            .filter(|(_, row)| !row.is_empty())
            .map(|(&picks, _)| picks)
    }

    /// Total number of (picks, hits) entries.
    pub fn len(&self) -> usize {
        self.entries.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
