//! keno Table Loader - Payout tables from disk
//!
//! This crate is responsible for turning payout files (CSV or JSON) into
//! [`PayoutTable`] values for the engine, and for discovering payout files
//! in a directory.
//!
//! Malformed rows never fail a load: they are skipped, logged, and returned
//! alongside the table so callers can surface them.

pub mod csv;
pub mod error;
pub mod json;
pub mod loader;

use keno_engine::PayoutTable;

pub use error::{Result, TableError};
pub use loader::{list_payout_files, load_file, PayoutFormat};

/// A row the loader could not use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based line number for CSV; 0 for JSON entries
    pub line: usize,
    pub reason: String,
}

/// A parsed payout table plus everything that was dropped on the way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedTable {
    pub table: PayoutTable,
    pub skipped: Vec<SkippedRow>,
}

impl ParsedTable {
    /// Insert an entry, turning validation failures into skipped rows.
    pub(crate) fn insert(&mut self, line: usize, picks: u32, hits: u32, multiplier: f64) {
        match self.table.insert(picks, hits, multiplier) {
            Ok(Some(previous)) => log::warn!(
                "line {}: duplicate entry for {} picks / {} hits, {} replaces {}",
                line,
                picks,
                hits,
                multiplier,
                previous
            ),
            Ok(None) => {}
            Err(e) => self.skip(line, e.to_string()),
        }
    }

    pub(crate) fn skip(&mut self, line: usize, reason: impl Into<String>) {
        let reason = reason.into();
        log::warn!("skipping payout row at line {}: {}", line, reason);
        self.skipped.push(SkippedRow { line, reason });
    }
}
