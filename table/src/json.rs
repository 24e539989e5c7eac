//! JSON payout tables
//!
//! `{ "<picks>": { "<hits>": multiplier, ... }, ... }`, the same shape the
//! engine serializes a `PayoutTable` to.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::ParsedTable;

/// Parse JSON text. Syntax errors fail the load; bad keys or values are
/// skipped like malformed CSV rows.
pub fn parse_json(text: &str) -> Result<ParsedTable> {
    let raw: BTreeMap<String, BTreeMap<String, f64>> = serde_json::from_str(text)?;
    let mut parsed = ParsedTable::default();

    for (picks_key, row) in &raw {
        let Ok(picks) = picks_key.trim().parse::<u32>() else {
            parsed.skip(0, format!("picks key '{}' is not a non-negative integer", picks_key));
            continue;
        };
        for (hits_key, &multiplier) in row {
            match hits_key.trim().parse::<u32>() {
                Ok(hits) => parsed.insert(0, picks, hits, multiplier),
                Err(_) => parsed.skip(
                    0,
                    format!("hits key '{}' under {} picks is not a non-negative integer", hits_key, picks),
                ),
            }
        }
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use keno_engine::sample_tables::classic_payout_table;

    #[test]
    fn test_parse_nested_map() {
        let parsed = parse_json(r#"{"1": {"1": 3.8}, "2": {"2": 12}}"#).unwrap();
        assert_eq!(parsed.table.multiplier(1, 1), 3.8);
        assert_eq!(parsed.table.multiplier(2, 2), 12.0);
        assert!(parsed.skipped.is_empty());
    }

    #[test]
    fn test_bad_keys_skipped() {
        let parsed = parse_json(r#"{"one": {"1": 3.8}, "2": {"x": 1, "3": 5, "2": 9}}"#).unwrap();
        assert_eq!(parsed.table.len(), 1);
        assert_eq!(parsed.skipped.len(), 3);
    }

    #[test]
    fn test_syntax_error_fails() {
        assert!(parse_json("{not json").is_err());
        assert!(parse_json(r#"{"1": {"1": "3.8"}}"#).is_err());
    }

    #[test]
    fn test_engine_serialization_round_trips() {
        let table = classic_payout_table();
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(parse_json(&json).unwrap().table, table);
    }
}
