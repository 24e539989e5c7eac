//! CSV payout tables
//!
//! One entry per line: `picks,hits,multiplier`.
//!
//! ```text
//! # classic 1-spot
//! picks,hits,multiplier
//! 1,1,3.8
//! ```
//!
//! Blank lines and `#` comments are ignored. The first content line is a
//! header when its first field is not an integer.

use crate::ParsedTable;

/// Parse CSV text into a payout table. Never fails; bad rows are skipped.
pub fn parse_csv(text: &str) -> ParsedTable {
    let mut parsed = ParsedTable::default();
    let mut seen_content = false;

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let first_content = !seen_content;
        seen_content = true;
        if first_content && fields[0].parse::<i64>().is_err() {
            log::debug!("line {}: treating '{}' as header", line_no, line);
            continue;
        }

        match parse_row(&fields) {
            Ok((picks, hits, multiplier)) => parsed.insert(line_no, picks, hits, multiplier),
            Err(reason) => parsed.skip(line_no, reason),
        }
    }

    parsed
}

fn parse_row(fields: &[&str]) -> std::result::Result<(u32, u32, f64), String> {
    // Trailing empty cells come from spreadsheet exports
    let used: Vec<&str> = match fields.iter().rposition(|f| !f.is_empty()) {
        Some(last) => fields[..=last].to_vec(),
        None => Vec::new(),
    };
    if used.len() != 3 {
        return Err(format!("expected 3 fields (picks,hits,multiplier), found {}", used.len()));
    }

    let picks = used[0]
        .parse::<u32>()
        .map_err(|_| format!("picks '{}' is not a non-negative integer", used[0]))?;
    let hits = used[1]
        .parse::<u32>()
        .map_err(|_| format!("hits '{}' is not a non-negative integer", used[1]))?;
    let multiplier = used[2]
        .parse::<f64>()
        .map_err(|_| format!("multiplier '{}' is not a number", used[2]))?;
    Ok((picks, hits, multiplier))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_header_and_comments() {
        let text = "# sample\npicks,hits,multiplier\n\n1,1,3.8\n2, 2 , 12\n";
        let parsed = parse_csv(text);
        assert!(parsed.skipped.is_empty());
        assert_eq!(parsed.table.multiplier(1, 1), 3.8);
        assert_eq!(parsed.table.multiplier(2, 2), 12.0);
        assert_eq!(parsed.table.len(), 2);
    }

    #[test]
    fn test_parse_without_header() {
        let parsed = parse_csv("1,1,3\n3,3,42\n");
        assert_eq!(parsed.table.len(), 2);
        assert!(parsed.skipped.is_empty());
    }

    #[test]
    fn test_malformed_rows_skipped() {
        let text = "picks,hits,multiplier\n\
                    1,1,3.8\n\
                    x,1,2\n\
                    2,2\n\
                    2,2,abc\n\
                    -1,0,1\n\
                    3,4,10\n\
                    4,4,-2\n\
                    5,5,100,,\n";
        let parsed = parse_csv(text);
        assert_eq!(parsed.table.len(), 2);
        assert_eq!(parsed.table.multiplier(5, 5), 100.0);
        let lines: Vec<usize> = parsed.skipped.iter().map(|s| s.line).collect();
        assert_eq!(lines, vec![3, 4, 5, 6, 7, 8]);
        assert!(parsed.skipped[0].reason.contains("picks"));
        assert!(parsed.skipped[4].reason.contains("exceeds"));
    }

    #[test]
    fn test_header_only_detected_on_first_content_line() {
        let parsed = parse_csv("1,1,3\npicks,hits,multiplier\n");
        assert_eq!(parsed.table.len(), 1);
        assert_eq!(parsed.skipped.len(), 1);
        assert_eq!(parsed.skipped[0].line, 2);
    }

    #[test]
    fn test_later_duplicate_wins() {
        let parsed = parse_csv("1,1,3\n1,1,3.5\n");
        assert_eq!(parsed.table.multiplier(1, 1), 3.5);
        assert!(parsed.skipped.is_empty());
    }

    #[test]
    fn test_zero_picks_reason() {
        let parsed = parse_csv("0,0,5\n");
        assert!(parsed.table.is_empty());
        assert_eq!(parsed.skipped.len(), 1);
        assert!(parsed.skipped[0].reason.contains("at least 1 pick"));
        assert!(!parsed.skipped[0].reason.contains("4294967295"));
    }

    #[test]
    fn test_empty_input() {
        let parsed = parse_csv("");
        assert!(parsed.table.is_empty());
        assert!(parsed.skipped.is_empty());
    }
}
