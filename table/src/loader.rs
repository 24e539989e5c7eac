//! Payout files on disk

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::csv::parse_csv;
use crate::error::{Result, TableError};
use crate::json::parse_json;
use crate::ParsedTable;

/// Supported payout file formats, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayoutFormat {
    Csv,
    Json,
}

impl PayoutFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(PayoutFormat::Csv),
            "json" => Some(PayoutFormat::Json),
            _ => None,
        }
    }
}

/// Read and parse a payout file.
pub fn load_file(path: impl AsRef<Path>) -> Result<ParsedTable> {
    let path = path.as_ref();
    let format = PayoutFormat::from_path(path)
        .ok_or_else(|| TableError::UnsupportedFormat(path.to_path_buf()))?;
    let text = fs::read_to_string(path).map_err(|source| TableError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let parsed = match format {
        PayoutFormat::Csv => parse_csv(&text),
        PayoutFormat::Json => parse_json(&text)?,
    };
    log::info!(
        "loaded {} payout entries from {} ({} skipped)",
        parsed.table.len(),
        path.display(),
        parsed.skipped.len()
    );
    Ok(parsed)
}

/// Payout files directly inside `dir`, sorted by file name.
pub fn list_payout_files(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir.as_ref()).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() && PayoutFormat::from_path(entry.path()).is_some() {
            files.push(entry.into_path());
        }
    }
    log::debug!("found {} payout files in {}", files.len(), dir.as_ref().display());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fresh scratch directory under the system temp dir.
    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("keno-table-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(PayoutFormat::from_path(Path::new("a.csv")), Some(PayoutFormat::Csv));
        assert_eq!(PayoutFormat::from_path(Path::new("a.JSON")), Some(PayoutFormat::Json));
        assert_eq!(PayoutFormat::from_path(Path::new("a.txt")), None);
        assert_eq!(PayoutFormat::from_path(Path::new("noext")), None);
    }

    #[test]
    fn test_load_csv_and_json() {
        let dir = scratch_dir("load");
        let csv_path = dir.join("spot.csv");
        let json_path = dir.join("spot.json");
        fs::write(&csv_path, "picks,hits,multiplier\n1,1,3.8\nbad,row\n").unwrap();
        fs::write(&json_path, r#"{"1": {"1": 3.8}}"#).unwrap();

        let from_csv = load_file(&csv_path).unwrap();
        let from_json = load_file(&json_path).unwrap();
        assert_eq!(from_csv.table, from_json.table);
        assert_eq!(from_csv.skipped.len(), 1);
        assert_eq!(from_csv.skipped[0].line, 3);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_errors() {
        let dir = scratch_dir("errors");
        assert!(matches!(load_file(dir.join("table.txt")), Err(TableError::UnsupportedFormat(_))));
        assert!(matches!(load_file(dir.join("missing.csv")), Err(TableError::Io { .. })));

        let broken = dir.join("broken.json");
        fs::write(&broken, "{").unwrap();
        assert!(matches!(load_file(&broken), Err(TableError::Json(_))));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_list_payout_files() {
        let dir = scratch_dir("list");
        fs::write(dir.join("b.json"), "{}").unwrap();
        fs::write(dir.join("a.csv"), "").unwrap();
        fs::write(dir.join("notes.txt"), "").unwrap();
        fs::create_dir_all(dir.join("nested")).unwrap();
        fs::write(dir.join("nested").join("c.csv"), "").unwrap();

        let names: Vec<String> = list_payout_files(&dir)
            .unwrap()
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()).map(str::to_string))
            .collect();
        assert_eq!(names, vec!["a.csv", "b.json"]);

        fs::remove_dir_all(&dir).unwrap();
    }
}
