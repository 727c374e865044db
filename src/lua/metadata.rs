//! Metadata preservation across regenerated Lua files
//!
//! The metadata section is an opaque text range owned by the downstream
//! runtime. It is located by a marker line and copied through verbatim;
//! its internal grammar is never parsed, so schema changes made outside
//! this tool survive regeneration untouched.

use colored::Colorize;
use std::fs;
use std::path::Path;

/// Marker line delimiting the start of the preserved metadata section
pub const METADATA_MARKER: &str = "-- METADATA_START";

/// Default metadata block for first runs (or when the marker was lost)
const DEFAULT_METADATA: &str = concat!(
    "\n-- METADATA_START\n",
    "-- This section stores UI state and preferences\n",
    "local metadata = {\n",
    "    ColumnFilter = {}\n",
    "}\n",
    "\n",
    "return workbook, metadata",
);

/// Extract the metadata section from a previously generated file.
///
/// Returns everything from the marker line to end-of-file, byte-for-byte.
/// A missing file or a file without the marker yields `None` (first run,
/// or a prior file with no recognizable metadata section). Read failures
/// are downgraded to a warning and never abort the conversion.
pub fn extract(path: &Path) -> Option<String> {
    if !path.exists() {
        return None;
    }

    match fs::read_to_string(path) {
        Ok(content) => find_marker(&content).map(|start| content[start..].to_string()),
        Err(e) => {
            eprintln!(
                "{} Could not read existing metadata: {e}",
                "WARNING:".bold().yellow()
            );
            None
        }
    }
}

/// Resolve the text to append after the data section.
///
/// An extracted blob is re-attached as-is behind a separating newline;
/// with nothing extracted the default block is synthesized instead.
pub fn resolve(extracted: Option<String>) -> String {
    match extracted {
        Some(blob) => format!("\n{blob}"),
        None => DEFAULT_METADATA.to_string(),
    }
}

/// Byte offset of the marker, which must sit at the start of a line
fn find_marker(content: &str) -> Option<usize> {
    content
        .match_indices(METADATA_MARKER)
        .find(|(idx, _)| *idx == 0 || content.as_bytes()[idx - 1] == b'\n')
        .map(|(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_find_marker_at_file_start() {
        let content = "-- METADATA_START\nlocal metadata = {}";
        assert_eq!(find_marker(content), Some(0));
    }

    #[test]
    fn test_find_marker_at_line_start() {
        let content = "local workbook = {}\n\n-- METADATA_START\nrest";
        assert_eq!(find_marker(content), Some(21));
    }

    #[test]
    fn test_find_marker_ignores_mid_line_occurrence() {
        // Marker text inside a cell string is not a section boundary
        let content = "workbook[\"S\"][1][1] = \"-- METADATA_START\"";
        assert_eq!(find_marker(content), None);
    }

    #[test]
    fn test_find_marker_absent() {
        assert_eq!(find_marker("local workbook = {}"), None);
    }

    #[test]
    fn test_extract_missing_file() {
        let dir = TempDir::new().unwrap();
        assert_eq!(extract(&dir.path().join("absent.lua")), None);
    }

    #[test]
    fn test_extract_returns_marker_to_eof() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "local workbook = {{}}\n\n-- METADATA_START\nlocal metadata = {{\n    ColumnFilter = {{\"A\"}}\n}}\n\nreturn workbook, metadata"
        )
        .unwrap();

        let blob = extract(file.path()).unwrap();
        assert!(blob.starts_with("-- METADATA_START\n"));
        assert!(blob.ends_with("return workbook, metadata"));
        assert!(blob.contains("ColumnFilter = {\"A\"}"));
    }

    #[test]
    fn test_extract_file_without_marker() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "local workbook = {{}}\nreturn workbook").unwrap();

        assert_eq!(extract(file.path()), None);
    }

    #[test]
    fn test_resolve_prefixes_extracted_blob() {
        let resolved = resolve(Some("-- METADATA_START\ncustom".to_string()));
        assert_eq!(resolved, "\n-- METADATA_START\ncustom");
    }

    #[test]
    fn test_resolve_default_block() {
        let resolved = resolve(None);
        assert!(resolved.starts_with("\n-- METADATA_START\n"));
        assert!(resolved.contains("ColumnFilter = {}"));
        assert!(resolved.ends_with("return workbook, metadata"));
    }
}
