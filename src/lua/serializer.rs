//! Grid serializer - workbook grid → Lua nested table source

use crate::types::{CellValue, Workbook};
use std::path::{Path, PathBuf};

/// Serializes a workbook grid into `workbook[sheet][row][col] = value`
/// assignment lines.
///
/// Emission is dense: every slot inside a sheet's bounding box gets exactly
/// one assignment, with blank cells written as explicit `nil`, so consumers
/// can index any in-range cell without existence checks. Output is
/// deterministic for a given workbook, keeping regeneration diffs minimal.
pub struct GridSerializer {
    source: PathBuf,
}

impl GridSerializer {
    /// Create a serializer; `source` only feeds the header comment
    pub fn new<P: AsRef<Path>>(source: P) -> Self {
        Self {
            source: source.as_ref().to_path_buf(),
        }
    }

    /// Produce the ordered line sequence for the data section
    pub fn serialize(&self, workbook: &Workbook) -> Vec<String> {
        let mut lines = Vec::new();

        lines.push("-- Auto-generated Lua table from Excel file".to_string());
        lines.push(format!("-- Source: {}", self.source.display()));
        lines.push("-- Structure: workbook[sheet_name][row][column] = value".to_string());
        lines.push(String::new());
        lines.push("local workbook = {}".to_string());
        lines.push(String::new());

        for sheet in &workbook.sheets {
            lines.push(format!("-- Sheet: {}", sheet.name));
            lines.push(format!("workbook[\"{}\"] = {{}}", sheet.name));
            lines.push(String::new());

            for (row_idx, row) in sheet.rows.iter().enumerate() {
                let row_num = row_idx + 1;
                lines.push(format!("workbook[\"{}\"][{}] = {{}}", sheet.name, row_num));

                for (col_idx, cell) in row.iter().enumerate() {
                    lines.push(format!(
                        "workbook[\"{}\"][{}][{}] = {}",
                        sheet.name,
                        row_num,
                        col_idx + 1,
                        lua_literal(cell)
                    ));
                }
            }

            lines.push(String::new());
        }

        lines
    }
}

/// Convert a cell value to its Lua literal form
fn lua_literal(value: &CellValue) -> String {
    match value {
        CellValue::Nil => "nil".to_string(),
        CellValue::Bool(true) => "true".to_string(),
        CellValue::Bool(false) => "false".to_string(),
        CellValue::Int(i) => i.to_string(),
        CellValue::Float(f) => format_number(*f),
        CellValue::Text(s) | CellValue::Other(s) => format!("\"{}\"", escape_lua_string(s)),
    }
}

/// Format a number for Lua output.
///
/// xlsx stores every number as a float; finite whole values print without
/// a fraction part so integer cells read the way the source shows them.
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

/// Escape a string for a double-quoted Lua literal.
///
/// Exactly backslash, double quote, and newline are escaped; every other
/// character passes through untouched. Backslashes must go first.
fn escape_lua_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
