//! Excel reader implementation - Excel (.xlsx) → in-memory workbook grid

use crate::error::{ConvertError, ConvertResult};
use crate::types::{CellValue, Sheet, Workbook};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::path::Path;

/// Excel reader that densifies every sheet to its bounding box
pub struct WorkbookReader {
    path: std::path::PathBuf,
}

impl WorkbookReader {
    /// Create a new reader for the given source path
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read the source workbook into the dense grid model
    pub fn read(&self) -> ConvertResult<Workbook> {
        if !self.path.exists() {
            return Err(ConvertError::SourceNotFound(
                self.path.display().to_string(),
            ));
        }

        let mut xlsx: Xlsx<_> = open_workbook(&self.path)
            .map_err(|e| ConvertError::Excel(format!("Failed to open Excel file: {e}")))?;

        let mut workbook = Workbook::new();
        let sheet_names = xlsx.sheet_names().to_vec();

        for sheet_name in sheet_names {
            let range = xlsx.worksheet_range(&sheet_name).map_err(|e| {
                ConvertError::Excel(format!("Failed to read sheet '{sheet_name}': {e}"))
            })?;
            workbook.add_sheet(Self::densify(&sheet_name, &range));
        }

        Ok(workbook)
    }

    /// Build a dense grid across the sheet's full bounding box.
    ///
    /// Addressing is absolute: cells above or left of the first populated
    /// cell still occupy slots, holding `Nil`.
    fn densify(sheet_name: &str, range: &Range<Data>) -> Sheet {
        let mut sheet = Sheet::new(sheet_name.to_string());

        let Some((end_row, end_col)) = range.end() else {
            return sheet; // no cell data, 0 × 0
        };

        for row in 0..=end_row {
            let mut cells = Vec::with_capacity(end_col as usize + 1);
            for col in 0..=end_col {
                let value = range
                    .get_value((row, col))
                    .map_or(CellValue::Nil, Self::convert_cell);
                cells.push(value);
            }
            sheet.rows.push(cells);
        }

        sheet
    }

    /// Map a calamine cell to the converter's value model.
    ///
    /// Date/time serials, ISO date and duration strings, and cell errors
    /// have no native Lua form; they degrade to their display string (lossy).
    fn convert_cell(data: &Data) -> CellValue {
        match data {
            Data::Empty => CellValue::Nil,
            Data::Bool(b) => CellValue::Bool(*b),
            Data::Int(i) => CellValue::Int(*i),
            Data::Float(f) => CellValue::Float(*f),
            Data::String(s) => CellValue::Text(s.clone()),
            other => CellValue::Other(other.to_string()),
        }
    }
}
