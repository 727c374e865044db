//==============================================================================
// Cell Values
//==============================================================================

/// A single scalar cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Empty cell (serialized as an explicit `nil` slot)
    Nil,
    /// Boolean cell
    Bool(bool),
    /// Integer cell
    Int(i64),
    /// Floating-point cell
    Float(f64),
    /// Text cell
    Text(String),
    /// Display-string form of a value with no native Lua representation
    /// (date/time serials, ISO durations, cell errors). Lossy.
    Other(String),
}

impl CellValue {
    /// Check whether this is an empty slot
    pub fn is_nil(&self) -> bool {
        matches!(self, CellValue::Nil)
    }

    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Nil => "Nil",
            CellValue::Bool(_) => "Bool",
            CellValue::Int(_) => "Int",
            CellValue::Float(_) => "Float",
            CellValue::Text(_) => "Text",
            CellValue::Other(_) => "Other",
        }
    }
}

//==============================================================================
// Sheets and Workbooks
//==============================================================================

/// A sheet densified to its bounding box.
///
/// Every slot in `max_row × max_col` is populated; empty cells hold
/// `CellValue::Nil`. A sheet with no cell data has dimensions 0 × 0.
#[derive(Debug, Clone)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    pub fn new(name: String) -> Self {
        Self {
            name,
            rows: Vec::new(),
        }
    }

    /// Number of rows in the bounding box
    pub fn max_row(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns in the bounding box (rows are rectangular)
    pub fn max_col(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Total cell slots, blank ones included
    pub fn cell_count(&self) -> usize {
        self.max_row() * self.max_col()
    }
}

/// An ordered workbook; sheet order matches the source file.
///
/// Read-only once loaded: constructed by the reader, consumed by the
/// serializer, discarded at process end.
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new() -> Self {
        Self { sheets: Vec::new() }
    }

    pub fn add_sheet(&mut self, sheet: Sheet) {
        self.sheets.push(sheet);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_value_is_nil() {
        assert!(CellValue::Nil.is_nil());
        assert!(!CellValue::Bool(false).is_nil());
        assert!(!CellValue::Text(String::new()).is_nil());
    }

    #[test]
    fn test_cell_value_type_name() {
        assert_eq!(CellValue::Nil.type_name(), "Nil");
        assert_eq!(CellValue::Bool(true).type_name(), "Bool");
        assert_eq!(CellValue::Int(7).type_name(), "Int");
        assert_eq!(CellValue::Float(1.5).type_name(), "Float");
        assert_eq!(CellValue::Text("x".to_string()).type_name(), "Text");
        assert_eq!(CellValue::Other("x".to_string()).type_name(), "Other");
    }

    #[test]
    fn test_sheet_dimensions() {
        let mut sheet = Sheet::new("Data".to_string());
        assert_eq!(sheet.max_row(), 0);
        assert_eq!(sheet.max_col(), 0);
        assert_eq!(sheet.cell_count(), 0);

        sheet.rows.push(vec![CellValue::Nil, CellValue::Int(1)]);
        sheet.rows.push(vec![CellValue::Int(2), CellValue::Nil]);
        assert_eq!(sheet.max_row(), 2);
        assert_eq!(sheet.max_col(), 2);
        assert_eq!(sheet.cell_count(), 4);
    }

    #[test]
    fn test_workbook_preserves_sheet_order() {
        let mut workbook = Workbook::new();
        workbook.add_sheet(Sheet::new("Zebra".to_string()));
        workbook.add_sheet(Sheet::new("Alpha".to_string()));

        let names: Vec<&str> = workbook.sheets.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Zebra", "Alpha"]);
    }
}
