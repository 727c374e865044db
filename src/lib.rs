//! Sheetlua - Excel workbook → Lua nested table converter
//!
//! Reads every sheet of an .xlsx workbook and produces a Lua source file
//! declaring `workbook[sheet_name][row][column] = value` for every cell
//! slot, while preserving a user-editable metadata section across repeated
//! conversions.
//!
//! # Features
//!
//! - Dense emission: every slot inside a sheet's bounding box gets an
//!   assignment, with blank cells written as explicit `nil`
//! - Deterministic output, so regenerated files diff minimally
//! - Opaque metadata passthrough keyed on the `-- METADATA_START` marker
//!
//! # Example
//!
//! ```no_run
//! use sheetlua::excel::WorkbookReader;
//! use sheetlua::lua::{metadata, GridSerializer};
//! use std::path::Path;
//!
//! let source = Path::new("data.xlsx");
//! let workbook = WorkbookReader::new(source).read()?;
//!
//! let mut lines = GridSerializer::new(source).serialize(&workbook);
//! lines.push(metadata::resolve(None));
//!
//! println!("{}", lines.join("\n"));
//! # Ok::<(), sheetlua::error::ConvertError>(())
//! ```

pub mod cli;
pub mod error;
pub mod excel;
pub mod lua;
pub mod types;

// Re-export commonly used types
pub use error::{ConvertError, ConvertResult};
pub use types::{CellValue, Sheet, Workbook};
