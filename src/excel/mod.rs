//! Excel reading module
//!
//! Wraps calamine behind a reader that yields sheet names and a dense 2-D
//! cell grid per sheet. Spreadsheet parsing itself is calamine's job.

mod reader;

pub use reader::WorkbookReader;
