//! Sheetsum - per-sheet spreadsheet summaries
//!
//! This library opens spreadsheet workbooks, walks their sheets in declared
//! order, and produces one summary record per sheet: file path, file size in
//! bytes, column count, and data row count (header excluded).
//!
//! # Features
//!
//! - Automatic workbook format detection (xlsx, xls, xlsb, ods)
//! - Deterministic ordering: files in argument order, sheets in workbook order
//! - Streamed output: each record is printed the moment its sheet is measured
//! - Abort-on-first-error with partial output preserved
//!
//! # Example
//!
//! ```no_run
//! use sheetsum::excel::WorkbookSummarizer;
//!
//! let mut workbook = WorkbookSummarizer::open("report.xlsx")?;
//! for sheet_name in workbook.sheet_names() {
//!     let summary = workbook.summarize_sheet(&sheet_name)?;
//!     println!("{}", summary);
//! }
//! # Ok::<(), sheetsum::error::SummaryError>(())
//! ```

pub mod cli;
pub mod error;
pub mod excel;
pub mod types;

// Re-export commonly used types
pub use error::{SummaryError, SummaryResult};
pub use types::SheetSummary;
