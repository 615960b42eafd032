//! Spreadsheet access module
//!
//! Wraps the workbook reader: open a file, enumerate its sheets in declared
//! order, and measure each sheet's table shape.

mod summarizer;

pub use summarizer::WorkbookSummarizer;
