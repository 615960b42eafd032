//! Workbook summarization - stat the file, open it, measure each sheet

use crate::error::{SummaryError, SummaryResult};
use crate::types::SheetSummary;
use calamine::{open_workbook_auto, Data, Range, Reader, Sheets};
use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Open workbook handle for one input file.
///
/// Owns the file for exactly one pass over its sheets; dropped before the
/// next input file is touched. Format detection is automatic, so xlsx, xls,
/// xlsb, and ods workbooks are all accepted.
pub struct WorkbookSummarizer {
    path: PathBuf,
    file_size: u64,
    workbook: Sheets<BufReader<File>>,
}

impl WorkbookSummarizer {
    /// Stat the file, then open it as a workbook.
    ///
    /// Metadata is read before the workbook is opened so that a missing or
    /// unreadable path reports as a file access error rather than a format
    /// error.
    pub fn open<P: AsRef<Path>>(path: P) -> SummaryResult<Self> {
        let path = path.as_ref().to_path_buf();

        let metadata = fs::metadata(&path).map_err(|source| SummaryError::FileAccess {
            path: path.clone(),
            source,
        })?;
        let file_size = metadata.len();
        trace!(path = %path.display(), file_size, "stat complete");

        let workbook = open_workbook_auto(&path).map_err(|source| SummaryError::Format {
            path: path.clone(),
            source,
        })?;

        Ok(Self {
            path,
            file_size,
            workbook,
        })
    }

    /// Size of the backing file in bytes, recorded at open time.
    pub fn file_size(&self) -> u64 {
        self.file_size
    }

    /// Sheet names in workbook-declared order.
    pub fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names().to_vec()
    }

    /// Load one sheet's full cell range and summarize its shape.
    pub fn summarize_sheet(&mut self, sheet_name: &str) -> SummaryResult<SheetSummary> {
        let range = self
            .workbook
            .worksheet_range(sheet_name)
            .map_err(|source| SummaryError::Format {
                path: self.path.clone(),
                source,
            })?;

        let (columns, rows) = table_dimensions(&range);
        debug!(sheet = sheet_name, columns, rows, "sheet measured");

        Ok(SheetSummary::new(
            self.path.clone(),
            self.file_size,
            columns,
            rows,
        ))
    }
}

/// Shape of a loaded sheet as (columns, data rows).
///
/// Columns span the used range's width. Rows exclude the header, so a
/// header-only sheet reports zero rows and an empty sheet reports zero of
/// both.
fn table_dimensions(range: &Range<Data>) -> (usize, usize) {
    if range.is_empty() {
        return (0, 0);
    }

    let (height, width) = range.get_size();
    (width, height.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_empty_range() {
        let range: Range<Data> = Range::empty();
        assert_eq!(table_dimensions(&range), (0, 0));
    }

    #[test]
    fn test_dimensions_header_only() {
        // One row of headers, no data rows.
        let mut range = Range::new((0, 0), (0, 2));
        range.set_value((0, 0), Data::String("a".to_string()));
        range.set_value((0, 1), Data::String("b".to_string()));
        range.set_value((0, 2), Data::String("c".to_string()));

        assert_eq!(table_dimensions(&range), (3, 0));
    }

    #[test]
    fn test_dimensions_header_and_data() {
        // 5 columns, header + 3 data rows.
        let mut range = Range::new((0, 0), (3, 4));
        for col in 0..5 {
            range.set_value((0, col), Data::String(format!("h{}", col)));
        }
        for row in 1..4 {
            for col in 0..5 {
                range.set_value((row, col), Data::Int((row * 10 + col) as i64));
            }
        }

        assert_eq!(table_dimensions(&range), (5, 3));
    }

    #[test]
    fn test_dimensions_sparse_trailing_cells() {
        // Used range spans the extremes even when interior cells are empty.
        let mut range = Range::new((0, 0), (10, 3));
        range.set_value((0, 0), Data::String("h".to_string()));
        range.set_value((10, 3), Data::Float(1.5));

        assert_eq!(table_dimensions(&range), (4, 10));
    }

    #[test]
    fn test_open_missing_file_is_file_access() {
        let result = WorkbookSummarizer::open("definitely/not/here.xlsx");
        assert!(matches!(result, Err(SummaryError::FileAccess { .. })));
    }
}
