use std::fmt;
use std::path::PathBuf;

/// Summary of a single sheet: source file, file size, and table shape.
///
/// One record is produced per (file, sheet) pair and printed immediately;
/// nothing is accumulated across sheets or files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSummary {
    /// File path exactly as supplied on the command line.
    pub path: PathBuf,
    /// Size of the backing file in bytes.
    pub file_size: u64,
    /// Width of the sheet's used range.
    pub columns: usize,
    /// Data rows in the used range, header excluded.
    pub rows: usize,
}

impl SheetSummary {
    pub fn new(path: PathBuf, file_size: u64, columns: usize, rows: usize) -> Self {
        Self {
            path,
            file_size,
            columns,
            rows,
        }
    }
}

/// Renders the pipe-delimited output line: `|<path>|<size>|<columns>|<rows>|`.
impl fmt::Display for SheetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "|{}|{}|{}|{}|",
            self.path.display(),
            self.file_size,
            self.columns,
            self.rows
        )
    }
}
