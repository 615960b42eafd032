use crate::error::SummaryResult;
use crate::excel::WorkbookSummarizer;
use std::path::PathBuf;
use tracing::{debug, info};

/// Execute the summarize command: one pipe-delimited line per sheet.
///
/// Files are processed in argument order, sheets in workbook order. Each
/// line goes to stdout as soon as its sheet is measured, so output printed
/// before a failure stays in place when the run aborts.
pub fn summarize(files: Vec<PathBuf>) -> SummaryResult<()> {
    for file in files {
        info!(file = %file.display(), "summarizing workbook");

        let mut workbook = WorkbookSummarizer::open(&file)?;
        let sheet_names = workbook.sheet_names();
        debug!(
            file = %file.display(),
            sheets = sheet_names.len(),
            size = workbook.file_size(),
            "workbook opened"
        );

        for sheet_name in sheet_names {
            let summary = workbook.summarize_sheet(&sheet_name)?;
            println!("{}", summary);
        }
        // Workbook handle drops here, before the next file is opened.
    }

    Ok(())
}
