use clap::Parser;
use colored::Colorize;
use sheetsum::cli;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "sheetsum")]
#[command(about = "Print one pipe-delimited summary line per spreadsheet sheet.")]
#[command(long_about = "Sheetsum - per-sheet spreadsheet summaries

For every input file, in argument order, opens the file as a workbook and
prints one line per sheet, in workbook order:

  |<file-path>|<file-size-bytes>|<column-count>|<row-count>|

The row count excludes the header row. Output is streamed: each line is
printed as soon as its sheet is measured. The run aborts on the first
unreadable or unparsable file; lines already printed remain.

SUPPORTED FORMATS:
  xlsx, xlsm, xls, xlsb, ods (detected automatically)

EXAMPLES:
  sheetsum report.xlsx
  sheetsum q1.xlsx q2.xlsx q3.xlsx
  sheetsum data/*.xlsx | awk -F'|' '{ rows += $5 } END { print rows }'")]
#[command(version)]
struct Cli {
    /// Spreadsheet file(s) to summarize, processed in the order given
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout carries only summary lines.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sheetsum=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli::summarize(cli.files) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".bold().red(), e);
            ExitCode::FAILURE
        }
    }
}
