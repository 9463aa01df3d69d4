use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use std::io;
use std::path::PathBuf;

use sheet_printer::app::{PrinterConfig, SpreadsheetPrinter};
use sheet_printer::excel::SheetSelector;
use sheet_printer::ui::OutputFormat;
use sheet_printer::utils::parse_column_list;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Spreadsheet file path (xlsx, xlsm, xlsb, xls, ods)
    #[arg(env = "SHEET_PRINTER_FILE")]
    file_path: PathBuf,

    /// Sheet for the "specific sheet" read: zero-based index or sheet name
    #[arg(long, short = 's', default_value = "0")]
    sheet: SheetSelector,

    /// Columns for the "specific columns" read: zero-based indices or letters, comma separated
    #[arg(long, short = 'c', default_value = "0,1")]
    columns: String,

    /// Number of data rows for the "first rows" read
    #[arg(long, short = 'r', default_value = "5")]
    rows: usize,

    /// Output format: 'table' or 'json'
    #[arg(long, short = 'f', default_value = "table")]
    format: OutputFormat,

    /// Log read details to stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    let columns = parse_column_list(&cli.columns)
        .with_context(|| format!("Invalid --columns value: {}", cli.columns))?;

    let config = PrinterConfig {
        file_path: cli.file_path,
        sheet: cli.sheet,
        columns,
        row_limit: cli.rows,
        format: cli.format,
    };

    let printer = SpreadsheetPrinter::new(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    printer.run(&mut out).with_context(|| {
        format!(
            "Failed to print spreadsheet: {}",
            printer.config().file_path.display()
        )
    })?;

    Ok(())
}
