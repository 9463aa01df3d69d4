use log::debug;
use std::io::Write;
use std::path::PathBuf;

use crate::error::Result;
use crate::excel::{self, ReadOptions, SheetSelector, Table};
use crate::ui::{OutputFormat, write_table};

/// Everything the printer needs, supplied by the caller instead of being baked in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrinterConfig {
    pub file_path: PathBuf,
    /// Sheet printed by the "specific sheet" block.
    pub sheet: SheetSelector,
    /// Columns printed by the "specific columns" block.
    pub columns: Vec<usize>,
    /// Row limit of the "first N rows" block.
    pub row_limit: usize,
    pub format: OutputFormat,
}

impl PrinterConfig {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
            sheet: SheetSelector::Index(0),
            columns: vec![0, 1],
            row_limit: 5,
            format: OutputFormat::Table,
        }
    }
}

/// One labelled read: what gets printed and how the sheet is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub label: String,
    pub options: ReadOptions,
}

pub struct SpreadsheetPrinter {
    config: PrinterConfig,
}

impl SpreadsheetPrinter {
    pub fn new(config: PrinterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PrinterConfig {
        &self.config
    }

    /// The four reads in the order they run.
    pub fn steps(&self) -> Vec<Step> {
        vec![
            Step {
                label: "Basic read:".to_string(),
                options: ReadOptions::default(),
            },
            Step {
                label: "Reading specific sheet:".to_string(),
                options: ReadOptions::default().sheet(self.config.sheet.clone()),
            },
            Step {
                label: "Reading specific columns:".to_string(),
                options: ReadOptions::default().columns(self.config.columns.clone()),
            },
            Step {
                label: format!("Reading first {} rows:", self.config.row_limit),
                options: ReadOptions::default().row_limit(self.config.row_limit),
            },
        ]
    }

    pub fn read(&self, options: &ReadOptions) -> Result<Table> {
        excel::read_sheet(&self.config.file_path, options)
    }

    /// Run every step, writing each label and table to `out`.
    ///
    /// Stops at the first failing read; blocks already written stay written.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        for (idx, step) in self.steps().iter().enumerate() {
            debug!("Step {}: {}", idx + 1, step.label);

            // Read before writing the label so a failed read prints nothing
            let table = self.read(&step.options)?;

            if idx > 0 {
                writeln!(out)?;
            }
            writeln!(out, "{}", step.label)?;
            write_table(out, &table, self.config.format)?;
        }

        out.flush()?;
        Ok(())
    }
}
