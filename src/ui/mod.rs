mod render;

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::error::Result;
use crate::excel::Table;
use crate::json_export::write_table_json;

pub use render::{MAX_COLUMN_WIDTH, write_table_text};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "t" | "table" | "text" => Ok(OutputFormat::Table),
            "j" | "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid output format: {} (expected 'table' or 'json')", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => f.write_str("table"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

pub fn write_table<W: Write>(out: &mut W, table: &Table, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => write_table_text(out, table),
        OutputFormat::Json => write_table_json(out, table),
    }
}
