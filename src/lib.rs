//! Print a spreadsheet's default sheet, a selected sheet, a column subset and a
//! row subset.
//!
//! Reading goes through [`excel::read_sheet`] with a [`excel::ReadOptions`];
//! [`app::SpreadsheetPrinter`] runs the four labelled reads against one file.

pub mod app;
pub mod error;
pub mod excel;
pub mod json_export;
pub mod ui;
pub mod utils;

pub use error::{Error, ErrorKind, Result};
