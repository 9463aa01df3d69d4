use calamine::{Reader, open_workbook_auto};
use log::{debug, info, warn};
use std::fmt;
use std::io;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::excel::Table;

/// Which sheet of the document to read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetSelector {
    Index(usize),
    Name(String),
}

impl Default for SheetSelector {
    fn default() -> Self {
        SheetSelector::Index(0)
    }
}

impl FromStr for SheetSelector {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.parse::<usize>() {
            Ok(index) => SheetSelector::Index(index),
            Err(_) => SheetSelector::Name(s.to_string()),
        })
    }
}

impl fmt::Display for SheetSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetSelector::Index(index) => write!(f, "#{}", index),
            SheetSelector::Name(name) => write!(f, "'{}'", name),
        }
    }
}

/// Options for a single read. The default reads the whole first sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadOptions {
    pub sheet: SheetSelector,
    /// Zero-based positional columns to keep; `None` keeps all.
    pub columns: Option<Vec<usize>>,
    /// Maximum number of data rows, header excluded.
    pub row_limit: Option<usize>,
}

impl ReadOptions {
    pub fn sheet(mut self, sheet: SheetSelector) -> Self {
        self.sheet = sheet;
        self
    }

    pub fn columns(mut self, columns: impl Into<Vec<usize>>) -> Self {
        self.columns = Some(columns.into());
        self
    }

    pub fn row_limit(mut self, limit: usize) -> Self {
        self.row_limit = Some(limit);
        self
    }
}

/// Open `path`, read the selected sheet and apply the column and row filters.
///
/// The workbook handle lives only for the duration of this call.
pub fn read_sheet<P: AsRef<Path>>(path: P, options: &ReadOptions) -> Result<Table> {
    let path = path.as_ref();

    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => {}
        Ok(_) => {
            return Err(Error::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(Error::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        Err(e) => return Err(Error::Io(e)),
    }

    debug!("Opening workbook {}", path.display());
    let mut workbook = open_workbook_auto(path).map_err(|source| Error::Format {
        path: path.to_path_buf(),
        source,
    })?;

    let sheet_names = workbook.sheet_names();
    if sheet_names.is_empty() {
        return Err(Error::NoSheets {
            path: path.to_path_buf(),
        });
    }

    let index = resolve_sheet(&sheet_names, &options.sheet)?;
    let sheet_name = &sheet_names[index];
    debug!("Selected sheet {} -> '{}'", options.sheet, sheet_name);

    let range = workbook
        .worksheet_range(sheet_name)
        .map_err(|source| Error::Format {
            path: path.to_path_buf(),
            source,
        })?;

    let mut table = Table::from_range(sheet_name, &range);
    if table.column_count() == 0 {
        warn!("Sheet '{}' in {} is empty", sheet_name, path.display());
    }

    // An empty sheet has nothing to select from and reads as an empty table
    if let Some(columns) = options.columns.as_ref().filter(|_| table.column_count() > 0) {
        let selected = normalize_columns(columns, table.column_count())?;
        table.retain_columns(&selected);
    }

    if let Some(limit) = options.row_limit {
        table.truncate_rows(limit);
    }

    info!(
        "Read sheet '{}': {} rows x {} columns",
        table.sheet_name,
        table.row_count(),
        table.column_count()
    );

    Ok(table)
}

fn resolve_sheet(sheet_names: &[String], selector: &SheetSelector) -> Result<usize> {
    match selector {
        SheetSelector::Index(index) if *index < sheet_names.len() => Ok(*index),
        SheetSelector::Index(index) => Err(Error::SheetIndex {
            index: *index,
            count: sheet_names.len(),
        }),
        SheetSelector::Name(name) => sheet_names
            .iter()
            .position(|s| s == name)
            .ok_or_else(|| Error::SheetName {
                name: name.clone(),
                available: sheet_names.to_vec(),
            }),
    }
}

/// Validate and put the selection in document order, dropping duplicates.
fn normalize_columns(columns: &[usize], count: usize) -> Result<Vec<usize>> {
    if let Some(&index) = columns.iter().find(|&&c| c >= count) {
        return Err(Error::ColumnIndex { index, count });
    }

    let mut selected = columns.to_vec();
    selected.sort_unstable();
    selected.dedup();
    Ok(selected)
}

pub fn load_full_sheet<P: AsRef<Path>>(path: P) -> Result<Table> {
    read_sheet(path, &ReadOptions::default())
}

pub fn load_sheet_by_index<P: AsRef<Path>>(path: P, sheet_index: usize) -> Result<Table> {
    read_sheet(
        path,
        &ReadOptions::default().sheet(SheetSelector::Index(sheet_index)),
    )
}

pub fn load_columns<P: AsRef<Path>>(path: P, column_indices: &[usize]) -> Result<Table> {
    read_sheet(path, &ReadOptions::default().columns(column_indices))
}

pub fn load_rows<P: AsRef<Path>>(path: P, row_limit: usize) -> Result<Table> {
    read_sheet(path, &ReadOptions::default().row_limit(row_limit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn names() -> Vec<String> {
        vec!["Data".to_string(), "Summary".to_string()]
    }

    #[test]
    fn test_resolve_sheet() {
        assert_eq!(resolve_sheet(&names(), &SheetSelector::Index(1)).unwrap(), 1);
        assert_eq!(
            resolve_sheet(&names(), &SheetSelector::Name("Summary".to_string())).unwrap(),
            1
        );

        let err = resolve_sheet(&names(), &SheetSelector::Index(2)).unwrap_err();
        assert!(matches!(err, Error::SheetIndex { index: 2, count: 2 }));

        let err = resolve_sheet(&names(), &SheetSelector::Name("summary".to_string())).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Index);
    }

    #[test]
    fn test_normalize_columns() {
        assert_eq!(normalize_columns(&[2, 0, 2], 3).unwrap(), vec![0, 2]);
        assert!(normalize_columns(&[], 3).unwrap().is_empty());

        let err = normalize_columns(&[0, 99], 3).unwrap_err();
        assert!(matches!(err, Error::ColumnIndex { index: 99, count: 3 }));
    }

    #[test]
    fn test_sheet_selector_from_str() {
        assert_eq!("0".parse::<SheetSelector>(), Ok(SheetSelector::Index(0)));
        assert_eq!(
            "Q1 Sales".parse::<SheetSelector>(),
            Ok(SheetSelector::Name("Q1 Sales".to_string()))
        );
    }

    #[test]
    fn test_missing_file() {
        let err = load_full_sheet("/definitely/not/here.xlsx").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FileNotFound);
    }
}
