use calamine::{Data, Range};
use std::collections::{HashMap, HashSet};

use crate::excel::Cell;

/// Tabular result of a read: headers from the first sheet row, data rows below.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub sheet_name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Build a table from a sheet's used range.
    ///
    /// Columns are counted from column A, so empty columns left of the used range
    /// are kept. The first used row becomes the header row.
    pub fn from_range(sheet_name: &str, range: &Range<Data>) -> Self {
        let leading = range.start().map_or(0, |(_, col)| col as usize);
        let (_, used_width) = range.get_size();
        let width = if used_width == 0 { 0 } else { leading + used_width };
        let mut rows = range.rows();

        let headers = match rows.next() {
            Some(first) => unique_headers(
                (0..width)
                    .map(|col_idx| {
                        let cell = col_idx.checked_sub(leading).and_then(|c| first.get(c));
                        header_name(cell, col_idx)
                    })
                    .collect(),
            ),
            None => Vec::new(),
        };

        let rows = rows
            .map(|row| {
                let mut cells = vec![Cell::empty(); leading];
                cells.extend(row.iter().map(Cell::from));
                cells.resize_with(width, Cell::empty);
                cells
            })
            .collect();

        Table {
            sheet_name: sheet_name.to_string(),
            headers,
            rows,
        }
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Keep only the given columns. `columns` must be sorted, deduplicated and in range.
    pub(crate) fn retain_columns(&mut self, columns: &[usize]) {
        self.headers = columns.iter().map(|&c| self.headers[c].clone()).collect();

        for row in &mut self.rows {
            *row = columns.iter().map(|&c| row[c].clone()).collect();
        }
    }

    pub(crate) fn truncate_rows(&mut self, limit: usize) {
        self.rows.truncate(limit);
    }
}

/// Repeated names get `.1`, `.2`, ... appended so every header is a distinct key.
fn unique_headers(headers: Vec<String>) -> Vec<String> {
    let mut used: HashSet<String> = HashSet::with_capacity(headers.len());
    let mut next_suffix: HashMap<String, usize> = HashMap::new();
    let mut result = Vec::with_capacity(headers.len());

    for header in headers {
        let mut name = header.clone();
        if used.contains(&name) {
            let suffix = next_suffix.entry(header.clone()).or_insert(1);
            loop {
                name = format!("{}.{}", header, suffix);
                *suffix += 1;
                if !used.contains(&name) {
                    break;
                }
            }
        }
        used.insert(name.clone());
        result.push(name);
    }

    result
}

fn header_name(cell: Option<&Data>, col_idx: usize) -> String {
    match cell.map(Cell::from) {
        Some(cell) if !cell.value.is_empty() => cell.value,
        _ => format!("Unnamed: {}", col_idx),
    }
}
