use std::io::Write;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::error::Result;
use crate::excel::Table;

/// Cells wider than this are cut and end in `...`.
pub const MAX_COLUMN_WIDTH: usize = 50;

const COLUMN_GAP: &str = "  ";

/// Write `table` as right-aligned text columns with a leading row index.
pub fn write_table_text<W: Write>(out: &mut W, table: &Table) -> Result<()> {
    if table.rows.is_empty() {
        writeln!(out, "Empty table")?;
        writeln!(out, "Columns: [{}]", table.headers.join(", "))?;
        return Ok(());
    }

    let headers: Vec<String> = table.headers.iter().map(|h| fit_to_width(h)).collect();
    let body: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| row.iter().map(|cell| fit_to_width(&cell.value)).collect())
        .collect();

    let index_width = (table.rows.len() - 1).to_string().len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in &body {
        for (width, value) in widths.iter_mut().zip(row) {
            *width = (*width).max(value.width());
        }
    }

    let mut line = pad_left("", index_width);
    for (header, width) in headers.iter().zip(&widths) {
        line.push_str(COLUMN_GAP);
        line.push_str(&pad_left(header, *width));
    }
    writeln!(out, "{}", line.trim_end())?;

    for (row_idx, row) in body.iter().enumerate() {
        let mut line = pad_left(&row_idx.to_string(), index_width);
        for (value, width) in row.iter().zip(&widths) {
            line.push_str(COLUMN_GAP);
            line.push_str(&pad_left(value, *width));
        }
        writeln!(out, "{}", line.trim_end())?;
    }

    Ok(())
}

fn pad_left(content: &str, width: usize) -> String {
    let display_width = content.width();
    let mut result = String::with_capacity(width.max(content.len()));
    for _ in display_width..width {
        result.push(' ');
    }
    result.push_str(content);
    result
}

// Newlines would break the row layout
fn fit_to_width(content: &str) -> String {
    let flat = content.replace(['\r', '\n'], " ");
    if flat.width() <= MAX_COLUMN_WIDTH {
        return flat;
    }

    let limit = MAX_COLUMN_WIDTH - 3;
    let mut result = String::with_capacity(MAX_COLUMN_WIDTH);
    let mut current_width = 0;
    for c in flat.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push_str("...");
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::excel::Cell;
    use calamine::Data;

    fn render(table: &Table) -> String {
        let mut out = Vec::new();
        write_table_text(&mut out, table).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_alignment() {
        let table = Table {
            sheet_name: "People".to_string(),
            headers: vec!["Name".to_string(), "Age".to_string()],
            rows: vec![
                vec![
                    Cell::from(&Data::String("Alice".to_string())),
                    Cell::from(&Data::Int(30)),
                ],
                vec![
                    Cell::from(&Data::String("Bob".to_string())),
                    Cell::from(&Data::Int(7)),
                ],
            ],
        };

        assert_eq!(render(&table), "    Name  Age\n0  Alice   30\n1    Bob    7\n");
    }

    #[test]
    fn test_wide_characters() {
        let table = Table {
            sheet_name: "Sheet1".to_string(),
            headers: vec!["City".to_string()],
            rows: vec![
                vec![Cell::from(&Data::String("東京".to_string()))],
                vec![Cell::from(&Data::String("Rome".to_string()))],
            ],
        };

        assert_eq!(render(&table), "   City\n0  東京\n1  Rome\n");
    }

    #[test]
    fn test_rows_wider_than_headers() {
        let table = Table {
            sheet_name: "Sheet1".to_string(),
            headers: vec!["A".to_string()],
            rows: vec![vec![
                Cell::from(&Data::Int(1)),
                Cell::from(&Data::Int(200)),
            ]],
        };

        assert_eq!(render(&table), "   A\n0  1\n");
    }

    #[test]
    fn test_empty_table() {
        let table = Table {
            sheet_name: "Sheet1".to_string(),
            headers: vec!["Name".to_string(), "Age".to_string()],
            rows: Vec::new(),
        };

        assert_eq!(render(&table), "Empty table\nColumns: [Name, Age]\n");
    }

    #[test]
    fn test_long_values_are_cut() {
        let long = "x".repeat(80);
        let fitted = fit_to_width(&long);

        assert_eq!(fitted.width(), MAX_COLUMN_WIDTH);
        assert!(fitted.ends_with("..."));
        assert_eq!(fit_to_width("a\nb"), "a b");
    }
}
