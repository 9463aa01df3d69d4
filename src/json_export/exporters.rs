use indexmap::IndexMap;
use serde::Serialize;
use std::io::Write;

use crate::error::Result;
use crate::excel::Table;
use crate::json_export::converters::process_cell_value;
use crate::json_export::types::OrderedSheetData;

pub fn serialize_to_json<T: Serialize>(data: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

pub fn table_to_json(table: &Table) -> OrderedSheetData {
    table
        .rows
        .iter()
        .map(|row| {
            let mut row_data = IndexMap::with_capacity(table.headers.len());
            for (header, cell) in table.headers.iter().zip(row) {
                row_data.insert(header.clone(), process_cell_value(cell));
            }
            row_data
        })
        .collect()
}

pub fn write_table_json<W: Write>(out: &mut W, table: &Table) -> Result<()> {
    let json_string = serialize_to_json(&table_to_json(table))?;
    writeln!(out, "{}", json_string)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::excel::Cell;
    use calamine::{Data, Range};

    #[test]
    fn test_table_to_json_keeps_column_order() {
        let table = Table {
            sheet_name: "People".to_string(),
            headers: vec!["Name".to_string(), "Age".to_string(), "Active".to_string()],
            rows: vec![vec![
                Cell::from(&Data::String("Alice".to_string())),
                Cell::from(&Data::Float(30.0)),
                Cell::empty(),
            ]],
        };

        let json = serialize_to_json(&table_to_json(&table)).unwrap();
        let compact: String = json.split_whitespace().collect();
        assert_eq!(compact, r#"[{"Name":"Alice","Age":30,"Active":null}]"#);
    }

    #[test]
    fn test_repeated_headers_keep_every_column() {
        let mut range = Range::new((0, 0), (1, 1));
        range.set_value((0, 0), Data::String("Score".to_string()));
        range.set_value((0, 1), Data::String("Score".to_string()));
        range.set_value((1, 0), Data::Int(1));
        range.set_value((1, 1), Data::Int(2));

        let table = Table::from_range("Scores", &range);
        let json = serialize_to_json(&table_to_json(&table)).unwrap();
        let compact: String = json.split_whitespace().collect();
        assert_eq!(compact, r#"[{"Score":1,"Score.1":2}]"#);
    }

    #[test]
    fn test_write_empty_table() {
        let table = Table {
            sheet_name: "Blank".to_string(),
            headers: Vec::new(),
            rows: Vec::new(),
        };

        let mut out = Vec::new();
        write_table_json(&mut out, &table).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[]\n");
    }
}
