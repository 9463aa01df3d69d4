use serde_json::{Value, json};

use crate::excel::{Cell, DataTypeInfo, excel_date_to_iso_string};

// Process cell value based on its original type
pub fn process_cell_value(cell: &Cell) -> Value {
    match &cell.original_type {
        DataTypeInfo::Empty => Value::Null,
        DataTypeInfo::Float(f) => {
            if f.fract() == 0.0 && f.abs() < 1e15 {
                json!(f.trunc() as i64)
            } else {
                json!(f)
            }
        }
        DataTypeInfo::Int(i) => json!(i),
        DataTypeInfo::Bool(b) => json!(b),
        DataTypeInfo::DateTime(dt) => match excel_date_to_iso_string(*dt) {
            Some(iso) => json!(iso),
            None => json!(cell.value),
        },
        DataTypeInfo::DateTimeIso(s) => json!(s),
        _ => json!(cell.value), // Text, durations, errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::Data;

    #[test]
    fn test_process_cell_value() {
        assert_eq!(process_cell_value(&Cell::empty()), Value::Null);
        assert_eq!(process_cell_value(&Cell::from(&Data::Float(3.0))), json!(3));
        assert_eq!(process_cell_value(&Cell::from(&Data::Float(0.25))), json!(0.25));
        assert_eq!(process_cell_value(&Cell::from(&Data::Int(-7))), json!(-7));
        assert_eq!(process_cell_value(&Cell::from(&Data::Bool(false))), json!(false));
        assert_eq!(
            process_cell_value(&Cell::from(&Data::String("x".to_string()))),
            json!("x")
        );
    }
}
