mod cell;
mod sheet;
mod workbook;

pub use cell::{Cell, CellType, DataTypeInfo, excel_date_to_iso_string, format_float};
pub use sheet::Table;
pub use workbook::{
    ReadOptions, SheetSelector, load_columns, load_full_sheet, load_rows, load_sheet_by_index,
    read_sheet,
};
