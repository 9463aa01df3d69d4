mod converters;
mod exporters;
mod types;

pub use converters::process_cell_value;
pub use exporters::{serialize_to_json, table_to_json, write_table_json};
pub use types::OrderedSheetData;
