mod helpers;

pub use helpers::{col_name_to_index, parse_column_list, parse_column_selector};
