use indexmap::IndexMap;
use serde_json::Value;

/// One object per data row, keys in column order.
pub type OrderedSheetData = Vec<IndexMap<String, Value>>;
