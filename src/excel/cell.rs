use calamine::Data;
use chrono::{Duration, NaiveDate, NaiveTime};

/// Largest serial Excel accepts (9999-12-31).
const MAX_EXCEL_SERIAL: f64 = 2_958_465.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub value: String,
    pub cell_type: CellType,
    pub original_type: DataTypeInfo,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellType {
    Text,
    Number,
    Date,
    Boolean,
    Empty,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DataTypeInfo {
    Empty,
    String,
    Float(f64),
    Int(i64),
    Bool(bool),
    DateTime(f64),
    Duration(f64),
    DateTimeIso(String),
    DurationIso(String),
    Error,
}

impl Cell {
    pub fn new(value: String, cell_type: CellType, original_type: DataTypeInfo) -> Self {
        Self {
            value,
            cell_type,
            original_type,
        }
    }

    pub fn empty() -> Self {
        Self {
            value: String::new(),
            cell_type: CellType::Empty,
            original_type: DataTypeInfo::Empty,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cell_type == CellType::Empty
    }
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => Cell::empty(),

            Data::String(s) => Cell::new(s.clone(), CellType::Text, DataTypeInfo::String),

            Data::Float(f) => Cell::new(format_float(*f), CellType::Number, DataTypeInfo::Float(*f)),

            Data::Int(i) => Cell::new(i.to_string(), CellType::Number, DataTypeInfo::Int(*i)),

            Data::Bool(b) => Cell::new(
                if *b { "TRUE" } else { "FALSE" }.to_string(),
                CellType::Boolean,
                DataTypeInfo::Bool(*b),
            ),

            Data::Error(e) => Cell::new(format!("Error: {:?}", e), CellType::Text, DataTypeInfo::Error),

            Data::DateTime(dt) => {
                let serial = dt.as_f64();
                if dt.is_duration() {
                    Cell::new(
                        format_duration(serial),
                        CellType::Text,
                        DataTypeInfo::Duration(serial),
                    )
                } else {
                    let value =
                        excel_date_to_iso_string(serial).unwrap_or_else(|| format_float(serial));
                    Cell::new(value, CellType::Date, DataTypeInfo::DateTime(serial))
                }
            }

            Data::DateTimeIso(s) => Cell::new(
                s.clone(),
                CellType::Date,
                DataTypeInfo::DateTimeIso(s.clone()),
            ),

            Data::DurationIso(s) => Cell::new(
                s.clone(),
                CellType::Text,
                DataTypeInfo::DurationIso(s.clone()),
            ),
        }
    }
}

/// Integral floats print without a fractional part.
pub fn format_float(f: f64) -> String {
    if f.fract() == 0.0 && f.abs() < 1e15 {
        (f as i64).to_string()
    } else {
        f.to_string()
    }
}

/// Convert an Excel serial date to an ISO-8601 string.
///
/// Serial 1 is 1900-01-01 and serial 60 is the non-existent 1900-02-29, so every
/// serial after it is shifted back by a day. Serials below 1 carry no date and
/// render as a time of day. Returns `None` for serials Excel itself cannot
/// represent.
pub fn excel_date_to_iso_string(excel_date: f64) -> Option<String> {
    if !(0.0..=MAX_EXCEL_SERIAL).contains(&excel_date) {
        return None;
    }

    if excel_date < 1.0 {
        let seconds = ((excel_date * 86_400.0).round() as u32).min(86_399);
        let time = NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0)?;
        return Some(time.format("%H:%M:%S").to_string());
    }

    let days = if excel_date > 59.0 {
        excel_date - 1.0
    } else {
        excel_date
    };

    let whole_days = days.trunc() as i64;
    let seconds = (days.fract() * 86_400.0).round() as i64;

    let base = NaiveDate::from_ymd_opt(1900, 1, 1)?.and_hms_opt(0, 0, 0)?;
    let datetime = base + Duration::days(whole_days - 1) + Duration::seconds(seconds);

    if seconds > 0 {
        Some(datetime.format("%Y-%m-%dT%H:%M:%S").to_string())
    } else {
        Some(datetime.format("%Y-%m-%d").to_string())
    }
}

/// Render a fractional day count as `[-]H:MM:SS`.
fn format_duration(days: f64) -> String {
    let total = (days.abs() * 86_400.0).round() as u64;
    let sign = if days < 0.0 { "-" } else { "" };
    format!(
        "{}{}:{:02}:{:02}",
        sign,
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}
