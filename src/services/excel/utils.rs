use calamine::Data;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::collections::HashSet;

use super::types::{CellValue, ColumnKind};

/// Header text to a unique column name. Blank headers become `Unnamed: {index}`,
/// repeats get a `.1`, `.2`, ... suffix.
pub fn unique_column_name(raw: &str, index: usize, existing_names: &mut HashSet<String>) -> String {
    let base_name = if raw.is_empty() {
        format!("Unnamed: {}", index)
    } else {
        raw.to_string()
    };

    let mut name = base_name.clone();
    let mut counter = 1;
    while !existing_names.insert(name.clone()) {
        name = format!("{}.{}", base_name, counter);
        counter += 1;
    }

    name
}

/// Empty cells, blank strings and error cells carry no value.
pub fn is_missing(value: &Data) -> bool {
    match value {
        Data::Empty | Data::Error(_) => true,
        Data::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Largest integer an `f64` holds exactly.
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// Typed value of a raw cell. Whole numbers become `Integer`, dates their
/// text form.
pub fn cell_value(value: &Data) -> CellValue {
    if is_missing(value) {
        return CellValue::Missing;
    }
    match value {
        Data::Float(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < MAX_EXACT_INT => {
            CellValue::Integer(*f as i64)
        }
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Integer(*i),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::String(s) => CellValue::Text(s.clone()),
        other => CellValue::Text(cell_to_text(other)),
    }
}

/// Typed values of one column. In a float column every number is a float,
/// so `1` reads as `1.0` next to `2.5` or a gap.
pub fn column_values(values: &[Data]) -> (ColumnKind, Vec<CellValue>) {
    let mut cells: Vec<CellValue> = values.iter().map(cell_value).collect();
    let kind = ColumnKind::of(&cells);

    if kind == ColumnKind::Float {
        for cell in cells.iter_mut() {
            if let CellValue::Integer(i) = *cell {
                *cell = CellValue::Number(i as f64);
            }
        }
    }

    (kind, cells)
}

pub fn cell_to_text(value: &Data) -> String {
    match value {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => format_number(*f),
        Data::Int(i) => i.to_string(),
        Data::Bool(true) => "True".to_string(),
        Data::Bool(false) => "False".to_string(),
        Data::DateTime(d) => excel_serial_to_datetime(d.as_f64())
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| format_number(d.as_f64())),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => e.to_string(),
    }
}

/// Spreadsheet-style type letter of a raw cell.
pub fn cell_type_code(value: &Data) -> &'static str {
    match value {
        Data::Empty => "z",
        Data::String(_) => "s",
        Data::Float(_) | Data::Int(_) | Data::DurationIso(_) => "n",
        Data::Bool(_) => "b",
        Data::DateTime(_) | Data::DateTimeIso(_) => "d",
        Data::Error(_) => "e",
    }
}

/// Integral floats keep one decimal so numeric columns read as floats.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

/// Serial of 9999-12-31 plus one day, the end of Excel's calendar.
const MAX_EXCEL_SERIAL: f64 = 2_958_466.0;

/// Excel serial day number (1900 date system) to a timestamp. Serials outside
/// Excel's calendar have no date.
pub fn excel_serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || !(0.0..MAX_EXCEL_SERIAL).contains(&serial) {
        return None;
    }
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
    let millis = (serial * 86_400_000.0).round() as i64;
    epoch.checked_add_signed(Duration::try_milliseconds(millis)?)
}

/// Zero-based column index to its letter name: 0 -> A, 26 -> AA.
pub fn column_letter(col: u32) -> String {
    let mut letters = Vec::new();
    let mut col = col;
    loop {
        letters.push((b'A' + (col % 26) as u8) as char);
        if col < 26 {
            break;
        }
        col = col / 26 - 1;
    }
    letters.iter().rev().collect()
}

pub fn cell_reference(row: u32, col: u32) -> String {
    format!("{}{}", column_letter(col), row + 1)
}
