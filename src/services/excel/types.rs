use calamine::Data;
use polars::prelude::*;
use serde::Serialize;
use smallvec::SmallVec;
use std::fmt;

use super::utils::format_number;
use crate::error::InspectError;
use crate::models::MISSING_PLACEHOLDER;

pub const SAMPLE_SIZE: usize = 3;

/// A worksheet loaded into memory. The header row names the frame's columns;
/// every following row of the used range is one frame row.
///
/// `cells` keeps each column's values with their own types (column-major, in
/// frame order), so an `object` column still tells numbers from text.
#[derive(Debug, Clone)]
pub struct Worksheet {
    pub sheet_name: String,
    /// Used range in A1 notation, `None` for a sheet without cells.
    pub dimensions: Option<String>,
    /// Zero-based (row, column) of the used range's top-left cell.
    pub origin: (u32, u32),
    pub header_cells: Vec<Data>,
    pub first_data_cells: Vec<Data>,
    pub frame: DataFrame,
    pub cells: Vec<Vec<CellValue>>,
}

impl Worksheet {
    /// Builds the frame from named, already typed columns. Every column must
    /// have the same length.
    pub fn from_columns(
        sheet_name: impl Into<String>,
        columns: Vec<(String, Vec<CellValue>)>,
    ) -> Result<Self, InspectError> {
        let mut series = Vec::with_capacity(columns.len());
        let mut cells = Vec::with_capacity(columns.len());

        for (name, values) in columns {
            series.push(build_series(&name, ColumnKind::of(&values), &values));
            cells.push(values);
        }

        let frame = DataFrame::new(series)
            .map_err(|e| InspectError::DataFrame(format!("Failed to create DataFrame: {}", e)))?;

        Ok(Self {
            sheet_name: sheet_name.into(),
            dimensions: None,
            origin: (0, 0),
            header_cells: Vec::new(),
            first_data_cells: Vec::new(),
            frame,
            cells,
        })
    }

    pub fn row_count(&self) -> usize {
        self.frame.height()
    }

    pub fn column_count(&self) -> usize {
        self.frame.width()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.frame
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    /// Series and typed values of a column, `None` when it does not exist.
    pub fn column(&self, name: &str) -> Option<(&Series, &[CellValue])> {
        let index = self.frame.get_column_names().iter().position(|n| *n == name)?;
        let series = self.frame.get_columns().get(index)?;
        let values = self.cells.get(index)?;
        Some((series, values.as_slice()))
    }
}

fn build_series(name: &str, kind: ColumnKind, values: &[CellValue]) -> Series {
    match kind {
        ColumnKind::Integer => {
            let ints: Vec<Option<i64>> = values.iter().map(|v| match v {
                CellValue::Integer(i) => Some(*i),
                _ => None,
            }).collect();
            Series::new(name, ints)
        }
        ColumnKind::Float => {
            let nums: Vec<Option<f64>> = values.iter().map(CellValue::as_f64).collect();
            Series::new(name, nums)
        }
        ColumnKind::Boolean => {
            let flags: Vec<Option<bool>> = values.iter().map(|v| match v {
                CellValue::Bool(b) => Some(*b),
                _ => None,
            }).collect();
            Series::new(name, flags)
        }
        ColumnKind::Object => {
            let strings: Vec<Option<String>> = values.iter()
                .map(|v| if v.is_missing() { None } else { Some(v.to_string()) })
                .collect();
            Series::new(name, strings)
        }
    }
}

/// Storage type of a column, named the way pandas names its dtypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Whole numbers with no gaps.
    Integer,
    /// Numbers with gaps or fractions; also a column with no values at all.
    Float,
    /// Booleans with no gaps.
    Boolean,
    /// Anything else: text, or a mix of value types.
    Object,
}

impl ColumnKind {
    pub fn of(values: &[CellValue]) -> Self {
        let has_missing = values.iter().any(CellValue::is_missing);
        let present = || values.iter().filter(|v| !v.is_missing());

        if !has_missing && !values.is_empty() && present().all(|v| matches!(v, CellValue::Integer(_))) {
            ColumnKind::Integer
        } else if present().all(|v| matches!(v, CellValue::Integer(_) | CellValue::Number(_))) {
            ColumnKind::Float
        } else if !has_missing && present().all(|v| matches!(v, CellValue::Bool(_))) {
            ColumnKind::Boolean
        } else {
            ColumnKind::Object
        }
    }

    pub fn dtype_name(&self) -> &'static str {
        match self {
            ColumnKind::Integer => "int64",
            ColumnKind::Float => "float64",
            ColumnKind::Boolean => "bool",
            ColumnKind::Object => "object",
        }
    }

    /// Kind backing a frame column.
    pub fn of_dtype(dtype: &DataType) -> Self {
        match dtype {
            DataType::Int64 => ColumnKind::Integer,
            DataType::Float64 => ColumnKind::Float,
            DataType::Boolean => ColumnKind::Boolean,
            _ => ColumnKind::Object,
        }
    }
}

/// One scalar of a worksheet column.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Integer(i64),
    Number(f64),
    Text(String),
    Bool(bool),
    Missing,
}

impl CellValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// Text never compares equal to zero; `false` does.
    pub fn is_non_zero(&self) -> bool {
        match self {
            CellValue::Integer(i) => *i != 0,
            CellValue::Number(n) => *n != 0.0,
            CellValue::Bool(b) => *b,
            CellValue::Text(_) => true,
            CellValue::Missing => false,
        }
    }

    pub fn is_numeric_non_zero(&self) -> bool {
        matches!(self, CellValue::Integer(_) | CellValue::Number(_)) && self.is_non_zero()
    }

    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Missing => true,
            CellValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Integer(i) => Some(*i as f64),
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            CellValue::Integer(_) | CellValue::Number(_) => "number",
            CellValue::Text(_) => "string",
            CellValue::Bool(_) => "boolean",
            CellValue::Missing => "null",
        }
    }

    /// Literal form used inside printed lists: text is quoted.
    pub fn repr(&self) -> String {
        match self {
            CellValue::Text(s) => format!("'{}'", s),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Integer(i) => write!(f, "{}", i),
            CellValue::Number(n) => write!(f, "{}", format_number(*n)),
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Bool(true) => write!(f, "True"),
            CellValue::Bool(false) => write!(f, "False"),
            CellValue::Missing => write!(f, "{}", MISSING_PLACEHOLDER),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnStats {
    pub name: String,
    pub total: usize,
    pub non_null: usize,
    pub non_zero: usize,
    pub dtype: &'static str,
    pub first_non_zero: SmallVec<[CellValue; SAMPLE_SIZE]>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderMatch {
    Exact(usize),
    /// (index, header) pairs that look related; empty when nothing matched.
    Partial(Vec<(usize, String)>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoneyColumn {
    pub index: usize,
    pub name: String,
    pub total: usize,
    pub non_empty: usize,
    pub numeric_non_zero: usize,
    pub first_non_empty: SmallVec<[CellValue; SAMPLE_SIZE]>,
}
