use super::types::*;
use once_cell::sync::Lazy;
use polars::prelude::*;
use rayon::prelude::*;
use regex::Regex;
use smallvec::SmallVec;

/// Money, percentage, price and cost headers.
static MONEY_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"R\$|%|PV|CC").expect("money header pattern is valid")
});

const RELATED_MARKERS: [&str; 4] = ["CC MAT", "CC MO", "PV", "DESCONTO"];

#[derive(Debug, Clone, Copy, Default)]
pub struct SheetAnalyzer;

impl SheetAnalyzer {
    /// Value at `row` of `column`; `None` when the column does not exist.
    pub fn field(&self, sheet: &Worksheet, row: usize, column: &str) -> Option<CellValue> {
        let (_, values) = sheet.column(column)?;
        Some(values.get(row).cloned().unwrap_or(CellValue::Missing))
    }

    pub fn column_stats(&self, sheet: &Worksheet, column: &str) -> Option<ColumnStats> {
        let (series, values) = sheet.column(column)?;

        let mut non_zero = 0;
        let mut first_non_zero = SmallVec::<[CellValue; SAMPLE_SIZE]>::new();
        for value in values.iter().filter(|v| v.is_non_zero()) {
            non_zero += 1;
            if first_non_zero.len() < SAMPLE_SIZE {
                first_non_zero.push(value.clone());
            }
        }

        Some(ColumnStats {
            name: column.to_string(),
            total: series.len(),
            non_null: series.len() - series.null_count(),
            non_zero,
            dtype: ColumnKind::of_dtype(series.dtype()).dtype_name(),
            first_non_zero,
        })
    }

    /// Stats for every column that exists, in the order asked for.
    pub fn stats_for(&self, sheet: &Worksheet, columns: &[&str]) -> Vec<ColumnStats> {
        columns.par_iter()
            .filter_map(|column| {
                let stats = self.column_stats(sheet, column);
                if stats.is_none() {
                    tracing::warn!("Column {} not found, skipping statistics", column);
                }
                stats
            })
            .collect()
    }

    pub fn header_matches(&self, headers: &[String], wanted: &str) -> HeaderMatch {
        if let Some(index) = headers.iter().position(|h| h == wanted) {
            return HeaderMatch::Exact(index);
        }

        let wanted_upper = wanted.to_uppercase();
        let wanted_first = first_word(&wanted_upper);
        let related = headers.iter()
            .enumerate()
            .filter(|(_, header)| {
                let header_upper = header.to_uppercase();
                header_upper.contains(wanted_first)
                    || wanted_upper.contains(first_word(&header_upper))
                    || RELATED_MARKERS.iter().any(|marker| {
                        header_upper.contains(marker) && wanted_upper.contains(marker)
                    })
            })
            .map(|(index, header)| (index, header.clone()))
            .collect();

        HeaderMatch::Partial(related)
    }

    pub fn money_columns(&self, sheet: &Worksheet) -> Vec<MoneyColumn> {
        sheet.frame.get_columns()
            .iter()
            .zip(&sheet.cells)
            .enumerate()
            .filter(|(_, (series, _))| MONEY_HEADER.is_match(&series.name().to_uppercase()))
            .map(|(index, (series, values))| {
                let non_empty: Vec<&CellValue> = values.iter()
                    .filter(|v| !v.is_empty())
                    .collect();

                MoneyColumn {
                    index,
                    name: series.name().to_string(),
                    total: series.len(),
                    non_empty: non_empty.len(),
                    numeric_non_zero: values.iter().filter(|v| v.is_numeric_non_zero()).count(),
                    first_non_empty: non_empty.into_iter().take(SAMPLE_SIZE).cloned().collect(),
                }
            })
            .collect()
    }
}

fn first_word(s: &str) -> &str {
    s.split(' ').next().unwrap_or("")
}
