use super::types::*;
use super::utils::*;
use bytes::Bytes;
use calamine::{open_workbook_from_rs, Data, Range, Reader, Xlsx, XlsxError};
use std::collections::HashSet;
use std::io::Cursor;
use std::path::Path;
use crate::error::InspectError;

/// Reads one worksheet of a workbook into a [`Worksheet`].
#[derive(Debug, Clone, Default)]
pub struct WorkbookLoader {
    sheet: Option<String>,
}

impl WorkbookLoader {
    /// `sheet` picks a worksheet by name; `None` reads the first one.
    pub fn new(sheet: Option<String>) -> Self {
        Self { sheet }
    }

    pub fn load(&self, path: &Path) -> Result<Worksheet, InspectError> {
        tracing::info!("Reading workbook {}", path.display());
        let file_data = std::fs::read(path).map_err(|source| {
            tracing::error!("Failed to read {}: {}", path.display(), source);
            InspectError::FileRead {
                path: path.to_path_buf(),
                source,
            }
        })?;

        self.load_from_bytes(Bytes::from(file_data))
    }

    pub fn load_from_bytes(&self, file_data: Bytes) -> Result<Worksheet, InspectError> {
        let start = std::time::Instant::now();
        let cursor = Cursor::new(file_data);

        let mut workbook: Xlsx<Cursor<Bytes>> = open_workbook_from_rs(cursor)
            .map_err(|e: XlsxError| {
                tracing::error!("Failed to open workbook: {}", e);
                InspectError::Workbook(e.to_string())
            })?;
        tracing::info!("Workbook opened in {:?}", start.elapsed());

        let sheet_names: Vec<String> = workbook.sheet_names().to_vec();
        tracing::debug!("Found {} sheets: {:?}", sheet_names.len(), sheet_names);

        let sheet_name = self.pick_sheet(&sheet_names)?;
        let range = workbook.worksheet_range(&sheet_name).map_err(|e| {
            tracing::error!("Failed to read worksheet {}: {}", sheet_name, e);
            InspectError::Worksheet {
                sheet: sheet_name.clone(),
                message: e.to_string(),
            }
        })?;

        let worksheet = build_worksheet(sheet_name, &range)?;
        tracing::info!(
            "Loaded sheet {} ({} rows x {} columns) in {:?}",
            worksheet.sheet_name,
            worksheet.row_count(),
            worksheet.column_count(),
            start.elapsed()
        );
        Ok(worksheet)
    }

    fn pick_sheet(&self, sheet_names: &[String]) -> Result<String, InspectError> {
        match &self.sheet {
            Some(name) if sheet_names.contains(name) => Ok(name.clone()),
            Some(name) => Err(InspectError::SheetNotFound {
                name: name.clone(),
                available: sheet_names.to_vec(),
            }),
            None => sheet_names.first().cloned().ok_or(InspectError::NoSheets),
        }
    }
}

/// First row of the used range is the header, the rest are data rows.
pub fn build_worksheet(sheet_name: String, range: &Range<Data>) -> Result<Worksheet, InspectError> {
    let dimensions = match (range.start(), range.end()) {
        (Some((r0, c0)), Some((r1, c1))) if !range.is_empty() => {
            Some(format!("{}:{}", cell_reference(r0, c0), cell_reference(r1, c1)))
        }
        _ => None,
    };
    let origin = range.start().unwrap_or((0, 0));

    let mut rows = range.rows();
    let header_cells: Vec<Data> = rows.next().map(|row| row.to_vec()).unwrap_or_default();
    let data_rows: Vec<&[Data]> = rows.collect();
    let first_data_cells = data_rows.first().map(|row| row.to_vec()).unwrap_or_default();

    let mut existing_names = HashSet::new();
    let headers: Vec<String> = header_cells.iter()
        .enumerate()
        .map(|(idx, cell)| unique_column_name(&cell_to_text(cell), idx, &mut existing_names))
        .collect();

    let columns = headers.into_iter()
        .enumerate()
        .map(|(col_idx, header)| {
            let values: Vec<Data> = data_rows.iter()
                .map(|row| row.get(col_idx).cloned().unwrap_or(Data::Empty))
                .collect();
            let (kind, cells) = column_values(&values);
            tracing::debug!("Column {} typed as {}", header, kind.dtype_name());
            (header, cells)
        })
        .collect();

    Ok(Worksheet {
        dimensions,
        origin,
        header_cells,
        first_data_cells,
        ..Worksheet::from_columns(sheet_name, columns)?
    })
}
