use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InspectError {
    #[error("Failed to read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open workbook: {0}")]
    Workbook(String),

    #[error("No sheets found in workbook")]
    NoSheets,

    #[error("Sheet '{name}' not found, available sheets: {available:?}")]
    SheetNotFound {
        name: String,
        available: Vec<String>,
    },

    #[error("Failed to read worksheet {sheet}: {message}")]
    Worksheet { sheet: String, message: String },

    #[error("DataFrame error: {0}")]
    DataFrame(String),
}
