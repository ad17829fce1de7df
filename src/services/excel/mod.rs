pub mod analyzer;
pub mod loader;
pub mod types;
pub mod utils;

pub use analyzer::SheetAnalyzer;
pub use loader::WorkbookLoader;
pub use types::{CellValue, ColumnKind, ColumnStats, HeaderMatch, MoneyColumn, Worksheet};
