//! Column sets the reports look at.

/// Fields dumped for each sampled row, in print order.
pub const SAMPLE_FIELDS: [&str; 8] = [
    "ITEM",
    "Desconto (%)",
    "CC MAT UNI (R$)",
    "CC MAT TOTAL (R$)",
    "CC MO UNI (R$)",
    "CC MO TOTAL (R$)",
    "PV UNI",
    "PV TOTAL",
];

/// Columns summarized by the statistics report.
pub const STAT_COLUMNS: [&str; 7] = [
    "Desconto (%)",
    "CC MAT UNI (R$)",
    "CC MAT TOTAL (R$)",
    "CC MO UNI (R$)",
    "CC MO TOTAL (R$)",
    "PV UNI",
    "PV TOTAL",
];

/// Printed when a sampled field's column is absent from the sheet.
pub const ABSENT_PLACEHOLDER: &str = "N/A";

/// Printed for a cell with no stored content.
pub const MISSING_PLACEHOLDER: &str = "nan";

/// How many columns of the first data row the raw cell dump shows.
pub const RAW_CELL_COLUMNS: usize = 16;
