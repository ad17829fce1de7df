use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;

pub const DEFAULT_WORKBOOK_PATH: &str = "/root/grid-project-manager-pro/13372 V4.xlsx";
pub const DEFAULT_SAMPLE_ROWS: usize = 5;

#[derive(Debug, Clone, Parser)]
#[command(name = "sheet-inspect", version)]
#[command(about = "Print a diagnostic scan of a spreadsheet's money and discount columns")]
pub struct Config {
    /// Spreadsheet to inspect (.xlsx / .xlsm)
    #[arg(env = "SHEET_INSPECT_PATH", default_value = DEFAULT_WORKBOOK_PATH)]
    pub path: PathBuf,

    /// Worksheet name; the first sheet when omitted
    #[arg(long, env = "SHEET_INSPECT_SHEET")]
    pub sheet: Option<String>,

    /// Number of leading rows to dump
    #[arg(long, env = "SHEET_INSPECT_ROWS", default_value_t = DEFAULT_SAMPLE_ROWS)]
    pub rows: usize,

    /// Append header search, money column and raw cell reports
    #[arg(long, env = "SHEET_INSPECT_EXTENDED")]
    pub extended: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    pub sample_rows: usize,
    pub extended: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            sample_rows: DEFAULT_SAMPLE_ROWS,
            extended: false,
        }
    }
}

impl Config {
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            sample_rows: self.rows,
            extended: self.extended,
        }
    }
}

pub fn load_config() -> Config {
    // Load .env file first so clap sees its variables
    dotenv().ok();
    Config::parse()
}
