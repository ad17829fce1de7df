//! Report output for a generated budget workbook.

mod common;

use bytes::Bytes;
use pretty_assertions::assert_eq;
use sheet_inspect::config::ReportOptions;
use sheet_inspect::report::Reporter;
use sheet_inspect::services::excel::{Worksheet, WorkbookLoader};

fn load_budget() -> Worksheet {
    WorkbookLoader::default()
        .load_from_bytes(Bytes::from(common::budget_workbook_bytes()))
        .unwrap()
}

fn render(sheet: &Worksheet, options: ReportOptions) -> String {
    let mut reporter = Reporter::new(Vec::new(), sheet);
    reporter.run(&options).unwrap();
    String::from_utf8(reporter.into_inner()).unwrap()
}

/// Text between a `=== title ===` heading and the next heading.
fn section(output: &str, title: &str) -> String {
    let heading = format!("=== {} ===\n", title);
    let start = output.find(&heading).expect("section present") + heading.len();
    let rest = &output[start..];
    let end = rest.find("\n=== ").unwrap_or(rest.len());
    rest[..end].to_string()
}

// ═══════════════════════════════════════════════════════════════════════════
// SHAPE
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_shape_matches_worksheet() {
    let sheet = load_budget();
    let output = render(&sheet, ReportOptions::default());

    assert!(output.starts_with(
        "=== ANÁLISE DAS COLUNAS PROBLEMÁTICAS ===\nTotal de linhas: 6\nTotal de colunas: 8\n"
    ));
    assert_eq!(sheet.row_count(), 6);
    assert_eq!(sheet.column_count(), common::HEADERS.len());
}

// ═══════════════════════════════════════════════════════════════════════════
// SAMPLE ROWS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_first_row_fields() {
    let output = render(&load_budget(), ReportOptions::default());
    let rows = section(&output, "VALORES DAS PRIMEIRAS 5 LINHAS");

    let expected = "\nLinha 1:
  ITEM: 1
  Desconto (%): 0.0
  CC MAT UNI (R$): 12.5
  CC MAT TOTAL (R$): 0
  CC MO UNI (R$): nan
  CC MO TOTAL (R$): a definir
  PV UNI: 100.0
  PV TOTAL: N/A
";
    assert!(rows.starts_with(expected), "got:\n{}", rows);
}

#[test]
fn test_only_five_of_six_rows_sampled() {
    let output = render(&load_budget(), ReportOptions::default());
    assert!(output.contains("\nLinha 5:\n"));
    assert!(!output.contains("\nLinha 6:\n"));
}

#[test]
fn test_sample_row_limit_is_configurable() {
    let options = ReportOptions {
        sample_rows: 2,
        extended: false,
    };
    let output = render(&load_budget(), options);
    assert!(output.contains("=== VALORES DAS PRIMEIRAS 2 LINHAS ==="));
    assert!(output.contains("\nLinha 2:\n  ITEM: 2\n"));
    assert!(!output.contains("\nLinha 3:\n"));
}

#[test]
fn test_missing_cells_print_placeholder() {
    let output = render(&load_budget(), ReportOptions::default());
    let rows = section(&output, "VALORES DAS PRIMEIRAS 5 LINHAS");
    assert!(rows.contains("\nLinha 3:\n  ITEM: 3\n  Desconto (%): 10.0\n  CC MAT UNI (R$): nan\n"));
    assert!(rows.contains("\nLinha 4:\n  ITEM: 4\n  Desconto (%): nan\n"));
}

// ═══════════════════════════════════════════════════════════════════════════
// COLUMN STATISTICS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_statistics_block() {
    let output = render(&load_budget(), ReportOptions::default());
    let stats = section(&output, "ESTATÍSTICAS DAS COLUNAS");
    let expected = "
Desconto (%):
  Total de valores: 6
  Valores não nulos: 5
  Valores não zero: 2
  Tipo: float64
  Primeiros valores não zero: [10.0, 5.0]

CC MAT UNI (R$):
  Total de valores: 6
  Valores não nulos: 4
  Valores não zero: 3
  Tipo: float64
  Primeiros valores não zero: [12.5, 3.0, 4.0]

CC MAT TOTAL (R$):
  Total de valores: 6
  Valores não nulos: 6
  Valores não zero: 0
  Tipo: int64
  Todos os valores são nulos ou zero

CC MO UNI (R$):
  Total de valores: 6
  Valores não nulos: 0
  Valores não zero: 0
  Tipo: float64
  Todos os valores são nulos ou zero

CC MO TOTAL (R$):
  Total de valores: 6
  Valores não nulos: 3
  Valores não zero: 2
  Tipo: object
  Primeiros valores não zero: ['a definir', 7.5]

PV UNI:
  Total de valores: 6
  Valores não nulos: 6
  Valores não zero: 4
  Tipo: float64
  Primeiros valores não zero: [100.0, 250.75, 80.0]
";
    assert_eq!(stats, expected);
}

#[test]
fn test_absent_statistics_column_is_skipped() {
    let output = render(&load_budget(), ReportOptions::default());
    let stats = section(&output, "ESTATÍSTICAS DAS COLUNAS");
    assert!(!stats.contains("PV TOTAL"));
}

// ═══════════════════════════════════════════════════════════════════════════
// COLUMN LISTING
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_column_listing_is_one_based() {
    let output = render(&load_budget(), ReportOptions::default());
    let listing = section(&output, "TODAS AS COLUNAS");
    let expected = common::HEADERS
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{:2}. \"{}\"\n", i + 1, name))
        .collect::<String>();
    assert_eq!(listing, expected);
    assert!(listing.starts_with(" 1. \"ITEM\"\n"));
}

#[test]
fn test_default_run_has_four_reports() {
    let output = render(&load_budget(), ReportOptions::default());
    assert_eq!(output.matches("\n=== ").count() + 1, 4);
    assert!(!output.contains("INFORMAÇÕES DA PLANILHA"));
}

// ═══════════════════════════════════════════════════════════════════════════
// EXTENDED DIAGNOSTICS
// ═══════════════════════════════════════════════════════════════════════════

fn extended_output() -> String {
    let options = ReportOptions {
        extended: true,
        ..ReportOptions::default()
    };
    render(&load_budget(), options)
}

#[test]
fn test_sheet_info() {
    let info = section(&extended_output(), "INFORMAÇÕES DA PLANILHA");
    assert_eq!(info, "Nome da planilha: Orcamento\nRange da planilha: A1:H7\n");
}

#[test]
fn test_header_search() {
    let search = section(&extended_output(), "PROCURANDO COLUNAS PROBLEMÁTICAS");
    assert!(search.contains("\nProcurando por: \"Desconto (%)\"\n  Encontrada exata no índice 2\n"));
    assert!(search.contains(
        "\nProcurando por: \"PV TOTAL\"\n  Correspondências parciais:\n    7: \"PV UNI\"\n"
    ));
}

#[test]
fn test_money_columns() {
    let money = section(&extended_output(), "ANÁLISE DE COLUNAS NUMÉRICAS");
    assert!(money.contains(
        "\nDesconto (%) (índice 2):
  Total de linhas: 6
  Valores não nulos/vazios: 5
  Valores numéricos não zero: 2
  Primeiros valores não nulos: 0.0, 0.0, 10.0
  Tipos dos primeiros valores: number, number, number
"
    ));
    assert!(money.contains(
        "\nCC MO TOTAL (R$) (índice 6):
  Total de linhas: 6
  Valores não nulos/vazios: 3
  Valores numéricos não zero: 1
  Primeiros valores não nulos: \"a definir\", 7.5, 0
  Tipos dos primeiros valores: string, number, number
"
    ));
    assert!(!money.contains("DESCRICAO"));
    assert!(!money.contains("ITEM"));
}

#[test]
fn test_raw_cells() {
    let cells = section(&extended_output(), "VERIFICAÇÃO DIRETA DAS CÉLULAS");
    assert!(cells.contains("  A1: \"ITEM\" (tipo: s)\n"));
    assert!(cells.contains("  H1: \"PV UNI\" (tipo: s)\n"));
    assert!(cells.contains("  B2: \"Cabo\" (tipo: s)\n"));
    assert!(cells.contains("  F2: [vazio]\n"));
}
