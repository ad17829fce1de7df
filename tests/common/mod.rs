//! Fixture workbooks generated at test time.

#![allow(dead_code)]

use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const HEADERS: [&str; 8] = [
    "ITEM",
    "DESCRICAO",
    "Desconto (%)",
    "CC MAT UNI (R$)",
    "CC MAT TOTAL (R$)",
    "CC MO UNI (R$)",
    "CC MO TOTAL (R$)",
    "PV UNI",
];

enum Cell {
    Num(f64),
    Text(&'static str),
    Blank,
}

use Cell::{Blank, Num, Text};

/// Six budget lines. "ITEM" and "CC MAT TOTAL (R$)" hold whole numbers only,
/// "CC MO UNI (R$)" is entirely blank, "CC MO TOTAL (R$)" mixes text with
/// numbers (one of them zero), and there is no "PV TOTAL" column.
fn budget_rows() -> Vec<[Cell; 8]> {
    vec![
        [Num(1.0), Text("Cabo"), Num(0.0), Num(12.5), Num(0.0), Blank, Text("a definir"), Num(100.0)],
        [Num(2.0), Text("Disjuntor"), Num(0.0), Num(0.0), Num(0.0), Blank, Num(7.5), Num(250.75)],
        [Num(3.0), Text("Quadro"), Num(10.0), Blank, Num(0.0), Blank, Num(0.0), Num(0.0)],
        [Num(4.0), Blank, Blank, Num(3.0), Num(0.0), Blank, Blank, Num(80.0)],
        [Num(5.0), Text("Eletroduto"), Num(0.0), Num(4.0), Num(0.0), Blank, Blank, Num(0.0)],
        [Num(6.0), Text("Conector"), Num(5.0), Blank, Num(0.0), Blank, Blank, Num(15.0)],
    ]
}

fn write_budget(sheet: &mut Worksheet) -> Result<(), XlsxError> {
    sheet.set_name("Orcamento")?;
    for (col, header) in HEADERS.iter().enumerate() {
        sheet.write_string(0, col as u16, *header)?;
    }
    for (idx, row) in budget_rows().iter().enumerate() {
        let r = idx as u32 + 1;
        for (col, cell) in row.iter().enumerate() {
            match cell {
                Num(n) => {
                    sheet.write_number(r, col as u16, *n)?;
                }
                Text(s) => {
                    sheet.write_string(r, col as u16, *s)?;
                }
                Blank => {}
            }
        }
    }
    Ok(())
}

pub fn budget_workbook_bytes() -> Vec<u8> {
    let mut workbook = Workbook::new();
    write_budget(workbook.add_worksheet()).unwrap();
    let notes = workbook.add_worksheet();
    notes.set_name("Notas").unwrap();
    notes.write_string(0, 0, "OBS").unwrap();
    workbook.save_to_buffer().unwrap()
}

pub fn write_budget_workbook(dir: &Path) -> PathBuf {
    let path = dir.join("13372 V4.xlsx");
    std::fs::write(&path, budget_workbook_bytes()).unwrap();
    path
}

pub fn budget_workbook() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = write_budget_workbook(dir.path());
    (dir, path)
}
